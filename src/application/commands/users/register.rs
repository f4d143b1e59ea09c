use super::{LoginResult, UserCommandService, password::validate_password};
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::user::{
        BIO_MAX_LENGTH, EmailAddress, NAME_MAX_LENGTH, NewUser, PasswordHash, Username,
    },
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl UserCommandService {
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<LoginResult> {
        let username = Username::new(command.username)?;
        let email = EmailAddress::new(command.email)?;

        if command.password != command.password_confirm {
            return Err(ApplicationError::validation("passwords don't match"));
        }
        validate_password(&command.password)?;
        validate_profile_field("first name", &command.first_name, NAME_MAX_LENGTH)?;
        validate_profile_field("last name", &command.last_name, NAME_MAX_LENGTH)?;
        validate_profile_field("bio", &command.bio, BIO_MAX_LENGTH)?;

        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(ApplicationError::conflict("username already exists"));
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::conflict("email already exists"));
        }

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let new_user = NewUser {
            username,
            email,
            password_hash,
            first_name: command.first_name,
            last_name: command.last_name,
            bio: command.bio,
            avatar_url: String::new(),
            date_joined: self.clock.now(),
        };
        let user = self.user_repo.insert(new_user).await?;

        let pair = self.token_service.issue_pair(&user).await?;
        let user = self.user_dto(user).await?;

        Ok(LoginResult {
            user,
            tokens: pair.into(),
        })
    }
}

pub(super) fn validate_profile_field(
    name: &str,
    value: &str,
    max_length: usize,
) -> ApplicationResult<()> {
    if value.chars().count() > max_length {
        return Err(ApplicationError::validation(format!(
            "{name} cannot exceed {max_length} characters"
        )));
    }
    Ok(())
}
