use super::UserCommandService;
use crate::{
    application::{
        dto::{TokenPairDto, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{EmailAddress, User, Username},
};

pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub user: UserDto,
    pub tokens: TokenPairDto,
}

impl UserCommandService {
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let identifier = command.username.trim();
        if identifier.is_empty() || command.password.is_empty() {
            return Err(ApplicationError::validation(
                "username/email and password are required",
            ));
        }

        let mut user = self
            .find_for_login(identifier)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        if !user.is_active {
            return Err(ApplicationError::unauthorized("invalid credentials"));
        }

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

        let now = self.clock.now();
        self.user_repo.record_login(user.id, now).await?;
        user.record_login(now);

        let pair = self.token_service.issue_pair(&user).await?;
        let user = self.user_dto(user).await?;

        Ok(LoginResult {
            user,
            tokens: pair.into(),
        })
    }

    /// Login accepts either a username or an e-mail address in the same
    /// field. Usernames are tried first.
    pub(super) async fn find_for_login(&self, identifier: &str) -> ApplicationResult<Option<User>> {
        if let Ok(username) = Username::new(identifier) {
            if let Some(user) = self.user_repo.find_by_username(&username).await? {
                return Ok(Some(user));
            }
        }

        if let Ok(email) = EmailAddress::new(identifier) {
            if let Some(user) = self.user_repo.find_by_email(&email).await? {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }
}
