use super::{UserCommandService, register::validate_profile_field};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{BIO_MAX_LENGTH, NAME_MAX_LENGTH, UserId, UserUpdate},
};

pub struct UpdateProfileCommand {
    pub user_id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserCommandService {
    pub async fn update_profile(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateProfileCommand,
    ) -> ApplicationResult<UserDto> {
        let target = UserId::new(command.user_id)?;
        if target != actor.id {
            return Err(ApplicationError::forbidden(
                "you can only update your own profile",
            ));
        }

        let mut update = UserUpdate::new(actor.id, self.clock.now());
        if let Some(first_name) = command.first_name {
            validate_profile_field("first name", &first_name, NAME_MAX_LENGTH)?;
            update = update.with_first_name(first_name);
        }
        if let Some(last_name) = command.last_name {
            validate_profile_field("last name", &last_name, NAME_MAX_LENGTH)?;
            update = update.with_last_name(last_name);
        }
        if let Some(bio) = command.bio {
            validate_profile_field("bio", &bio, BIO_MAX_LENGTH)?;
            update = update.with_bio(bio);
        }
        if let Some(avatar_url) = command.avatar_url {
            validate_http_url("avatar url", &avatar_url)?;
            update = update.with_avatar_url(avatar_url);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        let user = self.user_repo.update(update).await?;
        self.user_dto(user).await
    }
}

/// Avatar fields accept an http(s) URL or an empty string to clear them.
pub(super) fn validate_http_url(name: &str, value: &str) -> ApplicationResult<()> {
    if value.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "{name} must be an http(s) url"
        )))
    }
}
