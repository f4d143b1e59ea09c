use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{PasswordHash, UserUpdate},
};

pub struct ChangePasswordCommand {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirm: String,
}

impl UserCommandService {
    pub async fn change_password(
        &self,
        actor: &AuthenticatedUser,
        command: ChangePasswordCommand,
    ) -> ApplicationResult<()> {
        if command.current_password.is_empty() {
            return Err(ApplicationError::validation("current password is required"));
        }
        if command.new_password != command.new_password_confirm {
            return Err(ApplicationError::validation("passwords don't match"));
        }
        validate_password(&command.new_password)?;

        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("account no longer exists"))?;

        match self
            .password_hasher
            .verify(&command.current_password, user.password_hash.as_str())
            .await
        {
            Ok(()) => {}
            Err(ApplicationError::Unauthorized(_)) => {
                return Err(ApplicationError::validation("current password is incorrect"));
            }
            Err(other) => return Err(other),
        }

        let hashed = self.password_hasher.hash(&command.new_password).await?;
        let update = UserUpdate::new(user.id, self.clock.now())
            .with_password_hash(PasswordHash::new(hashed)?);
        self.user_repo.update(update).await?;

        Ok(())
    }
}
