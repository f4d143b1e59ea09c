use super::UserCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::user::EmailAddress,
};

pub struct RequestPasswordResetCommand {
    pub email: String,
}

impl UserCommandService {
    /// Issue a short-lived reset token for the account behind `email`.
    ///
    /// Always succeeds so callers cannot probe which addresses exist. The
    /// token currently only reaches the logs; mail delivery is a separate
    /// concern.
    pub async fn request_password_reset(
        &self,
        command: RequestPasswordResetCommand,
    ) -> ApplicationResult<()> {
        let email = EmailAddress::new(command.email)?;

        if let Some(user) = self.user_repo.find_by_email(&email).await? {
            if user.is_active {
                let token = self.token_service.issue_reset(&user).await?;
                tracing::debug!(
                    user_id = i64::from(user.id),
                    token = %token,
                    "issued password reset token"
                );
            }
        }

        Ok(())
    }
}
