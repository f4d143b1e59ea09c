use super::UserCommandService;
use crate::application::error::{ApplicationError, ApplicationResult};

pub struct LogoutCommand {
    pub refresh: String,
}

impl UserCommandService {
    /// Revoke the refresh token and, through the session id embedded in
    /// access tokens, every access token issued from it.
    pub async fn logout(&self, command: LogoutCommand) -> ApplicationResult<()> {
        if command.refresh.trim().is_empty() {
            return Err(ApplicationError::validation("refresh token is required"));
        }

        let data = self.token_service.parse_refresh(&command.refresh).await?;

        self.revocation_store
            .revoke(&data.token_id, data.expires_at)
            .await?;

        Ok(())
    }
}
