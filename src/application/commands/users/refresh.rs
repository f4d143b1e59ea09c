use super::UserCommandService;
use crate::application::{
    dto::TokenPairDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct RefreshTokenCommand {
    pub refresh: String,
}

impl UserCommandService {
    /// Trade a live refresh token for a new access token. The refresh token
    /// itself is not rotated, so the same one is echoed back.
    pub async fn refresh(&self, command: RefreshTokenCommand) -> ApplicationResult<TokenPairDto> {
        if command.refresh.trim().is_empty() {
            return Err(ApplicationError::validation("refresh token is required"));
        }

        let data = self.token_service.parse_refresh(&command.refresh).await?;

        // Same generic message for revoked, vanished and deactivated so the
        // response leaks nothing about why the token died.
        if self.revocation_store.is_revoked(&data.token_id).await? {
            return Err(ApplicationError::unauthorized("invalid refresh token"));
        }

        let user = self
            .user_repo
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid refresh token"))?;
        if !user.is_active {
            return Err(ApplicationError::unauthorized("invalid refresh token"));
        }

        let access = self.token_service.issue_access(&user, &data.token_id).await?;

        Ok(TokenPairDto::new(
            access.token,
            command.refresh,
            access.expires_in,
        ))
    }
}
