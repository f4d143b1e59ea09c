use super::UserQueryService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::UserId,
};

pub struct GetUserQuery {
    pub user_id: i64,
}

impl UserQueryService {
    /// Deactivated accounts are indistinguishable from missing ones.
    pub async fn get_user(&self, query: GetUserQuery) -> ApplicationResult<UserDto> {
        let id = UserId::new(query.user_id)?;
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;

        if !user.is_active {
            return Err(ApplicationError::not_found("user not found"));
        }

        self.user_dto(user).await
    }
}
