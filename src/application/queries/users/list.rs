use super::UserQueryService;
use crate::application::{
    dto::UserDto, error::ApplicationResult, queries::normalize_limit,
};

pub struct ListUsersQuery {
    pub limit: u32,
    pub offset: u32,
}

impl UserQueryService {
    /// Active accounts only, newest first.
    pub async fn list_users(&self, query: ListUsersQuery) -> ApplicationResult<Vec<UserDto>> {
        let records = self
            .user_repo
            .list_active(normalize_limit(query.limit), u64::from(query.offset))
            .await?;

        Ok(records
            .into_iter()
            .map(|record| UserDto::from_parts(record.user, record.published_posts))
            .collect())
    }
}
