use std::sync::Arc;

use crate::application::dto::UserDto;
use crate::application::error::ApplicationResult;
use crate::domain::post::PostReadRepository;
use crate::domain::user::{User, UserRepository};

pub struct UserQueryService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
}

impl UserQueryService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
    ) -> Self {
        Self {
            user_repo,
            post_read_repo,
        }
    }

    pub(super) async fn user_dto(&self, user: User) -> ApplicationResult<UserDto> {
        let posts_count = self
            .post_read_repo
            .count_published_by_author(user.id)
            .await?;
        Ok(UserDto::from_parts(user, posts_count))
    }
}
