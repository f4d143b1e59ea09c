use std::sync::Arc;

use crate::application::dto::UserDto;
use crate::application::error::ApplicationResult;
use crate::application::ports::{
    revocation::RevocationStore,
    security::{PasswordHasher, TokenService},
    time::Clock,
};
use crate::domain::post::PostReadRepository;
use crate::domain::user::{User, UserRepository};

pub struct UserCommandService {
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) post_read_repo: Arc<dyn PostReadRepository>,
    pub(super) password_hasher: Arc<dyn PasswordHasher>,
    pub(super) token_service: Arc<dyn TokenService>,
    pub(super) revocation_store: Arc<dyn RevocationStore>,
    pub(super) clock: Arc<dyn Clock>,
}

impl UserCommandService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_service: Arc<dyn TokenService>,
        revocation_store: Arc<dyn RevocationStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            user_repo,
            post_read_repo,
            password_hasher,
            token_service,
            revocation_store,
            clock,
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
