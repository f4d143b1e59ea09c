use std::sync::Arc;

use crate::application::dto::{PostDto, UserDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::post::{Post, PostReadRepository};
use crate::domain::user::UserRepository;

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            read_repo,
            user_repo,
        }
    }

    pub(super) async fn post_dto(&self, post: Post) -> ApplicationResult<PostDto> {
        let author = self
            .user_repo
            .find_by_id(post.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        let posts_count = self
            .read_repo
            .count_published_by_author(author.id)
            .await?;
        Ok(PostDto::from_parts(post, UserDto::from_parts(author, posts_count)))
    }
}
