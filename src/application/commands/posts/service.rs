use std::sync::Arc;

use crate::application::dto::{PostDto, UserDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::time::Clock;
use crate::domain::post::{Post, PostReadRepository, PostWriteRepository, SlugAssigner};
use crate::domain::user::UserRepository;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) slug_assigner: Arc<SlugAssigner>,
    pub(super) clock: Arc<dyn Clock>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        slug_assigner: Arc<SlugAssigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            user_repo,
            slug_assigner,
            clock,
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

/// Image fields accept an http(s) URL or an empty string to clear them.
pub(super) fn validate_image_url(value: &str) -> ApplicationResult<()> {
    if value.is_empty() || value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ApplicationError::validation(
            "featured image must be an http(s) url",
        ))
    }
}
