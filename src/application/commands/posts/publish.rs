// src/application/commands/posts/publish.rs
use super::{PostCommandService, policy::ensure_author};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostSlug, entity::PostUpdate},
};

pub struct TogglePublishCommand {
    pub slug: String,
}

impl PostCommandService {
    /// Flip a post between draft and published.
    pub async fn toggle_publish(
        &self,
        actor: &AuthenticatedUser,
        command: TogglePublishCommand,
    ) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        ensure_author(actor, &post)?;

        let update =
            PostUpdate::new(post.id, self.clock.now()).with_is_published(!post.is_published);
        let post = self.write_repo.update(update).await?;
        self.post_dto(post).await
    }
}
