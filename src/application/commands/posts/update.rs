// src/application/commands/posts/update.rs
use super::{PostCommandService, policy::ensure_author, service::validate_image_url};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{
        PostBody, PostSlug, PostTitle,
        entity::{EXCERPT_MAX_LENGTH, PostUpdate, derive_excerpt},
    },
};

pub struct UpdatePostCommand {
    pub slug: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
}

impl PostCommandService {
    /// Partial update addressed by slug. The slug itself never changes,
    /// even when the title does.
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let slug = PostSlug::new(command.slug)?;
        let post = self
            .read_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        ensure_author(actor, &post)?;

        let mut update = PostUpdate::new(post.id, self.clock.now());
        if let Some(title) = command.title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(body) = command.body {
            update = update.with_body(PostBody::new(body)?);
        }
        if let Some(excerpt) = command.excerpt {
            if excerpt.chars().count() > EXCERPT_MAX_LENGTH {
                return Err(ApplicationError::validation(format!(
                    "excerpt cannot exceed {EXCERPT_MAX_LENGTH} characters"
                )));
            }
            update = update.with_excerpt(excerpt);
        }
        if let Some(featured_image) = command.featured_image {
            validate_image_url(&featured_image)?;
            update = update.with_featured_image(featured_image);
        }
        if let Some(is_published) = command.is_published {
            update = update.with_is_published(is_published);
        }

        if update.is_empty() {
            return Err(ApplicationError::validation(
                "at least one field must be provided",
            ));
        }

        // An excerpt left empty is re-derived from whichever body survives
        // the update.
        let excerpt_is_empty = update
            .excerpt
            .as_deref()
            .unwrap_or(&post.excerpt)
            .is_empty();
        if excerpt_is_empty {
            let derived =
                derive_excerpt(update.body.as_ref().map_or(post.body.as_str(), PostBody::as_str));
            update = update.with_excerpt(derived);
        }

        let post = self.write_repo.update(update).await?;
        self.post_dto(post).await
    }
}
