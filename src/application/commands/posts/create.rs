// src/application/commands/posts/create.rs
use super::{PostCommandService, service::validate_image_url};
use crate::{
    application::{
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::entity::{EXCERPT_MAX_LENGTH, NewPost, derive_excerpt},
        post::{PostBody, PostTitle},
    },
};

/// Another writer can grab a probed slug between the uniqueness check and
/// our insert. The unique index catches it and we re-derive.
const SLUG_INSERT_RETRIES: u32 = 3;

pub struct CreatePostCommand {
    pub title: String,
    pub body: String,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
}

impl PostCommandService {
    pub async fn create(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let body = PostBody::new(command.body)?;

        let excerpt = match command.excerpt {
            Some(explicit) if !explicit.is_empty() => {
                if explicit.chars().count() > EXCERPT_MAX_LENGTH {
                    return Err(ApplicationError::validation(format!(
                        "excerpt cannot exceed {EXCERPT_MAX_LENGTH} characters"
                    )));
                }
                explicit
            }
            _ => derive_excerpt(body.as_str()),
        };

        let featured_image = command.featured_image.unwrap_or_default();
        validate_image_url(&featured_image)?;
        let is_published = command.is_published.unwrap_or(true);
        let created_at = self.clock.now();

        let mut attempts = 0;
        loop {
            attempts += 1;
            let slug = self.slug_assigner.assign(&title).await?;

            let new_post = NewPost {
                title: title.clone(),
                slug,
                author_id: actor.id,
                body: body.clone(),
                excerpt: excerpt.clone(),
                featured_image: featured_image.clone(),
                is_published,
                created_at,
            };

            match self.write_repo.insert(new_post).await {
                Ok(post) => return self.post_dto(post).await,
                Err(DomainError::Conflict(_)) if attempts < SLUG_INSERT_RETRIES => continue,
                Err(other) => return Err(other.into()),
            }
        }
    }
}
