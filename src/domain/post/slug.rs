// src/domain/post/slug.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostSlug, PostTitle, SLUG_MAX_LENGTH};

/// Room left for a collision suffix while staying inside the slug column.
const BASE_MAX_LENGTH: usize = SLUG_MAX_LENGTH - 15;
const MAX_SEQUENTIAL_ATTEMPTS: u32 = 50;
const MAX_RANDOM_ATTEMPTS: u32 = 5;

/// Domain service assigning a unique slug to every new post.
///
/// Derives a base slug from the title, then resolves collisions with
/// numbered suffixes (`-1` through `-50`) before falling back to short
/// random tokens. Titles that slugify to nothing get a generated
/// `post-<token>` identity instead.
pub struct SlugAssigner {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAssigner {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    pub async fn assign(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self.base_slug(title);

        let candidate = PostSlug::new(base.clone())?;
        if !self.read_repo.slug_exists(&candidate).await? {
            return Ok(candidate);
        }

        for counter in 1..=MAX_SEQUENTIAL_ATTEMPTS {
            let candidate = PostSlug::new(format!("{base}-{counter}"))?;
            if !self.read_repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        for _ in 0..MAX_RANDOM_ATTEMPTS {
            let candidate = PostSlug::new(format!("{base}-{}", self.generator.random_token()))?;
            if !self.read_repo.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
        }

        Err(DomainError::Conflict(
            "could not assign a unique slug".into(),
        ))
    }

    fn base_slug(&self, title: &PostTitle) -> String {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            return format!("post-{}", self.generator.random_token());
        }

        if base.chars().count() <= BASE_MAX_LENGTH {
            return base;
        }

        let truncated: String = base.chars().take(BASE_MAX_LENGTH).collect();
        truncated.trim_end_matches('-').to_string()
    }
}
