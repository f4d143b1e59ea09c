// src/domain/post/entity.rs
use crate::domain::post::value_objects::{PostBody, PostId, PostSlug, PostTitle};
use crate::domain::user::value_objects::UserId;
use chrono::{DateTime, Utc};

pub const EXCERPT_MAX_LENGTH: usize = 300;
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub body: PostBody,
    pub excerpt: String,
    pub featured_image: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn word_count(&self) -> usize {
        self.body.as_str().split_whitespace().count()
    }

    /// Estimated reading time in minutes, never below one.
    pub fn read_time(&self) -> usize {
        (self.word_count() / WORDS_PER_MINUTE).max(1)
    }

    /// Drafts are visible only to their author.
    pub fn visible_to(&self, viewer: Option<UserId>) -> bool {
        self.is_published || viewer == Some(self.author_id)
    }
}

/// Shortens a body to fit the excerpt column, appending an ellipsis when
/// anything was cut.
pub fn derive_excerpt(body: &str) -> String {
    if body.chars().count() > EXCERPT_MAX_LENGTH {
        let mut excerpt: String = body.chars().take(EXCERPT_MAX_LENGTH - 3).collect();
        excerpt.push_str("...");
        excerpt
    } else {
        body.to_string()
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub author_id: UserId,
    pub body: PostBody,
    pub excerpt: String,
    pub featured_image: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub body: Option<PostBody>,
    pub excerpt: Option<String>,
    pub featured_image: Option<String>,
    pub is_published: Option<bool>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            body: None,
            excerpt: None,
            featured_image: None,
            is_published: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_body(mut self, body: PostBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_featured_image(mut self, featured_image: impl Into<String>) -> Self {
        self.featured_image = Some(featured_image.into());
        self
    }

    pub fn with_is_published(mut self, is_published: bool) -> Self {
        self.is_published = Some(is_published);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.body.is_none()
            && self.excerpt.is_none()
            && self.featured_image.is_none()
            && self.is_published.is_none()
    }
}
