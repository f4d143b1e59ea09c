use crate::application::dto::users::UserDto;
use crate::domain::post::{Post, PostWithAuthor};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Full post representation with the author embedded, served by detail
/// endpoints and writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub body: String,
    pub excerpt: String,
    pub featured_image: String,
    pub is_published: bool,
    pub author: UserDto,
    pub word_count: usize,
    pub read_time: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_parts(post: Post, author: UserDto) -> Self {
        let word_count = post.word_count();
        let read_time = post.read_time();
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            body: post.body.into(),
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            is_published: post.is_published,
            author,
            word_count,
            read_time,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Compact representation for listings. The body stays behind the detail
/// endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub featured_image: String,
    pub author: String,
    pub author_id: i64,
    pub is_published: bool,
    pub read_time: usize,
    pub created_at: DateTime<Utc>,
}

impl From<PostWithAuthor> for PostSummaryDto {
    fn from(value: PostWithAuthor) -> Self {
        let read_time = value.post.read_time();
        let post = value.post;
        Self {
            id: post.id.into(),
            title: post.title.into(),
            slug: post.slug.into(),
            excerpt: post.excerpt,
            featured_image: post.featured_image,
            author: value.author_username.into(),
            author_id: post.author_id.into(),
            is_published: post.is_published,
            read_time,
            created_at: post.created_at,
        }
    }
}
