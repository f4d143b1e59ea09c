// src/domain/post/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use crate::domain::user::value_objects::{UserId, Username};
use async_trait::async_trait;

/// A post joined with its author's username, as listings render it.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author_username: Username,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;

    async fn update(&self, update: PostUpdate) -> DomainResult<Post>;

    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;

    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool>;

    /// Published posts plus the viewer's own drafts, newest first.
    async fn list_visible(
        &self,
        viewer: Option<UserId>,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<PostWithAuthor>>;

    async fn list_recent(&self, limit: u64) -> DomainResult<Vec<PostWithAuthor>>;

    async fn list_by_author(
        &self,
        author: UserId,
        limit: u64,
        offset: u64,
    ) -> DomainResult<Vec<PostWithAuthor>>;

    async fn count_published_by_author(&self, author: UserId) -> DomainResult<u64>;
}
