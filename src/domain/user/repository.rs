// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserUpdate};
use crate::domain::user::value_objects::{EmailAddress, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// A user together with the number of published posts they have authored.
#[derive(Debug, Clone)]
pub struct UserWithPostCount {
    pub user: User,
    pub published_posts: u64,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: NewUser) -> DomainResult<User>;

    async fn update(&self, update: UserUpdate) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &EmailAddress) -> DomainResult<Option<User>>;

    async fn record_login(&self, id: UserId, at: DateTime<Utc>) -> DomainResult<()>;

    /// Active accounts, newest first, with their published post counts.
    async fn list_active(&self, limit: u64, offset: u64) -> DomainResult<Vec<UserWithPostCount>>;
}
