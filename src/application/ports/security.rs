// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AccessTokenData, IssuedAccess, IssuedTokenPair, RefreshTokenData},
};
use crate::domain::user::User;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issue a fresh access and refresh token pair for a login or
    /// registration.
    async fn issue_pair(&self, user: &User) -> ApplicationResult<IssuedTokenPair>;

    /// Issue a new access token bound to an existing refresh session.
    async fn issue_access(&self, user: &User, session_id: &str) -> ApplicationResult<IssuedAccess>;

    /// Issue a short-lived single-purpose password reset token.
    async fn issue_reset(&self, user: &User) -> ApplicationResult<String>;

    async fn parse_access(&self, token: &str) -> ApplicationResult<AccessTokenData>;

    async fn parse_refresh(&self, token: &str) -> ApplicationResult<RefreshTokenData>;
}
