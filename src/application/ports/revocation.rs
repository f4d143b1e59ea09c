// src/application/ports/revocation.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Return true if the given token id has been revoked.
    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool>;

    /// Revoke the given token id. `expires_at` is when the token would have
    /// expired on its own, after which the entry may be dropped. Revoking an
    /// already revoked id is a no-op.
    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> ApplicationResult<()>;
}
