// src/infrastructure/security/redis_revocation.rs
use crate::application::ApplicationResult;
use crate::application::error::ApplicationError;
use crate::application::ports::revocation::RevocationStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{Config as DeadpoolConfig, Pool, Runtime};
use redis::AsyncCommands;

/// Redis backed revocation store for multi-instance deployments. Entries
/// carry a TTL matching the token's own expiry, so Redis cleans up after
/// itself.
#[derive(Clone)]
pub struct RedisRevocationStore {
    pool: Pool,
}

impl RedisRevocationStore {
    /// Create a store from a redis URL (e.g. redis://:password@host:6379/0).
    pub fn from_url(url: &str) -> Result<Self, ApplicationError> {
        let cfg = DeadpoolConfig::from_url(url);
        let pool = cfg
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { pool })
    }

    async fn connection(&self) -> ApplicationResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }
}

fn revocation_key(token_id: &str) -> String {
    format!("revoked:token:{}", token_id)
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        let mut conn = self.connection().await?;
        let exists: bool = conn
            .exists(revocation_key(token_id))
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(exists)
    }

    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> ApplicationResult<()> {
        // Keep the marker at least a second even for tokens already past
        // their expiry, so a concurrent check still sees it.
        let ttl_secs = (expires_at - Utc::now()).num_seconds().max(1) as u64;

        let mut conn = self.connection().await?;
        conn.set_ex::<_, _, ()>(revocation_key(token_id), 1, ttl_secs)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
