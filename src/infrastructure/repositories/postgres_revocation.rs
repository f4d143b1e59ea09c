// src/infrastructure/repositories/postgres_revocation.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::revocation::RevocationStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::time::Duration;

const SWEEP_INTERVAL: Duration = Duration::from_secs(3600);

/// Revocation list backed by the `revoked_tokens` table. Entries outlive
/// restarts, which is the point of the default backend.
#[derive(Clone)]
pub struct PostgresRevocationStore {
    pool: PgPool,
}

impl PostgresRevocationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Drop entries for tokens that have since expired on their own.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> ApplicationResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(result.rows_affected())
    }

    /// Periodic pruning of the blacklist. The entries are dead weight once
    /// the tokens they block have expired.
    pub fn spawn_expiry_sweeper(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(SWEEP_INTERVAL);
            interval.tick().await;
            loop {
                interval.tick().await;
                match self.purge_expired(Utc::now()).await {
                    Ok(0) => {}
                    Ok(purged) => tracing::debug!(purged, "pruned expired token revocations"),
                    Err(err) => tracing::warn!(error = %err, "token revocation pruning failed"),
                }
            }
        })
    }
}

#[async_trait]
impl RevocationStore for PostgresRevocationStore {
    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE jti = $1)")
            .bind(token_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    async fn revoke(&self, token_id: &str, expires_at: DateTime<Utc>) -> ApplicationResult<()> {
        sqlx::query(
            "INSERT INTO revoked_tokens (jti, expires_at) VALUES ($1, $2)
             ON CONFLICT (jti) DO NOTHING",
        )
        .bind(token_id)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(())
    }
}
