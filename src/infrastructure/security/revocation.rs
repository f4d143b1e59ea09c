use crate::application::ApplicationResult;
use crate::application::ports::revocation::RevocationStore;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Mutex;

/// Process-local revocation store. Entries live until the process exits,
/// which is longer than any token they shadow, so `expires_at` is ignored.
#[derive(Default)]
pub struct InMemoryRevocationStore {
    revoked: Mutex<HashSet<String>>,
}

impl InMemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RevocationStore for InMemoryRevocationStore {
    async fn is_revoked(&self, token_id: &str) -> ApplicationResult<bool> {
        let guard = self.revoked.lock().unwrap();
        Ok(guard.contains(token_id))
    }

    async fn revoke(&self, token_id: &str, _expires_at: DateTime<Utc>) -> ApplicationResult<()> {
        let mut guard = self.revoked.lock().unwrap();
        guard.insert(token_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revoke_is_idempotent() {
        let store = InMemoryRevocationStore::new();
        let expires = Utc::now() + chrono::Duration::hours(1);

        assert!(!store.is_revoked("tok-1").await.unwrap());
        store.revoke("tok-1", expires).await.unwrap();
        store.revoke("tok-1", expires).await.unwrap();
        assert!(store.is_revoked("tok-1").await.unwrap());
        assert!(!store.is_revoked("tok-2").await.unwrap());
    }
}
