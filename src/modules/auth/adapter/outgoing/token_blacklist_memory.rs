use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::modules::auth::application::ports::outgoing::token_blacklist::TokenBlacklist;

/// Revoked token fingerprints with their natural expiry. Entries past expiry
/// are dropped on the next revoke, since the token would be rejected anyway.
#[derive(Default)]
pub struct InMemoryTokenBlacklist {
    revoked: RwLock<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn revoke(&self, token_hash: String, expires_at: DateTime<Utc>) {
        let now = Utc::now();
        let mut revoked = self.revoked.write().await;
        revoked.retain(|_, exp| *exp > now);
        revoked.insert(token_hash, expires_at);
    }

    async fn is_revoked(&self, token_hash: &str) -> bool {
        self.revoked
            .read()
            .await
            .get(token_hash)
            .is_some_and(|exp| *exp > Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_revoked_token_is_reported() {
        let blacklist = InMemoryTokenBlacklist::new();
        blacklist
            .revoke("abc".to_string(), Utc::now() + Duration::minutes(5))
            .await;

        assert!(blacklist.is_revoked("abc").await);
        assert!(!blacklist.is_revoked("xyz").await);
    }

    #[tokio::test]
    async fn test_expired_entries_are_purged_on_revoke() {
        let blacklist = InMemoryTokenBlacklist::new();
        blacklist
            .revoke("old".to_string(), Utc::now() - Duration::minutes(1))
            .await;
        assert!(!blacklist.is_revoked("old").await);

        blacklist
            .revoke("new".to_string(), Utc::now() + Duration::minutes(1))
            .await;

        assert_eq!(blacklist.len().await, 1);
    }
}
