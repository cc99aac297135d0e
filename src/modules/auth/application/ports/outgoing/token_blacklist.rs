use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Revoked session tokens, keyed by their SHA-256 fingerprint.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn revoke(&self, token_hash: String, expires_at: DateTime<Utc>);

    async fn is_revoked(&self, token_hash: &str) -> bool;
}
