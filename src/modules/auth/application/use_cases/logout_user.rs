use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::services::hash::hash_token;

// ============================ Logout Use Case =============================
/// Ends the session carried by `token`. Logging out without a session,
/// or with a token that no longer verifies, still succeeds.
#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, token: Option<&str>);
}

#[derive(Clone)]
pub struct LogoutUseCase {
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LogoutUseCase {
    pub fn new(
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            blacklist,
            token_provider,
        }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, token: Option<&str>) {
        let Some(token) = token else {
            debug!("Logout without session token");
            return;
        };

        match self.token_provider.verify_token(token) {
            Ok(claims) => {
                self.blacklist
                    .revoke(hash_token(token), claims.expires_at())
                    .await;
                info!(user_id = %claims.sub, "Session revoked");
            }
            Err(e) => debug!(error = %e, "Logout with unverifiable token"),
        }
    }
}
