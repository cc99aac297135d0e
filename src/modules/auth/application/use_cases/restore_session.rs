use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::auth::application::domain::entities::SessionState;
use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::services::hash::hash_token;

/// Resolves the persisted session blob into a session state.
/// The role inside a valid token is trusted without a directory lookup.
#[async_trait]
pub trait IRestoreSessionUseCase: Send + Sync {
    async fn execute(&self, token: Option<&str>) -> SessionState;
}

#[derive(Clone)]
pub struct RestoreSessionUseCase {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
}

impl RestoreSessionUseCase {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl IRestoreSessionUseCase for RestoreSessionUseCase {
    async fn execute(&self, token: Option<&str>) -> SessionState {
        let Some(token) = token else {
            return SessionState::Unauthenticated;
        };

        let claims = match self.token_provider.verify_token(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!(error = %e, "Discarding unreadable session");
                return SessionState::Unauthenticated;
            }
        };

        if self.blacklist.is_revoked(&hash_token(token)).await {
            debug!(user_id = %claims.sub, "Session was logged out");
            return SessionState::Unauthenticated;
        }

        SessionState::Authenticated(claims.user())
    }
}
