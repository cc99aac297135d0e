use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::application::domain::entities::{User, UserRole};
use crate::shared::store::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// Claims of a session token: the serialized user plus validity window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String, // User ID
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
    pub iss: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
}

impl SessionClaims {
    pub fn user(&self) -> User {
        User {
            id: RecordId::new(self.sub.clone()),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            avatar: self.avatar.clone(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }
}

pub trait TokenProvider: Send + Sync {
    fn issue_session_token(&self, user: &User) -> Result<(String, DateTime<Utc>), TokenError>;

    fn verify_token(&self, token: &str) -> Result<SessionClaims, TokenError>;
}
