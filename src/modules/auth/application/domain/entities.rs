use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::store::RecordId;

/// Literal password accepted for every account in the demo directory.
pub const DEMO_PASSWORD: &str = "password";

pub const DEFAULT_AVATAR: &str = "/avatars/default.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Student,
    User,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Student => "student",
            UserRole::User => "user",
        }
    }
}

/// The session user. This is the whole persisted client state: it is
/// serialized into the session token and trusted as-is when restored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
}

impl User {
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// Session lifecycle: `Loading` until the persisted blob has been read,
/// then `Authenticated` or `Unauthenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionState::Loading)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.user().is_some_and(|u| u.has_role(role))
    }
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}
