use async_trait::async_trait;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountDirectoryError {
    #[error("Email already registered")]
    EmailAlreadyExists,
}

/// Lookup table of known accounts. Emails compare case-insensitively.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Option<User>;

    async fn insert(&self, user: User) -> Result<User, AccountDirectoryError>;

    async fn list(&self) -> Vec<User>;
}
