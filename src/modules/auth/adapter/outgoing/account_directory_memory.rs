use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::{AccountDirectory, AccountDirectoryError};
use crate::shared::store::RecordId;

/// Linear lookup table of accounts, seeded with the demo logins.
pub struct InMemoryAccountDirectory {
    accounts: RwLock<Vec<User>>,
}

impl InMemoryAccountDirectory {
    pub fn new(accounts: Vec<User>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    pub fn with_demo_accounts() -> Self {
        Self::new(demo_accounts())
    }
}

pub fn demo_accounts() -> Vec<User> {
    vec![
        User {
            id: RecordId::from("1"),
            name: "Admin User".to_string(),
            email: "admin@techcraft.com".to_string(),
            role: UserRole::Admin,
            avatar: "/avatars/admin.png".to_string(),
        },
        User {
            id: RecordId::from("2"),
            name: "Student User".to_string(),
            email: "student@techcraft.com".to_string(),
            role: UserRole::Student,
            avatar: "/avatars/student.png".to_string(),
        },
        User {
            id: RecordId::from("3"),
            name: "Regular User".to_string(),
            email: "user@techcraft.com".to_string(),
            role: UserRole::User,
            avatar: "/avatars/user.png".to_string(),
        },
    ]
}

#[async_trait]
impl AccountDirectory for InMemoryAccountDirectory {
    async fn find_by_email(&self, email: &str) -> Option<User> {
        let email = email.trim();
        self.accounts
            .read()
            .await
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    async fn insert(&self, user: User) -> Result<User, AccountDirectoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(AccountDirectoryError::EmailAlreadyExists);
        }
        accounts.push(user.clone());
        Ok(user)
    }

    async fn list(&self) -> Vec<User> {
        self.accounts.read().await.clone()
    }
}
