use std::sync::Arc;

use async_trait::async_trait;
use email_address::EmailAddress;

use crate::auth::application::domain::entities::{SessionGrant, User, UserRole, DEFAULT_AVATAR};
use crate::auth::application::ports::outgoing::{
    AccountDirectory, AccountDirectoryError, TokenProvider,
};
use crate::shared::store::IdGenerator;

// ========================= Register Request =========================
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    name: String,
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterRequestError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl RegisterRequest {
    /// The password is only checked for presence; it is not stored.
    pub fn new(name: String, email: String, password: &str) -> Result<Self, RegisterRequestError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(RegisterRequestError::EmptyName);
        }

        let email = email.trim().to_lowercase();
        if !EmailAddress::is_valid(&email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        if password.trim().is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(Self { name, email })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

// ====================== Register Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("Email already registered")]
    EmailAlreadyExists,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

impl From<AccountDirectoryError> for RegisterError {
    fn from(err: AccountDirectoryError) -> Self {
        match err {
            AccountDirectoryError::EmailAlreadyExists => RegisterError::EmailAlreadyExists,
        }
    }
}

// ============================ Register Use Case =============================
#[async_trait]
pub trait IRegisterUserUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<SessionGrant, RegisterError>;
}

pub struct RegisterUserUseCase {
    directory: Arc<dyn AccountDirectory + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ids: Arc<dyn IdGenerator + Send + Sync>,
}

impl RegisterUserUseCase {
    pub fn new(
        directory: Arc<dyn AccountDirectory + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        ids: Arc<dyn IdGenerator + Send + Sync>,
    ) -> Self {
        Self {
            directory,
            token_provider,
            ids,
        }
    }
}

#[async_trait]
impl IRegisterUserUseCase for RegisterUserUseCase {
    async fn execute(&self, request: RegisterRequest) -> Result<SessionGrant, RegisterError> {
        let user = self
            .directory
            .insert(User {
                id: self.ids.next_id(),
                name: request.name().to_string(),
                email: request.email().to_string(),
                role: UserRole::Student,
                avatar: DEFAULT_AVATAR.to_string(),
            })
            .await?;

        let (token, expires_at) = self
            .token_provider
            .issue_session_token(&user)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(SessionGrant {
            token,
            expires_at,
            user,
        })
    }
}
