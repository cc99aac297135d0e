use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use email_address::EmailAddress;
use tracing::debug;

use crate::auth::application::domain::entities::{SessionGrant, DEMO_PASSWORD};
use crate::auth::application::ports::outgoing::{AccountDirectory, TokenProvider};

// ========================= Login Request =========================
/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,    // Private - guaranteed valid
    password: String, // Private - guaranteed non-empty
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email cannot be empty")]
    EmptyEmail,
    #[error("Invalid email format")]
    InvalidEmailFormat,
    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = Self::validate_email(email)?;

        if password.trim().is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    /// Get email (trimmed and lowercased)
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_email(email: String) -> Result<String, LoginRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<SessionGrant, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase {
    directory: Arc<dyn AccountDirectory + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    latency: Duration,
}

impl LoginUserUseCase {
    pub fn new(
        directory: Arc<dyn AccountDirectory + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        latency: Duration,
    ) -> Self {
        Self {
            directory,
            token_provider,
            latency,
        }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<SessionGrant, LoginError> {
        // Simulated round trip; not cancellable.
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let user = self
            .directory
            .find_by_email(request.email())
            .await
            .ok_or(LoginError::InvalidCredentials)?;

        if request.password() != DEMO_PASSWORD {
            debug!(email = %request.email(), "Password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        let (token, expires_at) = self
            .token_provider
            .issue_session_token(&user)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(SessionGrant {
            token,
            expires_at,
            user,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::account_directory_memory::InMemoryAccountDirectory;
    use crate::auth::application::domain::entities::UserRole;
    use crate::auth::application::ports::outgoing::TokenError;
    use crate::tests::support::auth_helper::test_token_service;

    fn use_case() -> LoginUserUseCase {
        LoginUserUseCase::new(
            Arc::new(InMemoryAccountDirectory::with_demo_accounts()),
            Arc::new(test_token_service()),
            Duration::ZERO,
        )
    }

    // ==================== LoginRequest Tests ====================
    #[test]
    fn test_login_request_email_normalized() {
        let request =
            LoginRequest::new("  Admin@TechCraft.COM ".to_string(), "password".to_string())
                .unwrap();

        assert_eq!(request.email(), "admin@techcraft.com");
    }

    #[test]
    fn test_login_request_rejects_empty_fields() {
        assert_eq!(
            LoginRequest::new("".to_string(), "password".to_string()).unwrap_err(),
            LoginRequestError::EmptyEmail
        );
        assert_eq!(
            LoginRequest::new("nope".to_string(), "password".to_string()).unwrap_err(),
            LoginRequestError::InvalidEmailFormat
        );
        assert_eq!(
            LoginRequest::new("a@b.com".to_string(), "   ".to_string()).unwrap_err(),
            LoginRequestError::EmptyPassword
        );
    }

    // ==================== Use case Tests ====================
    #[tokio::test]
    async fn test_admin_login_succeeds() {
        let request =
            LoginRequest::new("admin@techcraft.com".to_string(), "password".to_string()).unwrap();

        let grant = use_case().execute(request).await.unwrap();

        assert_eq!(grant.user.role, UserRole::Admin);
        assert_eq!(grant.user.email, "admin@techcraft.com");
        assert!(!grant.token.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_password_is_invalid_credentials() {
        let request =
            LoginRequest::new("admin@techcraft.com".to_string(), "wrongpassword".to_string())
                .unwrap();

        let err = use_case().execute(request).await.unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_unknown_email_is_invalid_credentials() {
        let request =
            LoginRequest::new("ghost@techcraft.com".to_string(), "password".to_string()).unwrap();

        let err = use_case().execute(request).await.unwrap_err();

        assert_eq!(err, LoginError::InvalidCredentials);
    }

    #[tokio::test]
    async fn test_token_failure_is_reported() {
        struct FailingProvider;

        impl TokenProvider for FailingProvider {
            fn issue_session_token(
                &self,
                _user: &crate::auth::application::domain::entities::User,
            ) -> Result<(String, chrono::DateTime<chrono::Utc>), TokenError> {
                Err(TokenError::EncodingError("boom".to_string()))
            }

            fn verify_token(
                &self,
                _token: &str,
            ) -> Result<crate::auth::application::ports::outgoing::SessionClaims, TokenError>
            {
                Err(TokenError::MalformedToken)
            }
        }

        let use_case = LoginUserUseCase::new(
            Arc::new(InMemoryAccountDirectory::with_demo_accounts()),
            Arc::new(FailingProvider),
            Duration::ZERO,
        );
        let request =
            LoginRequest::new("student@techcraft.com".to_string(), "password".to_string())
                .unwrap();

        let err = use_case.execute(request).await.unwrap_err();

        assert!(matches!(err, LoginError::TokenGenerationFailed(msg) if msg.contains("boom")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_simulated_latency() {
        let use_case = LoginUserUseCase::new(
            Arc::new(InMemoryAccountDirectory::with_demo_accounts()),
            Arc::new(test_token_service()),
            Duration::from_millis(1000),
        );
        let request =
            LoginRequest::new("admin@techcraft.com".to_string(), "password".to_string()).unwrap();

        let started = tokio::time::Instant::now();
        use_case.execute(request).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
