use crate::auth::adapter::outgoing::account_directory_memory::demo_accounts;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::{User, UserRole};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        issuer: "TechCraftTest".to_string(),
        secret_key: "test_secret_key_for_testing_only_0123456789".to_string(),
        session_expiry: 3600,
    }
}

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(test_jwt_config())
}

/// The demo account holding `role` (ids "1", "2" and "3").
pub fn demo_user(role: UserRole) -> User {
    demo_accounts()
        .into_iter()
        .find(|u| u.role == role)
        .expect("every role has a demo account")
}

pub fn session_token_for(role: UserRole) -> String {
    let (token, _) = test_token_service()
        .issue_session_token(&demo_user(role))
        .expect("test token");
    token
}

/// `Authorization` header for `insert_header`.
pub fn bearer(role: UserRole) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", session_token_for(role)))
}
