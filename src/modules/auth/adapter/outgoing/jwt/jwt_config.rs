use std::env;

use tracing::warn;

use crate::shared::config::{parse_var, ConfigError};

/// Development-only fallback; production refuses to start without `JWT_SECRET`.
const DEV_SECRET: &str = "techcraft-development-secret-change-me-please";

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env(environment: &str) -> Result<Self, ConfigError> {
        let secret_key = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if environment == "production" => {
                return Err(ConfigError::Missing("JWT_SECRET"));
            }
            Err(_) => {
                warn!("JWT_SECRET not set, using the development secret");
                DEV_SECRET.to_string()
            }
        };

        // HS256 requires at least 32 bytes
        if secret_key.len() < 32 {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                value: "<at least 32 characters required>".to_string(),
            });
        }

        let session_expiry = parse_var("SESSION_EXPIRY", 86_400i64)?;
        if session_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_EXPIRY",
                value: session_expiry.to_string(),
            });
        }

        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "TechCraft".to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}
