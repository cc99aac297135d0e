// src/shared/config.rs

use std::env;
use std::time::Duration;

use crate::auth::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid {key} value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    /// Artificial pause before answering a login attempt.
    pub login_latency: Duration,
    /// Artificial pause before accepting a contact form.
    pub contact_latency: Duration,
    /// Start with the demo catalogue instead of empty collections.
    pub seed_demo_data: bool,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` (falling back to `.env`) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("PORT", 8080u16)?;
        let jwt = JwtConfig::from_env(&environment)?;
        let login_latency = Duration::from_millis(parse_var("LOGIN_LATENCY_MS", 1000u64)?);
        let contact_latency = Duration::from_millis(parse_var("CONTACT_LATENCY_MS", 1500u64)?);
        let seed_demo_data = parse_var("SEED_DEMO_DATA", true)?;

        Ok(Self {
            environment,
            host,
            port,
            jwt,
            login_latency,
            contact_latency,
            seed_demo_data,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read `key`, falling back to `default` when unset.
pub(crate) fn parse_var<T: std::str::FromStr>(
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}
