//! Environment-driven configuration.

use crate::error::config::ConfigError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MIN_CONNECTIONS: u32 = 1;

/// Runtime configuration loaded from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl Config {
    /// Load configuration from the environment, reading a `.env` file first
    /// when one is present.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` is not set
    /// - `Err(ConfigError::InvalidEnvValue)` - A numeric variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        Ok(Self {
            database_url,
            max_connections: parse_env_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            min_connections: parse_env_or("DB_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS)?,
        })
    }
}

fn parse_env_or(var: &str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected an unsigned integer, got {value:?}"),
        }),
        Err(_) => Ok(default),
    }
}
