use std::{net::SocketAddr, str::FromStr, time::Duration};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DB_CONNECT_MAX_ATTEMPTS: u32 = 10;
const DEFAULT_DB_CONNECT_RETRY_INTERVAL_SECS: u64 = 5;
const DEFAULT_BIND_ADDRESS: ([u8; 4], u16) = ([0, 0, 0, 0], 8000);

/// Application configuration loaded from the process environment.
pub struct Config {
    /// Connection string for the backing database (host, port, credentials, database).
    pub database_url: String,

    /// How many times the readiness gate tries to reach the database.
    pub db_connect_max_attempts: u32,
    /// Fixed delay between two connection attempts.
    pub db_connect_retry_interval: Duration,
    /// Per-attempt connect timeout; the driver default applies when unset.
    pub db_connect_timeout: Option<Duration>,

    pub bind_address: SocketAddr,
    /// Origins allowed by CORS; `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            db_connect_max_attempts: parse_env("DB_CONNECT_MAX_ATTEMPTS")?
                .unwrap_or(DEFAULT_DB_CONNECT_MAX_ATTEMPTS),
            db_connect_retry_interval: Duration::from_secs(
                parse_env("DB_CONNECT_RETRY_INTERVAL_SECS")?
                    .unwrap_or(DEFAULT_DB_CONNECT_RETRY_INTERVAL_SECS),
            ),
            db_connect_timeout: parse_env::<u64>("DB_CONNECT_TIMEOUT_SECS")?
                .map(Duration::from_secs),
            bind_address: parse_env("BIND_ADDRESS")?
                .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDRESS)),
            cors_allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|value| parse_origin_list(&value))
                .filter(|origins| !origins.is_empty()),
        })
    }
}

/// Reads and parses an optional environment variable.
///
/// # Returns
/// - `Ok(None)` - Variable is not set
/// - `Ok(Some(T))` - Variable is set and parsed successfully
/// - `Err(ConfigError::InvalidEnvVar)` - Variable is set but failed to parse
fn parse_env<T>(name: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Ok(value) = std::env::var(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: e.to_string(),
        })
}

/// Splits a comma-separated origin list, dropping blank entries.
fn parse_origin_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
