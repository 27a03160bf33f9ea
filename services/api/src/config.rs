//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub cors_origin: String,
    /// When set, session generators are seeded from this value so draws repeat.
    pub gacha_seed: Option<u64>,
    /// Sessions untouched for this long are dropped with their state.
    pub session_idle_timeout: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_vars(std::env::vars().collect())
    }

    /// Builds the configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let var = |name: &str| vars.get(name).cloned();

        let bind_address_str = var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin =
            var("CORS_ORIGIN").unwrap_or_else(|| "http://localhost:3000".to_string());

        let gacha_seed = var("GACHA_SEED")
            .map(|s| {
                s.parse::<u64>().map_err(|e| {
                    ConfigError::InvalidValue("GACHA_SEED".to_string(), e.to_string())
                })
            })
            .transpose()?;

        let idle_secs = match var("SESSION_IDLE_TIMEOUT_SECS") {
            Some(s) => s.parse::<u64>().ok().filter(|secs| *secs > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "SESSION_IDLE_TIMEOUT_SECS".to_string(),
                    format!("'{}' is not a positive number of seconds", s),
                )
            })?,
            None => 60 * 60,
        };

        Ok(Self {
            bind_address,
            log_level,
            cors_origin,
            gacha_seed,
            session_idle_timeout: Duration::from_secs(idle_secs),
        })
    }
}
