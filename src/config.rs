//! Application configuration.
//!
//! Settings come from environment variables with defaults suitable for local
//! development. An unset `DATABASE_URL` selects the in-memory store.

use crate::logging::{LogFormat, LoggingConfig};
use std::env;
use std::str::FromStr;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_POOL_SIZE: u32 = 10;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Task store settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

/// Task store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL; `None` selects the in-memory store.
    pub url: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: u32,
}

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable holds a value that cannot be used.
    #[error("invalid value '{value}' for {variable}: {reason}")]
    InvalidValue {
        /// Environment variable name.
        variable: &'static str,
        /// Offending value.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl AppConfig {
    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through the given variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a variable cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server = ServerConfig {
            host: lookup("TASKLIST_HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_or(&lookup, "TASKLIST_PORT", DEFAULT_PORT)?,
        };

        let pool_size = parse_or(&lookup, "DATABASE_POOL_SIZE", DEFAULT_POOL_SIZE)?;
        if pool_size == 0 {
            return Err(ConfigError::InvalidValue {
                variable: "DATABASE_POOL_SIZE",
                value: pool_size.to_string(),
                reason: "pool size must be at least 1".to_owned(),
            });
        }
        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            pool_size,
        };

        let logging = LoggingConfig {
            filter: lookup("RUST_LOG").unwrap_or_else(|| LoggingConfig::default().filter),
            format: parse_or(&lookup, "LOG_FORMAT", LogFormat::default())?,
        };

        Ok(Self {
            server,
            database,
            logging,
        })
    }

    /// Returns the listener address as `host:port`.
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(raw) = lookup(variable) else {
        return Ok(default);
    };
    raw.trim()
        .parse()
        .map_err(|err: T::Err| ConfigError::InvalidValue {
            variable,
            value: raw.clone(),
            reason: err.to_string(),
        })
}
