//! Structured logging setup on top of `tracing-subscriber`.

use std::io;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Log output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-field human-readable lines for development.
    #[default]
    Pretty,
    /// Single-line abbreviated output.
    Compact,
    /// Newline-delimited JSON for log shippers.
    Json,
}

/// Error returned when a log format name is not recognised.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown log format '{0}', expected pretty, compact or json")]
pub struct ParseLogFormatError(pub String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ParseLogFormatError(value.to_owned())),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, for example `info` or `tasklist=debug,tower_http=warn`.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

impl LoggingConfig {
    /// Installs the global tracing subscriber.
    ///
    /// # Errors
    ///
    /// Returns [`LoggingError`] when the filter is invalid or a subscriber is
    /// already installed.
    pub fn init(&self) -> Result<(), LoggingError> {
        let registry = tracing_subscriber::registry().with(EnvFilter::try_new(&self.filter)?);
        let layer = fmt::layer().with_target(true).with_writer(io::stdout);

        match self.format {
            LogFormat::Pretty => registry.with(layer).try_init()?,
            LogFormat::Compact => registry.with(layer.compact()).try_init()?,
            LogFormat::Json => registry.with(layer.json()).try_init()?,
        }
        Ok(())
    }
}
