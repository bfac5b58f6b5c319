//! Tracing subscriber installation.
//!
//! Library code only emits `tracing` events; embedding binaries and tests
//! call [`init`] once to route them to stderr in the configured format.

use crate::config::{LogFormat, LoggingConfig};
use std::io;
use thiserror::Error;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a tracing level.
    #[error("invalid log level '{0}'")]
    InvalidLevel(String),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Parses a configured level name, case-insensitively.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLevel`] for unknown names.
pub fn parse_level(level: &str) -> Result<Level, TelemetryError> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| TelemetryError::InvalidLevel(level.to_owned()))
}

/// Installs the global subscriber.
///
/// `RUST_LOG` directives take precedence over the configured level.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidLevel`] for a bad level, or
/// [`TelemetryError::Install`] when a subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(TelemetryError::Install)?;

    tracing::debug!(level = %level, format = ?config.format, "telemetry initialised");
    Ok(())
}
