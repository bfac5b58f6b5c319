//! Layered engine configuration.
//!
//! Values are merged from programmatic defaults, an optional YAML file, and
//! `ZADACHNIK_`-prefixed environment variables (highest priority). Nested
//! keys use a double underscore, e.g. `ZADACHNIK_LOGGING__LEVEL=debug`.

use crate::task::domain::{DEFAULT_TASK_TYPE, TaskId};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ZADACHNIK_";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A provider could not be read or its values did not deserialize.
    #[error("failed to extract configuration: {0}")]
    Extract(#[source] Box<figment::Error>),

    /// An explicitly requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    MissingFile(PathBuf),

    /// The task identifier prefix is unusable.
    #[error("invalid task_id_prefix '{0}', expected ASCII letters or digits")]
    InvalidTaskIdPrefix(String),

    /// The default task type is blank.
    #[error("default_task_type must not be empty")]
    EmptyDefaultTaskType,

    /// The log level is not recognised.
    #[error("invalid log level '{0}', expected one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Compact,
    /// Multi-line human-readable output.
    Pretty,
    /// Structured JSON lines.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is not set.
    pub level: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Prefix of generated task identifiers.
    pub task_id_prefix: String,
    /// Task type applied when a draft names none.
    pub default_task_type: String,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            task_id_prefix: "T".to_owned(),
            default_task_type: DEFAULT_TASK_TYPE.to_owned(),
            logging: LoggingConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Loads configuration from defaults, an optional YAML file, and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingFile`] when `path` names no file, or
    /// another [`ConfigError`] when extraction or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(file) = path {
            if !file.is_file() {
                return Err(ConfigError::MissingFile(file.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(file));
        }
        Self::from_figment(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Extracts and validates configuration from a prepared figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction or validation fails.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment
            .extract()
            .map_err(|err| ConfigError::Extract(Box::new(err)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates loaded values.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting as a [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if TaskId::validate_prefix(&self.task_id_prefix).is_err() {
            return Err(ConfigError::InvalidTaskIdPrefix(self.task_id_prefix.clone()));
        }
        if self.default_task_type.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultTaskType);
        }
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }
        Ok(())
    }
}
