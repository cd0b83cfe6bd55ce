//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default config file looked up by the CLI.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_arithmetic.toml";

/// Configuration for the quiz application.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QuizConfig {
    /// SQLite database holding the best score.
    #[serde(default = "default_db_path")]
    db_path: String,

    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: String,

    /// Key the best score is stored under.
    #[serde(default = "default_store_key")]
    store_key: String,
}

#[instrument]
fn default_db_path() -> String {
    "strictly_arithmetic.db".to_string()
}

#[instrument]
fn default_log_file() -> String {
    "strictly_arithmetic.log".to_string()
}

#[instrument]
fn default_store_key() -> String {
    "bestScore".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            log_file: default_log_file(),
            store_key: default_store_key(),
        }
    }
}

impl QuizConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(db_path = %config.db_path, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Replaces the database path, e.g. from a CLI flag.
    #[instrument(skip(self))]
    pub fn with_db_path(mut self, db_path: String) -> Self {
        self.db_path = db_path;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
