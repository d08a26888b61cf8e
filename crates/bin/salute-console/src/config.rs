//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `salute-console.toml` in the working directory unless a path is
//! given on the command line. Every field has a sensible default so the file
//! is optional. Environment variables take precedence over file values.

use std::path::Path;

use salute_console_adapter_http_reqwest::HttpConfig;
use serde::Deserialize;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_PATH: &str = "salute-console.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bridge connection settings.
    pub bridge: HttpConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (or [`DEFAULT_PATH`]) if present, then
    /// apply environment-variable overrides.
    ///
    /// An explicitly given path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or malformed, or if the
    /// resulting configuration is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path, true)?,
            None => Self::from_file(Path::new(DEFAULT_PATH), false)?,
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path, required: bool) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound && !required => {
                Ok(Self::default())
            }
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup("SALUTE_CONSOLE_URL") {
            self.bridge.base_url = val;
        }
        if let Some(val) = lookup("SALUTE_CONSOLE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = lookup("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    /// Check the configuration for obviously unusable values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when the bridge URL is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bridge.base_url.trim().is_empty() {
            return Err(ConfigError::Validation(
                "bridge.base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "salute_console=info,salute_console_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
