//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{DEFAULT_O_NAME, DEFAULT_X_NAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the terminal game and the script runner.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct NoughtsConfig {
    /// Name used for X when the name field is left blank.
    #[serde(default = "default_x_name")]
    x_name: String,

    /// Name used for O when the name field is left blank.
    #[serde(default = "default_o_name")]
    o_name: String,

    /// File the terminal UI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_x_name() -> String {
    DEFAULT_X_NAME.to_string()
}

#[instrument]
fn default_o_name() -> String {
    DEFAULT_O_NAME.to_string()
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

#[instrument]
fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for NoughtsConfig {
    fn default() -> Self {
        Self {
            x_name: default_x_name(),
            o_name: default_o_name(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl NoughtsConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.x_name.trim().is_empty() || config.o_name.trim().is_empty() {
            return Err(ConfigError::new(
                "Default player names must not be blank".to_string(),
            ));
        }

        info!(x_name = %config.x_name, o_name = %config.o_name, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    #[instrument(skip(path))]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            Some(path) => {
                info!(path = %path.display(), "Config file not found, using defaults");
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Returns the name to use for X given what the player typed.
    pub fn name_for_x(&self, typed: &str) -> String {
        or_default(typed, &self.x_name)
    }

    /// Returns the name to use for O given what the player typed.
    pub fn name_for_o(&self, typed: &str) -> String {
        or_default(typed, &self.o_name)
    }
}

fn or_default(typed: &str, default: &str) -> String {
    let trimmed = typed.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_uses_default() {
        let config = NoughtsConfig::default();
        assert_eq!(config.name_for_x(""), "Player 1");
        assert_eq!(config.name_for_o("   "), "Player 2");
    }

    #[test]
    fn test_typed_name_is_trimmed() {
        let config = NoughtsConfig::default();
        assert_eq!(config.name_for_x("  Ann "), "Ann");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: NoughtsConfig = toml::from_str(r#"x_name = "Ann""#).unwrap();
        assert_eq!(config.x_name(), "Ann");
        assert_eq!(config.o_name(), "Player 2");
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
        assert_eq!(config.log_filter(), "info");
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}
