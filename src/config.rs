//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file read when no explicit path is given, if present.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_tictactoe.toml";

/// Input handling options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSettings {
    /// Keep cursor navigation active after the game ends.
    pub navigate_when_finished: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct AppConfig {
    /// Settings file holding the persisted theme.
    settings_path: PathBuf,

    /// Log file; the terminal is owned by the UI.
    log_file: PathBuf,

    /// Input handling options.
    input: InputSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from("tictactoe_settings.toml"),
            log_file: PathBuf::from("strictly_tictactoe.log"),
            input: InputSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(settings_path = %config.settings_path.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads from `explicit` if given, else from [`DEFAULT_CONFIG_PATH`] when
    /// it exists, else returns defaults.
    ///
    /// # Errors
    ///
    /// An explicit path that cannot be read or parsed is an error. So is a
    /// malformed file at the default path.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
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
    fn test_partial_file_keeps_defaults() {
        let config: AppConfig = toml::from_str("[input]\nnavigate_when_finished = true\n").unwrap();
        assert!(config.input().navigate_when_finished);
        assert_eq!(config.settings_path(), &PathBuf::from("tictactoe_settings.toml"));
    }

    #[test]
    fn test_setters_override() {
        let config = AppConfig::default().with_log_file("game.log");
        assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    }
}
