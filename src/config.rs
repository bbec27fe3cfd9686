//! Application configuration loaded from TOML.

use crate::games::tictactoe::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Settings for the game shells.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Pause before the computer replies, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Seed for the opponent's random tie-breaks. Random when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Mode to start in, skipping the mode selection screen.
    #[serde(default)]
    default_mode: Option<GameMode>,

    /// File the terminal UI logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_computer_delay_ms() -> u64 {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: default_computer_delay_ms(),
            seed: None,
            default_mode: None,
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Computer reply delay as a [`Duration`].
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Returns a copy with command-line overrides applied.
    #[must_use]
    pub fn with_overrides(
        mut self,
        mode: Option<GameMode>,
        seed: Option<u64>,
        computer_delay_ms: Option<u64>,
    ) -> Self {
        if mode.is_some() {
            self.default_mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(delay) = computer_delay_ms {
            self.computer_delay_ms = delay;
        }
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(config.seed(), &None);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "seed = 42\ndefault_mode = \"vs-computer\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.seed(), &Some(42));
        assert_eq!(config.default_mode(), &Some(GameMode::VsComputer));
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(config.log_file(), &PathBuf::from("noughts.log"));
    }

    #[test]
    fn test_bad_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default().with_overrides(Some(GameMode::TwoPlayer), Some(7), Some(0));
        assert_eq!(config.default_mode(), &Some(GameMode::TwoPlayer));
        assert_eq!(config.seed(), &Some(7));
        assert_eq!(config.computer_delay(), Duration::ZERO);
    }
}
