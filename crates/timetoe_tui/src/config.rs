//! Front-end configuration.
//!
//! Values come from, in order of precedence: command-line flags, an
//! optional TOML file, built-in defaults.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Settings for a terminal session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct TuiConfig {
    /// Where logs are written. The terminal itself is never logged to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Capture mouse clicks on squares and the move list.
    #[serde(default = "default_true")]
    mouse: bool,

    /// Show square numbers on empty squares.
    #[serde(default = "default_true")]
    hints: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("timetoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            mouse: true,
            hints: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    ///
    /// Keys missing from the file keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Resolves the final configuration for a command line.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    /// Applies command-line flags on top of these settings.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(log_filter) = &cli.log_filter {
            self.log_filter = log_filter.clone();
        }
        if cli.no_mouse {
            self.mouse = false;
        }
        if cli.no_hints {
            self.hints = false;
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
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
