//! TOML configuration for logger construction.
//!
//! Every field defaults, so an empty file (or no file at all via
//! `Config::default()`) still produces a working logger.

use crate::error::Error;
use crate::level::Level;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// ```toml
/// [general]
/// level = "debug"
///
/// [console]
/// enabled = true
///
/// [file]
/// enabled = true
/// path = "~/logs/service.log"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Severity filtering applies to all sinks, so it sits above either of them.
    pub general: GeneralConfig,
    pub console: ConsoleConfig,
    pub file: FileConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Any name `Level::from_str` accepts, including the legacy handler names
    /// (`severe`, `fine`, `finest`).
    pub level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: Level::default().as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub enabled: bool,
    /// Tilde-expanded before use; relative paths resolve against the process
    /// working directory.
    pub path: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: crate::logger::DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Config {
    /// Reads and parses a config file.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be read, `Error::ConfigParse` on TOML
    /// syntax errors.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Lenient level lookup: an unknown name falls back to the default level
    /// rather than refusing to construct a logger.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_default()
    }

    /// Strict variant for callers that want to reject a bad config outright.
    ///
    /// # Errors
    /// `Error::InvalidLevel` when the configured name is not a known level.
    pub fn require_level(&self) -> Result<Level, Error> {
        self.general
            .level
            .parse()
            .map_err(|_| Error::InvalidLevel(self.general.level.clone()))
    }

    /// The configured log file path with `~` expanded.
    #[must_use]
    pub fn log_file_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.file.path).into_owned())
    }
}
