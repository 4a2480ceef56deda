//! Severity levels that gate which messages reach the sinks.

use std::fmt;
use std::str::FromStr;

/// Derives `Ord` so the logger can compare a record's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace = 0,
    /// State-change details useful for diagnosing issues.
    Debug = 1,
    /// Static configuration information such as resolved paths and active settings.
    Config = 2,
    /// Normal operational milestones.
    #[default]
    Info = 3,
    /// Non-fatal anomalies that may need attention.
    Warning = 4,
    /// Failures that prevent an operation from completing.
    Severe = 5,
}

impl Level {
    /// Lowercase because config files select levels by lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Config => "config",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Severe => "severe",
        }
    }

    /// Uppercase form used in the bracketed field of every formatted line.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Config => "CONFIG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Severe => "SEVERE",
        }
    }

    /// Convenience for iteration, used by config validation and tests.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Config,
            Self::Info,
            Self::Warning,
            Self::Severe,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Accepts the legacy handler-style names (`severe`, `fine`, `finest`) alongside
    /// the common short forms. `finer` and `finest` both land on `Trace`, since the two
    /// finest legacy grades collapse onto the single most-verbose level here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" | "finest" | "finer" => Ok(Self::Trace),
            "debug" | "fine" => Ok(Self::Debug),
            "config" => Ok(Self::Config),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "severe" | "error" | "err" => Ok(Self::Severe),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
