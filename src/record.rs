//! The value handed from the logger to the formatter: one struct instead of
//! a parade of loose parameters.

use crate::level::Level;
use chrono::{DateTime, Local};

/// Snapshot of one logging call. The timestamp is taken when the logger builds
/// the record, so a delayed write still shows the time of the original call.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    /// Name of the logger that produced the record.
    pub logger: String,
    pub message: String,
    /// Present only for the `*_with` call family.
    pub error: Option<ErrorChain>,
}

impl LogRecord {
    /// Stamps the record with the current wall-clock time.
    #[must_use]
    pub fn new(level: Level, logger: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            logger: logger.into(),
            message: message.into(),
            error: None,
        }
    }

    /// Attaches an error chain to the record.
    #[must_use]
    pub fn with_error(mut self, error: ErrorChain) -> Self {
        self.error = Some(error);
        self
    }
}

/// An error and its causes, flattened into displayable pieces. Origin frames
/// are optional; most Rust errors carry none, and the formatter simply skips
/// the `at` lines when the list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorChain {
    pub description: String,
    /// Origin locations, outermost first.
    pub frames: Vec<String>,
    pub cause: Option<Box<ErrorChain>>,
}

impl ErrorChain {
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            frames: Vec::new(),
            cause: None,
        }
    }

    /// Appends an origin location rendered as an indented `at` line.
    #[must_use]
    pub fn frame(mut self, location: impl Into<String>) -> Self {
        self.frames.push(location.into());
        self
    }

    /// Nests a cause, rendered after a `Caused by:` marker.
    #[must_use]
    pub fn caused_by(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Walks `source()` links into a chain. Descriptions come from `Display`;
    /// no frame data exists on `std::error::Error`, so the frame lists stay empty.
    #[must_use]
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self {
            description: error.to_string(),
            frames: Vec::new(),
            cause: error.source().map(|cause| Box::new(Self::from_error(cause))),
        }
    }
}
