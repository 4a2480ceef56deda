//! Rendering of records into text. One deterministic plain-text layout keeps
//! console and file output identical, so the same line can be grepped in either.

use crate::record::{ErrorChain, LogRecord};

/// Millisecond precision matches the `yyyy-MM-dd HH:mm:ss.SSS` convention the
/// log files have always used.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Turns a [`LogRecord`] into one newline-terminated text block:
///
/// ```text
/// 2025-06-01 14:30:00.123 [INFO] svc: message
/// ```
///
/// followed, when the record carries an error, by the error's description,
/// its origin frames as indented `at` lines, and each cause after a
/// `Caused by:` marker, recursively.
#[derive(Debug, Clone)]
pub struct Formatter {
    timestamp_format: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Overrides the timestamp pattern (strftime syntax).
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Formatting never fails: a record always renders to something printable,
    /// and missing frame data just omits the `at` lines.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let mut out = format!(
            "{} [{}] {}: {}\n",
            record.timestamp.format(&self.timestamp_format),
            record.level.label(),
            record.logger,
            record.message,
        );

        if let Some(chain) = &record.error {
            render_chain(&mut out, chain);
        }

        out
    }
}

fn render_chain(out: &mut String, chain: &ErrorChain) {
    out.push_str(&chain.description);
    out.push('\n');

    for frame in &chain.frames {
        out.push_str("  at ");
        out.push_str(frame);
        out.push('\n');
    }

    if let Some(cause) = &chain.cause {
        out.push_str("Caused by: ");
        render_chain(out, cause);
    }
}
