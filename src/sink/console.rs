//! Standard-output destination.

use crate::error::Error;
use std::io::{self, Write};

/// Writes formatted text to standard output. No configuration surface; the
/// logger installs or removes it as a whole.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Appends the text to stdout and flushes, so interleaved `println!` output
    /// from the host program stays in order.
    ///
    /// # Errors
    /// I/O errors from the stdout stream (closed pipe, full disk on redirect).
    pub fn write(&self, text: &str) -> Result<(), Error> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
