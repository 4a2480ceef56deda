//! Destinations for formatted text. Exactly two exist (console and file)
//! and no extension point is wanted, so the variant set is a sealed enum
//! rather than a trait object.

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

use crate::error::Error;
use std::path::Path;

/// A destination that accepts already-formatted text. Sinks do no filtering
/// and no formatting of their own; the logger decides what reaches them.
#[derive(Debug)]
pub enum Sink {
    Console(ConsoleSink),
    File(FileSink),
}

impl Sink {
    /// Writes the text verbatim: no added framing, no trailing newline.
    ///
    /// # Errors
    /// I/O errors from the underlying stream or file handle.
    pub fn write(&self, text: &str) -> Result<(), Error> {
        match self {
            Self::Console(sink) => sink.write(text),
            Self::File(sink) => sink.write(text),
        }
    }

    #[must_use]
    pub const fn is_console(&self) -> bool {
        matches!(self, Self::Console(_))
    }

    #[must_use]
    pub const fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    /// Path of the file sink, if that is what this is.
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::Console(_) => None,
            Self::File(sink) => Some(sink.path()),
        }
    }

    /// Human-readable identity for degradation reports ("console", "file x.log").
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Console(_) => "console".to_string(),
            Self::File(sink) => format!("file {}", sink.path().display()),
        }
    }
}
