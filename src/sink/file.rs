//! Append-mode file destination.

use crate::error::Error;
use std::fs::{self, File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Owns one append-mode handle at a fixed path. Switching files means opening
/// a new `FileSink` and dropping this one; the drop releases the handle.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<LineWriter<File>>,
}

impl FileSink {
    /// Creates the parent directory chain if missing, then opens the file for
    /// append (creating it if absent).
    ///
    /// # Errors
    /// Directory creation or open failures (permissions, invalid path).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, Error> {
        let path = path.into();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            file: Mutex::new(LineWriter::new(file)),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends the text verbatim and flushes so the bytes are on disk when the
    /// call returns. The interior mutex serializes concurrent writers sharing
    /// one sink; a poisoned lock still yields the guard since a half-written
    /// log line is preferable to losing the sink.
    ///
    /// # Errors
    /// I/O errors from the handle (disk full, file deleted out from under us).
    pub fn write(&self, text: &str) -> Result<(), Error> {
        let mut file = self.file.lock().unwrap_or_else(PoisonError::into_inner);
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(())
    }
}
