//! A named logger fanning out leveled records to console and file sinks,
//! reconfigurable at runtime.
//!
//! Logging is best-effort by contract: no call in the `log` family returns an
//! error or panics. Broken sinks degrade the logger, and the breakage itself
//! is reported through whatever sinks still work.

mod from_config;

use crate::fmt::Formatter;
use crate::level::Level;
use crate::record::{ErrorChain, LogRecord};
use crate::sink::{ConsoleSink, FileSink, Sink};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Relative to the process working directory; created on demand.
pub const DEFAULT_LOG_FILE: &str = "logs/application.log";

/// The level and sink set form one unit of state: a `log` call must see a
/// consistent pair, so both live under a single lock.
struct State {
    level: Level,
    sinks: Vec<Arc<Sink>>,
}

/// A named logger. All methods take `&self`, so one instance can be shared
/// across threads; the internal lock covers only the level/sink tuple, and
/// formatting plus sink I/O run against an immutable snapshot outside it.
///
/// Each constructor call produces an independent instance: two loggers
/// created with the same name share nothing, not even their sinks.
pub struct Logger {
    name: String,
    formatter: Formatter,
    state: Mutex<State>,
}

impl Logger {
    /// Creates a logger with the default sinks: console, plus a best-effort
    /// file sink at [`DEFAULT_LOG_FILE`]. Never fails; if the file sink
    /// cannot be opened the logger starts console-only and says so there.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let logger = Self {
            name: name.into(),
            formatter: Formatter::new(),
            state: Mutex::new(State {
                level: Level::default(),
                sinks: vec![Arc::new(Sink::Console(ConsoleSink::new()))],
            }),
        };

        match FileSink::open(DEFAULT_LOG_FILE) {
            Ok(sink) => logger.lock_state().sinks.push(Arc::new(Sink::File(sink))),
            Err(e) => logger.report(&format!(
                "failed to open default log file {DEFAULT_LOG_FILE}: {e}"
            )),
        }

        logger
    }

    /// Names the logger after a type, for the common one-logger-per-component
    /// pattern: `Logger::of::<MyService>()`.
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::named(std::any::type_name::<T>())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.lock_state().level
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.lock_state().sinks.len()
    }

    /// Path of the active file sink, if one is attached.
    #[must_use]
    pub fn log_file(&self) -> Option<PathBuf> {
        self.lock_state()
            .sinks
            .iter()
            .find_map(|sink| sink.file_path().map(Path::to_path_buf))
    }

    /// Sets the severity threshold. Records below it are dropped before any
    /// formatting happens. Sinks share this single threshold; they have no
    /// per-sink floor of their own.
    pub fn set_level(&self, level: Level) {
        self.lock_state().level = level;
    }

    /// Core dispatch: filters by severity, formats once, then fans out to
    /// every sink in insertion order.
    pub fn log(&self, level: Level, message: &str) {
        self.dispatch(level, message, None);
    }

    /// Like [`log`](Self::log), with the error's `source()` chain rendered
    /// after the message line.
    pub fn log_with(&self, level: Level, message: &str, error: &dyn std::error::Error) {
        self.dispatch(level, message, Some(ErrorChain::from_error(error)));
    }

    /// High-volume instrumentation, off by default.
    pub fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    /// Diagnostic detail for development.
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Normal operational milestones.
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Non-fatal anomalies.
    pub fn warn(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    /// Failures that prevented an operation from completing.
    pub fn error(&self, message: &str) {
        self.log(Level::Severe, message);
    }

    pub fn trace_with(&self, message: &str, error: &dyn std::error::Error) {
        self.log_with(Level::Trace, message, error);
    }

    pub fn debug_with(&self, message: &str, error: &dyn std::error::Error) {
        self.log_with(Level::Debug, message, error);
    }

    pub fn info_with(&self, message: &str, error: &dyn std::error::Error) {
        self.log_with(Level::Info, message, error);
    }

    pub fn warn_with(&self, message: &str, error: &dyn std::error::Error) {
        self.log_with(Level::Warning, message, error);
    }

    /// The most common pairing: a failure message plus the error that caused it.
    pub fn error_with(&self, message: &str, error: &dyn std::error::Error) {
        self.log_with(Level::Severe, message, error);
    }

    /// Switches file logging to `path`, creating parent directories as needed.
    /// Replaces the current file sink if one is attached, installs one
    /// otherwise, never stacking. On failure the previous file sink stays
    /// active and the failure is reported through the attached sinks.
    pub fn use_log_file(&self, path: impl AsRef<Path>) -> &Self {
        let path = path.as_ref();
        match FileSink::open(path) {
            Ok(sink) => {
                let sink = Arc::new(Sink::File(sink));
                let mut state = self.lock_state();
                if let Some(slot) = state.sinks.iter_mut().find(|s| s.is_file()) {
                    *slot = sink;
                } else {
                    state.sinks.push(sink);
                }
            }
            Err(e) => self.report(&format!(
                "failed to configure log file {}: {e}",
                path.display()
            )),
        }
        self
    }

    /// Installs or removes the console sink, idempotently: enabling twice
    /// leaves exactly one console sink, disabling an absent one is a no-op.
    pub fn enable_console_logging(&self, enabled: bool) -> &Self {
        let mut state = self.lock_state();
        let has_console = state.sinks.iter().any(|sink| sink.is_console());
        if enabled && !has_console {
            state.sinks.push(Arc::new(Sink::Console(ConsoleSink::new())));
        } else if !enabled {
            state.sinks.retain(|sink| !sink.is_console());
        }
        drop(state);
        self
    }

    fn dispatch(&self, level: Level, message: &str, error: Option<ErrorChain>) {
        // Snapshot under the lock, write outside it: a slow disk must not
        // block concurrent set_level or use_log_file calls longer than the
        // clone of a few Arcs.
        let sinks = {
            let state = self.lock_state();
            if level < state.level {
                return;
            }
            state.sinks.clone()
        };

        let mut record = LogRecord::new(level, self.name.clone(), message);
        if let Some(error) = error {
            record = record.with_error(error);
        }
        let text = self.formatter.format(&record);

        let mut failed: Vec<(usize, crate::Error)> = Vec::new();
        for (idx, sink) in sinks.iter().enumerate() {
            if let Err(e) = sink.write(&text) {
                failed.push((idx, e));
            }
        }

        // Each failure is reported once, through the sinks that did accept
        // the write. Nothing reaches the caller.
        for (failed_idx, err) in &failed {
            let notice = self.formatter.format(&LogRecord::new(
                Level::Severe,
                self.name.clone(),
                format!("write to {} failed: {err}", sinks[*failed_idx].describe()),
            ));
            for (idx, sink) in sinks.iter().enumerate() {
                if failed.iter().all(|(f, _)| *f != idx) {
                    let _ = sink.write(&notice);
                }
            }
        }
    }

    /// Self-report for degradation events, delivered to every attached sink
    /// on a best-effort basis.
    fn report(&self, message: &str) {
        let sinks = self.lock_state().sinks.clone();
        let text = self
            .formatter
            .format(&LogRecord::new(Level::Severe, self.name.clone(), message));
        for sink in &sinks {
            let _ = sink.write(&text);
        }
    }

    /// A poisoned lock means a panic elsewhere mid-mutation; the sink list is
    /// still structurally valid, so logging continues rather than cascading
    /// the panic.
    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
