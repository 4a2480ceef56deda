//! Logger construction from a parsed config file.

use super::{Logger, State};
use crate::config::Config;
use crate::fmt::Formatter;
use crate::sink::{ConsoleSink, FileSink, Sink};
use std::sync::{Arc, Mutex};

impl Logger {
    /// Builds a logger from a config: level from `[general]`, console sink if
    /// `[console]` enables it, file sink at the configured path if `[file]`
    /// enables it. Same degradation contract as [`Logger::named`]: a file
    /// sink that cannot be opened is reported and skipped, never fatal.
    #[must_use]
    pub fn from_config(name: impl Into<String>, config: &Config) -> Self {
        let logger = Self {
            name: name.into(),
            formatter: Formatter::new(),
            state: Mutex::new(State {
                level: config.parse_level(),
                sinks: Vec::new(),
            }),
        };

        if config.console.enabled {
            logger
                .lock_state()
                .sinks
                .push(Arc::new(Sink::Console(ConsoleSink::new())));
        }

        if config.file.enabled {
            let path = config.log_file_path();
            match FileSink::open(&path) {
                Ok(sink) => logger.lock_state().sinks.push(Arc::new(Sink::File(sink))),
                Err(e) => logger.report(&format!(
                    "failed to open log file {}: {e}",
                    path.display()
                )),
            }
        }

        logger
    }
}
