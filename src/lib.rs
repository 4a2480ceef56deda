//! `chiplog` - Console and file logging with runtime reconfiguration.
//!
//! A named logger that records leveled messages to a console sink, a file
//! sink, or both, formats every record the same way in both places, and can
//! be re-pointed at a different log file while the program runs.
//!
//! # Example
//!
//! ```no_run
//! use chiplog::{Level, Logger};
//!
//! let logger = Logger::named("svc");
//!
//! logger.info("service started");
//! logger.set_level(Level::Debug);
//! logger.debug("cache warmed");
//!
//! logger.use_log_file("logs/svc.log").enable_console_logging(false);
//! logger.warn("running file-only");
//! ```
//!
//! Logging calls never fail and never panic: a sink that breaks is dropped
//! from service and the failure is reported through the sinks that remain.

pub mod config;
pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;
pub mod record;
pub mod sink;

pub use config::Config;
pub use error::Error;
pub use fmt::Formatter;
pub use level::Level;
pub use logger::{DEFAULT_LOG_FILE, Logger};
pub use record::{ErrorChain, LogRecord};
pub use sink::{ConsoleSink, FileSink, Sink};
