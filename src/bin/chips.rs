//! Sample front end for the logging library: scans a flat `-option value...`
//! argument list and drives the logger with what it finds.
//!
//! Recognized options: `-level <name>` sets the severity threshold,
//! `-log-file <path>` switches the file sink, `-quiet` disables the console.

use chiplog::{Level, Logger};
use std::collections::HashMap;
use std::fmt;

/// Malformed argument lists get a precise complaint instead of a generic one.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ArgError {
    /// A value appeared before any option name had opened a group.
    ValueBeforeOption(String),
    /// A bare `-` with no name behind it.
    EmptyOptionName,
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueBeforeOption(value) => {
                write!(f, "value '{value}' appears before any option name")
            }
            Self::EmptyOptionName => write!(f, "option name is empty"),
        }
    }
}

impl std::error::Error for ArgError {}

/// Splits a flat argument list into named options, each holding the positional
/// values that follow it. A token starting with `-` opens a group; repeating a
/// name extends the earlier group rather than replacing it.
fn scan_args(args: &[String]) -> Result<HashMap<String, Vec<String>>, ArgError> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();
    let mut current: Option<String> = None;

    for arg in args {
        if let Some(name) = arg.strip_prefix('-') {
            if name.is_empty() {
                return Err(ArgError::EmptyOptionName);
            }
            params.entry(name.to_string()).or_default();
            current = Some(name.to_string());
        } else if let Some(name) = &current {
            params.entry(name.clone()).or_default().push(arg.clone());
        } else {
            return Err(ArgError::ValueBeforeOption(arg.clone()));
        }
    }

    Ok(params)
}

fn main() {
    let logger = Logger::named("chips");
    let args: Vec<String> = std::env::args().skip(1).collect();

    let params = match scan_args(&args) {
        Ok(params) => params,
        Err(e) => {
            logger.error_with("error occurred while processing arguments", &e);
            return;
        }
    };

    if let Some(name) = params.get("level").and_then(|values| values.first()) {
        match name.parse::<Level>() {
            Ok(level) => logger.set_level(level),
            Err(e) => logger.warn(&format!("ignoring -level: {e}")),
        }
    }

    if params.contains_key("quiet") {
        logger.enable_console_logging(false);
    }

    if let Some(path) = params.get("log-file").and_then(|values| values.first()) {
        logger.use_log_file(path);
    }

    logger.log(
        Level::Config,
        &format!("active level: {}", logger.level()),
    );
    for (name, values) in &params {
        logger.debug(&format!("-{name}: {}", values.join(", ")));
    }
    logger.info("argument scan complete");
}
