//! Tests for record formatting.

use chiplog::record::{ErrorChain, LogRecord};
use chiplog::{Formatter, Level};
use chrono::{Local, TimeZone, Timelike};
use std::fmt;

fn fixed_record() -> LogRecord {
    let mut record = LogRecord::new(Level::Info, "test", "hello");
    record.timestamp = Local
        .with_ymd_and_hms(2025, 6, 1, 14, 30, 0)
        .unwrap()
        .with_nanosecond(123_000_000)
        .unwrap();
    record
}

#[test]
fn header_layout_is_exact() {
    let text = Formatter::new().format(&fixed_record());
    assert_eq!(text, "2025-06-01 14:30:00.123 [INFO] test: hello\n");
}

#[test]
fn live_timestamp_matches_the_millisecond_pattern() {
    let text = Formatter::new().format(&LogRecord::new(Level::Info, "test", "hello"));
    let (timestamp, rest) = text.split_at(23);

    assert_eq!(rest, " [INFO] test: hello\n");
    for (i, c) in timestamp.chars().enumerate() {
        match i {
            4 | 7 => assert_eq!(c, '-', "bad separator in '{timestamp}'"),
            10 => assert_eq!(c, ' ', "bad separator in '{timestamp}'"),
            13 | 16 => assert_eq!(c, ':', "bad separator in '{timestamp}'"),
            19 => assert_eq!(c, '.', "bad separator in '{timestamp}'"),
            _ => assert!(c.is_ascii_digit(), "non-digit in '{timestamp}'"),
        }
    }
}

#[test]
fn custom_timestamp_format() {
    let formatter = Formatter::new().timestamp_format("%H:%M");
    let text = formatter.format(&fixed_record());
    assert_eq!(text, "14:30 [INFO] test: hello\n");
}

#[test]
fn error_chain_with_frames_and_cause() {
    let chain = ErrorChain::new("outer failure")
        .frame("svc::run (main.rs:10)")
        .caused_by(ErrorChain::new("inner failure"));
    let record = fixed_record().with_error(chain);

    let text = Formatter::new().format(&record);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "2025-06-01 14:30:00.123 [INFO] test: hello");
    assert_eq!(lines[1], "outer failure");
    assert_eq!(lines[2], "  at svc::run (main.rs:10)");
    assert_eq!(lines[3], "Caused by: inner failure");
    assert_eq!(lines.len(), 4);
    assert_eq!(text.matches("Caused by:").count(), 1);
}

#[test]
fn missing_frames_omit_the_at_lines() {
    let record = fixed_record().with_error(ErrorChain::new("plain failure"));
    let text = Formatter::new().format(&record);
    assert!(!text.contains("  at "));
    assert!(text.ends_with("plain failure\n"));
}

#[test]
fn deep_chains_nest_one_caused_by_per_cause() {
    let chain = ErrorChain::new("a")
        .caused_by(ErrorChain::new("b").caused_by(ErrorChain::new("c")));
    let record = fixed_record().with_error(chain);
    let text = Formatter::new().format(&record);
    assert_eq!(text.matches("Caused by:").count(), 2);
    assert!(text.contains("Caused by: b"));
    assert!(text.contains("Caused by: c"));
}

#[derive(Debug)]
struct Wrapper {
    source: std::io::Error,
}

impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("request failed")
    }
}

impl std::error::Error for Wrapper {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn chain_from_std_error_walks_sources() {
    let err = Wrapper {
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such host"),
    };
    let chain = ErrorChain::from_error(&err);

    assert_eq!(chain.description, "request failed");
    assert!(chain.frames.is_empty());
    let cause = chain.cause.expect("source should become a cause");
    assert_eq!(cause.description, "no such host");
    assert!(cause.cause.is_none());
}
