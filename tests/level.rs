//! Tests for log level ordering and parsing.

use chiplog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Config);
    assert!(Level::Config < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Severe);
}

#[test]
fn all_is_sorted_ascending() {
    let levels = Level::all();
    assert!(levels.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn level_display() {
    assert_eq!(Level::Trace.to_string(), "trace");
    assert_eq!(Level::Config.to_string(), "config");
    assert_eq!(Level::Severe.to_string(), "severe");
}

#[test]
fn level_label_is_uppercase() {
    assert_eq!(Level::Debug.label(), "DEBUG");
    assert_eq!(Level::Warning.label(), "WARNING");
    assert_eq!(Level::Severe.label(), "SEVERE");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("config".parse::<Level>().unwrap(), Level::Config);
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("severe".parse::<Level>().unwrap(), Level::Severe);
}

#[test]
fn level_from_str_legacy_names() {
    assert_eq!("finest".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("finer".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("fine".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("error".parse::<Level>().unwrap(), Level::Severe);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Severe);
}

#[test]
fn level_from_str_is_case_insensitive() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Severe".parse::<Level>().unwrap(), Level::Severe);
    assert_eq!("FINE".parse::<Level>().unwrap(), Level::Debug);
}

#[test]
fn level_from_str_invalid() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
