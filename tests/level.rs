//! Tests for log level functionality.

use tintlog::Level;
use tintlog::level::{color_of, name_of};

#[test]
fn level_ordering() {
    assert!(Level::Trace < Level::Debug);
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn level_names() {
    let names: Vec<&str> = Level::all().iter().map(|l| l.name()).collect();
    assert_eq!(names, ["Trace", "Debug", "Info", "Warn", "Error", "Fatal"]);
}

#[test]
fn level_colors() {
    assert_eq!(Level::Trace.color(), 45);
    assert_eq!(Level::Debug.color(), 39);
    assert_eq!(Level::Info.color(), 33);
    assert_eq!(Level::Warn.color(), 148);
    assert_eq!(Level::Error.color(), 161);
    assert_eq!(Level::Fatal.color(), 160);
}

#[test]
fn raw_lookups_match_variants() {
    for level in Level::all() {
        let raw = level as u8;
        assert_eq!(Level::from_repr(raw), Some(level));
        assert_eq!(name_of(raw), level.name());
        assert_eq!(color_of(raw), level.color());
    }
}

#[test]
fn raw_lookups_out_of_range() {
    for raw in [6, 42, u8::MAX] {
        assert_eq!(Level::from_repr(raw), None);
        assert_eq!(name_of(raw), "");
        assert_eq!(color_of(raw), 0);
    }
}

#[test]
fn level_display() {
    assert_eq!(Level::Warn.to_string(), "Warn");
    assert_eq!(Level::Fatal.to_string(), "Fatal");
}

#[test]
fn level_from_str() {
    assert_eq!("trace".parse::<Level>().unwrap(), Level::Trace);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
    assert_eq!(" critical ".parse::<Level>().unwrap(), Level::Fatal);
}

#[test]
fn level_from_str_invalid() {
    let err = "verbose".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'verbose'");
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
