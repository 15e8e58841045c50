//! Tests for 256-color escapes.

use tintlog::Level;
use tintlog::fmt::{Ansi256, colorize};

#[test]
fn fg_escape() {
    assert_eq!(Ansi256::new(148).fg_ansi(), "\x1b[38;5;148m");
    assert_eq!(Ansi256::from(0).fg_ansi(), "\x1b[38;5;0m");
}

#[test]
fn reset_escape() {
    assert_eq!(Ansi256::RESET, "\x1b[0m");
}

#[test]
fn colorize_wraps_text() {
    let color = Ansi256::new(Level::Error.color());
    assert_eq!(colorize("boom", color), "\x1b[38;5;161mboom\x1b[0m");
}

#[test]
fn display_is_index() {
    assert_eq!(Ansi256::new(45).to_string(), "45");
    assert_eq!(Ansi256::new(45).index(), 45);
}
