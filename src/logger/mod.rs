//! The `Log` capability and its implementations.
//!
//! Call sites depend on `Log` (usually through the crate's macros), so a console logger,
//! a logger writing to a file, or a silent one for tests can be swapped in without edits.

mod builder;
mod console;
mod noop;

pub use builder::ConsoleLoggerBuilder;
pub use console::{ConsoleLogger, TIMESTAMP_FORMAT};
pub use noop::NoopLogger;

use crate::fmt::Arg;
use crate::level::Level;
use std::sync::Arc;

/// A leveled logger with a mutable severity threshold.
///
/// `set_level` takes `&self` so a logger shared behind an `Arc` can be re-leveled
/// while other threads keep logging.
pub trait Log: Send + Sync {
    /// Calls strictly below `level` are dropped from now on.
    fn set_level(&self, level: Level);

    /// The current threshold.
    fn level(&self) -> Level;

    /// Core dispatch: substitutes `args` into `template` and emits the line if `level` passes.
    fn log(&self, level: Level, template: &str, args: &[Arg]);

    fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    fn trace(&self, template: &str, args: &[Arg]) {
        self.log(Level::Trace, template, args);
    }

    fn debug(&self, template: &str, args: &[Arg]) {
        self.log(Level::Debug, template, args);
    }

    fn info(&self, template: &str, args: &[Arg]) {
        self.log(Level::Info, template, args);
    }

    fn warn(&self, template: &str, args: &[Arg]) {
        self.log(Level::Warn, template, args);
    }

    fn error(&self, template: &str, args: &[Arg]) {
        self.log(Level::Error, template, args);
    }

    /// Highest severity. Only formats and emits; the process keeps running.
    fn fatal(&self, template: &str, args: &[Arg]) {
        self.log(Level::Fatal, template, args);
    }
}

impl<T: Log + ?Sized> Log for &T {
    fn set_level(&self, level: Level) {
        (**self).set_level(level);
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn log(&self, level: Level, template: &str, args: &[Arg]) {
        (**self).log(level, template, args);
    }
}

impl<T: Log + ?Sized> Log for Box<T> {
    fn set_level(&self, level: Level) {
        (**self).set_level(level);
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn log(&self, level: Level, template: &str, args: &[Arg]) {
        (**self).log(level, template, args);
    }
}

impl<T: Log + ?Sized> Log for Arc<T> {
    fn set_level(&self, level: Level) {
        (**self).set_level(level);
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn log(&self, level: Level, template: &str, args: &[Arg]) {
        (**self).log(level, template, args);
    }
}
