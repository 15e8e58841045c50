//! The builtin logger: one ANSI-colored, timestamped line per call.

use super::Log;
use super::builder::ConsoleLoggerBuilder;
use crate::fmt::{Ansi256, Arg, sprintf};
use crate::level::Level;
use crate::output::Output;
use chrono::{Local, NaiveDateTime};
use std::sync::atomic::{AtomicU8, Ordering};

/// Local wall-clock time as `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes lines shaped as
/// `\x1b[38;5;{color}m{YYYY-MM-DD HH:MM:SS} [{LEVEL}]{message}\x1b[0m\n`.
///
/// ```
/// use tintlog::{ConsoleLogger, MemoryOutput, warn};
///
/// let sink = MemoryOutput::new();
/// let logger = ConsoleLogger::builder().output(sink.clone()).build();
///
/// tintlog::debug!(logger, "hidden at the default threshold");
/// warn!(logger, " disk at %d%%", 87);
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains("[WARN] disk at 87%"));
/// ```
pub struct ConsoleLogger {
    threshold: AtomicU8,
    colors: bool,
    output: Box<dyn Output>,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// Info threshold, colors on, standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Standard output with an explicit initial threshold.
    #[must_use]
    pub fn with_level(level: Level) -> Self {
        Self::builder().level(level).build()
    }

    #[must_use]
    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::new()
    }

    pub(super) fn from_parts(level: Level, colors: bool, output: Box<dyn Output>) -> Self {
        Self {
            threshold: AtomicU8::new(level as u8),
            colors,
            output,
        }
    }

    #[must_use]
    pub const fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Renders one complete line, trailing newline included. The message is used verbatim.
    #[must_use]
    pub fn format_line(&self, level: Level, at: NaiveDateTime, message: &str) -> String {
        let timestamp = at.format(TIMESTAMP_FORMAT);
        let tag = level.name().to_uppercase();

        if self.colors {
            let start = Ansi256::new(level.color()).fg_ansi();
            let reset = Ansi256::RESET;
            format!("{start}{timestamp} [{tag}]{message}{reset}\n")
        } else {
            format!("{timestamp} [{tag}]{message}\n")
        }
    }

    /// Lines are flushed as they are written; this only matters for custom sinks that buffer.
    ///
    /// # Errors
    /// Returns the sink's I/O error.
    pub fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }
}

impl Log for ConsoleLogger {
    fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    fn level(&self) -> Level {
        Level::from_repr(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    fn log(&self, level: Level, template: &str, args: &[Arg]) {
        if !self.enabled(level) {
            return;
        }

        let message = sprintf(template, args);
        let line = self.format_line(level, Local::now().naive_local(), &message);
        // Logging never fails from the caller's side.
        let _ = self.output.write_line(&line);
    }
}
