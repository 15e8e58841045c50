//! Stepwise construction of a [`ConsoleLogger`].

use super::ConsoleLogger;
use crate::level::Level;
use crate::output::{Output, StdoutOutput};

/// Everything that is fixed for the logger's lifetime, plus the initial threshold.
pub struct ConsoleLoggerBuilder {
    level: Level,
    colors: bool,
    output: Option<Box<dyn Output>>,
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLoggerBuilder {
    /// Info is the default threshold; Debug and Trace are opt-in.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: Level::Info,
            colors: true,
            output: None,
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Colors are on unless turned off here; whether stdout is a terminal is not checked.
    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    /// Replaces standard output as the destination.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> ConsoleLogger {
        let output = self
            .output
            .unwrap_or_else(|| Box::new(StdoutOutput::new()));
        ConsoleLogger::from_parts(self.level, self.colors, output)
    }
}
