use super::Log;
use crate::fmt::Arg;
use crate::level::Level;
use std::sync::atomic::{AtomicU8, Ordering};

/// Accepts every call and writes nothing. Tracks its threshold so `enabled` still answers.
#[derive(Debug)]
pub struct NoopLogger {
    threshold: AtomicU8,
}

impl Default for NoopLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl NoopLogger {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: AtomicU8::new(Level::Info as u8),
        }
    }
}

impl Log for NoopLogger {
    fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    fn level(&self) -> Level {
        Level::from_repr(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    fn log(&self, _level: Level, _template: &str, _args: &[Arg]) {}
}
