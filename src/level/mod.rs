//! Severity levels that decide which calls reach the output.

use std::fmt;
use std::str::FromStr;

const NAMES: [&str; 6] = ["Trace", "Debug", "Info", "Warn", "Error", "Fatal"];
const COLORS: [u8; 6] = [45, 39, 33, 148, 161, 160];

/// Derives `Ord` so the logger can compare a call's level against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    /// High-volume instrumentation that would be too noisy outside of development.
    Trace = 0,
    /// Diagnostics useful while chasing a problem.
    Debug = 1,
    /// Normal operational milestones.
    #[default]
    Info = 2,
    /// Anomalies that may need attention.
    Warn = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
    /// The highest severity label. Logging at this level never exits the process.
    Fatal = 5,
}

impl Level {
    /// Capitalized display name, e.g. `"Warn"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Index into the 256-color terminal palette used for this level's lines.
    #[must_use]
    pub const fn color(self) -> u8 {
        COLORS[self as usize]
    }

    /// Maps a raw discriminant back to a level; anything past `Fatal` is `None`.
    #[must_use]
    pub const fn from_repr(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::Trace),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Warn),
            4 => Some(Self::Error),
            5 => Some(Self::Fatal),
            _ => None,
        }
    }

    /// Convenience for iteration — used by tests and threshold sweeps.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Trace,
            Self::Debug,
            Self::Info,
            Self::Warn,
            Self::Error,
            Self::Fatal,
        ]
    }
}

/// Name lookup over a raw level value. Unknown values yield an empty string.
#[must_use]
pub fn name_of(raw: u8) -> &'static str {
    NAMES.get(usize::from(raw)).copied().unwrap_or("")
}

/// Color lookup over a raw level value. Unknown values yield `0`.
#[must_use]
pub fn color_of(raw: u8) -> u8 {
    COLORS.get(usize::from(raw)).copied().unwrap_or(0)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "err" => Ok(Self::Error),
            "fatal" | "critical" | "crit" => Ok(Self::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
