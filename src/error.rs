//! Unified error type for output sinks.
//!
//! Logging calls never surface these; they exist so sinks can report failures
//! through `?` and callers of [`Output::flush`](crate::output::Output::flush) can see them.

/// Error type for tintlog sink operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error from the underlying writer.
    Io(std::io::Error),
    /// A thread panicked while holding a sink's lock.
    Poisoned,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Poisoned => write!(f, "output lock poisoned"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Poisoned => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::Poisoned
    }
}
