//! In-memory capture of everything a logger emitted.

use super::Output;
use std::sync::{Arc, Mutex};

/// Clones share one buffer: hand one clone to the logger and keep the other to read back.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }

    /// Written lines without their trailing newlines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().map(|buf| buf.is_empty()).unwrap_or(true)
    }

    pub fn clear(&self) {
        if let Ok(mut buf) = self.buffer.lock() {
            buf.clear();
        }
    }
}

impl Output for MemoryOutput {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        self.buffer.lock()?.extend_from_slice(line.as_bytes());
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
