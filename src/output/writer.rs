//! Any `io::Write` (a file, a socket, a pipe) as a sink.

use super::Output;
use std::io::Write;
use std::sync::Mutex;

/// The mutex serializes whole lines; each line is written and flushed before the lock is released.
#[derive(Debug)]
pub struct WriterOutput<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterOutput<W> {
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Hands the writer back, e.g. to inspect a `Vec<u8>` after logging.
    ///
    /// # Errors
    /// Returns [`crate::Error::Poisoned`] if a writer panicked mid-line.
    pub fn into_inner(self) -> Result<W, crate::Error> {
        Ok(self.writer.into_inner()?)
    }
}

impl<W: Write + Send> Output for WriterOutput<W> {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut writer = self.writer.lock()?;
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        self.writer.lock()?.flush()?;
        Ok(())
    }
}
