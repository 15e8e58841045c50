//! The default sink: the process's standard output.

use super::Output;
use std::io::{self, Write};

/// Writes each line to stdout under the stdout lock and flushes immediately,
/// so lines from different threads never interleave mid-line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutOutput;

impl StdoutOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Output for StdoutOutput {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        Ok(())
    }
}
