//! Where rendered lines go. Standard output is the default; the `Output` trait lets a
//! logger write to a file, a buffer, or any other sink without changing call sites.

mod memory;
mod terminal;
mod writer;

pub use memory::MemoryOutput;
pub use terminal::StdoutOutput;
pub use writer::WriterOutput;

/// `Send + Sync` so one logger can be shared across threads.
pub trait Output: Send + Sync {
    /// Writes one complete, newline-terminated line in a single operation.
    ///
    /// # Errors
    /// I/O errors from the underlying sink, or a poisoned sink lock.
    fn write_line(&self, line: &str) -> Result<(), crate::Error>;

    /// Pushes anything the sink has buffered out to its destination.
    ///
    /// # Errors
    /// I/O errors from the underlying sink, or a poisoned sink lock.
    fn flush(&self) -> Result<(), crate::Error>;
}

impl<T: Output + ?Sized> Output for Box<T> {
    fn write_line(&self, line: &str) -> Result<(), crate::Error> {
        (**self).write_line(line)
    }

    fn flush(&self) -> Result<(), crate::Error> {
        (**self).flush()
    }
}
