#![forbid(unsafe_code)]

//! `tintlog` - leveled, 256-color console logger.
//!
//! Each call carries a severity and a printf-style template. Calls below the
//! logger's threshold are dropped; the rest become one line on standard output:
//!
//! ```text
//! \x1b[38;5;148m2025-01-15 14:30:00 [WARN] disk at 87%\x1b[0m
//! ```
//!
//! # Example
//!
//! The application owns its logger and passes it where it is needed:
//!
//! ```
//! use std::sync::Arc;
//! use tintlog::{ConsoleLogger, Level, Log, info, warn};
//!
//! let logger = Arc::new(ConsoleLogger::new());
//!
//! info!(logger, " service started on port %d", 8080);
//! logger.set_level(Level::Warn);
//! info!(logger, " suppressed");
//! warn!(logger, " disk at %d%%", 87);
//! ```

pub mod error;
pub mod fmt;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use error::Error;
pub use fmt::{Ansi256, Arg, sprintf};
pub use level::{Level, ParseLevelError};
pub use logger::{ConsoleLogger, ConsoleLoggerBuilder, Log, NoopLogger, TIMESTAMP_FORMAT};
pub use output::{MemoryOutput, Output, StdoutOutput, WriterOutput};
