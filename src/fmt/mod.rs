//! Message rendering: printf-style substitution and terminal colors.

mod color;
pub mod sprintf;

pub use color::{Ansi256, colorize};
pub use sprintf::{Arg, sprintf};
