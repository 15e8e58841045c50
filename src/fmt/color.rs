//! Level colors are indexes into the xterm 256-color palette, not RGB triples.

use std::fmt;

/// A dedicated type keeps palette indexes from being mixed up with other small integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ansi256(pub u8);

impl Ansi256 {
    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The `\x1b[38;5;Nm` foreground escape — callers shouldn't hand-build it.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[38;5;{}m", self.0)
    }
}

impl From<u8> for Ansi256 {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl fmt::Display for Ansi256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wraps `text` in the color's foreground escape and a reset.
#[must_use]
pub fn colorize(text: &str, color: Ansi256) -> String {
    let fg = color.fg_ansi();
    let reset = Ansi256::RESET;
    format!("{fg}{text}{reset}")
}
