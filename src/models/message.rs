//! User-facing message severity

use std::fmt;

/// Kind of message surfaced to the user through the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    /// Informational, e.g. the command about to run
    Info,
    /// Recoverable problem, e.g. no terminal to exit
    Warning,
    /// The action was aborted
    Error,
}

impl MessageLevel {
    /// Get a string representation of the level
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageLevel::Info => "info",
            MessageLevel::Warning => "warning",
            MessageLevel::Error => "error",
        }
    }
}

impl fmt::Display for MessageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
