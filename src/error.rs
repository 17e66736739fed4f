//! Error types and Result aliases for manim-runner

use std::fmt;
use std::path::PathBuf;

use crate::models::MessageLevel;

/// Result type alias for manim-runner operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for manim-runner
#[derive(Debug)]
pub enum Error {
    // === Action errors ===
    /// No document or selection context available
    NoActiveEditor,

    /// Backward scan from the cursor found no class declaration
    NoClassFound {
        line: usize,
    },

    /// Exit was requested but no terminal is active
    NoActiveTerminal,

    /// Writing the selection to the clipboard failed
    ClipboardWriteFailed {
        reason: String,
    },

    /// Action identifier is not part of the dispatch table
    UnknownAction {
        id: String,
    },

    /// Action identifier was registered twice with the same registry
    ActionAlreadyRegistered {
        id: String,
    },

    // === Terminal errors ===
    /// Failed to create a terminal session
    TerminalCreationFailed {
        name: String,
        reason: String,
    },

    /// Failed to send text to a terminal session
    TerminalSendFailed {
        name: String,
        reason: String,
    },

    // === Document errors ===
    /// Failed to read the document backing an editor snapshot
    DocumentReadFailed {
        path: PathBuf,
        reason: String,
    },

    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    /// Failed to serialize configuration
    ConfigSerializationFailed {
        format: String,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Malformed JSON request
    Serde(serde_json::Error),

    // === Generic fallback (use sparingly) ===
    /// Errors reported by host implementations
    Other(String),
}

impl Error {
    /// Message level this error is surfaced with
    pub fn level(&self) -> MessageLevel {
        match self {
            Error::NoActiveTerminal | Error::ClipboardWriteFailed { .. } => MessageLevel::Warning,
            _ => MessageLevel::Error,
        }
    }

    /// Text shown to the user when an action fails with this error
    pub fn user_message(&self) -> String {
        match self {
            Error::NoActiveEditor => "No active editor!".to_string(),
            Error::NoClassFound { .. } => "No class found near the cursor!".to_string(),
            Error::NoActiveTerminal => {
                "No active terminal found. Please open a terminal first.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Action errors
            Error::NoActiveEditor => write!(f, "No active editor"),
            Error::NoClassFound { line } => {
                write!(f, "No class declaration at or before line {}", line + 1)
            }
            Error::NoActiveTerminal => write!(f, "No active terminal"),
            Error::ClipboardWriteFailed { reason } => {
                write!(f, "Failed to copy selection to clipboard: {}", reason)
            }
            Error::UnknownAction { id } => write!(f, "Unknown action '{}'", id),
            Error::ActionAlreadyRegistered { id } => {
                write!(f, "Action '{}' is already registered", id)
            }

            // Terminal errors
            Error::TerminalCreationFailed { name, reason } => {
                write!(f, "Failed to create terminal '{}': {}", name, reason)
            }
            Error::TerminalSendFailed { name, reason } => {
                write!(f, "Failed to send text to terminal '{}': {}", name, reason)
            }

            // Document errors
            Error::DocumentReadFailed { path, reason } => {
                write!(f, "Failed to read document '{}': {}", path.display(), reason)
            }

            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigNotFound => write!(f, "Configuration file not found"),
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::ConfigSerializationFailed { format, reason } => {
                write!(f, "Failed to serialize config as {}: {}", format, reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Invalid JSON request: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}
