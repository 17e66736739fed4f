//! Host environment traits
//!
//! These traits define the interface to the editor environment that
//! triggers actions, allowing the command logic to stay pure and testable.

use crate::error::Result;
use crate::models::{DocumentSnapshot, MessageLevel};

/// Source of the active document
pub trait Editor {
    /// Snapshot of the active document, or `None` when no editor is focused
    fn active_document(&self) -> Option<DocumentSnapshot>;
}

/// A terminal session that accepts lines of text
pub trait Terminal {
    /// Display name of the terminal
    fn name(&self) -> &str;

    /// Bring the terminal to the foreground
    ///
    /// With `preserve_focus` the terminal is revealed without taking focus
    /// away from the editor.
    fn show(&mut self, preserve_focus: bool) -> Result<()>;

    /// Send a line of text, followed by a newline
    fn send_text(&mut self, text: &str) -> Result<()>;
}

/// Owner of the "active terminal" identity
pub trait TerminalRegistry {
    /// The currently active terminal, if any
    fn active_terminal(&mut self) -> Option<&mut dyn Terminal>;

    /// Create a terminal named `name` and make it the active one
    fn create_terminal(&mut self, name: &str) -> Result<()>;
}

impl<T: TerminalRegistry + ?Sized> TerminalRegistry for Box<T> {
    fn active_terminal(&mut self) -> Option<&mut dyn Terminal> {
        (**self).active_terminal()
    }

    fn create_terminal(&mut self, name: &str) -> Result<()> {
        (**self).create_terminal(name)
    }
}

/// System clipboard access
#[async_trait::async_trait]
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    async fn write_text(&self, text: &str) -> Result<()>;
}

/// Surface for user-facing messages
pub trait Notifier {
    /// Show a message at the given level
    fn show_message(&self, level: MessageLevel, message: &str);

    fn info(&self, message: &str) {
        self.show_message(MessageLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.show_message(MessageLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.show_message(MessageLevel::Error, message);
    }
}

/// Host registry of named actions
pub trait ActionRegistry {
    /// Make an action identifier invocable
    fn register(&mut self, id: &str) -> Result<()>;

    /// Release a previously registered identifier
    fn unregister(&mut self, id: &str);
}
