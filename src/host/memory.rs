//! In-memory host
//!
//! Terminals, clipboard and notifier that record everything they receive.
//! Used for dry runs from the CLI and as the host in tests.

use std::cell::RefCell;
use std::sync::Mutex;

use super::editor::SnapshotEditor;
use super::{Clipboard, HostContext, Notifier, Terminal, TerminalRegistry};
use crate::error::{Error, Result};
use crate::models::{DocumentSnapshot, MessageLevel};

/// Terminal that keeps the lines sent to it
#[derive(Debug, Clone, Default)]
pub struct MemoryTerminal {
    name: String,
    /// `preserve_focus` of every `show` call, in order
    pub shows: Vec<bool>,
    /// Lines sent, in order
    pub sent: Vec<String>,
}

impl MemoryTerminal {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Terminal for MemoryTerminal {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&mut self, preserve_focus: bool) -> Result<()> {
        self.shows.push(preserve_focus);
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        self.sent.push(text.to_string());
        Ok(())
    }
}

/// Registry of memory terminals
#[derive(Debug, Default)]
pub struct MemoryTerminals {
    terminals: Vec<MemoryTerminal>,
    active: Option<usize>,
    fail_creation: bool,
}

impl MemoryTerminals {
    /// Registry with no terminals
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with one terminal that is already active
    pub fn with_active(name: &str) -> Self {
        Self {
            terminals: vec![MemoryTerminal::new(name)],
            active: Some(0),
            fail_creation: false,
        }
    }

    /// Make every `create_terminal` call fail
    pub fn failing_creation(mut self) -> Self {
        self.fail_creation = true;
        self
    }

    /// All terminals, in creation order
    pub fn terminals(&self) -> &[MemoryTerminal] {
        &self.terminals
    }

    /// The active terminal, if any
    pub fn active(&self) -> Option<&MemoryTerminal> {
        self.active.map(|index| &self.terminals[index])
    }

    /// Every line sent to any terminal, in terminal order
    pub fn sent_lines(&self) -> Vec<String> {
        self.terminals
            .iter()
            .flat_map(|terminal| terminal.sent.iter().cloned())
            .collect()
    }
}

impl TerminalRegistry for MemoryTerminals {
    fn active_terminal(&mut self) -> Option<&mut dyn Terminal> {
        let index = self.active?;
        Some(&mut self.terminals[index] as &mut dyn Terminal)
    }

    fn create_terminal(&mut self, name: &str) -> Result<()> {
        if self.fail_creation {
            return Err(Error::TerminalCreationFailed {
                name: name.to_string(),
                reason: "terminal creation disabled".to_string(),
            });
        }

        self.terminals.push(MemoryTerminal::new(name));
        self.active = Some(self.terminals.len() - 1);
        Ok(())
    }
}

/// Clipboard held in memory
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard whose writes always fail
    pub fn failing() -> Self {
        Self {
            contents: Mutex::new(None),
            fail: true,
        }
    }

    /// Last text written
    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::ClipboardWriteFailed {
                reason: "clipboard unavailable".to_string(),
            });
        }

        let mut contents = self.contents.lock().map_err(|e| Error::ClipboardWriteFailed {
            reason: e.to_string(),
        })?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Notifier that records messages instead of showing them
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<(MessageLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages, in order
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages.borrow().clone()
    }

    /// Messages at one level, in order
    pub fn messages_at(&self, level: MessageLevel) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn show_message(&self, level: MessageLevel, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}

/// A complete in-memory host
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub editor: SnapshotEditor,
    pub terminals: MemoryTerminals,
    pub clipboard: MemoryClipboard,
    pub notifier: RecordingNotifier,
}

impl RecordingHost {
    /// Host with no active editor and no terminal
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with `document` open in the editor
    pub fn with_document(document: DocumentSnapshot) -> Self {
        Self {
            editor: SnapshotEditor::new(document),
            ..Self::default()
        }
    }

    /// Replace the terminal registry
    pub fn with_terminals(mut self, terminals: MemoryTerminals) -> Self {
        self.terminals = terminals;
        self
    }

    /// Replace the clipboard
    pub fn with_clipboard(mut self, clipboard: MemoryClipboard) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Borrow everything as a context for one action
    pub fn context(&mut self) -> HostContext<'_> {
        HostContext::new(
            &self.editor,
            &mut self.terminals,
            &self.clipboard,
            &self.notifier,
        )
    }
}
