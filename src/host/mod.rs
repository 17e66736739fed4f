//! Host environment abstraction layer
//!
//! The editor, its terminals, the clipboard and the message surface are all
//! owned by the host. Actions receive them through a [`HostContext`] built at
//! the boundary, so nothing in the core reaches for global state.

mod traits;

pub mod clipboard;
pub mod editor;
pub mod memory;
pub mod notify;
pub mod pty;
pub mod tmux;

pub use traits::*;

use crate::config::{TerminalBackend, TerminalConfig};

/// Borrowed host collaborators for a single action invocation
pub struct HostContext<'a> {
    pub editor: &'a dyn Editor,
    pub terminals: &'a mut dyn TerminalRegistry,
    pub clipboard: &'a dyn Clipboard,
    pub notifier: &'a dyn Notifier,
}

impl<'a> HostContext<'a> {
    pub fn new(
        editor: &'a dyn Editor,
        terminals: &'a mut dyn TerminalRegistry,
        clipboard: &'a dyn Clipboard,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            editor,
            terminals,
            clipboard,
            notifier,
        }
    }
}

/// Terminal registry factory
pub struct Host;

impl Host {
    /// Get the terminal registry for the configured backend
    pub fn terminals(config: &TerminalConfig) -> Box<dyn TerminalRegistry> {
        match config.backend {
            TerminalBackend::Tmux => Box::new(tmux::TmuxTerminals::new(config.clone())),
            TerminalBackend::Pty => Box::new(pty::PtyTerminals::new(config.clone())),
        }
    }
}
