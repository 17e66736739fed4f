//! Host session
//!
//! Owns the host collaborators for the lifetime of one activation: the
//! action registry, the terminal registry, the clipboard and the notifier.
//! Requests arrive either one at a time from the CLI or as JSON lines from
//! an editor driving `manim-runner serve`.

use serde::Deserialize;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::activation::{self, Extension, LocalActionRegistry, Subscriptions};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::host::editor::SnapshotEditor;
use crate::host::{Clipboard, HostContext, Notifier, TerminalRegistry};
use crate::models::Selection;

/// Request action that ends a `serve` session
pub const SHUTDOWN_ACTION: &str = "shutdown";

/// One action request with the editor state it applies to
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionRequest {
    /// Action identifier or suffix
    pub action: String,

    /// Active file; absent means no active editor
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Buffer contents, used instead of reading `file`
    #[serde(default)]
    pub text: Option<String>,

    /// Zero-based cursor line
    #[serde(default)]
    pub line: usize,

    /// Selection; its active end overrides `line`
    #[serde(default)]
    pub selection: Option<Selection>,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    /// Parse one JSON request line
    pub fn parse(line: &str) -> Result<Self> {
        serde_json::from_str(line).map_err(Error::from)
    }

    /// Editor presenting this request's document
    pub fn editor(&self) -> Result<SnapshotEditor> {
        let Some(path) = &self.file else {
            return Ok(SnapshotEditor::empty());
        };

        match &self.text {
            Some(text) => Ok(SnapshotEditor::from_text(
                path,
                text.clone(),
                self.line,
                self.selection,
            )),
            None => SnapshotEditor::open(path, self.line, self.selection),
        }
    }
}

/// An activated extension bound to concrete host collaborators
pub struct Session<T, C, N> {
    extension: Extension,
    registry: LocalActionRegistry,
    subscriptions: Option<Subscriptions>,
    terminals: T,
    clipboard: C,
    notifier: N,
}

impl<T, C, N> Session<T, C, N>
where
    T: TerminalRegistry,
    C: Clipboard,
    N: Notifier,
{
    /// Activate the extension over the given collaborators
    pub fn new(config: &Config, terminals: T, clipboard: C, notifier: N) -> Result<Self> {
        let mut registry = LocalActionRegistry::new();
        let subscriptions = activation::activate(&mut registry)?;

        Ok(Self {
            extension: Extension::new(config),
            registry,
            subscriptions: Some(subscriptions),
            terminals,
            clipboard,
            notifier,
        })
    }

    pub fn terminals(&self) -> &T {
        &self.terminals
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn registry(&self) -> &LocalActionRegistry {
        &self.registry
    }

    /// Run one request to completion, returning the command sent
    pub async fn handle(&mut self, request: &ActionRequest) -> Result<String> {
        let prepared = self
            .registry
            .resolve(&request.action)
            .and_then(|action| Ok((action, request.editor()?)));

        let (action, editor) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                self.notifier.show_message(e.level(), &e.user_message());
                return Err(e);
            }
        };

        let mut ctx = HostContext::new(
            &editor,
            &mut self.terminals,
            &self.clipboard,
            &self.notifier,
        );
        self.extension.invoke(action, &mut ctx).await
    }

    /// Read JSON-line requests until EOF or a shutdown request
    ///
    /// Malformed lines are logged and skipped; failed actions have already
    /// been reported through the notifier and do not end the session.
    pub async fn serve<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let request = match ActionRequest::parse(line) {
                Ok(request) => request,
                Err(e) => {
                    warn!("Skipping malformed request: {}", e);
                    continue;
                }
            };

            if request.action == SHUTDOWN_ACTION {
                info!("Shutdown requested");
                break;
            }

            if let Err(e) = self.handle(&request).await {
                debug!("Request for '{}' failed: {}", request.action, e);
            }
        }

        self.shutdown();
        Ok(())
    }
}

impl<T, C, N> Session<T, C, N> {
    /// Release every registered action
    pub fn shutdown(&mut self) {
        if let Some(subscriptions) = self.subscriptions.take() {
            subscriptions.dispose(&mut self.registry);
        }
    }
}

impl<T, C, N> Drop for Session<T, C, N> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
