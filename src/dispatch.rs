//! Command construction and dispatch
//!
//! Formats the scene, checkpoint and exit commands and sends them to the
//! host's active terminal. The formatters are pure; the dispatcher methods
//! add the host side effects around them.

use std::path::Path;

use crate::config::{ClipboardConfig, Config, SceneConfig};
use crate::error::{Error, Result};
use crate::host::{HostContext, Terminal, TerminalRegistry};
use crate::locator;

/// Command that leaves the interactive manimgl shell
pub const EXIT_COMMAND: &str = "exit()";

/// Checkpoint arguments for the recorded variant
pub const RECORD_ARGS: &str = "record=True";

/// Checkpoint arguments for the skipped variant
pub const SKIP_ARGS: &str = "skip=True";

/// Command that renders `class_name` and embeds a shell at zero-based `line`
///
/// The line in the command is one-based.
pub fn scene_command(
    scene: &SceneConfig,
    file_path: &Path,
    class_name: &str,
    line: usize,
) -> String {
    format!(
        "{} {} {} {} {}",
        scene.program,
        file_path.display(),
        class_name,
        scene.embed_flag,
        line + 1
    )
}

/// Command for pasting `selected_text` into a running session
///
/// A single non-comment line runs verbatim. Anything else becomes a
/// `checkpoint_paste(...)` call, labelled with the leading comment (or a bare
/// `#`) and the number of selected lines.
pub fn checkpoint_command(selected_text: &str, arg_str: &str) -> String {
    let lines: Vec<&str> = selected_text.split('\n').collect();
    let first_line = lines[0].trim();
    let starts_with_comment = first_line.starts_with('#');

    if lines.len() == 1 && !starts_with_comment {
        return selected_text.trim().to_string();
    }

    let comment = if starts_with_comment { first_line } else { "#" };
    format!(
        "checkpoint_paste({}) {} ({} lines)",
        arg_str,
        comment,
        lines.len()
    )
}

/// Sends manimgl commands to the host terminal
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    terminal_name: String,
    scene: SceneConfig,
    clipboard: ClipboardConfig,
}

impl CommandDispatcher {
    pub fn new(config: &Config) -> Self {
        Self {
            terminal_name: config.terminal.name.clone(),
            scene: config.scene.clone(),
            clipboard: config.clipboard.clone(),
        }
    }

    /// Run the scene enclosing the cursor, embedding a shell at the cursor line
    pub fn run_scene(&self, ctx: &mut HostContext<'_>) -> Result<String> {
        let document = ctx.editor.active_document().ok_or(Error::NoActiveEditor)?;
        let line = document.cursor_line();

        let found = locator::find_class_declaration(document.text(), line)
            .ok_or(Error::NoClassFound { line })?;
        debug!(
            "Cursor line {} belongs to class '{}' declared on line {}",
            line + 1,
            found.name,
            found.line + 1
        );

        let command = scene_command(&self.scene, document.path(), &found.name, line);
        ctx.notifier.info(&format!("Running command: {}", command));

        let terminal = self.resolve_terminal(ctx.terminals)?;
        terminal.show(false)?;
        terminal.send_text(&command)?;

        Ok(command)
    }

    /// Copy the selection (or cursor line) and paste it into the session
    pub async fn checkpoint_paste(
        &self,
        ctx: &mut HostContext<'_>,
        arg_str: &str,
    ) -> Result<String> {
        let document = ctx.editor.active_document().ok_or(Error::NoActiveEditor)?;
        let selected_text = document.selected_text();

        if self.clipboard.enabled {
            match ctx.clipboard.write_text(&selected_text).await {
                Ok(()) => ctx.notifier.info("Selected text copied to clipboard."),
                Err(e) if self.clipboard.require_success => return Err(e),
                Err(e) => {
                    warn!("Clipboard write failed, sending command anyway: {}", e);
                    ctx.notifier.warning(&e.user_message());
                }
            }
        }

        let command = checkpoint_command(&selected_text, arg_str);
        debug!("Checkpoint command: {}", command);

        let terminal = self.resolve_terminal(ctx.terminals)?;
        terminal.show(true)?;
        terminal.send_text(&command)?;

        Ok(command)
    }

    /// Leave the interactive session in the already active terminal
    ///
    /// Never creates a terminal.
    pub fn exit(&self, ctx: &mut HostContext<'_>) -> Result<String> {
        let terminal = ctx
            .terminals
            .active_terminal()
            .ok_or(Error::NoActiveTerminal)?;

        ctx.notifier.info(&format!("Running command: {}", EXIT_COMMAND));
        terminal.show(true)?;
        terminal.send_text(EXIT_COMMAND)?;

        Ok(EXIT_COMMAND.to_string())
    }

    /// The active terminal, or a newly created one
    fn resolve_terminal<'t>(
        &self,
        terminals: &'t mut dyn TerminalRegistry,
    ) -> Result<&'t mut dyn Terminal> {
        if terminals.active_terminal().is_none() {
            info!("No active terminal, creating '{}'", self.terminal_name);
            terminals.create_terminal(&self.terminal_name)?;
        }

        terminals.active_terminal().ok_or(Error::NoActiveTerminal)
    }
}
