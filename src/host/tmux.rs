//! tmux terminals
//!
//! The active terminal is the tmux session named after `terminal.name`.
//! Sessions outlive this process, so one-shot CLI invocations share the
//! same interactive manimgl shell.

use std::env;
use std::process::{Command, Output};

use super::{Terminal, TerminalRegistry};
use crate::config::TerminalConfig;
use crate::error::{Error, Result};

const TMUX: &str = "tmux";

/// Run tmux with `args`, mapping a non-zero exit to an error message
fn run_tmux(args: &[String]) -> std::result::Result<Output, String> {
    debug!("tmux {}", args.join(" "));
    let output = Command::new(TMUX)
        .args(args)
        .output()
        .map_err(|e| format!("failed to run tmux: {}", e))?;

    if output.status.success() {
        Ok(output)
    } else {
        Err(String::from_utf8_lossy(&output.stderr).trim().to_string())
    }
}

/// Target matching the session called exactly `name`
///
/// A bare `-t name` falls back to prefix matching in tmux.
fn session_target(name: &str) -> String {
    format!("={}", name)
}

/// Target for the current pane of the session called exactly `name`
fn pane_target(name: &str) -> String {
    format!("={}:", name)
}

fn has_session_args(name: &str) -> Vec<String> {
    vec![
        "has-session".to_string(),
        "-t".to_string(),
        session_target(name),
    ]
}

fn switch_client_args(name: &str) -> Vec<String> {
    vec![
        "switch-client".to_string(),
        "-t".to_string(),
        session_target(name),
    ]
}

/// Arguments that type `text` literally into session `name`
fn send_keys_args(name: &str, text: &str) -> Vec<String> {
    vec![
        "send-keys".to_string(),
        "-t".to_string(),
        pane_target(name),
        "-l".to_string(),
        "--".to_string(),
        text.to_string(),
    ]
}

/// Arguments that press Enter in session `name`
fn enter_args(name: &str) -> Vec<String> {
    vec![
        "send-keys".to_string(),
        "-t".to_string(),
        pane_target(name),
        "Enter".to_string(),
    ]
}

/// Arguments that create a detached session
fn new_session_args(config: &TerminalConfig, name: &str) -> Vec<String> {
    let mut args = vec![
        "new-session".to_string(),
        "-d".to_string(),
        "-s".to_string(),
        name.to_string(),
    ];
    if let Some(dir) = &config.working_directory {
        args.push("-c".to_string());
        args.push(dir.display().to_string());
    }
    args
}

/// One tmux session
#[derive(Debug, Clone)]
pub struct TmuxSession {
    name: String,
}

impl TmuxSession {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    fn send_failed(&self, reason: String) -> Error {
        Error::TerminalSendFailed {
            name: self.name.clone(),
            reason,
        }
    }
}

impl Terminal for TmuxSession {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&mut self, preserve_focus: bool) -> Result<()> {
        // Outside tmux there is no client to switch
        if preserve_focus || env::var_os("TMUX").is_none() {
            debug!("Showing tmux session '{}' without switching client", self.name);
            return Ok(());
        }

        run_tmux(&switch_client_args(&self.name)).map_err(|reason| self.send_failed(reason))?;
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        run_tmux(&send_keys_args(&self.name, text)).map_err(|reason| self.send_failed(reason))?;
        run_tmux(&enter_args(&self.name)).map_err(|reason| self.send_failed(reason))?;
        Ok(())
    }
}

/// Registry over tmux sessions
pub struct TmuxTerminals {
    config: TerminalConfig,
    active: Option<TmuxSession>,
}

impl TmuxTerminals {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }

    fn session_exists(name: &str) -> bool {
        run_tmux(&has_session_args(name)).is_ok()
    }
}

impl TerminalRegistry for TmuxTerminals {
    fn active_terminal(&mut self) -> Option<&mut dyn Terminal> {
        let alive = match &self.active {
            Some(session) => Self::session_exists(&session.name),
            None => Self::session_exists(&self.config.name),
        };

        if !alive {
            self.active = None;
            return None;
        }

        let name = self.config.name.clone();
        let session = self.active.get_or_insert_with(|| TmuxSession::new(&name));
        Some(session as &mut dyn Terminal)
    }

    fn create_terminal(&mut self, name: &str) -> Result<()> {
        info!("Creating tmux session '{}'", name);
        run_tmux(&new_session_args(&self.config, name)).map_err(|reason| {
            Error::TerminalCreationFailed {
                name: name.to_string(),
                reason,
            }
        })?;

        self.active = Some(TmuxSession::new(name));
        Ok(())
    }
}
