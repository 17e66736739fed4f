//! PTY terminals
//!
//! Spawns the configured shell in a pseudoterminal owned by this process,
//! using the portable-pty crate. Terminal output is forwarded to stdout by a
//! background reader thread. The session lives as long as the registry.

use portable_pty::{native_pty_system, Child, ChildKiller, CommandBuilder, MasterPty, PtySize};
use std::io::{Read, Write};
use std::thread;

use super::{Terminal, TerminalRegistry};
use crate::config::TerminalConfig;
use crate::error::{Error, Result};

/// One shell running in a pseudoterminal
pub struct PtySession {
    name: String,
    writer: Box<dyn Write + Send>,
    child: Box<dyn Child + Send + Sync>,
    // Closing the master hangs up the shell
    _master: Box<dyn MasterPty + Send>,
}

impl PtySession {
    /// Spawn the configured shell in a new PTY pair
    pub fn spawn(config: &TerminalConfig, name: &str) -> Result<Self> {
        let creation_failed = |reason: String| Error::TerminalCreationFailed {
            name: name.to_string(),
            reason,
        };

        let pair = native_pty_system()
            .openpty(PtySize {
                rows: 24,
                cols: 80,
                pixel_width: 0,
                pixel_height: 0,
            })
            .map_err(|e| creation_failed(e.to_string()))?;

        let mut cmd_builder = CommandBuilder::new(&config.shell);
        cmd_builder.args(&config.shell_args);
        if let Some(dir) = &config.working_directory {
            cmd_builder.cwd(dir);
        }

        let child = pair
            .slave
            .spawn_command(cmd_builder)
            .map_err(|e| creation_failed(e.to_string()))?;
        drop(pair.slave);

        let reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| creation_failed(e.to_string()))?;
        let writer = pair
            .master
            .take_writer()
            .map_err(|e| creation_failed(e.to_string()))?;

        forward_output(reader, name.to_string());
        info!(
            "Spawned '{}' in PTY terminal '{}' (pid {:?})",
            config.shell.display(),
            name,
            child.process_id()
        );

        Ok(Self {
            name: name.to_string(),
            writer,
            child,
            _master: pair.master,
        })
    }

    /// Whether the shell is still running
    pub fn is_alive(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }
}

impl Terminal for PtySession {
    fn name(&self) -> &str {
        &self.name
    }

    fn show(&mut self, preserve_focus: bool) -> Result<()> {
        // Output is already streamed to stdout
        debug!(
            "Showing PTY terminal '{}' (preserve_focus: {})",
            self.name, preserve_focus
        );
        Ok(())
    }

    fn send_text(&mut self, text: &str) -> Result<()> {
        let line = format!("{}\r", text);
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| Error::TerminalSendFailed {
                name: self.name.clone(),
                reason: e.to_string(),
            })
    }
}

impl Drop for PtySession {
    fn drop(&mut self) {
        if self.is_alive() {
            debug!("Killing PTY terminal '{}'", self.name);
            let _ = self.child.kill();
        }
    }
}

/// Copy PTY output to stdout until the PTY closes
fn forward_output(mut reader: Box<dyn Read + Send>, name: String) {
    thread::spawn(move || {
        let mut buf = [0u8; 4096];
        let mut stdout = std::io::stdout();

        loop {
            match reader.read(&mut buf) {
                Ok(0) => {
                    debug!("PTY read EOF for '{}' - process terminated", name);
                    break;
                }
                Ok(n) => {
                    if stdout
                        .write_all(&buf[..n])
                        .and_then(|_| stdout.flush())
                        .is_err()
                    {
                        debug!("stdout closed, stopping reader for '{}'", name);
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // EIO is the normal hang-up signal on Linux
                    debug!("PTY read error for '{}': {}", name, e);
                    break;
                }
            }
        }
    });
}

/// Registry holding at most one PTY session
pub struct PtyTerminals {
    config: TerminalConfig,
    active: Option<PtySession>,
}

impl PtyTerminals {
    pub fn new(config: TerminalConfig) -> Self {
        Self {
            config,
            active: None,
        }
    }
}

impl TerminalRegistry for PtyTerminals {
    fn active_terminal(&mut self) -> Option<&mut dyn Terminal> {
        if let Some(session) = self.active.as_mut() {
            if !session.is_alive() {
                info!("PTY terminal '{}' exited", session.name);
                self.active = None;
            }
        }

        self.active
            .as_mut()
            .map(|session| session as &mut dyn Terminal)
    }

    fn create_terminal(&mut self, name: &str) -> Result<()> {
        let session = PtySession::spawn(&self.config, name)?;
        self.active = Some(session);
        Ok(())
    }
}
