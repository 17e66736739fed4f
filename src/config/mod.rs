//! Configuration management for manim-runner
//!
//! Holds the terminal, scene command and clipboard settings. Every field has
//! a default, so a partial (or absent) configuration file is valid.

pub mod loader;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Name given to the terminal created when none is active
pub const DEFAULT_TERMINAL_NAME: &str = "Manim Terminal";

/// Main configuration structure for manim-runner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Terminal configuration
    pub terminal: TerminalConfig,

    /// Scene command configuration
    pub scene: SceneConfig,

    /// Clipboard configuration
    pub clipboard: ClipboardConfig,
}

impl Config {
    /// Load configuration from the default search paths, falling back to defaults
    pub fn load() -> Result<Self> {
        loader::ConfigLoader::load()
    }

    /// Load configuration from an explicit file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        loader::ConfigLoader::load_from_path(path)
    }
}

/// Which terminal implementation backs the "active terminal"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminalBackend {
    /// A named tmux session
    #[default]
    Tmux,
    /// A shell in a pseudoterminal owned by this process
    Pty,
}

/// Terminal-specific configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Name of the terminal created on demand
    pub name: String,

    /// Terminal implementation
    pub backend: TerminalBackend,

    /// Shell executable for the PTY backend
    pub shell: PathBuf,

    /// Shell arguments for the PTY backend
    pub shell_args: Vec<String>,

    /// Working directory for new terminals
    pub working_directory: Option<PathBuf>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_TERMINAL_NAME.to_string(),
            backend: TerminalBackend::default(),
            shell: PathBuf::from("/bin/bash"),
            shell_args: vec!["-i".to_string()],
            working_directory: None,
        }
    }
}

/// Scene command configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Program that renders a scene
    pub program: String,

    /// Flag that embeds an interactive shell at a line
    pub embed_flag: String,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            program: "manimgl".to_string(),
            embed_flag: "-se".to_string(),
        }
    }
}

/// Clipboard configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy the checkpoint selection to the system clipboard
    pub enabled: bool,

    /// Abort the checkpoint paste when the clipboard write fails
    pub require_success: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            require_success: false,
        }
    }
}
