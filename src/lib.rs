//! manim-runner - drive an interactive manimgl session from an editor
//!
//! This library provides the core of an editor integration that finds the
//! scene class around the cursor and sends manimgl commands to a terminal.
//!
//! ## Features
//!
//! - **Scene lookup:** Backward scan from the cursor for the nearest `class Name(`
//! - **Run scene:** `manimgl <file> <Scene> -se <line>` in the active terminal
//! - **Checkpoint paste:** Send a selection to a running session, optionally
//!   recorded or skipped
//! - **Exit:** Leave the interactive session in the existing terminal
//! - **Terminals:** tmux sessions or a PTY owned by `manim-runner serve`
//! - **Configuration:** TOML-based configuration files
//!
//! ## Module Organization
//!
//! - [`locator`] - Class declaration lookup
//! - [`dispatch`] - Command formatting and the [`CommandDispatcher`]
//! - [`activation`] - Action table, registration lifecycle, [`Extension`]
//! - [`host`] - Host traits ([`host::Editor`], [`host::TerminalRegistry`], ...) and adapters
//! - [`session`] - Long-lived host session and the JSON-line request loop
//! - [`config`] - Configuration loading and defaults
//! - [`models`] - Document snapshot, selection, message levels
//! - [`mod@error`] - Error types and Result aliases
//!
//! ## Quick Start
//!
//! ```no_run
//! use manim_runner::host::memory::RecordingHost;
//! use manim_runner::models::DocumentSnapshot;
//! use manim_runner::{Action, Config, Extension};
//!
//! # async fn demo() -> manim_runner::Result<()> {
//! let text = "class Intro(Scene):\n    def construct(self):\n        pass\n";
//! let mut host = RecordingHost::with_document(DocumentSnapshot::new("scene.py", text, 2));
//!
//! let extension = Extension::new(&Config::default());
//! let command = extension.invoke(Action::RunScene, &mut host.context()).await?;
//! assert_eq!(command, "manimgl scene.py Intro -se 3");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Every action runs to completion in response to one trigger. The host
//! collaborators are passed in through a [`host::HostContext`]; the only
//! suspension point is the clipboard write during a checkpoint paste.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod activation;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod locator;
pub mod models;
pub mod session;

// Re-exports for core functionality
pub use activation::{activate, Action, Extension, LocalActionRegistry, Subscriptions};
pub use config::Config;
pub use dispatch::{checkpoint_command, scene_command, CommandDispatcher};
pub use error::{Error, Result};
pub use locator::find_class_name;
pub use session::{ActionRequest, Session};

// Version information
/// The current version of manim-runner from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");
