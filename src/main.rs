//! manim-runner - command-line host
//!
//! Runs one action against a file (`invoke`), or serves JSON-line action
//! requests from an editor over stdin (`serve`).

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};

use manim_runner::config::TerminalBackend;
use manim_runner::host::clipboard::ArboardClipboard;
use manim_runner::host::memory::{MemoryClipboard, MemoryTerminals};
use manim_runner::host::notify::ConsoleNotifier;
use manim_runner::host::Host;
use manim_runner::models::Selection;
use manim_runner::{Action, ActionRequest, Config, Session};

#[derive(Debug, Parser)]
#[command(
    name = "manim-runner",
    version,
    about = "Run manimgl scenes and checkpoint pastes in a terminal"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the available actions
    List,

    /// Run a single action
    Invoke {
        /// Action identifier, e.g. manimRunner.runManimScene or runManimScene
        action: String,

        /// Active file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Zero-based cursor line
        #[arg(short, long, default_value_t = 0)]
        line: usize,

        /// Zero-based selection as ANCHOR_LINE:CHAR-ACTIVE_LINE:CHAR
        #[arg(short, long)]
        selection: Option<Selection>,

        /// Where commands are sent
        #[arg(short, long, value_enum, default_value_t = InvokeTerminal::Tmux)]
        terminal: InvokeTerminal,
    },

    /// Read JSON-line action requests from stdin
    Serve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InvokeTerminal {
    /// A tmux session that outlives this process
    Tmux,
    /// Print the commands instead of sending them
    DryRun,
}

fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => Config::load().context("loading configuration")?,
    };
    debug!("Configuration: {:?}", config);
    Ok(config)
}

fn list_actions() {
    for action in Action::ALL {
        println!("{:<40} {}", action.id(), action.description());
    }
}

/// Run one request, returning whether the action succeeded
async fn invoke(
    config: &Config,
    request: ActionRequest,
    terminal: InvokeTerminal,
) -> anyhow::Result<bool> {
    match terminal {
        InvokeTerminal::DryRun => {
            let mut session = Session::new(
                config,
                MemoryTerminals::new(),
                MemoryClipboard::new(),
                ConsoleNotifier::new(),
            )?;
            let succeeded = session.handle(&request).await.is_ok();
            for line in session.terminals().sent_lines() {
                println!("{}", line);
            }
            Ok(succeeded)
        }
        InvokeTerminal::Tmux => {
            let mut terminal_config = config.terminal.clone();
            terminal_config.backend = TerminalBackend::Tmux;

            let mut session = Session::new(
                config,
                Host::terminals(&terminal_config),
                ArboardClipboard::new(),
                ConsoleNotifier::new(),
            )?;
            Ok(session.handle(&request).await.is_ok())
        }
    }
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    info!("Serving requests on stdin ({:?} terminals)", config.terminal.backend);

    let mut session = Session::new(
        config,
        Host::terminals(&config.terminal),
        ArboardClipboard::new(),
        ConsoleNotifier::new(),
    )?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session.serve(stdin).await?;

    info!("Session closed");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("Starting manim-runner v{}", manim_runner::VERSION);

    let config = load_configuration(cli.config.as_deref())?;

    match cli.command {
        Command::List => list_actions(),
        Command::Invoke {
            action,
            file,
            line,
            selection,
            terminal,
        } => {
            let request = ActionRequest {
                action,
                file,
                text: None,
                line,
                selection,
            };
            if !invoke(&config, request, terminal).await? {
                process::exit(1);
            }
        }
        Command::Serve => serve(&config).await?,
    }

    Ok(())
}
