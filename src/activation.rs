//! Action registration
//!
//! The five actions form a static dispatch table. Activating the extension
//! registers all of them with the host; disposing the returned
//! [`Subscriptions`] releases all of them together.

use std::collections::BTreeSet;
use std::fmt;

use crate::config::Config;
use crate::dispatch::{CommandDispatcher, RECORD_ARGS, SKIP_ARGS};
use crate::error::{Error, Result};
use crate::host::{ActionRegistry, HostContext};

/// Prefix shared by every action identifier
pub const ACTION_NAMESPACE: &str = "manimRunner";

/// A user-triggerable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Locate the class at the cursor and run its scene
    RunScene,
    /// Paste the selection into the session
    CheckpointPaste,
    /// Paste the selection with `record=True`
    RecordedCheckpointPaste,
    /// Paste the selection with `skip=True`
    SkippedCheckpointPaste,
    /// Send `exit()` to the existing terminal
    Exit,
}

impl Action {
    /// Every action, in registration order
    pub const ALL: [Action; 5] = [
        Action::RunScene,
        Action::CheckpointPaste,
        Action::RecordedCheckpointPaste,
        Action::SkippedCheckpointPaste,
        Action::Exit,
    ];

    /// Full identifier, e.g. `manimRunner.runManimScene`
    pub fn id(&self) -> &'static str {
        match self {
            Action::RunScene => "manimRunner.runManimScene",
            Action::CheckpointPaste => "manimRunner.checkpointPaste",
            Action::RecordedCheckpointPaste => "manimRunner.recordedCheckpointPaste",
            Action::SkippedCheckpointPaste => "manimRunner.skippedCheckpointPaste",
            Action::Exit => "manimRunner.exit",
        }
    }

    /// Identifier without the namespace
    pub fn suffix(&self) -> &'static str {
        &self.id()[ACTION_NAMESPACE.len() + 1..]
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            Action::RunScene => "locate class, run scene command",
            Action::CheckpointPaste => "checkpoint-paste, no extra args",
            Action::RecordedCheckpointPaste => "checkpoint-paste with record=True",
            Action::SkippedCheckpointPaste => "checkpoint-paste with skip=True",
            Action::Exit => "send exit() to existing terminal only",
        }
    }

    /// Argument string passed to `checkpoint_paste(...)`, for paste actions
    pub fn checkpoint_args(&self) -> Option<&'static str> {
        match self {
            Action::CheckpointPaste => Some(""),
            Action::RecordedCheckpointPaste => Some(RECORD_ARGS),
            Action::SkippedCheckpointPaste => Some(SKIP_ARGS),
            Action::RunScene | Action::Exit => None,
        }
    }

    /// Parse a full identifier or a bare suffix
    pub fn from_id(id: &str) -> Result<Action> {
        let suffix = id
            .strip_prefix(ACTION_NAMESPACE)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(id);

        Action::ALL
            .into_iter()
            .find(|action| action.suffix() == suffix)
            .ok_or_else(|| Error::UnknownAction { id: id.to_string() })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Actions registered by [`activate`]
#[derive(Debug)]
#[must_use = "registered actions stay registered until disposed"]
pub struct Subscriptions {
    ids: Vec<&'static str>,
}

impl Subscriptions {
    /// Registered identifiers, in registration order
    pub fn ids(&self) -> &[&'static str] {
        &self.ids
    }

    /// Release every registered action
    pub fn dispose(self, registry: &mut dyn ActionRegistry) {
        release(registry, &self.ids);
        debug!("Released {} actions", self.ids.len());
    }
}

fn release(registry: &mut dyn ActionRegistry, ids: &[&'static str]) {
    for id in ids.iter().rev() {
        registry.unregister(id);
    }
}

/// Register every action with the host
///
/// Either all actions end up registered or none do.
pub fn activate(registry: &mut dyn ActionRegistry) -> Result<Subscriptions> {
    let mut ids = Vec::with_capacity(Action::ALL.len());

    for action in Action::ALL {
        if let Err(e) = registry.register(action.id()) {
            warn!("Registering '{}' failed, rolling back: {}", action, e);
            release(registry, &ids);
            return Err(e);
        }
        ids.push(action.id());
    }

    debug!("Registered {} actions", ids.len());
    Ok(Subscriptions { ids })
}

/// Routes actions to the dispatcher and reports failures to the user
#[derive(Debug, Clone)]
pub struct Extension {
    dispatcher: CommandDispatcher,
}

impl Extension {
    pub fn new(config: &Config) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(config),
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Run one action to completion
    ///
    /// A failure is shown through the host notifier at the error's level
    /// and also returned.
    pub async fn invoke(&self, action: Action, ctx: &mut HostContext<'_>) -> Result<String> {
        info!("Invoking {}", action);

        let result = match action {
            Action::RunScene => self.dispatcher.run_scene(ctx),
            Action::CheckpointPaste
            | Action::RecordedCheckpointPaste
            | Action::SkippedCheckpointPaste => {
                let args = action.checkpoint_args().unwrap_or_default();
                self.dispatcher.checkpoint_paste(ctx, args).await
            }
            Action::Exit => self.dispatcher.exit(ctx),
        };

        if let Err(e) = &result {
            debug!("{} failed: {}", action, e);
            ctx.notifier.show_message(e.level(), &e.user_message());
        }
        result
    }
}

/// In-process action registry
#[derive(Debug, Default)]
pub struct LocalActionRegistry {
    registered: BTreeSet<String>,
}

impl LocalActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.registered.contains(id)
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Resolve an identifier (or suffix) to a registered action
    pub fn resolve(&self, id: &str) -> Result<Action> {
        let action = Action::from_id(id)?;
        if self.is_registered(action.id()) {
            Ok(action)
        } else {
            Err(Error::UnknownAction { id: id.to_string() })
        }
    }
}

impl ActionRegistry for LocalActionRegistry {
    fn register(&mut self, id: &str) -> Result<()> {
        if !self.registered.insert(id.to_string()) {
            return Err(Error::ActionAlreadyRegistered { id: id.to_string() });
        }
        Ok(())
    }

    fn unregister(&mut self, id: &str) {
        self.registered.remove(id);
    }
}
