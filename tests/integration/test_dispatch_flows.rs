//! Integration Tests for Action Flows
//!
//! These tests drive complete actions through the extension against an
//! in-memory host and check what reaches the terminal and the user.

use manim_runner::host::memory::{MemoryClipboard, MemoryTerminals, RecordingHost};
use manim_runner::host::Terminal;
use manim_runner::models::{DocumentSnapshot, MessageLevel, Position, Selection};
use manim_runner::{Action, Config, Error, Extension};

const SCENE_FILE: &str = "from manimlib import *\n\
class Foo(InteractiveScene):\n\
\x20   def construct(self):\n\
\x20       # Build the square\n\
\x20       square = Square()\n\
\x20       self.play(ShowCreation(square))\n\
\x20       print(1)\n";

fn extension() -> Extension {
    Extension::new(&Config::default())
}

fn host_at(line: usize) -> RecordingHost {
    RecordingHost::with_document(DocumentSnapshot::new("/a/b.py", SCENE_FILE, line))
}

fn host_with_selection(anchor: Position, active: Position) -> RecordingHost {
    let document = DocumentSnapshot::new("/a/b.py", SCENE_FILE, 0)
        .with_selection(Selection::new(anchor, active));
    RecordingHost::with_document(document)
}

#[tokio::test]
async fn test_run_scene_from_cursor() {
    let mut host = host_at(4);

    let command = extension()
        .invoke(Action::RunScene, &mut host.context())
        .await
        .unwrap();

    assert_eq!(command, "manimgl /a/b.py Foo -se 5");
    assert_eq!(host.terminals.sent_lines(), vec!["manimgl /a/b.py Foo -se 5"]);
    assert_eq!(
        host.notifier.messages(),
        vec![(
            MessageLevel::Info,
            "Running command: manimgl /a/b.py Foo -se 5".to_string()
        )]
    );
}

#[tokio::test]
async fn test_run_scene_reuses_active_terminal() {
    let mut host = host_at(2).with_terminals(MemoryTerminals::with_active("bash"));

    extension()
        .invoke(Action::RunScene, &mut host.context())
        .await
        .unwrap();

    assert_eq!(host.terminals.terminals().len(), 1);
    assert_eq!(host.terminals.active().unwrap().name(), "bash");
}

#[tokio::test]
async fn test_run_scene_no_class_reports_error() {
    let mut host = host_at(0);

    let result = extension().invoke(Action::RunScene, &mut host.context()).await;

    assert!(matches!(result, Err(Error::NoClassFound { .. })));
    assert!(host.terminals.terminals().is_empty());
    assert_eq!(
        host.notifier.messages_at(MessageLevel::Error),
        vec!["No class found near the cursor!"]
    );
}

#[tokio::test]
async fn test_no_active_editor_reports_error() {
    for action in [Action::RunScene, Action::CheckpointPaste] {
        let mut host = RecordingHost::new();
        let result = extension().invoke(action, &mut host.context()).await;

        assert!(matches!(result, Err(Error::NoActiveEditor)));
        assert_eq!(
            host.notifier.messages_at(MessageLevel::Error),
            vec!["No active editor!"]
        );
        assert!(host.terminals.terminals().is_empty());
    }
}

#[tokio::test]
async fn test_checkpoint_paste_cursor_line_verbatim() {
    let mut host = host_at(6);

    let command = extension()
        .invoke(Action::CheckpointPaste, &mut host.context())
        .await
        .unwrap();

    assert_eq!(command, "print(1)");
    assert_eq!(host.clipboard.contents(), Some("        print(1)".to_string()));
    assert_eq!(
        host.notifier.messages_at(MessageLevel::Info),
        vec!["Selected text copied to clipboard."]
    );
}

#[tokio::test]
async fn test_checkpoint_paste_comment_line() {
    let mut host = host_at(3);

    let command = extension()
        .invoke(Action::CheckpointPaste, &mut host.context())
        .await
        .unwrap();

    assert_eq!(command, "checkpoint_paste() # Build the square (1 lines)");
}

#[tokio::test]
async fn test_recorded_checkpoint_paste_selection() {
    let mut host = host_with_selection(Position::new(3, 0), Position::new(5, 40));

    let command = extension()
        .invoke(Action::RecordedCheckpointPaste, &mut host.context())
        .await
        .unwrap();

    assert_eq!(
        command,
        "checkpoint_paste(record=True) # Build the square (3 lines)"
    );
    assert_eq!(
        host.clipboard.contents(),
        Some(
            "        # Build the square\n        square = Square()\n        self.play(ShowCreation(square))"
                .to_string()
        )
    );
}

#[tokio::test]
async fn test_skipped_checkpoint_paste_selection() {
    let mut host = host_with_selection(Position::new(4, 0), Position::new(6, 0));

    let command = extension()
        .invoke(Action::SkippedCheckpointPaste, &mut host.context())
        .await
        .unwrap();

    // The selection ends at the start of line 6, which still counts as a line
    assert_eq!(command, "checkpoint_paste(skip=True) # (3 lines)");
}

#[tokio::test]
async fn test_checkpoint_clipboard_failure_warns_and_sends() {
    let mut host = host_at(6).with_clipboard(MemoryClipboard::failing());

    let command = extension()
        .invoke(Action::CheckpointPaste, &mut host.context())
        .await
        .unwrap();

    assert_eq!(command, "print(1)");
    assert_eq!(host.terminals.sent_lines(), vec!["print(1)"]);
    assert_eq!(host.notifier.messages_at(MessageLevel::Warning).len(), 1);
    assert!(host.notifier.messages_at(MessageLevel::Info).is_empty());
}

#[tokio::test]
async fn test_exit_without_terminal_warns() {
    let mut host = host_at(4);

    let result = extension().invoke(Action::Exit, &mut host.context()).await;

    assert!(matches!(result, Err(Error::NoActiveTerminal)));
    assert!(host.terminals.terminals().is_empty());
    assert_eq!(
        host.notifier.messages_at(MessageLevel::Warning),
        vec!["No active terminal found. Please open a terminal first."]
    );
}

#[tokio::test]
async fn test_exit_after_run_scene() {
    let mut host = host_at(4);
    let extension = extension();

    extension
        .invoke(Action::RunScene, &mut host.context())
        .await
        .unwrap();
    extension
        .invoke(Action::Exit, &mut host.context())
        .await
        .unwrap();

    assert_eq!(
        host.terminals.sent_lines(),
        vec!["manimgl /a/b.py Foo -se 5", "exit()"]
    );
    let terminal = host.terminals.active().unwrap();
    assert_eq!(terminal.name(), "Manim Terminal");
    assert_eq!(terminal.shows, vec![false, true]);
}

#[tokio::test]
async fn test_exit_does_not_need_editor() {
    let mut host =
        RecordingHost::new().with_terminals(MemoryTerminals::with_active("Manim Terminal"));

    let command = extension()
        .invoke(Action::Exit, &mut host.context())
        .await
        .unwrap();

    assert_eq!(command, "exit()");
    assert_eq!(host.terminals.sent_lines(), vec!["exit()"]);
}

#[tokio::test]
async fn test_terminal_creation_failure_is_reported() {
    let mut host = host_at(4).with_terminals(MemoryTerminals::new().failing_creation());

    let result = extension().invoke(Action::RunScene, &mut host.context()).await;

    assert!(matches!(result, Err(Error::TerminalCreationFailed { .. })));
    assert_eq!(host.notifier.messages_at(MessageLevel::Error).len(), 1);
}

#[tokio::test]
async fn test_custom_terminal_name() {
    let mut config = Config::default();
    config.terminal.name = "Scenes".to_string();
    let mut host = host_at(4);

    Extension::new(&config)
        .invoke(Action::CheckpointPaste, &mut host.context())
        .await
        .unwrap();

    assert_eq!(host.terminals.active().unwrap().name(), "Scenes");
}
