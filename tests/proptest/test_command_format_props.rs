//! Property-based tests for checkpoint command formatting

use manim_runner::checkpoint_command;
use manim_runner::dispatch::{RECORD_ARGS, SKIP_ARGS};
use proptest::prelude::*;

fn arg_str() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(""), Just(RECORD_ARGS), Just(SKIP_ARGS)]
}

proptest! {
    #[test]
    fn test_formatter_doesnt_panic(text in "\\PC*", args in arg_str()) {
        let _ = checkpoint_command(&text, args);
    }

    #[test]
    fn test_single_code_line_is_trimmed_verbatim(
        line in "[ \t]{0,4}[a-z_][a-z0-9_().=, ]{0,40}",
        args in arg_str(),
    ) {
        prop_assert_eq!(checkpoint_command(&line, args), line.trim());
    }

    #[test]
    fn test_multi_line_counts_lines(
        lines in prop::collection::vec("[^\n]{0,30}", 2..30),
        args in arg_str(),
    ) {
        let command = checkpoint_command(&lines.join("\n"), args);

        let prefix = format!("checkpoint_paste({}) #", args);
        let suffix = format!("({} lines)", lines.len());
        prop_assert!(command.starts_with(&prefix), "{}", command);
        prop_assert!(command.ends_with(&suffix), "{}", command);
    }

    #[test]
    fn test_leading_comment_becomes_label(
        comment in "#[a-zA-Z0-9 ]{0,30}",
        body in prop::collection::vec("[a-z0-9 =()]{0,20}", 0..10),
        args in arg_str(),
    ) {
        let mut lines = vec![comment.clone()];
        lines.extend(body);

        let command = checkpoint_command(&lines.join("\n"), args);
        prop_assert_eq!(
            command,
            format!("checkpoint_paste({}) {} ({} lines)", args, comment.trim(), lines.len())
        );
    }
}
