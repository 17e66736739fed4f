//! Unit tests for command formatting

use manim_runner::config::SceneConfig;
use manim_runner::dispatch::{RECORD_ARGS, SKIP_ARGS};
use manim_runner::{checkpoint_command, scene_command};
use std::path::Path;

#[cfg(test)]
mod scene_command_tests {
    use super::*;

    #[test]
    fn test_scene_command() {
        let command = scene_command(&SceneConfig::default(), Path::new("/a/b.py"), "Foo", 4);
        assert_eq!(command, "manimgl /a/b.py Foo -se 5");
    }

    #[test]
    fn test_first_line_is_one() {
        let command = scene_command(&SceneConfig::default(), Path::new("scene.py"), "A", 0);
        assert_eq!(command, "manimgl scene.py A -se 1");
    }

    #[test]
    fn test_path_with_spaces_is_not_quoted() {
        let command = scene_command(&SceneConfig::default(), Path::new("/my scenes/a.py"), "A", 9);
        assert_eq!(command, "manimgl /my scenes/a.py A -se 10");
    }
}

#[cfg(test)]
mod checkpoint_command_tests {
    use super::*;

    #[test]
    fn test_single_line_verbatim() {
        assert_eq!(checkpoint_command("print(1)", ""), "print(1)");
    }

    #[test]
    fn test_single_line_is_trimmed() {
        assert_eq!(checkpoint_command("\t  self.wait(2)   ", ""), "self.wait(2)");
    }

    #[test]
    fn test_single_comment_line() {
        assert_eq!(
            checkpoint_command("# hello", ""),
            "checkpoint_paste() # hello (1 lines)"
        );
    }

    #[test]
    fn test_indented_comment_is_trimmed() {
        assert_eq!(
            checkpoint_command("    # fade out  ", ""),
            "checkpoint_paste() # fade out (1 lines)"
        );
    }

    #[test]
    fn test_multi_line_without_comment() {
        assert_eq!(
            checkpoint_command("x = 1\ny = 2\nz = 3", ""),
            "checkpoint_paste() # (3 lines)"
        );
    }

    #[test]
    fn test_multi_line_with_comment() {
        assert_eq!(
            checkpoint_command("# Draw axes\naxes = Axes()\nself.play(ShowCreation(axes))", ""),
            "checkpoint_paste() # Draw axes (3 lines)"
        );
    }

    #[test]
    fn test_trailing_newline_counts_as_line() {
        assert_eq!(
            checkpoint_command("a = 1\n", ""),
            "checkpoint_paste() # (2 lines)"
        );
    }

    #[test]
    fn test_record_variant() {
        assert_eq!(
            checkpoint_command("# hello", RECORD_ARGS),
            "checkpoint_paste(record=True) # hello (1 lines)"
        );
        assert_eq!(
            checkpoint_command("x = 1\ny = 2\nz = 3", RECORD_ARGS),
            "checkpoint_paste(record=True) # (3 lines)"
        );
    }

    #[test]
    fn test_skip_variant() {
        assert_eq!(
            checkpoint_command("a\nb", SKIP_ARGS),
            "checkpoint_paste(skip=True) # (2 lines)"
        );
    }

    #[test]
    fn test_arguments_do_not_affect_verbatim_lines() {
        assert_eq!(checkpoint_command("print(1)", RECORD_ARGS), "print(1)");
    }
}
