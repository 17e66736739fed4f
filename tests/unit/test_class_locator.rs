//! Unit tests for class declaration lookup
//!
//! These tests exercise the backward scan through the public API.

use manim_runner::find_class_name;
use manim_runner::locator::find_class_declaration;

const SCENES: &str = r#"from manimlib import *

class TitleCard(InteractiveScene):
    def construct(self):
        title = Text("Hello")
        self.play(Write(title))

    def helper(self):
        pass


class Graphs(Scene):
    def construct(self):
        axes = Axes()
"#;

#[cfg(test)]
mod class_locator_tests {
    use super::*;

    #[test]
    fn test_cursor_inside_first_class() {
        assert_eq!(find_class_name(SCENES, 5), Some("TitleCard".to_string()));
    }

    #[test]
    fn test_cursor_in_second_method_still_finds_class() {
        assert_eq!(find_class_name(SCENES, 8), Some("TitleCard".to_string()));
    }

    #[test]
    fn test_blank_lines_between_classes() {
        assert_eq!(find_class_name(SCENES, 10), Some("TitleCard".to_string()));
        assert_eq!(find_class_name(SCENES, 11), Some("Graphs".to_string()));
    }

    #[test]
    fn test_cursor_above_any_class() {
        assert_eq!(find_class_name(SCENES, 0), None);
        assert_eq!(find_class_name(SCENES, 1), None);
    }

    #[test]
    fn test_declaration_line_reported() {
        let found = find_class_declaration(SCENES, 13).unwrap();
        assert_eq!(found.name, "Graphs");
        assert_eq!(found.line, 11);
    }

    #[test]
    fn test_indented_declaration() {
        let text = "def factory():\n    class Inner(Scene):\n        pass\n";
        assert_eq!(find_class_name(text, 2), Some("Inner".to_string()));
    }

    #[test]
    fn test_content_after_parenthesis_ignored() {
        let text = "class Foo(Scene, metaclass=Meta):  # comment (";
        assert_eq!(find_class_name(text, 0), Some("Foo".to_string()));
    }

    #[test]
    fn test_substring_match_is_unanchored() {
        // Matches anywhere in the line, including inside other words
        let text = "x = 'subclass Widget(Base)'";
        assert_eq!(find_class_name(text, 0), Some("Widget".to_string()));
    }

    #[test]
    fn test_class_without_base_is_ignored() {
        let text = "class Base(Scene):\n    pass\nclass Plain:\n    pass\n";
        assert_eq!(find_class_name(text, 3), Some("Base".to_string()));
    }

    #[test]
    fn test_line_past_end() {
        assert_eq!(find_class_name(SCENES, 10_000), Some("Graphs".to_string()));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "class Windows(Scene):\r\n    pass\r\n";
        assert_eq!(find_class_name(text, 1), Some("Windows".to_string()));
    }

    #[test]
    fn test_non_ascii_identifier_is_skipped() {
        let text = "class Intro(Scene):\nclass Überblick(Scene):\n    pass";
        assert_eq!(find_class_name(text, 2), Some("Intro".to_string()));
    }
}
