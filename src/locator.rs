//! Class declaration lookup
//!
//! Finds the scene a cursor belongs to by scanning backward from the cursor
//! line for the nearest `class Name(` declaration.

use once_cell::sync::Lazy;
use regex::Regex;

// Identifier characters are ASCII only
static CLASS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class ([A-Za-z0-9_]+)\(").expect("class pattern is a valid regex")
});

/// A class declaration found by the backward scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMatch {
    /// Captured class name
    pub name: String,
    /// Zero-based line the declaration sits on
    pub line: usize,
}

/// Name of the nearest class declared at or before `current_line`
pub fn find_class_name(text: &str, current_line: usize) -> Option<String> {
    find_class_declaration(text, current_line).map(|found| found.name)
}

/// Nearest class declaration at or before `current_line`
///
/// The match is an unanchored substring test, so indentation and anything
/// after the opening parenthesis are ignored. Only the leftmost declaration
/// on a line counts. A `current_line` past the end of the document starts the
/// scan from the last line.
pub fn find_class_declaration(text: &str, current_line: usize) -> Option<ClassMatch> {
    let lines: Vec<&str> = text.split('\n').collect();
    let start = current_line.min(lines.len() - 1);

    (0..=start).rev().find_map(|index| {
        CLASS_PATTERN.captures(lines[index]).map(|caps| ClassMatch {
            name: caps[1].to_string(),
            line: index,
        })
    })
}
