//! Document Snapshot
//!
//! Immutable view of the active file at the moment an action is invoked:
//! its path, full text and the selection (whose active end is the cursor).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Zero-based position in a document
///
/// `character` counts Unicode scalar values within the line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub character: usize,
}

impl Position {
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

impl FromStr for Position {
    type Err = String;

    /// Parse `LINE:CHARACTER`, both zero-based
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (line, character) = s
            .split_once(':')
            .ok_or_else(|| format!("expected LINE:CHARACTER, got '{}'", s))?;
        let line = line
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid line '{}': {}", line, e))?;
        let character = character
            .trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid character '{}': {}", character, e))?;
        Ok(Self::new(line, character))
    }
}

/// Editor selection; `active` is where the cursor sits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Position,
    pub active: Position,
}

impl Selection {
    pub fn new(anchor: Position, active: Position) -> Self {
        Self { anchor, active }
    }

    /// Empty selection with the cursor at the start of `line`
    pub fn caret(line: usize) -> Self {
        let position = Position::new(line, 0);
        Self::new(position, position)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.active
    }

    /// Earlier of the two ends
    pub fn start(&self) -> Position {
        self.anchor.min(self.active)
    }

    /// Later of the two ends
    pub fn end(&self) -> Position {
        self.anchor.max(self.active)
    }
}

impl FromStr for Selection {
    type Err = String;

    /// Parse `ANCHOR-ACTIVE`, e.g. `2:0-4:12`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (anchor, active) = s
            .split_once('-')
            .ok_or_else(|| format!("expected LINE:CHAR-LINE:CHAR, got '{}'", s))?;
        Ok(Self::new(anchor.parse()?, active.parse()?))
    }
}

/// Text of the active file plus the cursor state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    path: PathBuf,
    text: String,
    selection: Selection,
}

impl DocumentSnapshot {
    /// Create a snapshot with an empty selection on `cursor_line`
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>, cursor_line: usize) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            selection: Selection::caret(cursor_line),
        }
    }

    /// Replace the selection
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Zero-based line of the cursor
    pub fn cursor_line(&self) -> usize {
        self.selection.active.line
    }

    /// Number of lines, counting a trailing empty line after a final newline
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Text of one line without its terminator; clamps to the last line
    pub fn line_at(&self, index: usize) -> &str {
        let last = self.line_count() - 1;
        let line = self
            .text
            .split('\n')
            .nth(index.min(last))
            .unwrap_or_default();
        line.strip_suffix('\r').unwrap_or(line)
    }

    /// The selected text, or the whole cursor line when nothing is selected
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return self.line_at(self.cursor_line()).to_string();
        }

        let start = self.offset_of(self.selection.start());
        let end = self.offset_of(self.selection.end());
        self.text[start..end].to_string()
    }

    /// Byte offset of a position, clamped to the document
    fn offset_of(&self, position: Position) -> usize {
        let mut offset = 0;
        let mut lines = self.text.split('\n').enumerate().peekable();

        while let Some((index, line)) = lines.next() {
            let content = line.strip_suffix('\r').unwrap_or(line);
            let is_last = lines.peek().is_none();

            if index == position.line {
                let within = content
                    .char_indices()
                    .nth(position.character)
                    .map(|(i, _)| i)
                    .unwrap_or(content.len());
                return offset + within;
            }
            if is_last {
                return offset + content.len();
            }

            offset += line.len() + 1;
        }

        offset
    }
}
