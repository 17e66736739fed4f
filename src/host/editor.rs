//! Editor backed by a document snapshot
//!
//! The CLI has no live editor; its callers pass the file, cursor line and
//! selection, and this adapter presents them as the active document.

use std::fs;
use std::path::Path;

use super::Editor;
use crate::error::{Error, Result};
use crate::models::{DocumentSnapshot, Selection};

/// Editor whose active document is a fixed snapshot
#[derive(Debug, Clone, Default)]
pub struct SnapshotEditor {
    document: Option<DocumentSnapshot>,
}

impl SnapshotEditor {
    /// Editor with `document` active
    pub fn new(document: DocumentSnapshot) -> Self {
        Self {
            document: Some(document),
        }
    }

    /// Editor with no active document
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read `path` from disk and place the cursor on `cursor_line`
    pub fn open(path: &Path, cursor_line: usize, selection: Option<Selection>) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::DocumentReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self::from_text(path, text, cursor_line, selection))
    }

    /// Use caller-provided buffer contents, e.g. unsaved editor text
    pub fn from_text(
        path: &Path,
        text: impl Into<String>,
        cursor_line: usize,
        selection: Option<Selection>,
    ) -> Self {
        let mut document = DocumentSnapshot::new(path, text, cursor_line);
        if let Some(selection) = selection {
            document = document.with_selection(selection);
        }
        Self::new(document)
    }
}

impl Editor for SnapshotEditor {
    fn active_document(&self) -> Option<DocumentSnapshot> {
        self.document.clone()
    }
}
