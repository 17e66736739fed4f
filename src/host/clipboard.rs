//! System clipboard via arboard

use super::Clipboard;
use crate::error::{Error, Result};

/// Clipboard backed by the platform clipboard
///
/// arboard handles are not shareable across threads, so each write opens a
/// fresh handle on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        let text = text.to_string();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(|e| {
                Error::ClipboardWriteFailed {
                    reason: e.to_string(),
                }
            })?;
            clipboard
                .set_text(text)
                .map_err(|e| Error::ClipboardWriteFailed {
                    reason: e.to_string(),
                })
        })
        .await
        .map_err(|e| Error::ClipboardWriteFailed {
            reason: e.to_string(),
        })?
    }
}
