//! Console notifier
//!
//! Messages go to stderr so stdout stays free for terminal output.

use super::Notifier;
use crate::models::MessageLevel;

/// Notifier that prints messages to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for ConsoleNotifier {
    fn show_message(&self, level: MessageLevel, message: &str) {
        debug!(level = %level, "{}", message);
        eprintln!("[{}] {}", level, message);
    }
}
