//! Core data models for manim-runner
//!
//! Everything here is transient: a snapshot is taken when an action is
//! triggered and dropped once the action completes.

pub mod document;
pub mod message;

// Re-exports for convenience
pub use document::{DocumentSnapshot, Position, Selection};
pub use message::MessageLevel;
