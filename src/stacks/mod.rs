//! Stack containers.
//!
//! ## Key Types
//!
//! - `Stack`: Ordered pile of `CardId`s with top-only interactivity

pub mod stack;

pub use stack::Stack;

// Re-export the id from core for convenience
pub use crate::core::entity::StackId;
