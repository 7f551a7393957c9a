//! Board: the move coordinator and its event surface.
//!
//! ## Key Types
//!
//! - `Board`: Owns cards, stacks, drag sessions and the undo log
//! - `InputEvent`: `BeginDrag` / `Drop` / `EndDrag` from the input layer
//! - `BoardEvent`: Relocations, stack changes, undo availability
//! - `MoveError`: Why an input or undo was rejected
//! - `BoardSnapshot`: Serializable membership view

mod coordinator;
pub mod error;
pub mod event;

pub use coordinator::{Board, BoardSnapshot, DragEnd};
pub use error::{InvariantViolation, MoveError};
pub use event::{BoardEvent, InputEvent};
