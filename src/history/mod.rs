//! Undo history.
//!
//! ## Key Types
//!
//! - `MoveRecord`: Immutable `{card, from, to}` record of one committed move
//! - `UndoLog`: Bounded FIFO of records, newest popped first
//! - `UndoLogError`: Why a deserialized log was rejected

pub mod undo;

pub use undo::{MoveRecord, UndoLog, UndoLogError};
