//! # card-stacks
//!
//! Move/undo core for a single-pile card stacking board.
//!
//! A board has a fixed set of stacks, cards that can be dragged from the
//! top of one stack onto another, and a bounded undo log of the last N
//! moves. Rendering, input devices and animation live outside the crate:
//! the host feeds drag events in and drains board events out.
//!
//! ## Design Principles
//!
//! 1. **Arena + index**: The `Board` owns every card and stack. Everything
//!    else refers to them by `CardId` / `StackId`.
//!
//! 2. **Explicit messages**: Input arrives as `InputEvent`s or direct method
//!    calls; output is queued as `BoardEvent`s. No subscribers.
//!
//! 3. **Rejections are not faults**: Illegal drags, drops and undos return
//!    `false` (or a `MoveError` from the `try_*` variants) and leave the
//!    board untouched.
//!
//! 4. **Single-threaded**: Every mutation completes inside one call.
//!    Boards hold no locks; run one board per thread if you need several.
//!
//! ## Example
//!
//! ```
//! use card_stacks::{Board, BoardConfig, InputEvent, StackId};
//!
//! let mut board = Board::new(BoardConfig::default()).unwrap();
//! let card = board.card_by_label("Card_4").unwrap();
//!
//! board.handle(InputEvent::BeginDrag(card));
//! // Dropping on the origin stack is rejected...
//! assert!(!board.handle(InputEvent::Drop(card, StackId(0))));
//! // ...and ending the drag puts the card back.
//! board.handle(InputEvent::EndDrag(card));
//!
//! assert!(board.stack(StackId(0)).unwrap().is_top(card));
//! assert!(!board.can_undo());
//! ```
//!
//! ## Modules
//!
//! - `core`: Ids, configuration, seeded RNG
//! - `cards`: Card entity, deck generation, card arena
//! - `stacks`: Stack container
//! - `history`: Move records and the bounded undo log
//! - `board`: Move coordinator, input/output events, errors

pub mod core;
pub mod cards;
pub mod stacks;
pub mod history;
pub mod board;

// Re-export commonly used types
pub use crate::core::{BoardConfig, CardId, ConfigError, GameRng, StackId};

pub use crate::cards::{Card, CardArena, Color};

pub use crate::stacks::Stack;

pub use crate::history::{MoveRecord, UndoLog, UndoLogError};

pub use crate::board::{
    Board, BoardEvent, BoardSnapshot, DragEnd, InputEvent, InvariantViolation, MoveError,
};
