//! Rejection reasons.
//!
//! Gameplay rejections are not faults: the `bool` methods on `Board`
//! swallow them after logging. The `try_*` methods expose them for hosts
//! and tests that want the reason.

use thiserror::Error;

use crate::core::entity::{CardId, StackId};

/// Why a drag, drop, end-drag or undo was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{0} does not exist")]
    UnknownCard(CardId),

    #[error("{0} does not exist")]
    UnknownStack(StackId),

    #[error("{0} is not the top of its stack")]
    NotTopCard(CardId),

    #[error("{0} is already being dragged")]
    AlreadyDragging(CardId),

    #[error("{0} is not in any stack")]
    NotInStack(CardId),

    #[error("{0} has no active drag")]
    NoDragSession(CardId),

    #[error("{0} was already dropped")]
    AlreadyPlaced(CardId),

    #[error("cannot drop onto the origin {0}")]
    SameStack(StackId),

    #[error("undo history is empty")]
    NothingToUndo,

    #[error("cannot undo a move of {0} while it is being dragged")]
    CardDragging(CardId),
}

/// A broken board invariant. Seeing one means a bug in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{card} appears in both {first} and {second}")]
    DuplicateCard {
        card: CardId,
        first: StackId,
        second: StackId,
    },

    #[error("{card} is listed in {listed} but records {recorded:?}")]
    MembershipMismatch {
        card: CardId,
        listed: StackId,
        recorded: Option<StackId>,
    },

    #[error("{0} is detached without a drag session")]
    OrphanCard(CardId),

    #[error("{card} is interactable below the top of {stack}")]
    BuriedInteractable { card: CardId, stack: StackId },

    #[error("top card {card} of {stack} is not interactable")]
    TopNotInteractable { card: CardId, stack: StackId },

    #[error("undo log holds {len} records, capacity {capacity}")]
    UndoOverflow { len: usize, capacity: usize },
}
