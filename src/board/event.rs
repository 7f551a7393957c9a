//! Board input and output events.
//!
//! The presentation layer feeds `InputEvent`s in and drains `BoardEvent`s
//! out. There are no subscribers; the board queues output events and the
//! host pulls them after each call.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, StackId};

/// Pointer-driven input consumed by the board.
///
/// For one drag the host sends `BeginDrag`, then `Drop` only if the pointer
/// was released over a stack, then always `EndDrag`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// A drag started on a card.
    BeginDrag(CardId),

    /// A dragged card was released over a stack.
    Drop(CardId, StackId),

    /// The drag ended, whether or not a drop happened.
    EndDrag(CardId),
}

impl InputEvent {
    /// The card this event concerns.
    #[must_use]
    pub fn card(&self) -> CardId {
        match *self {
            InputEvent::BeginDrag(card) | InputEvent::Drop(card, _) | InputEvent::EndDrag(card) => {
                card
            }
        }
    }

    /// Build a drop from an untrusted container index.
    ///
    /// Negative or oversized indices yield `None`; the host should treat
    /// that like a release outside any stack.
    ///
    /// ```
    /// use card_stacks::board::InputEvent;
    /// use card_stacks::core::{CardId, StackId};
    ///
    /// assert_eq!(
    ///     InputEvent::drop_at(CardId(3), 1),
    ///     Some(InputEvent::Drop(CardId(3), StackId(1)))
    /// );
    /// assert_eq!(InputEvent::drop_at(CardId(3), -1), None);
    /// ```
    #[must_use]
    pub fn drop_at(card: CardId, index: i64) -> Option<Self> {
        StackId::from_index(index).map(|stack| InputEvent::Drop(card, stack))
    }
}

/// Output produced by the board for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A card was placed on `to`. `from` is the stack it last rested in;
    /// it equals `to` when a failed drag snaps the card back.
    CardRelocated {
        card: CardId,
        from: StackId,
        to: StackId,
    },

    /// A stack's membership changed and its cards need laying out again.
    StackChanged(StackId),

    /// The undo log went from empty to non-empty or back.
    UndoAvailabilityChanged(bool),
}

impl BoardEvent {
    /// Check if this is a relocation event.
    #[must_use]
    pub fn is_relocation(&self) -> bool {
        matches!(self, BoardEvent::CardRelocated { .. })
    }
}
