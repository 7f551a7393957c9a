//! Stack container - an ordered pile of cards.
//!
//! Index 0 is the bottom of the pile, the last element is the top. Only
//! the top card is interactable; `add_card` and `remove_card` keep the
//! interactable flags in the arena consistent with that rule.
//!
//! A stack never touches another stack. Moving a card between stacks is
//! the board's job.

use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardArena;
use crate::core::entity::{CardId, StackId};

/// Inline capacity for a stack's card list. Typical boards deal a handful
/// of cards per stack.
const INLINE_CARDS: usize = 8;

/// An ordered pile of cards.
///
/// ## Usage
///
/// ```
/// use card_stacks::cards::{CardArena, generate_deck};
/// use card_stacks::core::{CardId, StackId};
/// use card_stacks::stacks::Stack;
///
/// let mut arena = CardArena::from_cards(generate_deck(2));
/// let mut stack = Stack::new(StackId::new(0));
///
/// stack.add_card(CardId::new(0), &mut arena);
/// stack.add_card(CardId::new(1), &mut arena);
///
/// assert!(stack.is_top(CardId::new(1)));
/// assert!(!arena.get(CardId::new(0)).unwrap().is_interactable());
/// assert!(arena.get(CardId::new(1)).unwrap().is_interactable());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    id: StackId,
    cards: SmallVec<[CardId; INLINE_CARDS]>,
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new(id: StackId) -> Self {
        Self {
            id,
            cards: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> StackId {
        self.id
    }

    /// Append a card as the new top.
    ///
    /// Demotes the previous top, promotes the new one, and points the
    /// card at this stack. The caller must have detached the card from
    /// any other stack first.
    pub fn add_card(&mut self, card: CardId, arena: &mut CardArena) {
        debug_assert!(!self.contains(card), "{} already in {}", card, self.id);

        if let Some(previous) = self.top() {
            if let Some(c) = arena.get_mut(previous) {
                c.set_interactable(false);
            }
        }

        self.cards.push(card);
        if let Some(c) = arena.get_mut(card) {
            c.set_interactable(true);
            c.set_current_stack(Some(self.id));
        }

        trace!("{}: added {} (size {})", self.id, card, self.cards.len());
    }

    /// Remove a card from anywhere in the stack.
    ///
    /// Returns `false` if the card is not here. On success the card is
    /// detached and the new top (if any) becomes interactable.
    pub fn remove_card(&mut self, card: CardId, arena: &mut CardArena) -> bool {
        let Some(pos) = self.position_of(card) else {
            return false;
        };

        self.cards.remove(pos);
        if let Some(c) = arena.get_mut(card) {
            c.set_current_stack(None);
        }
        if let Some(top) = self.top() {
            if let Some(c) = arena.get_mut(top) {
                c.set_interactable(true);
            }
        }

        trace!("{}: removed {} (size {})", self.id, card, self.cards.len());
        true
    }

    /// Check if `card` is the top of this stack.
    #[must_use]
    pub fn is_top(&self, card: CardId) -> bool {
        self.top() == Some(card)
    }

    /// Top card (last in the list).
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Position of a card, 0 = bottom.
    #[must_use]
    pub fn position_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
