//! Card arena - the board's table of every card.
//!
//! Cards are stored densely and indexed by `CardId`. Stacks, move records
//! and drag sessions refer to cards by id only.

use rustc_hash::FxHashMap;

use super::card::Card;
use crate::core::entity::CardId;

/// Dense card storage with a label index.
#[derive(Clone, Debug, Default)]
pub struct CardArena {
    cards: Vec<Card>,
    by_label: FxHashMap<String, CardId>,
}

impl CardArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an arena from cards whose ids are `0..cards.len()` in order.
    ///
    /// Panics if an id does not match its position.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut by_label = FxHashMap::default();
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id().index(), i, "Card {:?} stored out of order", card.id());
            by_label.insert(card.label().to_string(), card.id());
        }
        Self { cards, by_label }
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Get a card mutably by ID.
    pub(crate) fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Look a card up by its label.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<CardId> {
        self.by_label.get(label).copied()
    }

    /// Check if a card ID is known.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        id.index() < self.cards.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
