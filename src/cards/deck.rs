//! Deck generation.
//!
//! Cards are labelled `Card_1..Card_N` in generation order and colored
//! along a hue ramp so neighbours are easy to tell apart.

use super::card::{Card, Color};
use crate::core::entity::CardId;

/// Saturation of generated card colors.
pub const DECK_SATURATION: f32 = 0.55;

/// Value (brightness) of generated card colors.
pub const DECK_VALUE: f32 = 0.95;

/// Label for the card at generation index `index`.
#[must_use]
pub fn card_label(index: usize) -> String {
    format!("Card_{}", index + 1)
}

/// Generate `total` detached cards with ids `0..total`.
///
/// ```
/// use card_stacks::cards::generate_deck;
///
/// let deck = generate_deck(3);
/// let labels: Vec<_> = deck.iter().map(|c| c.label()).collect();
/// assert_eq!(labels, ["Card_1", "Card_2", "Card_3"]);
/// ```
#[must_use]
pub fn generate_deck(total: usize) -> Vec<Card> {
    (0..total)
        .map(|i| {
            let hue = i as f32 / total as f32;
            let color = Color::from_hsv(hue, DECK_SATURATION, DECK_VALUE);
            Card::new(CardId::new(i as u32), card_label(i), color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_deck() {
        assert!(generate_deck(0).is_empty());
    }

    #[test]
    fn test_ids_and_labels() {
        let deck = generate_deck(12);

        assert_eq!(deck.len(), 12);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.id(), CardId(i as u32));
            assert_eq!(card.label(), format!("Card_{}", i + 1));
            assert!(card.is_detached());
        }
    }

    #[test]
    fn test_colors_are_distinct() {
        let deck = generate_deck(6);
        for pair in deck.windows(2) {
            assert_ne!(pair[0].color(), pair[1].color());
        }
        // First card sits at hue 0
        assert_eq!(deck[0].color(), Color::from_hsv(0.0, DECK_SATURATION, DECK_VALUE));
    }
}
