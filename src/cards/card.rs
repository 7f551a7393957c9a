//! Card entity - identity plus display data.
//!
//! A `Card` is passive. Its only mutable fields, the stack it sits in and
//! whether it can be picked up, are written by stack and board operations,
//! never by input handling.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, StackId};

/// RGBA display color, channels in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Opaque color from RGB channels.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque color from hue, saturation and value, all in `0.0..=1.0`.
    ///
    /// ```
    /// use card_stacks::cards::Color;
    ///
    /// let red = Color::from_hsv(0.0, 1.0, 1.0);
    /// assert_eq!(red, Color::rgb(1.0, 0.0, 0.0));
    /// ```
    #[must_use]
    pub fn from_hsv(hue: f32, saturation: f32, value: f32) -> Self {
        let h = hue.rem_euclid(1.0) * 6.0;
        let sector = h.floor();
        let f = h - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - saturation * f);
        let t = value * (1.0 - saturation * (1.0 - f));

        match sector as u8 {
            0 => Self::rgb(value, t, p),
            1 => Self::rgb(q, value, p),
            2 => Self::rgb(p, value, t),
            3 => Self::rgb(p, q, value),
            4 => Self::rgb(t, p, value),
            _ => Self::rgb(value, p, q),
        }
    }
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    label: String,
    color: Color,
    current_stack: Option<StackId>,
    interactable: bool,
}

impl Card {
    /// Create a detached card.
    #[must_use]
    pub fn new(id: CardId, label: impl Into<String>, color: Color) -> Self {
        Self {
            id,
            label: label.into(),
            color,
            current_stack: None,
            interactable: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Stack holding this card, or `None` while it is being dragged.
    #[must_use]
    pub fn current_stack(&self) -> Option<StackId> {
        self.current_stack
    }

    /// Whether the presentation layer should let the player pick it up.
    #[must_use]
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    /// Check if the card is detached from every stack.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.current_stack.is_none()
    }

    pub(crate) fn set_current_stack(&mut self, stack: Option<StackId>) {
        self.current_stack = stack;
    }

    pub(crate) fn set_interactable(&mut self, interactable: bool) {
        self.interactable = interactable;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Color, b: Color) -> bool {
        let eps = 1e-5;
        (a.r - b.r).abs() < eps
            && (a.g - b.g).abs() < eps
            && (a.b - b.b).abs() < eps
            && (a.a - b.a).abs() < eps
    }

    #[test]
    fn test_new_card_is_detached() {
        let card = Card::new(CardId(0), "Card_1", Color::rgb(1.0, 0.0, 0.0));

        assert_eq!(card.id(), CardId(0));
        assert_eq!(card.label(), "Card_1");
        assert!(card.is_detached());
        assert!(!card.is_interactable());
    }

    #[test]
    fn test_setters() {
        let mut card = Card::new(CardId(3), "Card_4", Color::rgb(0.0, 0.0, 0.0));
        card.set_current_stack(Some(StackId(2)));
        card.set_interactable(true);

        assert_eq!(card.current_stack(), Some(StackId(2)));
        assert!(card.is_interactable());
        assert!(!card.is_detached());
    }

    #[test]
    fn test_hsv_primaries() {
        assert!(approx(Color::from_hsv(0.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0)));
        assert!(approx(Color::from_hsv(1.0 / 3.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0)));
        assert!(approx(Color::from_hsv(2.0 / 3.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0)));
        // Hue wraps
        assert!(approx(Color::from_hsv(1.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_hsv_grey() {
        let grey = Color::from_hsv(0.4, 0.0, 0.5);
        assert!(approx(grey, Color::rgb(0.5, 0.5, 0.5)));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId(1), "Card_2", Color::rgb(0.25, 0.5, 0.75));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
