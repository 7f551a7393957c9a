//! Cards: the entity, deck generation, and the arena that stores them.
//!
//! ## Key Types
//!
//! - `Card`: Identity, label, color, current stack, interactable flag
//! - `Color`: RGBA display color
//! - `CardArena`: Board-owned card table indexed by `CardId`

pub mod arena;
pub mod card;
pub mod deck;

pub use arena::CardArena;
pub use card::{Card, Color};
pub use deck::{card_label, generate_deck};
