//! Identifiers for board objects.
//!
//! Cards and stacks are referenced everywhere by small copyable ids.
//! The `Board` owns the tables these ids index into, so nothing in the
//! crate holds a reference to another component.
//!
//! ## ID Layout
//!
//! - `CardId`: `0..card_count`, assigned in deal (generation) order
//! - `StackId`: `0..stack_count`, assigned at board creation
//!
//! ## Usage
//!
//! ```
//! use card_stacks::core::{CardId, StackId};
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//!
//! // Raw indices from the UI may be negative or huge
//! assert_eq!(StackId::from_index(1), Some(StackId::new(1)));
//! assert_eq!(StackId::from_index(-1), None);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the card arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Stack identifier. Stable for the lifetime of a board, 0-indexed.
///
/// The id alone says nothing about whether the stack exists; the board
/// checks it against its configured stack count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StackId(pub u16);

impl StackId {
    /// Create a new stack ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into the board's stack table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Convert an untrusted container index (e.g. from pointer hit-testing).
    ///
    /// Returns `None` for negative values and values that do not fit.
    /// Range against the actual stack count is checked by the board.
    ///
    /// ```
    /// use card_stacks::core::StackId;
    ///
    /// assert_eq!(StackId::from_index(0), Some(StackId::new(0)));
    /// assert_eq!(StackId::from_index(-3), None);
    /// assert_eq!(StackId::from_index(1 << 20), None);
    /// ```
    #[must_use]
    pub fn from_index(index: i64) -> Option<Self> {
        u16::try_from(index).ok().map(Self)
    }
}

impl From<u16> for StackId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Stack({})", self.0)
    }
}
