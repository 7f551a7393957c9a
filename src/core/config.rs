//! Board configuration.
//!
//! Hosts configure a board once, at construction:
//! - how many stacks there are
//! - how many cards are dealt onto each stack
//! - how many moves the undo log remembers
//! - optionally, a seed to shuffle the deck before dealing
//!
//! Nothing here can change while a board is live.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of stacks.
pub const DEFAULT_STACK_COUNT: usize = 3;

/// Default number of cards dealt onto each stack.
pub const DEFAULT_CARDS_PER_STACK: usize = 4;

/// Default undo history depth.
pub const DEFAULT_MAX_UNDO_ACTIONS: usize = 3;

/// Reasons a `BoardConfig` is rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("stack count must be at least 1")]
    NoStacks,

    #[error("stack count {0} exceeds the maximum of {max}", max = u16::MAX as usize + 1)]
    TooManyStacks(usize),

    #[error("cards per stack must be at least 1")]
    NoCards,

    #[error("total card count {0} exceeds the maximum of {max}", max = u32::MAX)]
    TooManyCards(usize),

    #[error("undo history capacity must be at least 1")]
    NoUndoCapacity,
}

/// Complete board configuration.
///
/// ## Example
///
/// ```
/// use card_stacks::core::BoardConfig;
///
/// let config = BoardConfig::new(5, 2)
///     .with_max_undo_actions(10)
///     .with_shuffle_seed(42);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_cards(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of stacks (>= 1).
    pub stack_count: usize,

    /// Cards dealt onto each stack at setup (>= 1).
    pub cards_per_stack: usize,

    /// Undo history capacity (>= 1).
    pub max_undo_actions: usize,

    /// Shuffle the deck with this seed before dealing. `None` deals in order.
    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            stack_count: DEFAULT_STACK_COUNT,
            cards_per_stack: DEFAULT_CARDS_PER_STACK,
            max_undo_actions: DEFAULT_MAX_UNDO_ACTIONS,
            shuffle_seed: None,
        }
    }
}

impl BoardConfig {
    /// Create a configuration with the default undo depth and no shuffle.
    pub fn new(stack_count: usize, cards_per_stack: usize) -> Self {
        Self {
            stack_count,
            cards_per_stack,
            ..Self::default()
        }
    }

    /// Set the undo history capacity.
    #[must_use]
    pub fn with_max_undo_actions(mut self, max: usize) -> Self {
        self.max_undo_actions = max;
        self
    }

    /// Shuffle the deck with a fixed seed before dealing.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Total number of cards on the board.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.stack_count.saturating_mul(self.cards_per_stack)
    }

    /// Check every bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stack_count == 0 {
            return Err(ConfigError::NoStacks);
        }
        if self.stack_count > u16::MAX as usize + 1 {
            return Err(ConfigError::TooManyStacks(self.stack_count));
        }
        if self.cards_per_stack == 0 {
            return Err(ConfigError::NoCards);
        }
        let total = self.total_cards();
        if total > u32::MAX as usize {
            return Err(ConfigError::TooManyCards(total));
        }
        if self.max_undo_actions == 0 {
            return Err(ConfigError::NoUndoCapacity);
        }
        Ok(())
    }
}
