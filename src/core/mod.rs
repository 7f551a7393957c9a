//! Core types: identifiers, configuration, RNG.

pub mod entity;
pub mod rng;
pub mod config;

pub use entity::{CardId, StackId};
pub use rng::GameRng;
pub use config::{
    BoardConfig, ConfigError, DEFAULT_CARDS_PER_STACK, DEFAULT_MAX_UNDO_ACTIONS,
    DEFAULT_STACK_COUNT,
};
