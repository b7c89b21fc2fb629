//! Recoverable errors.
//!
//! Only construction and lookup can fail at runtime. Broken engine
//! invariants (bad player index, resolving an empty stack) panic instead.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Card already registered: {0}")]
    DuplicateCard(String),

    #[error("Invalid mana cost: {0:?}")]
    InvalidManaCost(String),

    #[error("Invalid player count {0}: expected 2 to 8 players")]
    InvalidPlayerCount(usize),

    #[error("Configured for {expected} players but {actual} seats were given")]
    SeatCountMismatch { expected: usize, actual: usize },

    #[error("Starting player {player} is not one of the {player_count} seats")]
    InvalidStartingPlayer { player: usize, player_count: usize },

    #[error("Deck list for {0} is empty")]
    EmptyDeck(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
