//! Error types for deck and dealing operations.

use thiserror::Error;

/// Errors raised by the dealing engine and deck.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum GameError {
    /// Drawing from an exhausted deck. Indicates a deck-sizing defect;
    /// the affected table is skipped for the tick, never corrupted.
    #[error("Cannot draw from an empty deck")]
    EmptyDeck,

    /// Observed a community-card count outside {0, 3, 4, 5}. A
    /// programming defect, surfaced loudly rather than coerced.
    #[error("Invalid community card count: {0}")]
    InvariantViolation(usize),
}

/// Failed to parse two-character card notation (e.g. `"Ah"`).
#[derive(Debug, Error, Eq, PartialEq)]
#[error("Invalid card notation: {0:?}")]
pub struct ParseCardError(pub String);
