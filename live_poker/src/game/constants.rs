//! Dealing constants shared across the library.

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Minimum seats a seeded simulated table can have.
pub const MIN_SEATS: usize = 2;

/// Maximum seats a seeded simulated table can have.
///
/// 2 hole cards x 7 seats + 5 community cards = 19 draws, well within a
/// 52-card deck.
pub const MAX_SEATS: usize = 7;

/// Community cards dealt on the flop.
pub const FLOP_SIZE: usize = 3;

/// Community cards on a complete board.
pub const BOARD_SIZE: usize = 5;

/// Default seconds between scheduler ticks.
pub const DEFAULT_TICK_INTERVAL_SECS: u64 = 10;

/// Default number of simulated tables seeded at startup.
pub const DEFAULT_NUM_TABLES: usize = 10;
