//! # Live Poker
//!
//! A simulated live poker tables library.
//!
//! Tables progress through the dealing stages of a Texas Hold'em hand
//! (pre-flop, flop, turn, river) one stage per scheduler tick, drawing from
//! a per-table shuffled deck. When a hand completes, the table resets with
//! a fresh deck and fresh hole cards while keeping its identity.
//!
//! ## Core Modules
//!
//! - [`game`]: Cards, decks, tables, and the dealing state machine
//! - [`table`]: The table registry and the tick scheduler
//!
//! ## Example
//!
//! ```
//! use live_poker::TableRegistry;
//!
//! // Create an empty registry; tables are seeded or created through it.
//! let registry = TableRegistry::new();
//! ```

/// Cards, decks, tables, and the dealing state machine.
pub mod game;
pub use game::{
    constants,
    dealing::{self, Stage},
    entities::{Card, Deck, HoleCards, Rank, Suit, Table, TableId},
    errors::GameError,
};

/// Table registry and tick scheduler.
pub mod table;
pub use table::{
    registry::{CreateTableParams, RegistryError, TableRegistry, TableSummary},
    scheduler::Scheduler,
};
