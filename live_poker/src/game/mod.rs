//! Poker dealing engine - entities and the stage state machine.
//!
//! This module provides the card-level building blocks:
//! - Cards, shuffled decks, and table entities
//! - The dealing state machine (pre-flop → flop → turn → river → reset)
//! - Error types for deck exhaustion and invariant violations

pub mod constants;
pub mod dealing;
pub mod entities;
pub mod errors;
