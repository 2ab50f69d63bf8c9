//! The dealing state machine.
//!
//! A table's stage is encoded entirely in its community-card count:
//! 0 (pre-flop), 3 (flop), 4 (turn), or 5 (river). One [`advance`] call
//! moves a table exactly one stage; a table at the river performs a full
//! reset into a fresh hand with a fresh deck.

use rand::Rng;
use std::fmt;

use super::{
    constants::{BOARD_SIZE, FLOP_SIZE},
    entities::{Deck, Table, TableId},
    errors::GameError,
};

/// Dealing stages of a hand, derived solely from the community-card count.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    PreFlop,
    Flop,
    Turn,
    River,
}

impl Stage {
    /// Classify a table by its community-card count. Any count outside
    /// {0, 3, 4, 5} is a defect and is surfaced as an error.
    pub fn of(table: &Table) -> Result<Self, GameError> {
        match table.community_cards.len() {
            0 => Ok(Self::PreFlop),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::River),
            n => Err(GameError::InvariantViolation(n)),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::PreFlop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        };
        write!(f, "{repr}")
    }
}

/// Deal a fresh hand: a new shuffled deck, two hole cards for each of
/// `capacity` seats, and a board that half the time starts empty and
/// otherwise starts with 3 to 5 community cards already dealt.
///
/// Used both for seeding simulated tables and for the full reset after a
/// river. At most 2 x capacity + 5 cards are drawn, so the deck cannot
/// run out for any capacity this library produces.
pub fn deal_hand(
    id: TableId,
    name: String,
    capacity: usize,
    simulated: bool,
    rng: &mut impl Rng,
) -> Result<(Table, Deck), GameError> {
    let mut deck = Deck::shuffled(rng);

    let mut hole_cards = Vec::with_capacity(capacity);
    for _ in 0..capacity {
        hole_cards.push(Some([deck.draw()?, deck.draw()?]));
    }

    let board_len = if rng.random_bool(0.5) {
        0
    } else {
        rng.random_range(FLOP_SIZE..=BOARD_SIZE)
    };
    let mut community_cards = Vec::with_capacity(board_len);
    for _ in 0..board_len {
        community_cards.push(deck.draw()?);
    }

    let table = Table {
        id,
        name,
        capacity,
        hole_cards,
        community_cards,
        simulated,
    };
    Ok((table, deck))
}

/// Advance a table exactly one dealing stage.
///
/// - Pre-flop: deal the 3 flop cards.
/// - Flop / turn: deal one more community card.
/// - River: full reset via [`deal_hand`] — identity, name, and capacity
///   are preserved, every card-bearing field and the deck are replaced.
///
/// Returns the replacement deck on a full reset so the caller can store
/// it alongside the table. All draws complete before the table is
/// mutated, so a failed draw leaves the table's card state untouched.
pub fn advance(
    table: &mut Table,
    deck: &mut Deck,
    rng: &mut impl Rng,
) -> Result<Option<Deck>, GameError> {
    match Stage::of(table)? {
        Stage::PreFlop => {
            let flop = [deck.draw()?, deck.draw()?, deck.draw()?];
            table.community_cards.extend(flop);
            Ok(None)
        }
        Stage::Flop | Stage::Turn => {
            let card = deck.draw()?;
            table.community_cards.push(card);
            Ok(None)
        }
        Stage::River => {
            let (next, fresh_deck) = deal_hand(
                table.id,
                table.name.clone(),
                table.capacity,
                table.simulated,
                rng,
            )?;
            *table = next;
            Ok(Some(fresh_deck))
        }
    }
}
