use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::{
    constants::DECK_SIZE,
    errors::{GameError, ParseCardError},
};

/// Card suits, in the deck's fill order.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];

    pub fn as_char(self) -> char {
        match self {
            Self::Hearts => 'h',
            Self::Spades => 's',
            Self::Diamonds => 'd',
            Self::Clubs => 'c',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'h' => Some(Self::Hearts),
            's' => Some(Self::Spades),
            'd' => Some(Self::Diamonds),
            'c' => Some(Self::Clubs),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Card ranks from deuce to ace.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    pub fn as_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A playing card, displayed and serialized in two-character notation:
/// rank char (`2`-`9`, `T`, `J`, `Q`, `K`, `A`) followed by suit char
/// (`h`, `s`, `d`, `c`), e.g. `"Ah"` or `"Tc"`. This notation is the wire
/// contract for all card fields.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let notation = (chars.next(), chars.next(), chars.next());
        if let (Some(r), Some(u), None) = notation
            && let Some(rank) = Rank::from_char(r)
            && let Some(suit) = Suit::from_char(u)
        {
            return Ok(Self { rank, suit });
        }
        Err(ParseCardError(s.to_string()))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An ordered deck in a uniformly random permutation, consumed from the
/// front. The backing array never changes after the shuffle; `deck_idx`
/// marks the boundary between dealt and remaining cards, so
/// `remaining + dealt == 52` at every point.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    deck_idx: usize,
}

impl Deck {
    /// Build a freshly shuffled deck from the given RNG. Every call is an
    /// independent permutation of the full 52-card set.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut cards = Self::canonical();
        cards.shuffle(rng);
        Self {
            cards,
            deck_idx: 0,
        }
    }

    /// Build a freshly shuffled deck from the thread RNG.
    pub fn new() -> Self {
        Self::shuffled(&mut rand::rng())
    }

    /// The 52 distinct cards in fill order (all hearts, all spades, ...).
    fn canonical() -> [Card; DECK_SIZE] {
        let mut cards = [Card {
            rank: Rank::Two,
            suit: Suit::Hearts,
        }; DECK_SIZE];
        for (i, suit) in Suit::ALL.into_iter().enumerate() {
            for (j, rank) in Rank::ALL.into_iter().enumerate() {
                cards[13 * i + j] = Card { rank, suit };
            }
        }
        cards
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.deck_idx >= DECK_SIZE {
            return Err(GameError::EmptyDeck);
        }
        let card = self.cards[self.deck_idx];
        self.deck_idx += 1;
        Ok(card)
    }

    /// Count of cards not yet drawn.
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.deck_idx
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable table identifier, assigned monotonically and never reused.
pub type TableId = i64;

/// A seat's revealed hand: exactly two cards. A seat with no revealed hand
/// is `None`, never a partial hand.
pub type HoleCards = [Card; 2];

/// A poker table's visible state.
///
/// `id` and `name` are fixed for the table's lifetime. For simulated
/// tables the card fields advance one dealing stage per scheduler tick;
/// user-created tables are never auto-mutated.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: TableId,
    pub name: String,
    pub capacity: usize,
    /// One slot per seat; `None` marks an empty seat.
    pub hole_cards: Vec<Option<HoleCards>>,
    /// Always 0, 3, 4, or 5 cards.
    pub community_cards: Vec<Card>,
    /// Simulated tables are auto-advanced by the scheduler. Not part of
    /// the wire contract.
    #[serde(skip)]
    pub simulated: bool,
}

impl Table {
    /// All cards currently visible on the table, hole cards first.
    pub fn visible_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hole_cards
            .iter()
            .flatten()
            .flat_map(|hand| hand.iter().copied())
            .chain(self.community_cards.iter().copied())
    }
}
