//! Card, Suit, Rank and Colour types for a standard 52-card deck.
//!
//! - `Card` is the immutable identity, a compact 1-byte index (0..=51).
//! - `PlayingCard` wraps a `Card` with the mutable presentation state the
//!   board keeps for it (face-down, playable, render offsets).

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseError;

/// Number of suits in a standard deck.
pub const NUM_SUITS: u8 = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: u8 = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: u8 = NUM_SUITS * NUM_RANKS;

/// A playing card identity represented compactly as an index in 0..=51.
///
/// The mapping is:
/// ```text
/// index = suit as u8 * 13 + rank as u8
/// ```
/// where `rank` is 0=Ace, 1=Two, ..., 12=King.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Card(u8);

/// The four suits, red suits first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

/// The thirteen ranks, Ace low.
///
/// Use `number()` to get the 1..=13 value the rules talk about.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
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
    King, // 12
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Black,
}

impl Card {
    /// Create a new card from a suit and rank.
    #[inline]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card(suit as u8 * NUM_RANKS + rank as u8)
    }

    /// Create a card from a raw index, or `None` if `index >= 52`.
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        (index < CARDS_PER_DECK).then_some(Card(index))
    }

    /// Return the raw 0..=51 index of this card.
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / NUM_RANKS) as usize]
    }

    #[inline]
    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % NUM_RANKS) as usize]
    }

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn rank_number(self) -> u8 {
        self.rank().number()
    }

    #[inline]
    pub fn colour(self) -> Colour {
        self.suit().colour()
    }

    /// Short string like "AH", "7C", "TD", "KS".
    pub fn short_str(self) -> String {
        format!("{}{}", self.rank().short_char(), self.suit().short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_str())
    }
}

impl FromStr for Card {
    type Err = ParseError;

    /// Parse the short form produced by `short_str`. `10` is accepted for
    /// ten and letters may be lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bad = || ParseError::Card(s.to_string());

        let suit_ch = upper.chars().last().ok_or_else(bad)?;
        let rank_part = &upper[..upper.len() - suit_ch.len_utf8()];

        let rank = match rank_part {
            "10" => Rank::Ten,
            r if r.chars().count() == 1 => {
                let c = r.chars().next().ok_or_else(bad)?;
                Rank::from_short_char(c).ok_or_else(bad)?
            }
            _ => return Err(bad()),
        };
        let suit = Suit::from_short_char(suit_ch).ok_or_else(bad)?;
        Ok(Card::new(suit, rank))
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.short_str())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Suit; NUM_SUITS as usize] =
        [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[inline]
    pub fn colour(self) -> Colour {
        match self {
            Suit::Hearts | Suit::Diamonds => Colour::Red,
            Suit::Clubs | Suit::Spades => Colour::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[inline]
    pub fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }

    pub fn from_short_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Suit::Hearts),
            'D' => Some(Suit::Diamonds),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS as usize] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Inverse of `number`; `None` outside 1..=13.
    pub fn from_number(n: u8) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Rank::ALL.get(i as usize).copied())
    }

    pub fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }

    pub fn from_short_char(c: char) -> Option<Self> {
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.short_char() == c.to_ascii_uppercase())
    }
}

/// A card as it sits on the board: identity plus presentation state.
///
/// Only the executor and the stock cycler flip `face_down` / `playable`.
/// The offsets are render hints for the presentation layer and carry no
/// rule significance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayingCard {
    pub card: Card,
    pub face_down: bool,
    pub playable: bool,
    pub face_down_offset: f64,
    pub face_up_offset: f64,
}

impl PlayingCard {
    /// A face-down, unplayable card with no offsets.
    pub fn face_down(card: Card) -> Self {
        PlayingCard {
            card,
            face_down: true,
            playable: false,
            face_down_offset: 0.0,
            face_up_offset: 0.0,
        }
    }

    /// A face-up, playable card with no offsets.
    pub fn face_up(card: Card) -> Self {
        PlayingCard {
            face_down: false,
            playable: true,
            ..PlayingCard::face_down(card)
        }
    }

    /// Mark this card as exposed: face-up and playable.
    #[inline]
    pub fn reveal(&mut self) {
        self.face_down = false;
        self.playable = true;
    }
}

/// Helper for tableau rules: can `upper` be placed on `lower`?
///
/// True if `upper` is exactly one rank lower than `lower` and of the
/// opposite colour.
#[inline]
pub fn is_one_lower_opposite_colour(upper: Card, lower: Card) -> bool {
    upper.rank_number() + 1 == lower.rank_number() && upper.colour() != lower.colour()
}

/// Helper for foundation rules: does `upper` continue `lower`'s suit?
#[inline]
pub fn is_one_higher_same_suit(upper: Card, lower: Card) -> bool {
    upper.suit() == lower.suit() && upper.rank_number() == lower.rank_number() + 1
}
