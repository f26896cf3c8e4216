//! Piles: ordered stacks of cards tagged with their fixed role.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::card::{Card, PlayingCard};
use crate::error::ParseError;

/// Number of foundation piles.
pub const NUM_FOUNDATIONS: usize = 4;
/// Number of tableau piles.
pub const NUM_TABLEAUS: usize = 7;
/// Total number of piles on the board.
pub const NUM_PILES: usize = 2 + NUM_FOUNDATIONS + NUM_TABLEAUS;

/// Role of a pile, which doubles as its address on the board.
///
/// Foundation and tableau indices are 0-based internally and printed
/// 1-based (`F1`, `T7`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(u8),
    Tableau(u8),
}

impl PileId {
    /// All 13 piles: stock, waste, foundations, tableaus.
    pub const ALL: [PileId; NUM_PILES] = [
        PileId::Stock,
        PileId::Waste,
        PileId::Foundation(0),
        PileId::Foundation(1),
        PileId::Foundation(2),
        PileId::Foundation(3),
        PileId::Tableau(0),
        PileId::Tableau(1),
        PileId::Tableau(2),
        PileId::Tableau(3),
        PileId::Tableau(4),
        PileId::Tableau(5),
        PileId::Tableau(6),
    ];

    pub const FOUNDATIONS: [PileId; NUM_FOUNDATIONS] = [
        PileId::Foundation(0),
        PileId::Foundation(1),
        PileId::Foundation(2),
        PileId::Foundation(3),
    ];

    pub const TABLEAUS: [PileId; NUM_TABLEAUS] = [
        PileId::Tableau(0),
        PileId::Tableau(1),
        PileId::Tableau(2),
        PileId::Tableau(3),
        PileId::Tableau(4),
        PileId::Tableau(5),
        PileId::Tableau(6),
    ];

    /// Whether the index carried by a foundation/tableau id is in range.
    pub fn is_valid(self) -> bool {
        match self {
            PileId::Stock | PileId::Waste => true,
            PileId::Foundation(i) => (i as usize) < NUM_FOUNDATIONS,
            PileId::Tableau(i) => (i as usize) < NUM_TABLEAUS,
        }
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => f.write_str("S"),
            PileId::Waste => f.write_str("W"),
            PileId::Foundation(i) => write!(f, "F{}", i + 1),
            PileId::Tableau(i) => write!(f, "T{}", i + 1),
        }
    }
}

impl FromStr for PileId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bad = || ParseError::Pile(s.to_string());

        let id = match upper.as_str() {
            "S" | "STOCK" => PileId::Stock,
            "W" | "WASTE" => PileId::Waste,
            _ => {
                let mut chars = upper.chars();
                let kind = chars.next().ok_or_else(bad)?;
                let n: u8 = chars.as_str().parse().map_err(|_| bad())?;
                let idx = n.checked_sub(1).ok_or_else(bad)?;
                match kind {
                    'F' => PileId::Foundation(idx),
                    'T' => PileId::Tableau(idx),
                    _ => return Err(bad()),
                }
            }
        };

        if id.is_valid() { Ok(id) } else { Err(bad()) }
    }
}

/// An ordered stack of cards. Index 0 is the bottom, the last card is the
/// top (the exposed face).
#[derive(Clone, Debug, PartialEq)]
pub struct Pile {
    id: PileId,
    cards: Vec<PlayingCard>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Pile {
            id,
            cards: Vec::new(),
        }
    }

    pub(crate) fn with_cards(id: PileId, cards: Vec<PlayingCard>) -> Self {
        Pile { id, cards }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    pub fn cards(&self) -> &[PlayingCard] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayingCard> {
        self.cards.iter()
    }

    pub fn top(&self) -> Option<&PlayingCard> {
        self.cards.last()
    }

    pub fn top_card(&self) -> Option<Card> {
        self.cards.last().map(|pc| pc.card)
    }

    /// Position of `card` counted from the bottom.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|pc| pc.card == card)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.position(card).is_some()
    }

    pub(crate) fn push(&mut self, card: PlayingCard) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<PlayingCard> {
        self.cards.pop()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut PlayingCard> {
        self.cards.last_mut()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayingCard> {
        self.cards.iter_mut()
    }

    /// Remove and return the cards from `start` to the top, order kept.
    pub(crate) fn split_off(&mut self, start: usize) -> Vec<PlayingCard> {
        self.cards.split_off(start)
    }

    pub(crate) fn extend(&mut self, run: Vec<PlayingCard>) {
        self.cards.extend(run);
    }

    pub(crate) fn insert_bottom(&mut self, card: PlayingCard) {
        self.cards.insert(0, card);
    }

    pub(crate) fn take_all(&mut self) -> Vec<PlayingCard> {
        std::mem::take(&mut self.cards)
    }
}
