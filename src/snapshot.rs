//! Owned copies of the board for the presentation layer.
//!
//! A renderer can hold on to the snapshot it last drew, take a new one
//! after each command and redraw only the piles `changed_piles` reports.

use serde::Serialize;

use crate::card::PlayingCard;
use crate::game::GameState;
use crate::pile::PileId;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PileSnapshot {
    pub id: PileId,
    pub cards: Vec<PlayingCard>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub piles: Vec<PileSnapshot>,
    pub won: bool,
}

impl GameSnapshot {
    pub fn pile(&self, id: PileId) -> Option<&PileSnapshot> {
        self.piles.iter().find(|p| p.id == id)
    }

    /// Piles whose contents (cards or card flags) differ between the two
    /// snapshots, in `PileId::ALL` order.
    pub fn changed_piles(&self, other: &GameSnapshot) -> Vec<PileId> {
        PileId::ALL
            .into_iter()
            .filter(|&id| self.pile(id) != other.pile(id))
            .collect()
    }
}

impl GameState {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            piles: self
                .piles()
                .map(|p| PileSnapshot {
                    id: p.id(),
                    cards: p.cards().to_vec(),
                })
                .collect(),
            won: self.game_won(),
        }
    }
}
