//! Automatic relocation of exposed cards to the foundations.
//!
//! Each pass looks at the waste top and then the top of each tableau, once.
//! A card exposed part-way through a pass waits for the next pass.

use tracing::debug;

use crate::card::Card;
use crate::game::GameState;
use crate::moves::Move;
use crate::pile::PileId;

impl GameState {
    /// Keep moving exposed cards to foundations until a full pass moves
    /// nothing. Returns the moves in the order they were made.
    pub fn sweep_to_foundations(&mut self) -> Vec<Move> {
        let mut moved = Vec::new();
        let mut passes = 0usize;

        loop {
            passes += 1;
            let before = moved.len();

            if let Some(card) = self.waste.top_card() {
                moved.extend(self.send_to_any_foundation(PileId::Waste, card));
            }
            for id in PileId::TABLEAUS {
                if let Some(card) = self.pile(id).top_card() {
                    moved.extend(self.send_to_any_foundation(id, card));
                }
            }

            if moved.len() == before {
                break;
            }
        }

        debug!(moves = moved.len(), passes, "foundation sweep finished");
        moved
    }

    /// Send one card to a foundation if it is the waste top or a tableau
    /// top and some foundation accepts it. Any other card stays put.
    pub fn move_to_foundation(&mut self, card: Card) -> Option<Move> {
        let from = match self.find_pile_containing(card)? {
            PileId::Waste => PileId::Waste,
            id @ PileId::Tableau(_) => id,
            _ => return None,
        };
        if self.pile(from).top_card() != Some(card) {
            return None;
        }
        self.send_to_any_foundation(from, card)
    }

    /// First foundation, in fixed order, that takes the card.
    fn send_to_any_foundation(&mut self, from: PileId, card: Card) -> Option<Move> {
        PileId::FOUNDATIONS
            .into_iter()
            .find(|&to| self.can_move(from, to, card))
            .and_then(|to| self.try_move(from, to, card))
    }
}
