//! Victory detection.

use tracing::info;

use crate::card::NUM_RANKS;
use crate::game::GameState;
use crate::pile::{Pile, NUM_FOUNDATIONS};

/// True iff every foundation holds a full suit.
pub fn is_won(foundations: &[Pile]) -> bool {
    foundations.len() == NUM_FOUNDATIONS
        && foundations.iter().all(|f| f.len() == NUM_RANKS as usize)
}

impl GameState {
    /// Recompute victory from the foundations.
    pub fn is_won(&self) -> bool {
        is_won(&self.foundations)
    }

    /// Victory as recorded after the most recent move.
    pub fn game_won(&self) -> bool {
        self.won
    }

    pub(crate) fn refresh_victory(&mut self) {
        let won = self.is_won();
        if won && !self.won {
            info!("all foundations complete, game won");
        }
        self.won = won;
    }
}
