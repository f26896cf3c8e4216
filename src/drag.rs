//! Drag-and-drop sessions over the board.
//!
//! The pointer controller reports "start drag on card X", then probes
//! targets while the pointer moves, then either drops on a pile or
//! cancels. The board is never touched until a drop is accepted, so a
//! cancelled or refused drag leaves the origin pile exactly as it was.

use tracing::debug;

use crate::card::Card;
use crate::game::GameState;
use crate::pile::PileId;

/// An in-progress drag of `card` and the run above it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragSession {
    origin: PileId,
    card: Card,
    run: Vec<Card>,
}

impl DragSession {
    pub fn origin(&self) -> PileId {
        self.origin
    }

    pub fn card(&self) -> Card {
        self.card
    }

    /// The cards being carried, bottom first (starting with `card`).
    pub fn run(&self) -> &[Card] {
        &self.run
    }

    /// Would dropping on `target` be accepted right now?
    pub fn can_drop(&self, game: &GameState, target: PileId) -> bool {
        game.can_move(self.origin, target, self.card)
    }

    /// Every pile that would currently accept the drop.
    pub fn drop_targets(&self, game: &GameState) -> Vec<PileId> {
        PileId::ALL
            .into_iter()
            .filter(|&target| self.can_drop(game, target))
            .collect()
    }

    /// Release over `target`. Returns whether the cards moved.
    pub fn drop_on(self, game: &mut GameState, target: PileId) -> bool {
        let moved = game.move_card(self.origin, target, self.card, false);
        debug!(card = %self.card, origin = %self.origin, %target, moved, "drag dropped");
        moved
    }

    /// Abandon the drag. Returns the pile the cards never left.
    pub fn cancel(self) -> PileId {
        debug!(card = %self.card, origin = %self.origin, "drag cancelled");
        self.origin
    }
}

impl GameState {
    /// Start dragging `card`. Only playable cards can be picked up.
    pub fn begin_drag(&self, card: Card) -> Option<DragSession> {
        let origin = self.find_pile_containing(card)?;
        let pile = self.pile(origin);
        let start = pile.position(card)?;
        if !pile.cards()[start].playable {
            return None;
        }
        Some(DragSession {
            origin,
            card,
            run: pile.cards()[start..].iter().map(|pc| pc.card).collect(),
        })
    }
}
