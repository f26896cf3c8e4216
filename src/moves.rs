//! Move validation and execution.
//!
//! `can_move` is the pure legality check and `GameState::move_card` is the
//! only code path that relocates cards between piles. Everything that moves
//! cards (the sweeper, drag sessions, intents) goes through here.

use core::fmt;

use tracing::{debug, trace};

use crate::card::{is_one_higher_same_suit, is_one_lower_opposite_colour, Card, Rank};
use crate::game::GameState;
use crate::pile::{Pile, PileId};

/// A relocation that was carried out: `count` cards starting at `card`
/// went from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: PileId,
    pub to: PileId,
    pub card: Card,
    pub count: usize,
}

impl Move {
    /// Human-readable form, e.g. `T3: 7C..6H -> T5` or `W: AH -> F1`.
    pub fn describe(&self) -> String {
        if self.count > 1 {
            format!(
                "{}: {} (+{} more) -> {}",
                self.from,
                self.card.short_str(),
                self.count - 1,
                self.to
            )
        } else {
            format!("{}: {} -> {}", self.from, self.card.short_str(), self.to)
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Why a proposed move was refused. Only used for trace logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rejection {
    InvalidPile,
    SamePile,
    NotInSource,
    FaceDown,
    NotOnTop,
    RunToFoundation,
    Rules,
}

/// Legality of moving `card` (and, from a tableau, every card above it)
/// from `from` to `to`. Never mutates anything.
pub fn can_move(game: &GameState, from: PileId, to: PileId, card: Card) -> bool {
    plan_move(game, from, to, card).is_ok()
}

/// Validate a move and return the index in `from` where the run starts.
fn plan_move(game: &GameState, from: PileId, to: PileId, card: Card) -> Result<usize, Rejection> {
    if !from.is_valid() || !to.is_valid() {
        return Err(Rejection::InvalidPile);
    }
    if from == to {
        return Err(Rejection::SamePile);
    }

    let src = game.pile(from);
    let dst = game.pile(to);

    let start = src.position(card).ok_or(Rejection::NotInSource)?;
    if src.cards()[start].face_down {
        return Err(Rejection::FaceDown);
    }
    let is_top = start + 1 == src.len();
    if !is_top && !from.is_tableau() {
        return Err(Rejection::NotOnTop);
    }
    if !is_top && to.is_foundation() {
        return Err(Rejection::RunToFoundation);
    }

    let legal = match (from, to) {
        (PileId::Waste | PileId::Tableau(_), PileId::Foundation(_)) => {
            foundation_accepts(dst, card)
        }
        (PileId::Waste | PileId::Tableau(_) | PileId::Foundation(_), PileId::Tableau(_)) => {
            tableau_accepts(dst, card)
        }
        // Only a lone Ace may hop to an empty foundation.
        (PileId::Foundation(_), PileId::Foundation(_)) => src.len() == 1 && dst.is_empty(),
        _ => false,
    };

    if legal { Ok(start) } else { Err(Rejection::Rules) }
}

/// Empty foundation takes an Ace; otherwise the next rank of the same suit.
fn foundation_accepts(dst: &Pile, card: Card) -> bool {
    match dst.top_card() {
        None => card.rank() == Rank::Ace,
        Some(top) => is_one_higher_same_suit(card, top),
    }
}

/// Empty tableau takes a King; otherwise one rank lower, opposite colour.
fn tableau_accepts(dst: &Pile, card: Card) -> bool {
    match dst.top_card() {
        None => card.rank() == Rank::King,
        Some(top) => is_one_lower_opposite_colour(card, top),
    }
}

impl GameState {
    /// See [`can_move`].
    pub fn can_move(&self, from: PileId, to: PileId, card: Card) -> bool {
        can_move(self, from, to, card)
    }

    /// Move `card` and the run above it from `from` to `to`.
    ///
    /// Returns whether the move is legal. With `check_only` nothing is
    /// changed; otherwise a legal move is carried out and an illegal one is
    /// a no-op.
    pub fn move_card(&mut self, from: PileId, to: PileId, card: Card, check_only: bool) -> bool {
        if check_only {
            return self.can_move(from, to, card);
        }
        self.try_move(from, to, card).is_some()
    }

    /// Carry out a move if it is legal, returning what was moved.
    pub fn try_move(&mut self, from: PileId, to: PileId, card: Card) -> Option<Move> {
        match plan_move(self, from, to, card) {
            Ok(start) => Some(self.relocate(from, to, start)),
            Err(reason) => {
                trace!(%from, %to, %card, ?reason, "move rejected");
                None
            }
        }
    }

    /// Remove the run starting at `start` from `from` and append it to `to`.
    ///
    /// The newly exposed card of `from` (if any) is turned face-up and made
    /// playable; for the waste that is exactly the "top stays playable" rule.
    fn relocate(&mut self, from: PileId, to: PileId, start: usize) -> Move {
        let run = self.pile_mut(from).split_off(start);
        let mv = Move {
            from,
            to,
            card: run[0].card,
            count: run.len(),
        };
        self.pile_mut(to).extend(run);

        if let Some(top) = self.pile_mut(from).top_mut() {
            top.reveal();
        }

        debug!(mv = %mv, "moved");
        debug_assert!(self.check_partition().is_ok());

        self.refresh_victory();
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{PlayingCard, Suit};
    use crate::layout::Layout;

    fn card(s: &str) -> Card {
        s.parse().unwrap()
    }

    fn up(s: &str) -> PlayingCard {
        PlayingCard::face_up(card(s))
    }

    fn down(s: &str) -> PlayingCard {
        PlayingCard::face_down(card(s))
    }

    fn game(layout: Layout) -> GameState {
        GameState::from_layout(layout.fill_stock_with_remaining()).unwrap()
    }

    #[test]
    fn ace_to_empty_foundation_reveals_the_card_beneath() {
        let mut g = game(
            Layout::default()
                .with(PileId::Tableau(2), down("9D"))
                .with(PileId::Tableau(2), up("AS")),
        );

        assert!(g.move_card(PileId::Tableau(2), PileId::Foundation(0), card("AS"), false));
        assert_eq!(g.foundation(0).top_card(), Some(card("AS")));
        assert_eq!(g.foundation(0).len(), 1);

        let exposed = g.tableau(2).top().unwrap();
        assert_eq!(exposed.card, card("9D"));
        assert!(!exposed.face_down && exposed.playable);
    }

    #[test]
    fn non_ace_cannot_start_a_foundation() {
        let g = game(Layout::default().with(PileId::Waste, up("2H")));
        assert!(!g.can_move(PileId::Waste, PileId::Foundation(0), card("2H")));
    }

    #[test]
    fn foundation_builds_up_in_suit_only() {
        let g = game(
            Layout::default()
                .with_foundation(1, [card("AH"), card("2H")])
                .with(PileId::Waste, up("3H"))
                .with(PileId::Tableau(0), up("3D")),
        );
        assert!(g.can_move(PileId::Waste, PileId::Foundation(1), card("3H")));
        assert!(!g.can_move(PileId::Tableau(0), PileId::Foundation(1), card("3D")));
    }

    #[test]
    fn same_colour_stack_is_illegal_and_changes_nothing() {
        let mut g = game(
            Layout::default()
                .with(PileId::Tableau(0), up("6H"))
                .with(PileId::Tableau(1), up("5H")),
        );
        let before = g.clone();
        assert!(!g.move_card(PileId::Tableau(1), PileId::Tableau(0), card("5H"), false));
        assert_eq!(g, before);
    }

    #[test]
    fn opposite_colour_one_lower_is_legal() {
        let mut g = game(
            Layout::default()
                .with(PileId::Tableau(0), up("6H"))
                .with(PileId::Tableau(1), up("5S")),
        );
        assert!(g.move_card(PileId::Tableau(1), PileId::Tableau(0), card("5S"), false));
        assert_eq!(g.tableau(0).len(), 2);
        assert!(g.tableau(1).is_empty());
    }

    #[test]
    fn only_kings_go_to_empty_tableaus() {
        let g = game(
            Layout::default()
                .with(PileId::Waste, up("QS"))
                .with(PileId::Tableau(1), up("KD")),
        );
        assert!(!g.can_move(PileId::Waste, PileId::Tableau(0), card("QS")));
        assert!(g.can_move(PileId::Tableau(1), PileId::Tableau(0), card("KD")));
    }

    #[test]
    fn tableau_run_moves_as_a_unit() {
        let mut g = game(
            Layout::default()
                .with(PileId::Tableau(0), down("2C"))
                .with(PileId::Tableau(0), up("9S"))
                .with(PileId::Tableau(0), up("8H"))
                .with(PileId::Tableau(0), up("7C"))
                .with(PileId::Tableau(4), up("TD")),
        );

        let mv = g.try_move(PileId::Tableau(0), PileId::Tableau(4), card("9S")).unwrap();
        assert_eq!(mv.count, 3);

        let moved: Vec<Card> = g.tableau(4).iter().map(|pc| pc.card).collect();
        assert_eq!(moved, vec![card("TD"), card("9S"), card("8H"), card("7C")]);

        let exposed = g.tableau(0).top().unwrap();
        assert_eq!(exposed.card, card("2C"));
        assert!(!exposed.face_down && exposed.playable);
    }

    #[test]
    fn buried_cards_only_move_out_of_tableaus() {
        let g = game(
            Layout::default()
                .with(PileId::Waste, up("8S"))
                .with(PileId::Waste, up("2D"))
                .with(PileId::Tableau(0), up("9H")),
        );
        assert!(!g.can_move(PileId::Waste, PileId::Tableau(0), card("8S")));
    }

    #[test]
    fn runs_never_go_to_foundations() {
        let g = game(
            Layout::default()
                .with(PileId::Tableau(0), up("AC"))
                .with(PileId::Tableau(0), up("KH")),
        );
        assert!(!g.can_move(PileId::Tableau(0), PileId::Foundation(0), card("AC")));
    }

    #[test]
    fn face_down_cards_never_move() {
        let g = game(
            Layout::default()
                .with(PileId::Tableau(0), down("KS"))
                .with(PileId::Tableau(0), up("QH")),
        );
        assert!(!g.can_move(PileId::Tableau(0), PileId::Tableau(1), card("KS")));
    }

    #[test]
    fn stock_and_waste_are_never_destinations() {
        let g = game(
            Layout::default()
                .with(PileId::Waste, up("KH"))
                .with(PileId::Tableau(0), up("KS")),
        );
        let stock_top = g.stock().top_card().unwrap();
        assert!(!g.can_move(PileId::Stock, PileId::Tableau(1), stock_top));
        assert!(!g.can_move(PileId::Tableau(0), PileId::Stock, card("KS")));
        assert!(!g.can_move(PileId::Tableau(0), PileId::Waste, card("KS")));
        assert!(!g.can_move(PileId::Waste, PileId::Waste, card("KH")));
    }

    #[test]
    fn lone_ace_may_hop_between_foundations() {
        let g = game(
            Layout::default()
                .with_foundation(0, [card("AC")])
                .with_foundation(1, [card("AD"), card("2D")])
                .with_foundation(2, [card("AS")]),
        );
        assert!(g.can_move(PileId::Foundation(0), PileId::Foundation(3), card("AC")));
        assert!(!g.can_move(PileId::Foundation(0), PileId::Foundation(2), card("AC")));
        assert!(!g.can_move(PileId::Foundation(1), PileId::Foundation(3), card("2D")));
        assert!(!g.can_move(PileId::Foundation(0), PileId::Foundation(0), card("AC")));
    }

    #[test]
    fn foundation_card_can_return_to_tableau() {
        let mut g = game(
            Layout::default()
                .with_foundation(0, [card("AH"), card("2H"), card("3H")])
                .with(PileId::Tableau(0), up("4S")),
        );
        assert!(g.move_card(PileId::Foundation(0), PileId::Tableau(0), card("3H"), false));
        assert_eq!(g.foundation(0).top_card(), Some(card("2H")));
        assert!(g.foundation(0).top().unwrap().playable);
    }

    #[test]
    fn waste_top_stays_playable_after_moving_from_waste() {
        let mut g = game(
            Layout::default()
                .with(PileId::Waste, PlayingCard { playable: false, ..up("7D") })
                .with(PileId::Waste, up("AH")),
        );
        assert!(g.move_card(PileId::Waste, PileId::Foundation(2), card("AH"), false));
        assert!(g.waste().top().unwrap().playable);
    }

    #[test]
    fn check_only_never_mutates() {
        let mut g = game(Layout::default().with(PileId::Tableau(0), up("AS")));
        let before = g.clone();
        for _ in 0..5 {
            assert!(g.move_card(PileId::Tableau(0), PileId::Foundation(0), card("AS"), true));
        }
        assert_eq!(g, before);
    }

    #[test]
    fn unknown_or_out_of_range_piles_are_rejected() {
        let g = game(Layout::default().with(PileId::Tableau(0), up("AS")));
        assert!(!g.can_move(PileId::Tableau(0), PileId::Foundation(9), card("AS")));
        assert!(!g.can_move(PileId::Tableau(9), PileId::Foundation(0), card("AS")));
        // Card not in the named source pile.
        assert!(!g.can_move(PileId::Tableau(1), PileId::Foundation(0), card("AS")));
    }

    #[test]
    fn describe_mentions_run_length() {
        let mv = Move {
            from: PileId::Tableau(2),
            to: PileId::Tableau(4),
            card: Card::new(Suit::Clubs, Rank::Seven),
            count: 2,
        };
        assert_eq!(mv.describe(), "T3: 7C (+1 more) -> T5");

        let single = Move { count: 1, ..mv };
        assert_eq!(single.to_string(), "T3: 7C -> T5");
    }
}
