//! Presentation intents and their text form.
//!
//! Each user gesture maps to exactly one intent:
//!   - deal new game      → `NewGame`
//!   - click on the stock → `TurnStock`
//!   - drag release       → `Move`
//!   - secondary click on the board → `Sweep`
//!   - secondary click on a card    → `AutoMove`

use core::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::card::Card;
use crate::error::ParseError;
use crate::game::GameState;
use crate::pile::PileId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    NewGame,
    TurnStock,
    Move { from: PileId, to: PileId, card: Card },
    Sweep,
    AutoMove { card: Card },
}

impl Intent {
    /// Apply the intent to `game`. Returns whether the board changed.
    pub fn apply<R: Rng + ?Sized>(&self, game: &mut GameState, rng: &mut R) -> bool {
        match *self {
            Intent::NewGame => {
                game.restart(rng);
                true
            }
            Intent::TurnStock => {
                let changed = game.can_turn_stock();
                game.turn_stock();
                changed
            }
            Intent::Move { from, to, card } => game.move_card(from, to, card, false),
            Intent::Sweep => !game.sweep_to_foundations().is_empty(),
            Intent::AutoMove { card } => game.move_to_foundation(card).is_some(),
        }
    }
}

impl FromStr for Intent {
    type Err = ParseError;

    /// Parses `new`, `turn`, `sweep`, `move <from> <to> <card>` and
    /// `auto <card>` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<String> = s.split_whitespace().map(str::to_ascii_lowercase).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();

        match words.as_slice() {
            ["new"] => Ok(Intent::NewGame),
            ["turn"] => Ok(Intent::TurnStock),
            ["sweep"] => Ok(Intent::Sweep),
            ["move", from, to, card] => Ok(Intent::Move {
                from: from.parse()?,
                to: to.parse()?,
                card: card.parse()?,
            }),
            ["auto", card] => Ok(Intent::AutoMove {
                card: card.parse()?,
            }),
            _ => Err(ParseError::Intent(s.to_string())),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::NewGame => f.write_str("new"),
            Intent::TurnStock => f.write_str("turn"),
            Intent::Sweep => f.write_str("sweep"),
            Intent::Move { from, to, card } => write!(f, "move {from} {to} {card}"),
            Intent::AutoMove { card } => write!(f, "auto {card}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameOptions;
    use crate::deck::standard_deck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parses_every_intent() {
        assert_eq!("new".parse::<Intent>(), Ok(Intent::NewGame));
        assert_eq!(" Turn ".parse::<Intent>(), Ok(Intent::TurnStock));
        assert_eq!("sweep".parse::<Intent>(), Ok(Intent::Sweep));
        assert_eq!(
            "move t3 F1 as".parse::<Intent>(),
            Ok(Intent::Move {
                from: PileId::Tableau(2),
                to: PileId::Foundation(0),
                card: "AS".parse().unwrap(),
            })
        );
        assert_eq!(
            "auto 10h".parse::<Intent>(),
            Ok(Intent::AutoMove {
                card: "TH".parse().unwrap()
            })
        );
    }

    #[test]
    fn reports_the_offending_token() {
        assert_eq!("jump".parse::<Intent>(), Err(ParseError::Intent("jump".into())));
        assert_eq!(
            "move t9 f1 as".parse::<Intent>(),
            Err(ParseError::Pile("t9".into()))
        );
        assert_eq!("auto zz".parse::<Intent>(), Err(ParseError::Card("zz".into())));
    }

    #[test]
    fn display_parses_back() {
        let intent = Intent::Move {
            from: PileId::Waste,
            to: PileId::Tableau(6),
            card: "QD".parse().unwrap(),
        };
        assert_eq!(intent.to_string(), "move W T7 QD");
        assert_eq!(intent.to_string().parse::<Intent>(), Ok(intent));
    }

    #[test]
    fn apply_reports_whether_the_board_changed() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GameState::deal(&standard_deck(), GameOptions::default());

        assert!(Intent::TurnStock.apply(&mut game, &mut rng));
        // Unshuffled deal: T1 holds the Ace of Hearts, playable.
        assert!(Intent::AutoMove { card: "AH".parse().unwrap() }.apply(&mut game, &mut rng));
        assert_eq!(game.foundation(0).len(), 1);
        // 2H is buried under 3H in T2, so there is nothing left to sweep.
        assert!(!Intent::Sweep.apply(&mut game, &mut rng));
        assert!(!Intent::Move {
            from: PileId::Tableau(1),
            to: PileId::Foundation(0),
            card: "3H".parse().unwrap(),
        }
        .apply(&mut game, &mut rng));

        assert!(Intent::NewGame.apply(&mut game, &mut rng));
        assert!(game.foundations().iter().all(|f| f.is_empty()));
    }
}
