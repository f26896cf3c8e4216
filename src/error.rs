//! Error types for the fallible edges of the crate.
//!
//! Game commands themselves never fail: an illegal move is a `false`
//! return, not an error. Errors only arise when text is parsed into
//! cards/piles/intents, when a hand-built layout breaks the 52-card
//! partition, and in the command-line driver.

use thiserror::Error;

use crate::card::Card;
use crate::pile::PileId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid card: {0:?} (expected e.g. AH, 7C, TD, KS)")]
    Card(String),
    #[error("invalid pile: {0:?} (expected S, W, F1..F4 or T1..T7)")]
    Pile(String),
    #[error("invalid intent: {0:?}")]
    Intent(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("card {card} appears in both {first} and {second}")]
    DuplicateCard {
        card: Card,
        first: PileId,
        second: PileId,
    },
    #[error("{count} card(s) missing from the layout, e.g. {example}")]
    MissingCards { count: usize, example: Card },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("could not encode board as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
