//! Rule engine for single-deck Klondike solitaire (draw one, unlimited
//! recycles).
//!
//! The crate owns the authoritative board: it deals, validates and performs
//! moves, cycles the stock, sweeps exposed cards to the foundations and
//! detects victory. Rendering and pointer handling live elsewhere and talk
//! to the core through [`GameState`] and [`Intent`].

pub mod card;
pub mod cli;
pub mod config;
pub mod deck;
pub mod display;
pub mod drag;
pub mod error;
pub mod game;
pub mod intent;
pub mod layout;
pub mod moves;
pub mod pile;
pub mod snapshot;
pub mod stock;
pub mod sweep;
pub mod victory;

pub use card::{Card, Colour, PlayingCard, Rank, Suit};
pub use config::GameOptions;
pub use drag::DragSession;
pub use error::{CliError, LayoutError, ParseError};
pub use game::GameState;
pub use intent::Intent;
pub use layout::Layout;
pub use moves::{can_move, Move};
pub use pile::{Pile, PileId};
pub use snapshot::{GameSnapshot, PileSnapshot};
