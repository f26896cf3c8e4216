//! Command-line driver for the `klondike` binary.
//!
//! Deals a game (optionally from a seed), applies a scripted list of
//! intents in order and prints the resulting board:
//!
//! ```text
//! klondike --seed 42 turn turn sweep "move W T3 QD"
//! klondike --seed 42 --json turn
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::{GameOptions, DEFAULT_WASTE_FACE_UP_OFFSET};
use crate::display::{render_game, render_playing_edge};
use crate::error::CliError;
use crate::game::GameState;
use crate::intent::Intent;

#[derive(Parser, Debug)]
#[command(name = "klondike")]
#[command(about = "Deal a Klondike game and play scripted intents against it")]
pub struct Cli {
    /// Seed for a reproducible deal; a random deal when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the final board as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Face-up offset given to each card turned onto the waste
    #[arg(long, default_value_t = DEFAULT_WASTE_FACE_UP_OFFSET)]
    pub waste_offset: f64,

    /// Intents to apply in order: new, turn, sweep, "move <from> <to> <card>", "auto <card>"
    pub intents: Vec<String>,
}

impl Cli {
    pub fn options(&self) -> GameOptions {
        GameOptions {
            waste_face_up_offset: self.waste_offset,
            ..GameOptions::default()
        }
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Run the driver and return what it would print.
///
/// All intents are parsed before the deal, so a typo aborts the run
/// without playing anything.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let intents = cli
        .intents
        .iter()
        .map(|s| s.parse::<Intent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut rng = cli.rng();
    let mut game = GameState::new_game_with_options(&mut rng, cli.options());
    info!(seed = ?cli.seed, intents = intents.len(), "starting scripted game");

    for intent in &intents {
        if !intent.apply(&mut game, &mut rng) {
            warn!(%intent, "intent had no effect");
        }
    }

    if cli.json {
        Ok(serde_json::to_string_pretty(&game.snapshot())?)
    } else {
        Ok(format!(
            "{}\nPlaying edge: {}",
            render_game(&game),
            render_playing_edge(&game)
        ))
    }
}
