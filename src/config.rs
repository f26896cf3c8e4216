//! Tunable, non-rule settings carried by a game.

use serde::{Deserialize, Serialize};

/// Face-up offset given to the card most recently turned onto the waste.
pub const DEFAULT_WASTE_FACE_UP_OFFSET: f64 = 30.0;

/// Presentation hints the core writes onto cards while it plays.
///
/// These never influence move legality. They exist so that a renderer can
/// fan the freshly turned waste card without keeping its own state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Offset assigned to a card as it is turned from stock to waste.
    pub waste_face_up_offset: f64,
    /// Offset assigned to face-down cards when they are dealt.
    pub face_down_offset: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions {
            waste_face_up_offset: DEFAULT_WASTE_FACE_UP_OFFSET,
            face_down_offset: 0.0,
        }
    }
}
