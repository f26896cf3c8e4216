//! Game-level state: the 13 piles of one Klondike deal.
//!
//! `GameState` is the authoritative board. It is created by the deck
//! factory (`new_game` / `deal`) or from a validated `Layout`, and it is
//! mutated only through the commands implemented across the crate:
//!   - `move_card` (see `moves`), the single relocation path,
//!   - `turn_stock` (see `stock`),
//!   - `sweep_to_foundations` / `move_to_foundation` (see `sweep`).
//!
//! Everything else is a read-only query the presentation layer uses to
//! re-render after each command.

use rand::Rng;
use tracing::info;

use crate::card::{Card, PlayingCard};
use crate::config::GameOptions;
use crate::deck::{self, Deck};
use crate::error::LayoutError;
use crate::layout::{self, Layout};
use crate::pile::{Pile, PileId, NUM_FOUNDATIONS, NUM_TABLEAUS};
use crate::victory;

/// Complete description of one game's board at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub(crate) stock: Pile,
    pub(crate) waste: Pile,
    pub(crate) foundations: [Pile; NUM_FOUNDATIONS],
    pub(crate) tableaus: [Pile; NUM_TABLEAUS],
    pub(crate) options: GameOptions,
    /// Victory as last evaluated by the executor.
    pub(crate) won: bool,
}

impl GameState {
    /// Shuffle a fresh deck with `rng` and deal it.
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new_game_with_options(rng, GameOptions::default())
    }

    pub fn new_game_with_options<R: Rng + ?Sized>(rng: &mut R, options: GameOptions) -> Self {
        let deck = deck::shuffled_deck(rng);
        Self::deal(&deck, options)
    }

    /// Deal a specific deck permutation (front of the deck dealt first).
    pub fn deal(deck: &Deck, options: GameOptions) -> Self {
        let game = Self::from_parts(deck::deal_layout(deck, &options), options);
        info!(
            stock = game.stock.len(),
            first_face_up = %game.tableaus[0].top_card().map(|c| c.short_str()).unwrap_or_default(),
            "dealt new game"
        );
        game
    }

    /// Throw away the current board and deal a new one in place.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new_game_with_options(rng, self.options);
    }

    /// Build a game from an arbitrary position, checking that it holds each
    /// card exactly once.
    pub fn from_layout(layout: Layout) -> Result<Self, LayoutError> {
        Self::from_layout_with_options(layout, GameOptions::default())
    }

    pub fn from_layout_with_options(
        layout: Layout,
        options: GameOptions,
    ) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self::from_parts(layout, options))
    }

    fn from_parts(layout: Layout, options: GameOptions) -> Self {
        let Layout {
            stock,
            waste,
            foundations,
            tableaus,
        } = layout;

        let mut fi = 0u8;
        let foundations = foundations.map(|cards| {
            let pile = Pile::with_cards(PileId::Foundation(fi), cards);
            fi += 1;
            pile
        });
        let mut ti = 0u8;
        let tableaus = tableaus.map(|cards| {
            let pile = Pile::with_cards(PileId::Tableau(ti), cards);
            ti += 1;
            pile
        });

        let won = victory::is_won(&foundations);
        GameState {
            stock: Pile::with_cards(PileId::Stock, stock),
            waste: Pile::with_cards(PileId::Waste, waste),
            foundations,
            tableaus,
            options,
            won,
        }
    }

    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Read access to one pile.
    ///
    /// # Panics
    ///
    /// Panics if a foundation/tableau index is out of range; see
    /// `PileId::is_valid` and `get_pile`.
    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
            PileId::Foundation(i) => &self.foundations[i as usize],
            PileId::Tableau(i) => &self.tableaus[i as usize],
        }
    }

    pub fn get_pile(&self, id: PileId) -> Option<&Pile> {
        id.is_valid().then(|| self.pile(id))
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Tableau(i) => &mut self.tableaus[i as usize],
        }
    }

    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    pub fn foundation(&self, index: usize) -> &Pile {
        &self.foundations[index]
    }

    pub fn foundations(&self) -> &[Pile; NUM_FOUNDATIONS] {
        &self.foundations
    }

    pub fn tableau(&self, index: usize) -> &Pile {
        &self.tableaus[index]
    }

    pub fn tableaus(&self) -> &[Pile; NUM_TABLEAUS] {
        &self.tableaus
    }

    /// All 13 piles in `PileId::ALL` order.
    pub fn piles(&self) -> impl Iterator<Item = &Pile> {
        PileId::ALL.into_iter().map(move |id| self.pile(id))
    }

    /// Which pile currently owns `card`.
    pub fn find_pile_containing(&self, card: Card) -> Option<PileId> {
        self.piles().find(|p| p.contains(card)).map(Pile::id)
    }

    /// The board entry for `card`, wherever it is.
    pub fn playing_card(&self, card: Card) -> Option<&PlayingCard> {
        self.piles()
            .flat_map(|p| p.iter())
            .find(|pc| pc.card == card)
    }

    /// Re-check that the 52 cards are partitioned across the piles.
    pub fn check_partition(&self) -> Result<(), LayoutError> {
        layout::check_partition(self.piles().map(|p| (p.id(), p.cards())))
    }

    /// Copy the board back out as a `Layout`.
    pub fn to_layout(&self) -> Layout {
        Layout {
            stock: self.stock.cards().to_vec(),
            waste: self.waste.cards().to_vec(),
            foundations: self.foundations.clone().map(|p| p.cards().to_vec()),
            tableaus: self.tableaus.clone().map(|p| p.cards().to_vec()),
        }
    }
}
