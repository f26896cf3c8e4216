//! Hand-built positions and the 52-card partition check.
//!
//! A `Layout` is a plain description of every pile's contents. The deck
//! factory produces one for the opening deal; tests and debugging tools
//! build arbitrary ones and hand them to `GameState::from_layout`, which
//! refuses anything that is not an exact partition of the deck.

use crate::card::{Card, PlayingCard, CARDS_PER_DECK};
use crate::error::LayoutError;
use crate::pile::{PileId, NUM_FOUNDATIONS, NUM_TABLEAUS};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub stock: Vec<PlayingCard>,
    pub waste: Vec<PlayingCard>,
    pub foundations: [Vec<PlayingCard>; NUM_FOUNDATIONS],
    pub tableaus: [Vec<PlayingCard>; NUM_TABLEAUS],
}

impl Layout {
    /// Mutable access to the contents of one pile.
    ///
    /// # Panics
    ///
    /// Panics if a foundation/tableau index is out of range.
    pub fn pile_mut(&mut self, id: PileId) -> &mut Vec<PlayingCard> {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Foundation(i) => &mut self.foundations[i as usize],
            PileId::Tableau(i) => &mut self.tableaus[i as usize],
        }
    }

    /// Builder-style push onto the top of a pile.
    pub fn with(mut self, id: PileId, card: PlayingCard) -> Self {
        self.pile_mut(id).push(card);
        self
    }

    /// Push a whole foundation of `cards` (bottom first), face-up.
    pub fn with_foundation(mut self, index: u8, cards: impl IntoIterator<Item = Card>) -> Self {
        let pile = self.pile_mut(PileId::Foundation(index));
        pile.extend(cards.into_iter().map(PlayingCard::face_up));
        self
    }

    /// Every pile with its contents, in `PileId::ALL` order.
    pub fn piles(&self) -> impl Iterator<Item = (PileId, &[PlayingCard])> {
        PileId::ALL.into_iter().map(move |id| {
            let cards: &[PlayingCard] = match id {
                PileId::Stock => &self.stock,
                PileId::Waste => &self.waste,
                PileId::Foundation(i) => &self.foundations[i as usize],
                PileId::Tableau(i) => &self.tableaus[i as usize],
            };
            (id, cards)
        })
    }

    /// Put every card not yet placed anywhere face-down into the stock,
    /// beneath whatever the stock already holds, in deck index order.
    pub fn fill_stock_with_remaining(mut self) -> Self {
        let mut placed = [false; CARDS_PER_DECK as usize];
        for (_, cards) in self.piles() {
            for pc in cards {
                placed[pc.card.index() as usize] = true;
            }
        }

        let missing: Vec<PlayingCard> = (0..CARDS_PER_DECK)
            .filter(|&i| !placed[i as usize])
            .filter_map(Card::from_index)
            .map(PlayingCard::face_down)
            .collect();

        self.stock.splice(0..0, missing);
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        check_partition(self.piles())
    }
}

/// Verify that the given piles hold each of the 52 cards exactly once.
pub fn check_partition<'a>(
    piles: impl IntoIterator<Item = (PileId, &'a [PlayingCard])>,
) -> Result<(), LayoutError> {
    let mut owner: [Option<PileId>; CARDS_PER_DECK as usize] = [None; CARDS_PER_DECK as usize];

    for (id, cards) in piles {
        for pc in cards {
            let slot = &mut owner[pc.card.index() as usize];
            if let Some(first) = *slot {
                return Err(LayoutError::DuplicateCard {
                    card: pc.card,
                    first,
                    second: id,
                });
            }
            *slot = Some(id);
        }
    }

    let mut missing = (0..CARDS_PER_DECK).filter(|&i| owner[i as usize].is_none());
    if let Some(example) = missing.next().and_then(Card::from_index) {
        return Err(LayoutError::MissingCards {
            count: 1 + missing.count(),
            example,
        });
    }

    Ok(())
}
