//! Deck factory: build, shuffle and deal the 52 cards.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::card::{Card, PlayingCard, Rank, Suit, CARDS_PER_DECK};
use crate::config::GameOptions;
use crate::layout::Layout;
use crate::pile::NUM_TABLEAUS;

/// A full deck in dealing order: the front is dealt first.
pub type Deck = [Card; CARDS_PER_DECK as usize];

/// Number of cards dealt into the tableaus (1 + 2 + ... + 7).
pub const TABLEAU_DEAL_COUNT: usize = NUM_TABLEAUS * (NUM_TABLEAUS + 1) / 2;

/// Generate a standard 52-card deck in a fixed order.
///
/// Suits follow `Suit::ALL` order, and ranks follow `Rank::ALL` order, so
/// the card at position `i` has index `i`.
pub fn standard_deck() -> Deck {
    let mut cards = [Card::new(Suit::Hearts, Rank::Ace); CARDS_PER_DECK as usize];
    let mut i = 0usize;
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards[i] = Card::new(suit, rank);
            i += 1;
        }
    }
    cards
}

/// Return a uniformly shuffled standard deck.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Deck {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

/// Return a reproducibly shuffled deck for a 64-bit seed.
pub fn shuffled_deck_from_seed(seed: u64) -> Deck {
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_deck(&mut rng)
}

/// Lay a deck out as the opening position.
///
/// Tableau `i` receives `i` face-down cards followed by one face-up,
/// playable card, all taken from the front of the deck. The 24 cards left
/// over go face-down into the stock in deck order, so the last card of the
/// deck is the first one turned.
pub fn deal_layout(deck: &Deck, options: &GameOptions) -> Layout {
    let mut layout = Layout::default();
    let mut cards = deck.iter().copied();

    for (i, tableau) in layout.tableaus.iter_mut().enumerate() {
        for card in cards.by_ref().take(i) {
            tableau.push(hidden(card, options));
        }
        if let Some(card) = cards.next() {
            tableau.push(PlayingCard::face_up(card));
        }
    }

    layout.stock.extend(cards.map(|card| hidden(card, options)));
    layout
}

fn hidden(card: Card, options: &GameOptions) -> PlayingCard {
    PlayingCard {
        face_down_offset: options.face_down_offset,
        ..PlayingCard::face_down(card)
    }
}
