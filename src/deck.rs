//! Deck construction and shuffling.

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Returns the 52 cards of a standard deck, suit by suit in ascending rank.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }

    cards
}

/// Creates a standard deck and applies a uniform random permutation to it.
pub fn create_shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = full_deck();
    cards.shuffle(rng);
    cards
}

/// Creates a shuffled deck from a seed.
///
/// The same seed always yields the same order.
#[must_use]
pub fn create_shuffled_deck_from_seed(seed: u64) -> Vec<Card> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    create_shuffled_deck(&mut rng)
}
