//! Player hand representation.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::HandEmptyError;
use crate::game::Side;

/// A side's face-down stack of cards, played as a FIFO queue.
///
/// Cards are played from the front and won cards go to the back, so cards a
/// side wins come up again in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Side that owns this hand.
    owner: Side,
    /// Cards, front first.
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates a new empty hand for the given side.
    #[must_use]
    pub const fn new(owner: Side) -> Self {
        Self {
            owner,
            cards: VecDeque::new(),
        }
    }

    /// Creates a hand holding the given cards, front first.
    #[must_use]
    pub fn from_cards(owner: Side, cards: Vec<Card>) -> Self {
        Self {
            owner,
            cards: VecDeque::from(cards),
        }
    }

    /// Returns the side that owns this hand.
    #[must_use]
    pub const fn owner(&self) -> Side {
        self.owner
    }

    /// Adds a card to the back of the hand.
    pub fn enqueue(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Removes and returns the front card.
    ///
    /// # Errors
    ///
    /// Returns an error if the hand is empty.
    pub fn dequeue(&mut self) -> Result<Card, HandEmptyError> {
        self.cards
            .pop_front()
            .ok_or(HandEmptyError { owner: self.owner })
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns the cards in play order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
