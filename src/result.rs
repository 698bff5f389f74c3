//! Round and game result types handed to presenters.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::game::Side;

/// Why the losing side lost the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    /// The loser's hand ran out of cards.
    OutOfCards,
    /// The loser could not put up the three cards a war requires.
    InsufficientCardsForWar,
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// The side that won the game.
    pub winner: Side,
    /// Why the other side lost.
    pub reason: LossReason,
    /// Rounds played, including the deciding one.
    pub rounds: u32,
}

impl GameOutcome {
    /// Returns the side that lost the game.
    #[must_use]
    pub const fn loser(&self) -> Side {
        self.winner.opponent()
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            LossReason::OutOfCards => write!(
                f,
                "the {} is out of cards, and the {} has won the game",
                self.loser(),
                self.winner
            ),
            LossReason::InsufficientCardsForWar => write!(
                f,
                "the {} does not have enough cards for the war, and the {} has won the game",
                self.loser(),
                self.winner
            ),
        }
    }
}

/// One level of a war: two face-down cards per side and the deciding pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarLevel {
    /// War depth, starting at 1 for the war that follows the opening tie.
    pub depth: u32,
    /// The player's face-down cards.
    pub player_face_down: [Card; 2],
    /// The computer's face-down cards.
    pub computer_face_down: [Card; 2],
    /// The player's face-up deciding card.
    pub player_card: Card,
    /// The computer's face-up deciding card.
    pub computer_card: Card,
}

impl WarLevel {
    /// Returns whether the deciding cards tied again.
    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.player_card.cmp_rank(&self.computer_card).is_eq()
    }
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A side took the whole pot.
    Won(Side),
    /// A war was due but the given side could not supply three cards.
    /// The game is over and the pot stays on the table.
    InsufficientCards {
        /// Side that could not pay for the war.
        loser: Side,
    },
}

impl RoundOutcome {
    /// Returns the side that came out ahead.
    #[must_use]
    pub const fn winner(&self) -> Side {
        match *self {
            Self::Won(side) => side,
            Self::InsufficientCards { loser } => loser.opponent(),
        }
    }
}

/// Result of a single round, including every war it escalated into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number, starting at 1.
    pub number: u32,
    /// The player's top card.
    pub player_card: Card,
    /// The computer's top card.
    pub computer_card: Card,
    /// Wars fought in this round, in depth order.
    pub wars: Vec<WarLevel>,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Number of cards that were at stake.
    pub pot_size: usize,
    /// Cards left in the player's hand after the round.
    pub player_cards: usize,
    /// Cards left in the computer's hand after the round.
    pub computer_cards: usize,
}

impl RoundResult {
    /// Returns whether the round went to war.
    #[must_use]
    pub fn is_war(&self) -> bool {
        !self.wars.is_empty()
    }

    /// Returns the number of cards a side holds after the round.
    #[must_use]
    pub const fn cards_left(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player_cards,
            Side::Computer => self.computer_cards,
        }
    }
}
