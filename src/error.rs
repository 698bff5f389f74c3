//! Error types for game operations.

use thiserror::Error;

use crate::game::Side;

/// A card was requested from an empty hand.
///
/// Callers must check a hand before drawing from it, so this signals a
/// sequencing bug rather than a game outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the {owner} hand is empty")]
pub struct HandEmptyError {
    /// Side whose hand was empty.
    pub owner: Side,
}

/// Errors that can occur while playing a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The game is already over.
    #[error("the game is already over")]
    GameOver,
    /// A round was started while a hand was empty.
    #[error(transparent)]
    HandEmpty(#[from] HandEmptyError),
}

/// Errors that can occur when dealing a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The current game has not finished yet.
    #[error("the current game is still in progress")]
    GameInProgress,
}

/// Errors that can occur while simulating a whole game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The configured round limit was hit before the game ended.
    #[error("round limit reached after {rounds} rounds")]
    RoundLimitReached {
        /// Rounds played when the limit was hit.
        rounds: u32,
    },
    /// Both hands returned to a position already seen, so the game would
    /// repeat forever.
    #[error("hands repeat the position after round {repeats_from} at round {rounds}")]
    Cycle {
        /// Rounds played when the repeat was found.
        rounds: u32,
        /// Rounds played when the position was first seen.
        repeats_from: u32,
    },
    /// A round could not be played.
    #[error(transparent)]
    Round(#[from] RoundError),
}
