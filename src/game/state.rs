//! Game state types.

use core::fmt;

use crate::result::GameOutcome;

/// One of the two automated sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The player.
    Player,
    /// The computer.
    Computer,
}

impl Side {
    /// Both sides, player first.
    pub const BOTH: [Self; 2] = [Self::Player, Self::Computer];

    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Computer => f.write_str("computer"),
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Ready for the next round.
    NormalRound,
    /// Resolving a war at the given depth (1 for the first war of a round).
    WarRound {
        /// Current war depth.
        depth: u32,
    },
    /// The game has ended.
    GameOver(GameOutcome),
    /// The game was stopped because both hands repeated an earlier
    /// position. No side wins.
    Cycle {
        /// Rounds played when the repeat was found.
        rounds: u32,
        /// Rounds played when the position was first seen.
        repeats_from: u32,
    },
}

impl GameState {
    /// Returns the outcome if the game is over.
    #[must_use]
    pub const fn outcome(&self) -> Option<GameOutcome> {
        match *self {
            Self::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Returns whether no more rounds can be played.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, Self::GameOver(_) | Self::Cycle { .. })
    }
}
