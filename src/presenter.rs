//! Hooks for rendering a simulation.

use crate::result::{GameOutcome, RoundResult};

/// Receives structured results while a game is simulated.
///
/// Presenters only observe; they cannot influence the game. Every method has
/// an empty default, and `()` is a presenter that ignores everything.
pub trait Presenter {
    /// Called once after the deal, before the first round.
    fn game_started(&mut self, _player_cards: usize, _computer_cards: usize) {}

    /// Called after every round.
    fn round_played(&mut self, _round: &RoundResult) {}

    /// Called once when the game ends.
    fn game_over(&mut self, _outcome: &GameOutcome) {}
}

impl Presenter for () {}

