use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::SimulationError;
use crate::presenter::Presenter;
use crate::result::{GameOutcome, LossReason};

use super::{Game, GameState, Side};

impl Game {
    /// Returns the side whose hand is empty, checking the player first.
    pub fn empty_hand(&self) -> Option<Side> {
        if self.player.lock().is_empty() {
            Some(Side::Player)
        } else if self.computer.lock().is_empty() {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Plays rounds until the game ends and returns the outcome.
    ///
    /// The simulation always terminates: besides the two ways a side can
    /// lose, it stops as soon as both hands return to a position they held
    /// after an earlier round, since play would repeat from there forever.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Cycle`] if the hands repeat a position, or
    /// [`SimulationError::RoundLimitReached`] if the round limit in
    /// [`GameOptions`](crate::GameOptions) is reached first.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{DECK_SIZE, Game, GameOptions, LossReason, SimulationError};
    ///
    /// let game = Game::new(GameOptions::default(), 7);
    /// match game.simulate_game() {
    ///     Ok(outcome) => {
    ///         if outcome.reason == LossReason::OutOfCards {
    ///             assert_eq!(game.hand_len(outcome.winner), DECK_SIZE);
    ///         }
    ///     }
    ///     Err(SimulationError::Cycle { rounds, repeats_from }) => assert!(repeats_from < rounds),
    ///     Err(err) => panic!("simulation did not finish: {err}"),
    /// }
    /// ```
    pub fn simulate_game(&self) -> Result<GameOutcome, SimulationError> {
        self.simulate_game_with(&mut ())
    }

    /// Plays rounds until the game ends, reporting each round to `presenter`.
    ///
    /// # Errors
    ///
    /// Same as [`Game::simulate_game`].
    pub fn simulate_game_with<P: Presenter + ?Sized>(
        &self,
        presenter: &mut P,
    ) -> Result<GameOutcome, SimulationError> {
        log::info!(
            "starting a game of war: {} vs {}",
            self.options.player_name,
            self.options.computer_name
        );
        presenter.game_started(self.hand_len(Side::Player), self.hand_len(Side::Computer));

        // Position between rounds -> rounds played when first seen.
        let mut seen: HashMap<Vec<u8>, u32> = HashMap::new();

        loop {
            match self.state() {
                GameState::GameOver(outcome) => {
                    presenter.game_over(&outcome);
                    return Ok(outcome);
                }
                GameState::Cycle {
                    rounds,
                    repeats_from,
                } => {
                    return Err(SimulationError::Cycle {
                        rounds,
                        repeats_from,
                    });
                }
                GameState::NormalRound | GameState::WarRound { .. } => {}
            }

            if let Some(loser) = self.empty_hand() {
                self.finish(loser.opponent(), LossReason::OutOfCards);
                continue;
            }

            // The counter is a u32, so never play past its range.
            let rounds = self.rounds_played();
            if rounds >= self.options.max_rounds.unwrap_or(u32::MAX) {
                log::warn!("giving up after {rounds} rounds");
                return Err(SimulationError::RoundLimitReached { rounds });
            }

            let position = self.position();
            if let Some(&repeats_from) = seen.get(&position) {
                return Err(self.stop_cycle(repeats_from));
            }
            seen.insert(position, rounds);

            let round = self.play_round()?;
            log::debug!(
                "{} wins round {}; {}: {} cards left, {}: {} cards left",
                self.options.name(round.outcome.winner()),
                round.number,
                self.options.player_name,
                round.cards_left(Side::Player),
                self.options.computer_name,
                round.cards_left(Side::Computer)
            );
            presenter.round_played(&round);
        }
    }
}
