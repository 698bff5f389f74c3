//! Game engine and state management.

use core::sync::atomic::{AtomicU32, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE};
use crate::deck::create_shuffled_deck;
use crate::error::{DealError, SimulationError};
use crate::hand::Hand;
use crate::options::GameOptions;
use crate::result::{GameOutcome, LossReason};

mod driver;
mod round;
pub mod state;

pub use state::{GameState, Side};

/// Never a card index, see [`Card::index`].
const POSITION_SEPARATOR: u8 = u8::MAX;

/// Cards each side must put up for a war: two face down, one face up.
pub const WAR_STAKE: usize = 3;

/// A War game between the player and the computer.
///
/// The game owns both hands, the pot in flight and the random number
/// generator. Every card is always in exactly one of the two hands or the
/// pot, so [`Game::cards_in_play`] is always [`DECK_SIZE`].
pub struct Game {
    /// The player's hand.
    pub player: Mutex<Hand>,
    /// The computer's hand.
    pub computer: Mutex<Hand>,
    /// Cards on the table. Empty between rounds unless the game ended on
    /// an insufficiency loss.
    pub pot: Mutex<Vec<Card>>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Rounds played since the last deal.
    rounds: AtomicU32,
    /// Random number generator.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new game with the given seed and deals the shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::{Game, GameOptions, Side};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// assert_eq!(game.hand_len(Side::Player), 26);
    /// assert_eq!(game.hand_len(Side::Computer), 26);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (player, computer) = Self::deal_cards(&create_shuffled_deck(&mut rng));

        Self {
            player: Mutex::new(player),
            computer: Mutex::new(computer),
            pot: Mutex::new(Vec::with_capacity(DECK_SIZE)),
            options,
            state: Mutex::new(GameState::NormalRound),
            rounds: AtomicU32::new(0),
            rng: Mutex::new(rng),
        }
    }

    /// Splits a deck between the two sides.
    ///
    /// Cards are taken from the back of the deck, alternating player then
    /// computer, so each side receives half of the deck.
    fn deal_cards(deck: &[Card]) -> (Hand, Hand) {
        let mut player = Hand::new(Side::Player);
        let mut computer = Hand::new(Side::Computer);

        for pair in deck.rchunks_exact(2) {
            player.enqueue(pair[1]);
            computer.enqueue(pair[0]);
        }

        (player, computer)
    }

    /// Shuffles a fresh deck and deals a new game.
    ///
    /// # Errors
    ///
    /// Returns an error if the current game has not ended.
    pub fn redeal(&self) -> Result<(), DealError> {
        if !self.state().is_over() {
            return Err(DealError::GameInProgress);
        }

        let deck = create_shuffled_deck(&mut *self.rng.lock());
        let (player, computer) = Self::deal_cards(&deck);

        *self.player.lock() = player;
        *self.computer.lock() = computer;
        self.pot.lock().clear();
        self.rounds.store(0, Ordering::SeqCst);
        *self.state.lock() = GameState::NormalRound;

        log::debug!("dealt a new game");
        Ok(())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the number of rounds played since the last deal.
    pub fn rounds_played(&self) -> u32 {
        self.rounds.load(Ordering::SeqCst)
    }

    /// Returns the number of cards in a side's hand.
    pub fn hand_len(&self, side: Side) -> usize {
        match side {
            Side::Player => self.player.lock().len(),
            Side::Computer => self.computer.lock().len(),
        }
    }

    /// Returns the number of cards on the table.
    pub fn pot_len(&self) -> usize {
        self.pot.lock().len()
    }

    /// Returns the total number of cards across both hands and the pot.
    pub fn cards_in_play(&self) -> usize {
        let player = self.player.lock().len();
        let computer = self.computer.lock().len();
        player + computer + self.pot.lock().len()
    }

    /// Encodes both hands, in play order, as card indices with a separator
    /// between the player's cards and the computer's.
    ///
    /// Between rounds the pot is empty, so two equal keys mean the game is
    /// in the same position.
    fn position(&self) -> Vec<u8> {
        let player = self.player.lock();
        let computer = self.computer.lock();

        let mut key = Vec::with_capacity(player.len() + computer.len() + 1);
        key.extend(player.cards().map(|card| card.index()));
        key.push(POSITION_SEPARATOR);
        key.extend(computer.cards().map(|card| card.index()));
        key
    }

    /// Records that the game is repeating and returns the matching error.
    fn stop_cycle(&self, repeats_from: u32) -> SimulationError {
        let rounds = self.rounds_played();
        *self.state.lock() = GameState::Cycle {
            rounds,
            repeats_from,
        };

        log::warn!("hands after round {rounds} repeat the position after round {repeats_from}");
        SimulationError::Cycle {
            rounds,
            repeats_from,
        }
    }

    /// Records the end of the game and returns its outcome.
    fn finish(&self, winner: Side, reason: LossReason) -> GameOutcome {
        let outcome = GameOutcome {
            winner,
            reason,
            rounds: self.rounds_played(),
        };
        *self.state.lock() = GameState::GameOver(outcome);

        log::info!(
            "game over after {} rounds: {} wins ({:?})",
            outcome.rounds,
            self.options.name(winner),
            reason
        );
        outcome
    }
}
