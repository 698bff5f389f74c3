//! Property tests over random seeds.

use std::collections::HashSet;

use proptest::prelude::*;
use warsim::{
    Card, DECK_SIZE, Game, GameOptions, GameState, Presenter, RoundOutcome, RoundResult,
    SimulationError, create_shuffled_deck_from_seed,
};

struct ConservationCheck {
    rounds: u32,
}

impl Presenter for ConservationCheck {
    fn round_played(&mut self, round: &RoundResult) {
        self.rounds += 1;
        let on_table = match round.outcome {
            RoundOutcome::Won(_) => 0,
            RoundOutcome::InsufficientCards { .. } => round.pot_size,
        };
        assert_eq!(round.player_cards + round.computer_cards + on_table, DECK_SIZE);
        assert_eq!(round.pot_size, 2 + 6 * round.wars.len());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn shuffled_deck_holds_each_card_once(seed in any::<u64>()) {
        let deck = create_shuffled_deck_from_seed(seed);
        let unique: HashSet<Card> = deck.iter().copied().collect();
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn simulation_terminates_and_conserves_cards(seed in any::<u64>()) {
        let game = Game::new(GameOptions::default(), seed);
        let mut check = ConservationCheck { rounds: 0 };

        match game.simulate_game_with(&mut check) {
            Ok(outcome) => {
                prop_assert_eq!(outcome.rounds, check.rounds);
                prop_assert!(game.state().is_over());
            }
            Err(SimulationError::Cycle { rounds, repeats_from }) => {
                prop_assert_eq!(rounds, check.rounds);
                prop_assert!(repeats_from < rounds);
                prop_assert_eq!(game.state(), GameState::Cycle { rounds, repeats_from });
                prop_assert_eq!(game.pot_len(), 0);
            }
            Err(err) => prop_assert!(false, "unexpected error: {}", err),
        }
        prop_assert_eq!(game.cards_in_play(), DECK_SIZE);
    }
}
