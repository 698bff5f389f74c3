//! A simulation engine for the card game War with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that deals a shuffled 52-card deck
//! between two automated sides, resolves rounds and (possibly nested) wars,
//! and drives the game until one side owns every card or cannot pay for a war.
//! Deals whose hands fall into a repeating position are stopped with
//! [`SimulationError::Cycle`], so a simulation always terminates.
//!
//! # Example
//!
//! ```
//! use warsim::{Game, GameOptions, SimulationError};
//!
//! let game = Game::new(GameOptions::default(), 42);
//! match game.simulate_game() {
//!     Ok(outcome) => assert_ne!(outcome.winner, outcome.loser()),
//!     Err(SimulationError::Cycle { rounds, repeats_from }) => assert!(repeats_from < rounds),
//!     Err(err) => panic!("simulation did not finish: {err}"),
//! }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod presenter;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{create_shuffled_deck, create_shuffled_deck_from_seed, full_deck};
pub use error::{DealError, HandEmptyError, RoundError, SimulationError};
pub use game::{Game, GameState, Side, WAR_STAKE};
pub use hand::Hand;
pub use options::GameOptions;
pub use presenter::Presenter;
pub use result::{GameOutcome, LossReason, RoundOutcome, RoundResult, WarLevel};
