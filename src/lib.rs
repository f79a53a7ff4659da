//! A spades rules engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that manages the full round flow for a
//! four-player partnership spades variant: dealing, turn rotation, trick
//! resolution, and bid-based round scoring.
//!
//! # Example
//!
//! ```no_run
//! use spars::{Game, GameOptions, Seat};
//!
//! let options = GameOptions::default();
//! let mut game = Game::new(options, 42).expect("valid options");
//! game.start_round();
//! game.set_bid(Seat::North, 3);
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
pub mod options;
pub mod outcome;
pub mod player;
pub mod seat;

// Re-export main types
pub use card::{ACE, Card, DECK_SIZE, JACK, KING, QUEEN, Suit};
pub use deck::Deck;
pub use error::{ConfigError, PlayError, TrickError};
pub use game::{
    Game, HAND_SIZE, TRICK_SIZE, TRICKS_PER_ROUND, Team, is_eligible_winner, round_scores,
    trick_winner,
};
pub use options::GameOptions;
pub use outcome::TrickOutcome;
pub use player::Player;
pub use seat::{Seat, TeamId};
