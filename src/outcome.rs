//! Outcome types for resolved tricks.

use crate::seat::{Seat, TeamId};

/// What a trick resolution did.
///
/// Returned by [`Game::end_trick`](crate::Game::end_trick) and, when the
/// fourth card triggers automatic resolution, by
/// [`Game::play_card`](crate::Game::play_card).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickOutcome {
    /// Seat that won the trick.
    pub winner: Seat,
    /// Whether this was the 13th trick, ending the round and applying scores.
    pub round_scored: bool,
    /// Team that reached the winning score, if the round ended the game.
    pub game_winner: Option<TeamId>,
}
