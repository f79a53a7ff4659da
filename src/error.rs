//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when constructing a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The winning score must be positive.
    #[error("winning score must be positive")]
    NonPositiveWinningScore,
}

/// Errors that can occur when playing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The card is not in the current player's hand.
    #[error("card is not in the current player's hand")]
    CardNotInHand,
    /// The trick already holds four cards and must be resolved first.
    #[error("trick is complete and must be resolved")]
    TrickComplete,
}

/// Errors that can occur when resolving a trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrickError {
    /// Fewer than four cards have been played.
    #[error("trick is not complete")]
    Incomplete,
}
