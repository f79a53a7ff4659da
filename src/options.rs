//! Game configuration options.

use crate::error::ConfigError;

/// Configuration options for a spades game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use spars::GameOptions;
///
/// let options = GameOptions::default()
///     .with_winning_score(300)
///     .with_manual_end_trick(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Cumulative team score at which the game ends.
    pub winning_score: i32,
    /// When true, a completed trick is left on the board until the driver
    /// calls [`Game::end_trick`](crate::Game::end_trick) instead of being
    /// resolved automatically on the fourth card.
    pub manual_end_trick: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            winning_score: 500,
            manual_end_trick: false,
        }
    }
}

impl GameOptions {
    /// Sets the winning score.
    ///
    /// # Example
    ///
    /// ```
    /// use spars::GameOptions;
    ///
    /// let options = GameOptions::default().with_winning_score(250);
    /// assert_eq!(options.winning_score, 250);
    /// ```
    #[must_use]
    pub const fn with_winning_score(mut self, score: i32) -> Self {
        self.winning_score = score;
        self
    }

    /// Sets whether trick resolution is driver-controlled.
    ///
    /// # Example
    ///
    /// ```
    /// use spars::GameOptions;
    ///
    /// let options = GameOptions::default().with_manual_end_trick(true);
    /// assert!(options.manual_end_trick);
    /// ```
    #[must_use]
    pub const fn with_manual_end_trick(mut self, manual: bool) -> Self {
        self.manual_end_trick = manual;
        self
    }

    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the winning score is not positive.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score <= 0 {
            return Err(ConfigError::NonPositiveWinningScore);
        }
        Ok(())
    }
}
