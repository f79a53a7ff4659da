use core::mem;

use crate::card::Card;
use crate::error::{PlayError, TrickError};
use crate::outcome::TrickOutcome;

use super::{Game, TRICK_SIZE, trick::trick_winner};

impl Game {
    /// Plays a card for the seat whose turn it is.
    ///
    /// The card is matched against the current player's hand by suit and
    /// rank; exactly one matching card is removed. The play is appended to
    /// the board and the turn advances to the next seat. When the fourth card
    /// lands and `manual_end_trick` is off, the trick is resolved immediately
    /// and its outcome returned; under `manual_end_trick` the board is left
    /// for the driver to resolve with [`end_trick`](Self::end_trick).
    ///
    /// # Errors
    ///
    /// Returns an error if a completed trick is still on the board, or if the
    /// card is not in the current player's hand. A failed play mutates
    /// nothing.
    pub fn play_card(&mut self, card: Card) -> Result<Option<TrickOutcome>, PlayError> {
        if self.board.len() == TRICK_SIZE {
            return Err(PlayError::TrickComplete);
        }

        let seat = self.turn;
        if !self.players[seat.index()].remove_card(card) {
            return Err(PlayError::CardNotInHand);
        }

        self.board.push((seat, card));
        self.turn = seat.next();

        if self.board.len() == TRICK_SIZE && !self.options.manual_end_trick {
            return Ok(Some(self.resolve_trick()));
        }

        Ok(None)
    }

    /// Resolves the completed trick on the board.
    ///
    /// Only needed when `manual_end_trick` is enabled; otherwise the fourth
    /// card resolves the trick automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than four cards have been played.
    pub fn end_trick(&mut self) -> Result<TrickOutcome, TrickError> {
        if self.board.len() < TRICK_SIZE {
            return Err(TrickError::Incomplete);
        }

        Ok(self.resolve_trick())
    }

    /// Awards the trick, snapshots the board, and closes out the round after
    /// the 13th trick.
    fn resolve_trick(&mut self) -> TrickOutcome {
        let winner = trick_winner(&self.board).expect("a complete trick has a winner");
        self.players[winner.index()].won_trick();

        // The board must come back empty: the four-card check above is what
        // lets the next trick accept cards.
        self.previous_board = mem::take(&mut self.board);
        self.remaining_tricks -= 1;

        let mut outcome = TrickOutcome {
            winner,
            round_scored: false,
            game_winner: None,
        };

        if self.remaining_tricks == 0 {
            self.score_round();
            outcome.round_scored = true;
            outcome.game_winner = self.winner;

            if self.winner.is_none() {
                self.start_round();
            }
        }

        outcome
    }
}
