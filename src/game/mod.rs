//! Game engine and round lifecycle.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::ConfigError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::seat::{Seat, TeamId};

mod play;
mod scoring;
mod trick;

pub use scoring::round_scores;
pub use trick::{is_eligible_winner, trick_winner};

/// Cards dealt to each player per round.
pub const HAND_SIZE: usize = 13;

/// Tricks in a full round.
pub const TRICKS_PER_ROUND: u8 = 13;

/// Cards in a complete trick, one per seat.
pub const TRICK_SIZE: usize = 4;

/// A partnership's persistent state across rounds.
#[derive(Debug, Clone)]
pub struct Team {
    /// Display name.
    name: &'static str,
    /// Cumulative score. May go negative.
    score: i32,
}

impl Team {
    const fn new(name: &'static str) -> Self {
        Self { name, score: 0 }
    }

    /// Returns the team's name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the cumulative score.
    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    pub(crate) const fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }
}

/// A spades game: four seated players in two partnerships, playing rounds of
/// thirteen tricks until a team reaches the winning score.
///
/// The game owns the deck, player hands, the in-progress trick, and the team
/// scores. Use [`GameOptions`] to configure the winning score and whether
/// trick resolution is driver-controlled.
pub struct Game {
    /// Game options.
    options: GameOptions,
    /// Players indexed by seat.
    players: [Player; 4],
    /// Partnerships indexed by team.
    teams: [Team; 2],
    /// The deck, drained to empty by dealing.
    deck: Deck,
    /// Seat whose turn it is.
    turn: Seat,
    /// Tricks left in the current round.
    remaining_tricks: u8,
    /// Cards played into the current trick, in play order.
    board: Vec<(Seat, Card)>,
    /// Snapshot of the last completed trick.
    previous_board: Vec<(Seat, Card)>,
    /// Team that reached the winning score, once the game has ended.
    winner: Option<TeamId>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// The turn starts at North. No hands are dealt until
    /// [`start_round`](Self::start_round) is called.
    ///
    /// # Errors
    ///
    /// Returns an error if the options are invalid.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spars::{Game, GameOptions};
    ///
    /// let options = GameOptions::default();
    /// let mut game = Game::new(options, 42).expect("valid options");
    /// game.start_round();
    /// ```
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, ConfigError> {
        options.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);

        Ok(Self {
            options,
            players: [Player::new(), Player::new(), Player::new(), Player::new()],
            teams: [Team::new("North/South"), Team::new("East/West")],
            deck,
            turn: Seat::North,
            remaining_tricks: TRICKS_PER_ROUND,
            board: Vec::new(),
            previous_board: Vec::new(),
            winner: None,
            rng,
        })
    }

    /// Starts a fresh round.
    ///
    /// Obtains a new shuffled deck, resets the trick counters and the board,
    /// clears every player's won-trick count, and deals 13 cards to each
    /// player, leaving the deck empty. Cumulative scores, the recorded
    /// winner, and the turn pointer are untouched.
    pub fn start_round(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.remaining_tricks = TRICKS_PER_ROUND;
        self.board.clear();
        self.previous_board.clear();

        for player in &mut self.players {
            player.reset_tricks();
        }

        self.deal_hands();
    }

    /// Deals a full hand to each player. Partners are served back to back:
    /// North, South, then East, West.
    fn deal_hands(&mut self) {
        for seat in [Seat::North, Seat::South, Seat::East, Seat::West] {
            let hand = self.take_hand();
            self.players[seat.index()].give_hand(hand);
        }
    }

    /// Takes the next 13 cards off the top of the deck.
    fn take_hand(&mut self) -> Vec<Card> {
        let mut hand = Vec::with_capacity(HAND_SIZE);
        for _ in 0..HAND_SIZE {
            if let Some(card) = self.deck.deal_top_card() {
                hand.push(card);
            }
        }
        hand
    }

    /// Sets the bid for the player at the given seat.
    pub fn set_bid(&mut self, seat: Seat, bid: u8) {
        self.players[seat.index()].set_bid(bid);
    }

    /// Returns the player at the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    /// Returns the player at the given seat, mutably.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat.index()]
    }

    /// Returns the hand of the player at the given seat.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat.index()].hand()
    }

    /// Returns the given team.
    #[must_use]
    pub const fn team(&self, id: TeamId) -> &Team {
        &self.teams[id.index()]
    }

    /// Returns the seat whose turn it is.
    #[must_use]
    pub const fn current_turn(&self) -> Seat {
        self.turn
    }

    /// Returns the cards played into the current trick, in play order.
    #[must_use]
    pub fn cards_on_board(&self) -> &[(Seat, Card)] {
        &self.board
    }

    /// Returns the last completed trick, in play order.
    #[must_use]
    pub fn previous_trick(&self) -> &[(Seat, Card)] {
        &self.previous_board
    }

    /// Returns the number of tricks left in the current round.
    #[must_use]
    pub const fn remaining_tricks(&self) -> u8 {
        self.remaining_tricks
    }

    /// Returns the number of cards left in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the team that won the game, if a round has ended with a team
    /// at or above the winning score.
    #[must_use]
    pub const fn winner(&self) -> Option<TeamId> {
        self.winner
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }
}
