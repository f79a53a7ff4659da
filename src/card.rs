//! Card types.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];
}

/// Jack rank.
pub const JACK: u8 = 11;
/// Queen rank.
pub const QUEEN: u8 = 12;
/// King rank.
pub const KING: u8 = 13;
/// Ace rank. Aces are always high.
pub const ACE: u8 = 14;

/// A playing card.
///
/// Two cards are equal when their suit and rank match; hands never hold
/// duplicate suit+rank pairs, so equality identifies a card uniquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2-10 literal, 11 = Jack, 12 = Queen, 13 = King,
    /// 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted but never occur in a dealt deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card is a spade.
    #[must_use]
    pub const fn is_spade(&self) -> bool {
        matches!(self.suit, Suit::Spades)
    }
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;
