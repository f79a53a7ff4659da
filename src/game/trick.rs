use crate::card::Card;
use crate::seat::Seat;

/// Determines the winner of a trick.
///
/// Takes the played `(seat, card)` pairs in play order and returns the seat
/// holding the best eligible card, or `None` for an empty board. The first
/// card sets the leading suit. Spades always trump: if any spade is on the
/// board only spades can win; otherwise only cards of the leading suit can.
/// The highest rank among eligible cards wins; ranks are unique per suit in
/// a single deck, so no tie-break is needed.
///
/// # Example
///
/// ```
/// use spars::{Card, Seat, Suit, trick_winner};
///
/// let plays = [
///     (Seat::North, Card::new(Suit::Hearts, 2)),
///     (Seat::East, Card::new(Suit::Hearts, 9)),
///     (Seat::South, Card::new(Suit::Spades, 3)),
///     (Seat::West, Card::new(Suit::Hearts, 14)),
/// ];
/// assert_eq!(trick_winner(&plays), Some(Seat::South));
/// ```
#[must_use]
pub fn trick_winner(plays: &[(Seat, Card)]) -> Option<Seat> {
    let (_, lead) = plays.first()?;
    let lead_suit = lead.suit;
    let trumped = plays.iter().any(|(_, card)| card.is_spade());

    plays
        .iter()
        .filter(|(_, card)| {
            if trumped {
                card.is_spade()
            } else {
                card.suit == lead_suit
            }
        })
        .max_by_key(|(_, card)| card.rank)
        .map(|&(seat, _)| seat)
}

/// Returns whether the card can still win the trick given the cards on the
/// board so far.
///
/// A spade is always eligible; a card of the leading suit is eligible only
/// while no spade has been played.
#[must_use]
pub fn is_eligible_winner(plays: &[(Seat, Card)], card: Card) -> bool {
    let Some((_, lead)) = plays.first() else {
        return true;
    };
    if card.is_spade() {
        return true;
    }
    card.suit == lead.suit && !plays.iter().any(|(_, played)| played.is_spade())
}
