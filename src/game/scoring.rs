use crate::player::Player;
use crate::seat::{Seat, TeamId};

use super::Game;

/// Bonus granted (or penalty charged) for a nil bid.
const NIL_SCORE: i32 = 100;

/// Computes both teams' score deltas for a finished round.
///
/// Each team's bid and won-trick counts are the sums over both partners. A
/// team that takes at least its combined bid gains ten points per bid trick;
/// a team that falls short loses the same amount. Independently, every player
/// who bid nil gains the team 100 points if they took no trick and costs 100
/// if they took any.
///
/// # Example
///
/// ```
/// use spars::{Player, round_scores};
///
/// let mut players = [Player::new(), Player::new(), Player::new(), Player::new()];
/// players[0].set_bid(2);
/// players[2].set_bid(1);
/// players[1].set_bid(2);
/// players[3].set_bid(2);
/// for _ in 0..4 {
///     players[0].won_trick();
/// }
/// // North/South made their bid of 3; East/West fell short of 4.
/// assert_eq!(round_scores(&players), [30, -40]);
/// ```
#[must_use]
pub fn round_scores(players: &[Player; 4]) -> [i32; 2] {
    let mut deltas = [0i32; 2];

    for team in TeamId::ALL {
        let [first, second] = team.seats();
        let bid =
            i32::from(players[first.index()].bid()) + i32::from(players[second.index()].bid());
        let tricks = i32::from(players[first.index()].tricks_won())
            + i32::from(players[second.index()].tricks_won());

        deltas[team.index()] += if bid <= tricks { bid * 10 } else { -bid * 10 };
    }

    for seat in Seat::ALL {
        let player = &players[seat.index()];
        if player.bid() == 0 {
            let bonus = if player.tricks_won() == 0 {
                NIL_SCORE
            } else {
                -NIL_SCORE
            };
            deltas[seat.team().index()] += bonus;
        }
    }

    deltas
}

impl Game {
    /// Applies the round's score deltas and records a winner once a team is
    /// at or above the winning score.
    pub(super) fn score_round(&mut self) {
        let deltas = round_scores(&self.players);
        for team in TeamId::ALL {
            self.teams[team.index()].add_score(deltas[team.index()]);
        }

        let north_south = self.teams[TeamId::NorthSouth.index()].score();
        let east_west = self.teams[TeamId::EastWest.index()].score();
        let target = self.options.winning_score;

        // When both teams cross the line in the same round, the higher total
        // wins; a dead tie keeps the game going.
        self.winner = match (north_south >= target, east_west >= target) {
            (true, false) => Some(TeamId::NorthSouth),
            (false, true) => Some(TeamId::EastWest),
            (true, true) if north_south > east_west => Some(TeamId::NorthSouth),
            (true, true) if east_west > north_south => Some(TeamId::EastWest),
            _ => None,
        };
    }
}
