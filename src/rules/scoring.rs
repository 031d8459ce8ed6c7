//! Round-end scoring and tranque (lock) resolution.
//!
//! The winning team scores the pip total left in the losing partnership's
//! hands. On a tranque the winner is the team of the player holding the
//! strictly lowest individual pip total; an exact lowest-pip tie across
//! opposing teams is resolved by "quien tranca, pierde": the team that did
//! NOT place the final board tile wins. The tie rule is a deliberate,
//! documented choice — the behavior it replaces depended on scan order.

use crate::core::{hand_pips, Seat, SeatMap, Team, Tile};

/// Remaining pip totals per partnership, indexed by team.
#[must_use]
pub fn team_pip_totals(hands: &SeatMap<Vec<Tile>>) -> [u32; 2] {
    let mut totals = [0u32; 2];
    for (seat, hand) in hands.iter() {
        totals[seat.team().index()] += hand_pips(hand);
    }
    totals
}

/// Points awarded to `winner`: the opposing partnership's remaining pips.
#[must_use]
pub fn points_against(hands: &SeatMap<Vec<Tile>>, winner: Team) -> u32 {
    team_pip_totals(hands)[winner.opponent().index()]
}

/// Resolve a locked round.
///
/// `last_placer` is the seat that played the final board tile (the seat
/// that closed the board). The board is never empty when a lock occurs, so
/// the caller always has one.
#[must_use]
pub fn resolve_tranque(hands: &SeatMap<Vec<Tile>>, last_placer: Seat) -> Team {
    let mut lowest_seat = Seat::new(0);
    let mut lowest_pips = hand_pips(&hands[lowest_seat]);
    let mut tied_across_teams = false;

    for seat in Seat::all().skip(1) {
        let pips = hand_pips(&hands[seat]);
        if pips < lowest_pips {
            lowest_seat = seat;
            lowest_pips = pips;
            tied_across_teams = false;
        } else if pips == lowest_pips && seat.team() != lowest_seat.team() {
            tied_across_teams = true;
        }
    }

    if tied_across_teams {
        last_placer.team().opponent()
    } else {
        lowest_seat.team()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    fn hands(h0: Vec<Tile>, h1: Vec<Tile>, h2: Vec<Tile>, h3: Vec<Tile>) -> SeatMap<Vec<Tile>> {
        let all = [h0, h1, h2, h3];
        SeatMap::new(|s| all[s.index()].clone())
    }

    #[test]
    fn test_team_pip_totals() {
        let h = hands(
            vec![t(1, 2)],          // seat 0, team 0: 3
            vec![t(9, 9)],          // seat 1, team 1: 18
            vec![t(0, 4), t(2, 2)], // seat 2, team 0: 8
            vec![],                 // seat 3, team 1: 0
        );

        assert_eq!(team_pip_totals(&h), [11, 18]);
    }

    #[test]
    fn test_points_against_opponents() {
        let h = hands(vec![t(5, 5)], vec![t(1, 1)], vec![], vec![t(0, 3)]);

        assert_eq!(points_against(&h, Team::new(0)), 5); // team 1 holds 2 + 3
        assert_eq!(points_against(&h, Team::new(1)), 10);
    }

    #[test]
    fn test_tranque_lowest_individual_wins_for_team() {
        let h = hands(
            vec![t(9, 9), t(8, 8)], // 34
            vec![t(0, 1)],          // 1  <- lowest, team 1
            vec![t(5, 5)],          // 10
            vec![t(6, 7)],          // 13
        );

        assert_eq!(resolve_tranque(&h, Seat::new(0)), Team::new(1));
    }

    #[test]
    fn test_tranque_tie_within_team_is_not_ambiguous() {
        // Seats 1 and 3 (same team) both hold 5; no cross-team tie.
        let h = hands(
            vec![t(9, 9)],
            vec![t(2, 3)],
            vec![t(8, 8)],
            vec![t(1, 4)],
        );

        assert_eq!(resolve_tranque(&h, Seat::new(1)), Team::new(1));
    }

    #[test]
    fn test_tranque_cross_team_tie_goes_against_last_placer() {
        // Seat 0 (team 0) and seat 1 (team 1) both hold 5 pips.
        let h = hands(
            vec![t(2, 3)],
            vec![t(1, 4)],
            vec![t(9, 9)],
            vec![t(8, 8)],
        );

        // Seat 2 (team 0) closed the board: team 1 wins the tie.
        assert_eq!(resolve_tranque(&h, Seat::new(2)), Team::new(1));
        // Seat 3 (team 1) closed the board: team 0 wins the tie.
        assert_eq!(resolve_tranque(&h, Seat::new(3)), Team::new(0));
    }

    #[test]
    fn test_tranque_later_strictly_lower_clears_earlier_tie() {
        // Seats 0 and 1 tie on 10, then seat 2 comes in strictly lower.
        let h = hands(
            vec![t(4, 6)],
            vec![t(5, 5)],
            vec![t(0, 2)],
            vec![t(9, 9)],
        );

        assert_eq!(resolve_tranque(&h, Seat::new(1)), Team::new(0));
    }
}
