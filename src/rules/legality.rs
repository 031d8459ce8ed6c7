//! Legal move computation.
//!
//! A move is a (tile, side) pair. Against a non-empty board a tile is legal
//! on a side iff either of its pips equals that side's open end; a tile
//! that fits both ends yields two candidates, and the player (human or bot)
//! disambiguates. On the opening move every hand tile is a single
//! candidate — side is immaterial because the tile becomes both ends.
//!
//! Enumeration order is load-bearing: hand order, left entry before right.
//! The bot's tie-break keeps the first-encountered candidate, so this order
//! must stay stable.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Tile;

/// Which extremity of the chain a tile is placed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two exposed pip values at the extremities of a non-empty chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenEnds {
    pub left: u8,
    pub right: u8,
}

impl OpenEnds {
    /// The open value on the given side.
    #[must_use]
    pub const fn value(self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A candidate play: a tile and the side to attach it to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMove {
    pub tile: Tile,
    pub side: Side,
}

impl CandidateMove {
    /// The pip value this play would leave exposed on its side, i.e. what
    /// the following player must match there.
    ///
    /// `None` if the tile does not actually touch that end (the candidate
    /// did not come from [`legal_moves`]).
    #[must_use]
    pub fn exposed_value(self, ends: OpenEnds) -> Option<u8> {
        self.tile.other_end(ends.value(self.side))
    }
}

/// Candidate list sized for the worst case: 10 tiles, each legal on both
/// ends.
pub type MoveList = SmallVec<[CandidateMove; 20]>;

/// Compute every legal (tile, side) play for `hand` against `ends`.
///
/// `ends` is `None` only before the opening tile is placed; then each hand
/// tile is one candidate (side fixed to `Right` by convention). Otherwise
/// dual-fit tiles appear twice, once per side, even when both ends expose
/// the same value. An empty result on a non-empty board is the forced-pass
/// condition.
#[must_use]
pub fn legal_moves(hand: &[Tile], ends: Option<OpenEnds>) -> MoveList {
    let mut moves = MoveList::new();

    let Some(ends) = ends else {
        for &tile in hand {
            moves.push(CandidateMove { tile, side: Side::Right });
        }
        return moves;
    };

    for &tile in hand {
        if tile.has(ends.left) {
            moves.push(CandidateMove { tile, side: Side::Left });
        }
        if tile.has(ends.right) {
            moves.push(CandidateMove { tile, side: Side::Right });
        }
    }
    moves
}

/// True when `tile` fits both ends and the end values differ, so the side
/// choice changes the resulting board. The UI prompts exactly in this case.
#[must_use]
pub fn is_side_ambiguous(tile: Tile, ends: OpenEnds) -> bool {
    ends.left != ends.right && tile.has(ends.left) && tile.has(ends.right)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: u8, b: u8) -> Tile {
        Tile::new(a, b).unwrap()
    }

    #[test]
    fn test_open_board_one_candidate_per_tile() {
        let hand = vec![t(0, 0), t(3, 5), t(9, 9)];
        let moves = legal_moves(&hand, None);

        assert_eq!(moves.len(), 3);
        for (mv, tile) in moves.iter().zip(&hand) {
            assert_eq!(mv.tile, *tile);
        }
    }

    #[test]
    fn test_open_board_empty_hand() {
        assert!(legal_moves(&[], None).is_empty());
    }

    #[test]
    fn test_matching_either_end() {
        let ends = Some(OpenEnds { left: 3, right: 7 });
        let hand = vec![t(3, 5), t(7, 9), t(1, 2)];
        let moves = legal_moves(&hand, ends);

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], CandidateMove { tile: t(3, 5), side: Side::Left });
        assert_eq!(moves[1], CandidateMove { tile: t(7, 9), side: Side::Right });
    }

    #[test]
    fn test_dual_fit_appears_twice() {
        let ends = Some(OpenEnds { left: 3, right: 7 });
        let moves = legal_moves(&[t(3, 7)], ends);

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].side, Side::Left);
        assert_eq!(moves[1].side, Side::Right);
    }

    #[test]
    fn test_dual_fit_on_equal_ends_still_two_entries() {
        let ends = Some(OpenEnds { left: 4, right: 4 });
        let moves = legal_moves(&[t(4, 6)], ends);

        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_forced_pass_is_empty_list() {
        let ends = Some(OpenEnds { left: 0, right: 1 });
        let hand = vec![t(2, 3), t(4, 5), t(6, 7), t(8, 9)];

        assert!(legal_moves(&hand, ends).is_empty());
    }

    #[test]
    fn test_double_matches_its_value() {
        let ends = Some(OpenEnds { left: 5, right: 2 });
        let moves = legal_moves(&[t(5, 5)], ends);

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].side, Side::Left);
    }

    #[test]
    fn test_exposed_value() {
        let ends = OpenEnds { left: 3, right: 7 };

        let mv = CandidateMove { tile: t(3, 5), side: Side::Left };
        assert_eq!(mv.exposed_value(ends), Some(5));

        let mv = CandidateMove { tile: t(7, 7), side: Side::Right };
        assert_eq!(mv.exposed_value(ends), Some(7));

        let bogus = CandidateMove { tile: t(1, 2), side: Side::Left };
        assert_eq!(bogus.exposed_value(ends), None);
    }

    #[test]
    fn test_side_ambiguity() {
        assert!(is_side_ambiguous(t(3, 7), OpenEnds { left: 3, right: 7 }));
        assert!(!is_side_ambiguous(t(4, 4), OpenEnds { left: 4, right: 4 }));
        assert!(!is_side_ambiguous(t(4, 6), OpenEnds { left: 4, right: 4 }));
        assert!(!is_side_ambiguous(t(3, 5), OpenEnds { left: 3, right: 7 }));
    }
}
