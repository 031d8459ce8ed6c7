//! Command rejection errors.
//!
//! Every rejected command leaves the round untouched. Engine invariant
//! violations (chain discontinuity, bad deals) are asserts, not variants
//! here — they indicate a bug, not a bad command.

use crate::core::{Seat, Tile};
use crate::rules::Side;

/// Why a command against the round was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundError {
    /// A pip value outside 0..=9 was given to `Tile::new`.
    PipOutOfRange { a: u8, b: u8 },
    /// A string did not parse as `[a|b]` tile notation.
    BadTileNotation(String),
    /// The command requires an in-progress round.
    NotPlaying,
    /// `start` was called while a round is in progress.
    RoundInProgress,
    /// The acting seat is not the active seat.
    OutOfTurn { seat: Seat, active: Seat },
    /// The seat does not hold the tile it tried to play.
    TileNotInHand { seat: Seat, tile: Tile },
    /// The tile does not match the open end on the chosen side.
    IllegalPlacement { tile: Tile, side: Side },
    /// A pass was attempted while a legal move exists.
    PassWithLegalMove { seat: Seat },
    /// A pass was attempted on the opening move.
    PassOnOpenBoard,
    /// A scheduled turn handle outlived the state it was issued for.
    StaleTurn { generation: u64, current: u64 },
}

impl std::fmt::Display for RoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundError::PipOutOfRange { a, b } => {
                write!(f, "pip values out of range for a double-9 tile: ({a}, {b})")
            }
            RoundError::BadTileNotation(s) => write!(f, "cannot parse tile notation: {s:?}"),
            RoundError::NotPlaying => write!(f, "no round in progress"),
            RoundError::RoundInProgress => write!(f, "a round is already in progress"),
            RoundError::OutOfTurn { seat, active } => {
                write!(f, "{seat} acted out of turn (active: {active})")
            }
            RoundError::TileNotInHand { seat, tile } => {
                write!(f, "{seat} does not hold {tile}")
            }
            RoundError::IllegalPlacement { tile, side } => {
                write!(f, "{tile} does not match the {side} end")
            }
            RoundError::PassWithLegalMove { seat } => {
                write!(f, "{seat} passed while holding a legal move")
            }
            RoundError::PassOnOpenBoard => write!(f, "cannot pass on the opening move"),
            RoundError::StaleTurn { generation, current } => {
                write!(f, "stale scheduled turn (generation {generation}, round at {current})")
            }
        }
    }
}

impl std::error::Error for RoundError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_human_readable() {
        let err = RoundError::OutOfTurn {
            seat: Seat::new(2),
            active: Seat::new(0),
        };
        assert_eq!(err.to_string(), "Seat 2 acted out of turn (active: Seat 0)");

        let err = RoundError::StaleTurn { generation: 3, current: 5 };
        assert!(err.to_string().contains("stale"));
    }
}
