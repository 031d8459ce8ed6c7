//! Greedy single-ply bot.
//!
//! Scores every legal candidate and plays the strictly highest:
//!
//! - base: the tile's pip sum (shed heavy tiles first)
//! - `+25` when the play exposes a value the next seat has already passed
//!   on (deliberate block)
//! - `+10` when the tile is a double (shed doubles early)
//!
//! Ties keep the first candidate in enumeration order. No lookahead, no
//! hand tracking beyond the pass-history signal — the weights and the
//! tie-break are part of the engine's observable behavior and are pinned
//! by tests.

use crate::core::{Seat, SeatMap, Tile};
use crate::rules::{legal_moves, CandidateMove, OpenEnds};

/// Bonus for exposing a value the next seat is known to lack.
const BLOCK_BONUS: i32 = 25;

/// Bonus for shedding a double.
const DOUBLE_BONUS: i32 = 10;

/// Pick the bot's play, or `None` when it must pass.
#[must_use]
pub fn choose_move(
    hand: &[Tile],
    ends: Option<OpenEnds>,
    pass_history: &SeatMap<Vec<u8>>,
    next_seat: Seat,
) -> Option<CandidateMove> {
    let moves = legal_moves(hand, ends);

    match moves.len() {
        0 => None,
        1 => Some(moves[0]),
        _ => {
            let mut best = moves[0];
            let mut best_score = score_move(moves[0], ends, &pass_history[next_seat]);
            for &mv in moves.iter().skip(1) {
                let score = score_move(mv, ends, &pass_history[next_seat]);
                if score > best_score {
                    best = mv;
                    best_score = score;
                }
            }
            log::trace!("bot picked {} on the {} (score {best_score})", best.tile, best.side);
            Some(best)
        }
    }
}

fn score_move(mv: CandidateMove, ends: Option<OpenEnds>, next_seat_passes: &[u8]) -> i32 {
    let mut score = i32::from(mv.tile.pip_sum());

    if let Some(ends) = ends {
        if let Some(exposed) = mv.exposed_value(ends) {
            if next_seat_passes.contains(&exposed) {
                score += BLOCK_BONUS;
            }
        }
    }

    if mv.tile.is_double() {
        score += DOUBLE_BONUS;
    }

    score
}
