//! Opening player and opening tile determination.
//!
//! Doubles are scanned from `[9|9]` down to `[0|0]`, seats in seat order
//! inside each double; the first holder found leads with that double. If no
//! hand holds any double (all ten sit in the boneyard — rare but legal),
//! the lead falls to the single highest-pip-sum tile across all hands,
//! scanning seats then hand order with a strict `>` so the first find wins
//! ties.

use crate::core::{Seat, SeatMap, Tile, MAX_PIP};

/// The opening seat and the tile it must lead with.
///
/// The caller removes `tile` from the seat's hand and seeds the board with
/// it before play begins; the open ends become the tile's two pips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarterPick {
    pub seat: Seat,
    pub tile: Tile,
}

/// Determine the starter from the dealt hands.
///
/// Returns `None` only if every hand is empty, which cannot happen after a
/// valid deal.
#[must_use]
pub fn determine_starter(hands: &SeatMap<Vec<Tile>>) -> Option<StarterPick> {
    // Highest double first, seat order breaking ties within a double.
    for value in (0..=MAX_PIP).rev() {
        for seat in Seat::all() {
            if let Some(&tile) = hands[seat].iter().find(|t| t.is_double() && t.low() == value) {
                return Some(StarterPick { seat, tile });
            }
        }
    }

    // No double dealt: highest pip sum, first found wins ties.
    let mut best: Option<StarterPick> = None;
    let mut best_sum = 0u8;
    for seat in Seat::all() {
        for &tile in &hands[seat] {
            if best.is_none() || tile.pip_sum() > best_sum {
                best = Some(StarterPick { seat, tile });
                best_sum = tile.pip_sum();
            }
        }
    }
    best
}

/// Debug audit for the post-deal state: four hands plus boneyard must
/// partition the 55-tile set exactly.
pub(crate) fn assert_valid_deal(hands: &SeatMap<Vec<Tile>>, boneyard: &[Tile]) {
    use rustc_hash::FxHashSet;

    let mut seen = FxHashSet::default();
    let mut total = 0usize;
    for (_, hand) in hands.iter() {
        total += hand.len();
        for &t in hand {
            assert!(seen.insert(t), "tile {t} dealt twice");
        }
    }
    for &t in boneyard {
        total += 1;
        assert!(seen.insert(t), "tile {t} in boneyard and a hand");
    }
    assert_eq!(total, crate::core::SET_SIZE, "deal does not cover the full set");
}
