//! Domino tiles and the double-9 set.
//!
//! A tile is an unordered pair of pip values in 0..=9. Internally it is
//! stored canonically as `(low, high)` with `low <= high`, so symmetric
//! equality and hashing fall out of the derived impls. Orientation (which
//! pip faces left on the table) is a presentation concern and lives in
//! `round::visual`, never here.

use serde::{Deserialize, Serialize};

use crate::round::RoundError;

/// Highest pip value in the double-9 set.
pub const MAX_PIP: u8 = 9;

/// Number of distinct tiles in the double-9 set (combinations with
/// repetition of 0..=9).
pub const SET_SIZE: usize = 55;

/// A domino tile: an unordered pair of pip values in 0..=9.
///
/// Always normalized so `low <= high`. Construct via [`Tile::new`] (checked)
/// or [`Tile::full_set`]; the fields are private to keep the normalization
/// invariant airtight.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Tile {
    low: u8,
    high: u8,
}

impl Tile {
    /// Create a tile from two pip values in either order.
    ///
    /// Returns `RoundError::PipOutOfRange` if either value exceeds 9.
    pub fn new(a: u8, b: u8) -> Result<Self, RoundError> {
        if a > MAX_PIP || b > MAX_PIP {
            return Err(RoundError::PipOutOfRange { a, b });
        }
        Ok(if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        })
    }

    /// Both pip values, low first.
    #[must_use]
    pub const fn pips(self) -> (u8, u8) {
        (self.low, self.high)
    }

    /// The smaller pip value.
    #[must_use]
    pub const fn low(self) -> u8 {
        self.low
    }

    /// The larger pip value.
    #[must_use]
    pub const fn high(self) -> u8 {
        self.high
    }

    /// Sum of the two pip values, in 0..=18.
    #[must_use]
    pub const fn pip_sum(self) -> u8 {
        self.low + self.high
    }

    /// True when both pip values are equal.
    #[must_use]
    pub const fn is_double(self) -> bool {
        self.low == self.high
    }

    /// True when either pip equals `value`.
    #[must_use]
    pub const fn has(self, value: u8) -> bool {
        self.low == value || self.high == value
    }

    /// The pip opposite `value`, or `None` if the tile does not contain it.
    ///
    /// For a double `[v|v]`, `other_end(v)` is `Some(v)`.
    #[must_use]
    pub fn other_end(self, value: u8) -> Option<u8> {
        if self.low == value {
            Some(self.high)
        } else if self.high == value {
            Some(self.low)
        } else {
            None
        }
    }

    /// The complete double-9 set: all 55 tiles in canonical order
    /// (`[0|0], [0|1], .., [0|9], [1|1], .., [9|9]`). Pure, no randomness.
    #[must_use]
    pub fn full_set() -> Vec<Tile> {
        let mut deck = Vec::with_capacity(SET_SIZE);
        for i in 0..=MAX_PIP {
            for j in i..=MAX_PIP {
                deck.push(Tile { low: i, high: j });
            }
        }
        deck
    }

    /// Parse the stable log notation `[a|b]` (boundary/tooling only, not a
    /// hot path).
    pub fn parse(s: &str) -> Result<Self, RoundError> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|t| t.strip_suffix(']'))
            .ok_or_else(|| RoundError::BadTileNotation(s.to_string()))?;
        let (a, b) = inner
            .split_once('|')
            .ok_or_else(|| RoundError::BadTileNotation(s.to_string()))?;
        let a: u8 = a
            .trim()
            .parse()
            .map_err(|_| RoundError::BadTileNotation(s.to_string()))?;
        let b: u8 = b
            .trim()
            .parse()
            .map_err(|_| RoundError::BadTileNotation(s.to_string()))?;
        Tile::new(a, b)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.low, self.high)
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile[{}|{}]", self.low, self.high)
    }
}

/// Sum of pip values over a hand.
#[must_use]
pub fn hand_pips(hand: &[Tile]) -> u32 {
    hand.iter().map(|t| u32::from(t.pip_sum())).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_tile_normalizes() {
        let a = Tile::new(3, 5).unwrap();
        let b = Tile::new(5, 3).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.pips(), (3, 5));
        assert_eq!(b.pips(), (3, 5));
    }

    #[test]
    fn test_tile_rejects_out_of_range() {
        assert!(Tile::new(10, 0).is_err());
        assert!(Tile::new(0, 10).is_err());
        assert!(Tile::new(9, 9).is_ok());
    }

    #[test]
    fn test_pip_sum_and_double() {
        let t = Tile::new(4, 7).unwrap();
        assert_eq!(t.pip_sum(), 11);
        assert!(!t.is_double());

        let d = Tile::new(6, 6).unwrap();
        assert_eq!(d.pip_sum(), 12);
        assert!(d.is_double());
    }

    #[test]
    fn test_has_and_other_end() {
        let t = Tile::new(2, 8).unwrap();
        assert!(t.has(2));
        assert!(t.has(8));
        assert!(!t.has(5));
        assert_eq!(t.other_end(2), Some(8));
        assert_eq!(t.other_end(8), Some(2));
        assert_eq!(t.other_end(5), None);

        let d = Tile::new(4, 4).unwrap();
        assert_eq!(d.other_end(4), Some(4));
    }

    #[test]
    fn test_full_set_has_55_distinct_tiles() {
        let deck = Tile::full_set();
        assert_eq!(deck.len(), SET_SIZE);

        let unique: FxHashSet<Tile> = deck.iter().copied().collect();
        assert_eq!(unique.len(), SET_SIZE);

        for tile in &deck {
            assert!(tile.low() <= tile.high());
            assert!(tile.high() <= MAX_PIP);
        }
    }

    #[test]
    fn test_full_set_canonical_order() {
        let deck = Tile::full_set();
        assert_eq!(deck[0], Tile::new(0, 0).unwrap());
        assert_eq!(deck[1], Tile::new(0, 1).unwrap());
        assert_eq!(deck[10], Tile::new(1, 1).unwrap());
        assert_eq!(deck[54], Tile::new(9, 9).unwrap());
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let t = Tile::new(9, 3).unwrap();
        assert_eq!(t.to_string(), "[3|9]");
        assert_eq!(Tile::parse("[3|9]").unwrap(), t);
        assert_eq!(Tile::parse(" [9|3] ").unwrap(), t);
        assert!(Tile::parse("3|9").is_err());
        assert!(Tile::parse("[3-9]").is_err());
        assert!(Tile::parse("[12|0]").is_err());
    }

    #[test]
    fn test_hand_pips() {
        let hand = vec![Tile::new(0, 0).unwrap(), Tile::new(9, 9).unwrap(), Tile::new(2, 3).unwrap()];
        assert_eq!(hand_pips(&hand), 0 + 18 + 5);
        assert_eq!(hand_pips(&[]), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let t = Tile::new(7, 1).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
