//! Seats, partnership teams, and per-seat data storage.
//!
//! ## Seat
//!
//! Type-safe seat identifier for the four fixed positions. Turn order is
//! counter-clockwise: seat 0 → 3 → 2 → 1 → 0.
//!
//! ## Team
//!
//! Partnerships alternate by seat: seats 0 & 2 form team 0, seats 1 & 3
//! form team 1.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table. The partnership ruleset is strictly
/// four-handed.
pub const SEAT_COUNT: usize = 4;

/// Seat identifier, 0..=3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seat(u8);

impl Seat {
    /// Create a seat. Panics if `index > 3`; seat indices are fixed by the
    /// ruleset, so a bad index is a programming error.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!((index as usize) < SEAT_COUNT, "seat index out of range: {index}");
        Self(index)
    }

    /// The raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The next seat in turn order (counter-clockwise): 0 → 3 → 2 → 1 → 0.
    #[must_use]
    pub const fn next(self) -> Seat {
        Seat((self.0 + 3) % 4)
    }

    /// The partnership this seat belongs to.
    #[must_use]
    pub const fn team(self) -> Team {
        Team(self.0 % 2)
    }

    /// Iterate over all four seats in seat order (0, 1, 2, 3).
    pub fn all() -> impl Iterator<Item = Seat> {
        (0..SEAT_COUNT as u8).map(Seat)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// Partnership team identifier: team 0 (seats 0 & 2) or team 1 (seats 1 & 3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team(u8);

impl Team {
    /// Create a team. Panics if `index > 1`.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!(index < 2, "team index out of range: {index}");
        Self(index)
    }

    /// The raw team index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing team.
    #[must_use]
    pub const fn opponent(self) -> Team {
        Team(1 - self.0)
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a fixed `[T; 4]`. Use `SeatMap::new()` with a factory
/// function, or `SeatMap::with_default()` when `T: Default`.
///
/// ## Example
///
/// ```
/// use doble_nueve::core::{Seat, SeatMap};
///
/// let mut pips: SeatMap<u32> = SeatMap::new(|seat| seat.index() as u32 * 10);
/// assert_eq!(pips[Seat::new(2)], 20);
///
/// pips[Seat::new(1)] = 7;
/// assert_eq!(pips[Seat::new(1)], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; SEAT_COUNT],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Seat(i as u8))),
        }
    }

    /// Create a new SeatMap with default values.
    #[must_use]
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        self.data.iter().enumerate().map(|(i, v)| (Seat(i as u8), v))
    }

    /// Iterate over (Seat, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Seat, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Seat(i as u8), v))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
