//! Core building blocks: tiles, seats, teams, and RNG.
//!
//! Everything here is a plain value type with no knowledge of the round
//! state machine. The rules and bot modules consume these as inputs.

pub mod rng;
pub mod seat;
pub mod tile;

pub use rng::GameRng;
pub use seat::{Seat, SeatMap, Team, SEAT_COUNT};
pub use tile::{hand_pips, Tile, MAX_PIP, SET_SIZE};
