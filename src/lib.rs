//! # doble-nueve
//!
//! Rules engine and greedy AI opponent for four-player, partnership Cuban
//! double-9 dominoes.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: board rendering, layout, and input wiring are an
//!    external collaborator. It reads [`round::RoundSnapshot`] and the
//!    oriented chain from [`round::visual`], and forwards intent through
//!    three commands: `start`, `play`, `pass`.
//!
//! 2. **Pure rules, one owner of state**: legality, starter determination,
//!    scoring, and the bot are deterministic functions; [`round::Round`]
//!    owns every mutable piece and is the only thing that mutates it.
//!
//! 3. **No sleeping in the engine**: turn pacing is modeled as cancellable
//!    [`round::PendingTurn`] handles keyed to a state generation, so a
//!    stale timer firing after a restart is a rejected no-op.
//!
//! ## Modules
//!
//! - `core`: tiles, the 55-tile set, seats, teams, RNG
//! - `rules`: legal moves, starter determination, scoring, tranque
//!   resolution
//! - `bot`: the greedy single-ply move chooser
//! - `round`: the state machine, scheduling handles, snapshots, and the
//!   oriented board view

pub mod bot;
pub mod core;
pub mod round;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{GameRng, Seat, SeatMap, Team, Tile};

pub use crate::rules::{
    determine_starter, is_side_ambiguous, legal_moves, points_against, resolve_tranque,
    team_pip_totals, CandidateMove, MoveList, OpenEnds, Side, StarterPick,
};

pub use crate::bot::choose_move;

pub use crate::round::{
    Dispatched, OrientedTile, PendingTurn, PlayerInfo, PlayerSnapshot, Round, RoundBuilder,
    RoundError, RoundSnapshot, RoundStatus, TurnKind, WinReason, WinnerRecord,
};
