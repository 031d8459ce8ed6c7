//! The round state machine and its derived views.
//!
//! `Round` is the orchestrator: it owns the authoritative state and calls
//! the pure rules/bot modules. The presentation layer drives it through
//! three commands (`start`, `play`, `pass`), the scheduled-turn handles in
//! [`schedule`], and reads it through [`snapshot`] and [`visual`].

pub mod error;
pub mod schedule;
pub mod snapshot;
pub mod state;
pub mod visual;

pub use error::RoundError;
pub use schedule::{
    Dispatched, PendingTurn, TurnKind, BOT_TURN_DELAY, FORCED_PASS_DELAY,
};
pub use snapshot::{PlayerSnapshot, RoundSnapshot};
pub use state::{
    PlayerInfo, Round, RoundBuilder, RoundStatus, WinReason, WinnerRecord, BONEYARD_SIZE,
    HAND_SIZE,
};
pub use visual::{visual_chain, OrientedTile};
