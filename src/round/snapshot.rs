//! Read-only snapshot for the presentation layer.
//!
//! The snapshot is the only thing the UI reads; it never touches `Round`
//! internals. All types serialize with serde so a harness or web frontend
//! can consume JSON directly. The board and log use `im` structures inside
//! the round, so taking a snapshot is cheap.

use serde::{Deserialize, Serialize};

use crate::core::{Seat, SeatMap, Team, Tile};
use crate::rules::OpenEnds;

use super::state::{Round, RoundStatus, WinnerRecord};

/// One seat's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub seat: Seat,
    pub name: String,
    pub is_bot: bool,
    pub team: Team,
    /// UI-visible hand. Order is display order only; the rules treat hands
    /// as multisets.
    pub hand: Vec<Tile>,
}

/// Complete observable state of the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub players: SeatMap<PlayerSnapshot>,
    /// Board chain in spatial left-to-right order.
    pub board: Vec<Tile>,
    pub boneyard: Vec<Tile>,
    pub ends: Option<OpenEnds>,
    pub active_seat: Seat,
    pub status: RoundStatus,
    pub winner: Option<WinnerRecord>,
    pub pass_history: SeatMap<Vec<u8>>,
    /// Ordered, append-only, human-readable entries.
    pub log: Vec<String>,
}

impl Round {
    /// Capture the current observable state.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            players: SeatMap::new(|seat| PlayerSnapshot {
                seat,
                name: self.player(seat).name.clone(),
                is_bot: self.player(seat).is_bot,
                team: seat.team(),
                hand: self.hand(seat).to_vec(),
            }),
            board: self.board().iter().copied().collect(),
            boneyard: self.boneyard().to_vec(),
            ends: self.ends(),
            active_seat: self.active_seat(),
            status: self.status(),
            winner: self.winner().copied(),
            pass_history: self.pass_history().clone(),
            log: self.log().iter().cloned().collect(),
        }
    }
}
