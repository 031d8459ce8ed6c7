//! Pure rules: legality, starter determination, and scoring.
//!
//! Everything here is a deterministic function of its inputs; the round
//! state machine owns the mutable state and calls in.

pub mod legality;
pub mod scoring;
pub mod starter;

pub use legality::{is_side_ambiguous, legal_moves, CandidateMove, MoveList, OpenEnds, Side};
pub use scoring::{points_against, resolve_tranque, team_pip_totals};
pub use starter::{determine_starter, StarterPick};
