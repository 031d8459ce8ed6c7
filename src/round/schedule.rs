//! Turn pacing as cancellable handles.
//!
//! The engine never sleeps. After every transition the driver (UI loop,
//! test harness) asks [`Round::pending_turn`] what should happen next and
//! when: a bot's move, or a human's forced pass. The handle carries the
//! round's generation; by the time the driver has waited out the delay the
//! round may have moved on (restart, a faster input path), in which case
//! [`Round::dispatch`] rejects the handle as stale — a provable no-op
//! instead of a timer acting on dead state.
//!
//! Human turns with at least one legal move produce no pending turn; the
//! engine waits for `play`/`pass` input.

use std::time::Duration;

use crate::core::Seat;
use crate::rules::CandidateMove;

use super::state::{Round, RoundStatus};
use super::RoundError;

/// Pause before a bot acts. Pacing for legibility, not a rules constraint.
pub const BOT_TURN_DELAY: Duration = Duration::from_millis(900);

/// Shorter pause before a human's forced pass is auto-registered.
pub const FORCED_PASS_DELAY: Duration = Duration::from_millis(600);

/// What the scheduled turn will do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnKind {
    /// Invoke the bot chooser for the seat (play or pass).
    Bot,
    /// Auto-register the human seat's forced pass.
    ForcedPass,
}

/// A scheduled turn: wait out `delay`, then hand the whole handle back to
/// [`Round::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTurn {
    pub seat: Seat,
    pub kind: TurnKind,
    pub delay: Duration,
    /// Round generation this handle was issued at.
    pub generation: u64,
}

/// What a dispatched turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    Played(CandidateMove),
    Passed,
}

impl Round {
    /// The turn to schedule next, if the engine owes one.
    ///
    /// `None` when the round is not in progress, or when the active seat is
    /// a human with at least one legal move (the engine awaits input).
    #[must_use]
    pub fn pending_turn(&self) -> Option<PendingTurn> {
        if self.status() != RoundStatus::Playing {
            return None;
        }
        let seat = self.active_seat();

        if self.player(seat).is_bot {
            return Some(PendingTurn {
                seat,
                kind: TurnKind::Bot,
                delay: BOT_TURN_DELAY,
                generation: self.generation(),
            });
        }

        if self.legal_moves_for(seat).is_empty() {
            return Some(PendingTurn {
                seat,
                kind: TurnKind::ForcedPass,
                delay: FORCED_PASS_DELAY,
                generation: self.generation(),
            });
        }

        None
    }

    /// Execute a scheduled turn after its delay has elapsed.
    ///
    /// Rejects the handle with `RoundError::StaleTurn` if the round has
    /// transitioned since it was issued.
    pub fn dispatch(&mut self, pending: PendingTurn) -> Result<Dispatched, RoundError> {
        if pending.generation != self.generation() {
            return Err(RoundError::StaleTurn {
                generation: pending.generation,
                current: self.generation(),
            });
        }

        match pending.kind {
            TurnKind::Bot => match self.bot_move(pending.seat) {
                Some(mv) => {
                    self.play(pending.seat, mv.tile, mv.side)?;
                    Ok(Dispatched::Played(mv))
                }
                None => {
                    self.pass(pending.seat)?;
                    Ok(Dispatched::Passed)
                }
            },
            TurnKind::ForcedPass => {
                self.pass(pending.seat)?;
                Ok(Dispatched::Passed)
            }
        }
    }

    /// Drive scheduled turns (ignoring delays) until the round needs human
    /// input or ends. Returns the number of turns dispatched.
    ///
    /// Test and headless-simulation convenience; a real UI waits out each
    /// handle's `delay` instead.
    pub fn run_pending(&mut self) -> Result<usize, RoundError> {
        let mut dispatched = 0;
        while let Some(pending) = self.pending_turn() {
            self.dispatch(pending)?;
            dispatched += 1;
        }
        Ok(dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::round::RoundBuilder;

    fn all_bots(seed: u64) -> Round {
        let mut builder = RoundBuilder::new();
        for seat in Seat::all() {
            builder = builder.player(seat, format!("Bot {}", seat.index()), true);
        }
        let mut round = builder.seed(seed).build();
        round.start().unwrap();
        round
    }

    #[test]
    fn test_bot_turn_is_pending_after_start() {
        let round = all_bots(42);
        let pending = round.pending_turn().unwrap();

        assert_eq!(pending.kind, TurnKind::Bot);
        assert_eq!(pending.seat, round.active_seat());
        assert_eq!(pending.delay, BOT_TURN_DELAY);
        assert_eq!(pending.generation, round.generation());
    }

    #[test]
    fn test_stale_handle_is_rejected() {
        let mut round = all_bots(42);
        let pending = round.pending_turn().unwrap();

        round.dispatch(pending).unwrap();

        // The same handle again: the round has moved on.
        let err = round.dispatch(pending).unwrap_err();
        assert!(matches!(err, RoundError::StaleTurn { .. }));
    }

    #[test]
    fn test_bots_play_a_full_round() {
        let mut round = all_bots(7);
        let turns = round.run_pending().unwrap();

        assert_eq!(round.status(), RoundStatus::Over);
        assert!(round.winner().is_some());
        assert!(turns > 0);
        assert!(round.pending_turn().is_none());
    }

    #[test]
    fn test_human_with_moves_has_no_pending_turn() {
        // Default table: seat 0 is human.
        let mut round = RoundBuilder::new().seed(1).build();
        round.start().unwrap();
        round.run_pending().unwrap();

        if round.status() == RoundStatus::Playing {
            // Stopped on the human's turn with a legal move available.
            assert!(!round.player(round.active_seat()).is_bot);
            assert!(!round.legal_moves_for(round.active_seat()).is_empty());
            assert!(round.pending_turn().is_none());
        }
    }

    #[test]
    fn test_restart_invalidates_outstanding_handle() {
        let mut round = all_bots(3);
        let pending = round.pending_turn().unwrap();

        // A restart (new deal) lands before the timer fires.
        round.run_pending().unwrap();
        round.start().unwrap();

        let err = round.dispatch(pending).unwrap_err();
        assert!(matches!(err, RoundError::StaleTurn { .. }));
    }

    #[test]
    fn test_no_pending_when_over() {
        let mut round = all_bots(5);
        round.run_pending().unwrap();
        assert!(round.pending_turn().is_none());
    }
}
