//! The round state machine.
//!
//! `Round` owns all authoritative state: hands, board chain, open ends,
//! boneyard, turn pointer, pass history, status, winner, and the game log.
//! It mutates only through `start`, `play`, and `pass` (plus the scheduled
//! `dispatch` in `round::schedule`, which reduces to those). Rejected
//! commands return a `RoundError` and leave the state untouched.
//!
//! The board vector is kept in spatial left-to-right order: left plays
//! push to the front, right plays to the back. Orientation of each tile is
//! derived in `round::visual`.

use im::Vector;

use crate::bot;
use crate::core::{GameRng, Seat, SeatMap, Team, Tile};
use crate::rules::{
    determine_starter, legal_moves, points_against, resolve_tranque, starter::assert_valid_deal,
    CandidateMove, MoveList, OpenEnds, Side,
};

use super::RoundError;

/// Tiles dealt to each seat.
pub const HAND_SIZE: usize = 10;

/// Tiles left undealt (never drawn from in this ruleset).
pub const BONEYARD_SIZE: usize = 15;

/// Where the round is in its lifecycle. Monotonic within a round;
/// `start` resets everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RoundStatus {
    Idle,
    Playing,
    Over,
}

/// How a round was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WinReason {
    /// A player emptied their hand.
    Domino,
    /// No seat had a legal move (locked board).
    Tranque,
}

/// The round outcome: winning team, how, and the points it scored (the
/// losing partnership's remaining pips).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WinnerRecord {
    pub team: Team,
    pub reason: WinReason,
    pub points: u32,
}

/// Identity of a seat's occupant.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerInfo {
    pub name: String,
    pub is_bot: bool,
}

/// Builder for a table: who sits where, and an optional deal seed.
pub struct RoundBuilder {
    players: SeatMap<PlayerInfo>,
    seed: Option<u64>,
}

impl Default for RoundBuilder {
    fn default() -> Self {
        let names = ["You", "Miriam", "Pancho", "Celia"];
        Self {
            players: SeatMap::new(|seat| PlayerInfo {
                name: names[seat.index()].to_string(),
                is_bot: seat.index() != 0,
            }),
            seed: None,
        }
    }
}

impl RoundBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the occupant of a seat.
    #[must_use]
    pub fn player(mut self, seat: Seat, name: impl Into<String>, is_bot: bool) -> Self {
        self.players[seat] = PlayerInfo { name: name.into(), is_bot };
        self
    }

    /// Fix the deal RNG seed (tests, replays). Without it the deal is
    /// entropy-seeded.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the table in `Idle` status; call [`Round::start`] to deal.
    #[must_use]
    pub fn build(self) -> Round {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Round {
            players: self.players,
            hands: SeatMap::with_default(),
            board: Vector::new(),
            ends: None,
            boneyard: Vec::new(),
            active: Seat::new(0),
            pass_history: SeatMap::with_default(),
            status: RoundStatus::Idle,
            winner: None,
            last_placer: None,
            log: Vector::new(),
            generation: 0,
            rng,
        }
    }
}

/// A full round of partnership double-9 dominoes.
pub struct Round {
    players: SeatMap<PlayerInfo>,
    hands: SeatMap<Vec<Tile>>,
    /// Spatial left-to-right chain order (NOT play order).
    board: Vector<Tile>,
    ends: Option<OpenEnds>,
    boneyard: Vec<Tile>,
    active: Seat,
    /// Per seat: open-end values the seat failed to match when passing.
    pass_history: SeatMap<Vec<u8>>,
    status: RoundStatus,
    winner: Option<WinnerRecord>,
    /// Seat that placed the most recent board tile (tranque tie-break).
    last_placer: Option<Seat>,
    log: Vector<String>,
    /// Bumped on every successful transition; stale scheduled turns are
    /// detected against it.
    generation: u64,
    rng: GameRng,
}

impl Round {
    // === Commands ===

    /// Deal a fresh round. Valid from `Idle` or `Over`.
    pub fn start(&mut self) -> Result<(), RoundError> {
        if self.status == RoundStatus::Playing {
            return Err(RoundError::RoundInProgress);
        }

        let mut deck = Tile::full_set();
        self.rng.shuffle(&mut deck);

        self.hands = SeatMap::new(|seat| {
            deck[seat.index() * HAND_SIZE..(seat.index() + 1) * HAND_SIZE].to_vec()
        });
        self.boneyard = deck[4 * HAND_SIZE..].to_vec();
        debug_assert_eq!(self.boneyard.len(), BONEYARD_SIZE);
        assert_valid_deal(&self.hands, &self.boneyard);

        let pick = determine_starter(&self.hands)
            .expect("dealt hands cannot all be empty");
        let hand = &mut self.hands[pick.seat];
        let idx = hand
            .iter()
            .position(|&t| t == pick.tile)
            .expect("starter tile comes from the starter's hand");
        hand.remove(idx);

        self.board = Vector::unit(pick.tile);
        self.ends = Some(OpenEnds { left: pick.tile.low(), right: pick.tile.high() });
        self.active = pick.seat.next();
        self.pass_history = SeatMap::with_default();
        self.winner = None;
        self.last_placer = Some(pick.seat);
        self.log = Vector::new();
        self.status = RoundStatus::Playing;
        self.generation += 1;

        let name = self.players[pick.seat].name.clone();
        self.push_log(format!("{name} leads the round with {}", pick.tile));

        // A lock straight out of the deal is possible when every tile
        // matching the lead sits in the boneyard.
        self.evaluate_round_end(pick.seat);
        Ok(())
    }

    /// Play `tile` from `seat`'s hand onto `side`.
    pub fn play(&mut self, seat: Seat, tile: Tile, side: Side) -> Result<(), RoundError> {
        if self.status != RoundStatus::Playing {
            return Err(RoundError::NotPlaying);
        }
        if seat != self.active {
            return Err(RoundError::OutOfTurn { seat, active: self.active });
        }
        let Some(idx) = self.hands[seat].iter().position(|&t| t == tile) else {
            return Err(RoundError::TileNotInHand { seat, tile });
        };
        let candidate = CandidateMove { tile, side };
        if !legal_moves(&self.hands[seat], self.ends).contains(&candidate) {
            return Err(RoundError::IllegalPlacement { tile, side });
        }

        // All preconditions hold; compute the end update before mutating.
        let new_ends = match self.ends {
            None => OpenEnds { left: tile.low(), right: tile.high() },
            Some(ends) => {
                let open = ends.value(side);
                let carried = tile
                    .other_end(open)
                    .expect("legality guarantees the tile touches the open end");
                match side {
                    Side::Left => OpenEnds { left: carried, ..ends },
                    Side::Right => OpenEnds { right: carried, ..ends },
                }
            }
        };

        self.hands[seat].remove(idx);
        match side {
            Side::Left => self.board.push_front(tile),
            Side::Right => self.board.push_back(tile),
        }
        self.ends = Some(new_ends);
        self.last_placer = Some(seat);
        self.active = seat.next();
        self.generation += 1;
        debug_assert!(self.chain_is_connected(), "board chain discontinuity");

        let name = self.players[seat].name.clone();
        self.push_log(format!("{name} played {tile} on the {side}"));

        self.evaluate_round_end(seat);
        Ok(())
    }

    /// Register a forced pass for `seat`.
    pub fn pass(&mut self, seat: Seat) -> Result<(), RoundError> {
        if self.status != RoundStatus::Playing {
            return Err(RoundError::NotPlaying);
        }
        if seat != self.active {
            return Err(RoundError::OutOfTurn { seat, active: self.active });
        }
        let Some(ends) = self.ends else {
            return Err(RoundError::PassOnOpenBoard);
        };
        if !legal_moves(&self.hands[seat], self.ends).is_empty() {
            return Err(RoundError::PassWithLegalMove { seat });
        }

        self.pass_history[seat].push(ends.left);
        if ends.right != ends.left {
            self.pass_history[seat].push(ends.right);
        }
        self.active = seat.next();
        self.generation += 1;

        let name = self.players[seat].name.clone();
        self.push_log(format!("{name} passed"));

        self.evaluate_round_end(seat);
        Ok(())
    }

    // === Queries ===

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    #[must_use]
    pub fn active_seat(&self) -> Seat {
        self.active
    }

    #[must_use]
    pub fn ends(&self) -> Option<OpenEnds> {
        self.ends
    }

    /// The board chain in spatial left-to-right order.
    #[must_use]
    pub fn board(&self) -> &Vector<Tile> {
        &self.board
    }

    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Tile] {
        &self.hands[seat]
    }

    #[must_use]
    pub fn boneyard(&self) -> &[Tile] {
        &self.boneyard
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> &PlayerInfo {
        &self.players[seat]
    }

    #[must_use]
    pub fn winner(&self) -> Option<&WinnerRecord> {
        self.winner.as_ref()
    }

    #[must_use]
    pub fn pass_history(&self) -> &SeatMap<Vec<u8>> {
        &self.pass_history
    }

    /// Ordered, append-only, human-readable log entries.
    #[must_use]
    pub fn log(&self) -> &Vector<String> {
        &self.log
    }

    /// Current state generation; bumped on every successful transition.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Every legal (tile, side) play for `seat` against the current ends.
    #[must_use]
    pub fn legal_moves_for(&self, seat: Seat) -> MoveList {
        legal_moves(&self.hands[seat], self.ends)
    }

    /// True when `seat` playing `tile` requires an explicit side choice:
    /// the tile fits both ends and the end values differ.
    #[must_use]
    pub fn needs_side_choice(&self, seat: Seat, tile: Tile) -> bool {
        self.hands[seat].contains(&tile)
            && self
                .ends
                .is_some_and(|ends| crate::rules::is_side_ambiguous(tile, ends))
    }

    // === Internals ===

    pub(super) fn bot_move(&self, seat: Seat) -> Option<CandidateMove> {
        bot::choose_move(
            &self.hands[seat],
            self.ends,
            &self.pass_history,
            seat.next(),
        )
    }

    fn push_log(&mut self, entry: String) {
        log::debug!("{entry}");
        self.log.push_back(entry);
    }

    /// Check the two round-end conditions after `acted` finished a turn.
    fn evaluate_round_end(&mut self, acted: Seat) {
        if self.hands[acted].is_empty() {
            let team = acted.team();
            let name = self.players[acted].name.clone();
            self.push_log(format!("{name} dominoed!"));
            self.finish(team, WinReason::Domino);
            return;
        }

        let locked = !self.board.is_empty()
            && Seat::all().all(|s| legal_moves(&self.hands[s], self.ends).is_empty());
        if locked {
            let last = self
                .last_placer
                .expect("a non-empty board always has a last placer");
            let team = resolve_tranque(&self.hands, last);
            self.push_log("Tranque! No seat can play".to_string());
            self.finish(team, WinReason::Tranque);
        }
    }

    fn finish(&mut self, team: Team, reason: WinReason) {
        let points = points_against(&self.hands, team);
        self.winner = Some(WinnerRecord { team, reason, points });
        self.status = RoundStatus::Over;
        self.generation += 1;
        self.push_log(format!("{team} wins {points} points"));
    }

    /// Walk the chain left to right carrying the matched pip forward.
    fn chain_is_connected(&self) -> bool {
        let Some(ends) = self.ends else {
            return self.board.is_empty();
        };
        let mut expected = ends.left;
        for &tile in &self.board {
            match tile.other_end(expected) {
                Some(carry) => expected = carry,
                None => return false,
            }
        }
        expected == ends.right
    }
}
