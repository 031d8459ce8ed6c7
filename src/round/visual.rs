//! Left-to-right oriented view of the board chain.
//!
//! The round stores tiles canonically (low pip first) in spatial order;
//! which pip of each tile faces left is derived here, never stored. The
//! walk starts from the left open end and carries the matched pip inward:
//! the leftmost tile shows the left end outward, each later tile shows the
//! pip matching its left neighbor, and the final outward pip must equal
//! the right open end. Doubles are flagged so the renderer can draw them
//! vertically.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::Tile;
use crate::rules::OpenEnds;

use super::state::Round;

/// A tile with its table orientation resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrientedTile {
    pub tile: Tile,
    /// Pip facing left on the table.
    pub left_pip: u8,
    /// Pip facing right on the table.
    pub right_pip: u8,
    /// Doubles render vertically.
    pub vertical: bool,
}

/// Orient a spatial-order chain against its open ends.
///
/// Empty board gives an empty view. The chain connectivity invariant is
/// asserted: every tile must contain the pip carried in from its left
/// neighbor, and the walk must come out at `ends.right`.
#[must_use]
pub fn visual_chain(board: &Vector<Tile>, ends: Option<OpenEnds>) -> Vec<OrientedTile> {
    let Some(ends) = ends else {
        debug_assert!(board.is_empty());
        return Vec::new();
    };

    let mut chain = Vec::with_capacity(board.len());
    let mut facing = ends.left;
    for &tile in board {
        let carried = tile
            .other_end(facing)
            .expect("board chain discontinuity");
        chain.push(OrientedTile {
            tile,
            left_pip: facing,
            right_pip: carried,
            vertical: tile.is_double(),
        });
        facing = carried;
    }
    debug_assert_eq!(facing, ends.right, "chain does not close on the right end");
    chain
}

impl Round {
    /// The oriented chain for rendering.
    #[must_use]
    pub fn visual_chain(&self) -> Vec<OrientedTile> {
        visual_chain(self.board(), self.ends())
    }
}
