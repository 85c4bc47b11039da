//! Monotonic board invariant: cells never change once occupied.

use super::Invariant;
use crate::engine::MatchEngine;
use crate::types::{Board, CellState};

/// Invariant: occupied cells are never overwritten or cleared.
///
/// Verified by replaying the move history onto a fresh board and
/// comparing the result with the live board. Any overwrite, cleared
/// cell, or mark that bypassed the history shows up as a mismatch.
pub struct MonotonicBoardInvariant;

impl Invariant<MatchEngine> for MonotonicBoardInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let mut reconstructed = Board::new(engine.size());

        for mov in engine.history() {
            // A recorded move must have targeted an empty cell.
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            if reconstructed
                .set(mov.coord, CellState::Occupied(mov.mark))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.board_ref()
    }

    fn description() -> &'static str {
        "Occupied cells never change for the lifetime of a match"
    }
}
