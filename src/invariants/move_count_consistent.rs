//! Move count invariant: the counter matches the board and history.

use super::Invariant;
use crate::engine::MatchEngine;

/// Invariant: the move counter equals the number of occupied cells,
/// which equals the number of recorded moves.
///
/// The engine relies on the counter for its board-full check, so a
/// drifting counter would turn live matches into phantom draws.
pub struct MoveCountConsistentInvariant;

impl Invariant<MatchEngine> for MoveCountConsistentInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let occupied = engine.board_ref().occupied();
        engine.move_count() == occupied && engine.history().len() == occupied
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied cells"
    }
}
