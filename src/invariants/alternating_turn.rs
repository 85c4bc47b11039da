//! Alternating turn invariant: marks alternate on every accepted move.

use super::Invariant;
use crate::engine::MatchEngine;

/// Invariant: accepted moves alternate strictly between the two marks.
///
/// The first mover is whatever `start` chose, so alternation is
/// anchored to the history head rather than to a fixed mark. While the
/// match is in progress, the engine's next-to-move mark must be the
/// opponent of the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchEngine> for AlternatingTurnInvariant {
    fn holds(engine: &MatchEngine) -> bool {
        let history = engine.history();

        for window in history.windows(2) {
            if window[0].mark == window[1].mark {
                return false;
            }
        }

        match (engine.to_move(), history.last()) {
            (Some(next), Some(last)) => next == last.mark.opponent(),
            // Before the first move, any first mover is consistent;
            // once ended there is no turn to check.
            _ => true,
        }
    }

    fn description() -> &'static str {
        "Turn alternates strictly between the two marks"
    }
}
