//! Match lifecycle phases.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Lifecycle phase of a match.
///
/// Transitions are monotonic within a match generation:
/// `AwaitingStart -> InProgress -> Ended`. Only an explicit reset
/// moves backward, and that begins a fresh generation.
///
/// The active turn lives inside `InProgress`, so there is no turn
/// value to misread while the match is not running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Board empty, no active player chosen yet.
    AwaitingStart,
    /// Moves are accepted; `to_move` places the next mark.
    InProgress {
        /// The mark expected to move next.
        to_move: Mark,
    },
    /// Terminal. No further moves until a reset.
    Ended {
        /// How the match ended.
        outcome: Outcome,
    },
}

/// Outcome of an ended match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a full line.
    Win(Mark),
    /// The board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the match was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(mark) => write!(f, "player {} wins", mark),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
