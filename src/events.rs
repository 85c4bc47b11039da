//! Match lifecycle notifications.
//!
//! The engine publishes exactly three notification kinds, delivered
//! synchronously after a mutation commits. Observers run inside the
//! triggering `mark` call, in subscription order; an observer that
//! blocks or panics blocks or unwinds into that caller. There is no
//! general event bus behind this, a fixed contract is all the match
//! lifecycle needs.

use crate::types::{Board, Mark, MatchState};
use serde::{Deserialize, Serialize};

/// A state-change notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Fired after every accepted move.
    StateUpdated {
        /// Snapshot of the board after the move.
        board: Board,
        /// Marks placed so far this match generation.
        move_count: usize,
        /// Result snapshot after the move.
        state: MatchState,
    },
    /// Fired once, immediately after `StateUpdated`, on the move that
    /// completes a line.
    WinnerDecided {
        /// The mark that completed the line.
        mark: Mark,
    },
    /// Fired once, immediately after `StateUpdated`, on the move that
    /// fills the last cell without a prior win.
    BoardFull {
        /// Result snapshot; `match_ended` is true, `winner` is none.
        state: MatchState,
    },
}

/// A subscriber to match notifications.
///
/// Renderers, loggers, and test probes implement this; the engine owns
/// the subscriptions and invokes them in subscription order.
pub trait MatchObserver {
    /// Receives one notification.
    fn notify(&mut self, event: &MatchEvent);
}
