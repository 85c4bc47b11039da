//! Move records.
//!
//! Every accepted move is recorded as a domain value: the mark that was
//! placed and where. The engine keeps these in its per-match history,
//! which the invariant checks replay.

use crate::coord::Coord;
use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// A committed move: a mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a move record.
    pub fn new(mark: Mark, coord: Coord) -> Self {
        Self { mark, coord }
    }

    /// The mark that was placed.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Where the mark was placed.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}
