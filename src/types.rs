//! Core domain types for the match engine.

use crate::coord::Coord;
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Mark {
    /// The first player's mark.
    X,
    /// The second player's mark.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// State of a single board cell.
///
/// Absence of a mark is its own variant rather than an optional mark,
/// so matching on cell state is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No mark placed here yet.
    Empty,
    /// Cell claimed by a mark. Never reverts within a match generation.
    Occupied(Mark),
}

/// Square grid of side length N, N fixed at construction.
///
/// Cells are stored in row-major order and addressed by zero-based
/// [`Coord`] values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Creates an all-empty board of the given side length.
    pub(crate) fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![CellState::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N squared).
    pub fn capacity(&self) -> usize {
        self.size * self.size
    }

    /// Whether the coordinate addresses a cell on this board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.column < self.size
    }

    /// Gets the cell at the given coordinate.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        if self.contains(coord) {
            Some(self.cells[self.index(coord)])
        } else {
            None
        }
    }

    /// Checks if the cell at the coordinate is empty.
    ///
    /// Out-of-bounds coordinates are not empty (there is no cell there).
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.cell(coord), Some(CellState::Empty))
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: CellState) -> Result<(), EngineError> {
        if !self.contains(coord) {
            return Err(EngineError::OutOfBounds(coord));
        }
        let idx = self.index(coord);
        self.cells[idx] = cell;
        Ok(())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.size)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| **c != CellState::Empty)
            .count()
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.column
    }
}

/// Read-only snapshot of the match result so far.
///
/// Snapshots are values, not views: a snapshot taken before a reset
/// remains a valid historical record afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    winner: Option<Mark>,
    match_ended: bool,
}

impl MatchState {
    /// Creates a snapshot.
    pub(crate) fn new(winner: Option<Mark>, match_ended: bool) -> Self {
        Self {
            winner,
            match_ended,
        }
    }

    /// The winning mark, if a line has been completed.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Whether the match has reached a terminal outcome.
    pub fn match_ended(&self) -> bool {
        self.match_ended
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involutive() {
        for mark in Mark::iter() {
            assert_eq!(mark.opponent().opponent(), mark);
            assert_ne!(mark.opponent(), mark);
        }
    }

    #[test]
    fn test_mark_glyphs() {
        assert_eq!(Mark::X.to_string(), "x");
        assert_eq!(Mark::O.to_string(), "o");
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(4);
        assert_eq!(board.size(), 4);
        assert_eq!(board.capacity(), 16);
        assert_eq!(board.occupied(), 0);
        assert!(board.cells().iter().all(|c| *c == CellState::Empty));
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new(3);
        let coord = Coord::new(1, 2);
        board.set(coord, CellState::Occupied(Mark::X)).unwrap();
        assert_eq!(board.cell(coord), Some(CellState::Occupied(Mark::X)));
        assert!(!board.is_empty(coord));
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(3);
        let coord = Coord::new(3, 0);
        assert!(board.set(coord, CellState::Occupied(Mark::O)).is_err());
        assert_eq!(board.cell(coord), None);
        assert!(!board.is_empty(coord));
    }

    #[test]
    fn test_rows_iteration() {
        let mut board = Board::new(3);
        board
            .set(Coord::new(2, 0), CellState::Occupied(Mark::O))
            .unwrap();
        let rows: Vec<&[CellState]> = board.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][0], CellState::Occupied(Mark::O));
        assert_eq!(rows[0][0], CellState::Empty);
    }
}
