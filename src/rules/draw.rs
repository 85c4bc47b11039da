//! Board-full detection.
//!
//! The engine tracks a move counter and compares it against N squared,
//! so the hot path never rescans the board. The scan here is the
//! ground truth the counter is checked against in debug builds, and
//! what invariant checks and tests use directly.

use crate::types::{Board, CellState};
use tracing::instrument;

/// Checks if every cell on the board is occupied.
///
/// A full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != CellState::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::completes_line;
    use super::*;
    use crate::coord::Coord;
    use crate::types::Mark;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board
            .set(Coord::new(1, 1), CellState::Occupied(Mark::X))
            .unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3);
        for row in 0..3 {
            for column in 0..3 {
                board
                    .set(Coord::new(row, column), CellState::Occupied(Mark::X))
                    .unwrap();
            }
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_drawn_position() {
        // x o x / o x x / o x o - full, no line for either mark.
        let mut board = Board::new(3);
        let layout = [
            (0, 0, Mark::X),
            (0, 1, Mark::O),
            (0, 2, Mark::X),
            (1, 0, Mark::O),
            (1, 1, Mark::X),
            (1, 2, Mark::X),
            (2, 0, Mark::O),
            (2, 1, Mark::X),
            (2, 2, Mark::O),
        ];
        for (row, column, mark) in layout {
            board
                .set(Coord::new(row, column), CellState::Occupied(mark))
                .unwrap();
        }
        assert!(is_full(&board));
        for (row, column, mark) in layout {
            assert!(!completes_line(&board, Coord::new(row, column), mark));
        }
    }
}
