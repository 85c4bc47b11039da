//! Win detection.
//!
//! Only lines through the cell just marked can have just become
//! complete, so the check is anchored there: the target's row, the
//! target's column, and both full diagonals. Four O(N) scans per move,
//! never a full-board sweep.

use crate::coord::Coord;
use crate::types::{Board, CellState, Mark};
use tracing::instrument;

/// Checks whether the mark just placed at `coord` completed a line.
///
/// The diagonals are scanned cell by cell regardless of whether the
/// target lies on them; the run length is the board's side length N.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, coord: Coord, mark: Mark) -> bool {
    row_complete(board, coord.row, mark)
        || column_complete(board, coord.column, mark)
        || main_diagonal_complete(board, mark)
        || anti_diagonal_complete(board, mark)
}

fn row_complete(board: &Board, row: usize, mark: Mark) -> bool {
    (0..board.size()).all(|i| board.cell(Coord::new(row, i)) == Some(CellState::Occupied(mark)))
}

fn column_complete(board: &Board, column: usize, mark: Mark) -> bool {
    (0..board.size()).all(|i| board.cell(Coord::new(i, column)) == Some(CellState::Occupied(mark)))
}

fn main_diagonal_complete(board: &Board, mark: Mark) -> bool {
    (0..board.size()).all(|i| board.cell(Coord::new(i, i)) == Some(CellState::Occupied(mark)))
}

fn anti_diagonal_complete(board: &Board, mark: Mark) -> bool {
    let n = board.size();
    (0..n).all(|i| board.cell(Coord::new(n - 1 - i, i)) == Some(CellState::Occupied(mark)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Mark)]) -> Board {
        let mut board = Board::new(size);
        for &(row, column, mark) in marks {
            board
                .set(Coord::new(row, column), CellState::Occupied(mark))
                .unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_no_line() {
        let board = Board::new(3);
        assert!(!completes_line(&board, Coord::new(0, 0), Mark::X));
    }

    #[test]
    fn test_top_row_win() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::X)]);
        assert!(completes_line(&board, Coord::new(0, 2), Mark::X));
    }

    #[test]
    fn test_column_win() {
        let board = board_with(3, &[(0, 1, Mark::O), (1, 1, Mark::O), (2, 1, Mark::O)]);
        assert!(completes_line(&board, Coord::new(1, 1), Mark::O));
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_with(3, &[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)]);
        assert!(completes_line(&board, Coord::new(2, 2), Mark::O));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_with(3, &[(0, 2, Mark::X), (1, 1, Mark::X), (2, 0, Mark::X)]);
        assert!(completes_line(&board, Coord::new(1, 1), Mark::X));
    }

    #[test]
    fn test_diagonal_evaluated_from_off_diagonal_anchor() {
        // The anchor (0, 1) sits on neither diagonal; the diagonal's own
        // cells must still be scanned.
        let board = board_with(
            3,
            &[(0, 0, Mark::X), (1, 1, Mark::X), (2, 2, Mark::X), (0, 1, Mark::X)],
        );
        assert!(completes_line(&board, Coord::new(0, 1), Mark::X));
    }

    #[test]
    fn test_incomplete_line_no_win() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X)]);
        assert!(!completes_line(&board, Coord::new(0, 1), Mark::X));
    }

    #[test]
    fn test_mixed_line_no_win() {
        let board = board_with(3, &[(0, 0, Mark::X), (0, 1, Mark::X), (0, 2, Mark::O)]);
        assert!(!completes_line(&board, Coord::new(0, 2), Mark::O));
    }

    #[test]
    fn test_run_length_is_side_length() {
        // On a 4x4 board three in a row is not a win.
        let board = board_with(4, &[(1, 0, Mark::X), (1, 1, Mark::X), (1, 2, Mark::X)]);
        assert!(!completes_line(&board, Coord::new(1, 2), Mark::X));

        let board = board_with(
            4,
            &[(1, 0, Mark::X), (1, 1, Mark::X), (1, 2, Mark::X), (1, 3, Mark::X)],
        );
        assert!(completes_line(&board, Coord::new(1, 3), Mark::X));
    }

    #[test]
    fn test_anti_diagonal_on_larger_board() {
        let board = board_with(
            4,
            &[(3, 0, Mark::O), (2, 1, Mark::O), (1, 2, Mark::O), (0, 3, Mark::O)],
        );
        assert!(completes_line(&board, Coord::new(0, 3), Mark::O));
    }
}
