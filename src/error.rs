//! Engine error taxonomy.
//!
//! Every failure here is a caller mistake, either bad input or a call
//! made in the wrong lifecycle phase. None are transient, so there is
//! no retry policy, and a rejected operation leaves the engine state
//! untouched.

use crate::coord::Coord;

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Board size below the minimum at construction.
    #[display("board size {_0} cannot express a line win; minimum is 3")]
    InvalidConfiguration(usize),

    /// `start` called outside `AwaitingStart`.
    #[display("match already started; reset before choosing a first mover")]
    InvalidPhase,

    /// Move attempted after a terminal outcome.
    #[display("match has already ended")]
    MatchAlreadyEnded,

    /// Move attempted before `start`.
    #[display("no active player; call start first")]
    NoActivePlayer,

    /// Move coordinates outside the board.
    #[display("{_0} is outside the board")]
    OutOfBounds(Coord),

    /// Move targets an already-marked cell.
    #[display("{_0} is already occupied")]
    CellOccupied(Coord),
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_coordinate() {
        let err = EngineError::OutOfBounds(Coord::new(5, 1));
        assert_eq!(err.to_string(), "(5, 1) is outside the board");

        let err = EngineError::CellOccupied(Coord::new(0, 0));
        assert_eq!(err.to_string(), "(0, 0) is already occupied");
    }
}
