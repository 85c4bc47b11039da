//! The match engine: state storage, move validation, win detection,
//! and notification dispatch.

use crate::action::Move;
use crate::coord::Coord;
use crate::error::EngineError;
use crate::events::{MatchEvent, MatchObserver};
use crate::invariants::{InvariantSet, MatchInvariants};
use crate::phase::{MatchPhase, Outcome};
use crate::rules;
use crate::types::{Board, CellState, Mark, MatchState};
use tracing::{debug, instrument};

/// Minimum board side length. A board smaller than 3 cannot express a
/// line-of-3 win, and N doubles as the required run length.
pub const MIN_SIZE: usize = 3;

/// Turn-enforcing match engine for an N-in-a-row grid marking game.
///
/// The engine is the sole owner and mutator of the board, the turn,
/// the move counter, and the lifecycle phase. Mutation happens only
/// through [`MatchEngine::mark`], [`MatchEngine::start`], and
/// [`MatchEngine::reset`]; queries hand out copies, never views into
/// engine-owned state.
///
/// Single-threaded by design: every operation is a synchronous,
/// run-to-completion state transition with no internal locking. A
/// multi-threaded host must put its own mutual-exclusion boundary
/// around the whole engine.
pub struct MatchEngine {
    board: Board,
    phase: MatchPhase,
    move_count: usize,
    history: Vec<Move>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchEngine {
    /// Creates an engine with an all-empty N by N board.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` is
    /// below [`MIN_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if size < MIN_SIZE {
            return Err(EngineError::InvalidConfiguration(size));
        }
        Ok(Self {
            board: Board::new(size),
            phase: MatchPhase::AwaitingStart,
            move_count: 0,
            history: Vec::new(),
            observers: Vec::new(),
        })
    }

    /// Chooses the first mover and opens the match for moves.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPhase`] unless the engine is in
    /// `AwaitingStart`; starting an already-running match would
    /// silently change the active player.
    #[instrument(skip(self))]
    pub fn start(&mut self, first_mover: Mark) -> Result<(), EngineError> {
        match self.phase {
            MatchPhase::AwaitingStart => {
                self.phase = MatchPhase::InProgress {
                    to_move: first_mover,
                };
                debug!(%first_mover, "match started");
                Ok(())
            }
            _ => Err(EngineError::InvalidPhase),
        }
    }

    /// Places the active mark at (`row`, `column`).
    ///
    /// Accepted moves commit atomically: the mark is written, the move
    /// counter bumped, win detection runs anchored at the new mark,
    /// the phase advances, and only then are observers notified -
    /// `StateUpdated` always, followed by `WinnerDecided` or
    /// `BoardFull` on the terminal move. Rejected moves change nothing
    /// and notify no one.
    ///
    /// # Errors
    ///
    /// In check order: [`EngineError::MatchAlreadyEnded`],
    /// [`EngineError::NoActivePlayer`], [`EngineError::OutOfBounds`],
    /// [`EngineError::CellOccupied`].
    #[instrument(skip(self))]
    pub fn mark(&mut self, row: usize, column: usize) -> Result<MatchState, EngineError> {
        let coord = Coord::new(row, column);
        let mark = match self.phase {
            MatchPhase::Ended { .. } => return Err(EngineError::MatchAlreadyEnded),
            MatchPhase::AwaitingStart => return Err(EngineError::NoActivePlayer),
            MatchPhase::InProgress { to_move } => to_move,
        };
        if !self.board.contains(coord) {
            return Err(EngineError::OutOfBounds(coord));
        }
        if !self.board.is_empty(coord) {
            return Err(EngineError::CellOccupied(coord));
        }

        self.board.set(coord, CellState::Occupied(mark))?;
        self.move_count += 1;
        self.history.push(Move::new(mark, coord));

        if rules::completes_line(&self.board, coord, mark) {
            debug!(%mark, %coord, "line completed");
            self.phase = MatchPhase::Ended {
                outcome: Outcome::Win(mark),
            };
        } else if self.move_count == self.board.capacity() {
            debug_assert!(rules::is_full(&self.board));
            debug!(move_count = self.move_count, "board full");
            self.phase = MatchPhase::Ended {
                outcome: Outcome::Draw,
            };
        } else {
            self.phase = MatchPhase::InProgress {
                to_move: mark.opponent(),
            };
        }

        debug_assert!(MatchInvariants::check_all(self).is_ok());

        let state = self.state();
        self.emit(MatchEvent::StateUpdated {
            board: self.board.clone(),
            move_count: self.move_count,
            state,
        });
        match self.phase {
            MatchPhase::Ended {
                outcome: Outcome::Win(mark),
            } => self.emit(MatchEvent::WinnerDecided { mark }),
            MatchPhase::Ended {
                outcome: Outcome::Draw,
            } => self.emit(MatchEvent::BoardFull { state }),
            _ => {}
        }

        Ok(state)
    }

    /// Reinitializes the match: fresh board of the same size, move
    /// counter zeroed, turn unset, phase back to `AwaitingStart`.
    ///
    /// Always succeeds and begins a new match generation. Snapshots
    /// handed out earlier are unaffected; subscribed observers remain
    /// subscribed.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.size());
        self.phase = MatchPhase::AwaitingStart;
        self.move_count = 0;
        self.history.clear();
        debug!("match reset");
    }

    /// Result snapshot: the winner if any, and whether the match ended.
    pub fn state(&self) -> MatchState {
        match self.phase {
            MatchPhase::Ended { outcome } => MatchState::new(outcome.winner(), true),
            _ => MatchState::new(None, false),
        }
    }

    /// Deep copy of the board, sufficient for a renderer to draw.
    ///
    /// Mutating the returned board never affects the engine.
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Registers an observer. Notifications are delivered in
    /// subscription order.
    pub fn subscribe(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Marks placed so far this match generation.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// The mark expected to move next, while the match is in progress.
    pub fn to_move(&self) -> Option<Mark> {
        match self.phase {
            MatchPhase::InProgress { to_move } => Some(to_move),
            _ => None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Accepted moves this match generation, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Borrow of the live board for rule checks and invariants.
    pub(crate) fn board_ref(&self) -> &Board {
        &self.board
    }

    fn emit(&mut self, event: MatchEvent) {
        for observer in &mut self.observers {
            observer.notify(&event);
        }
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("size", &self.board.size())
            .field("phase", &self.phase)
            .field("move_count", &self.move_count)
            .field("observers", &self.observers.len())
            .finish()
    }
}
