//! Turn-enforcing match engine for N-in-a-row grid marking games.
//!
//! The engine owns the board, the turn, and the match lifecycle. It
//! validates every move, detects line wins and board-full draws, and
//! notifies subscribed observers after each committed mutation.
//!
//! # Example
//!
//! ```
//! use gridmark::{Mark, MatchEngine};
//!
//! # fn main() -> Result<(), gridmark::EngineError> {
//! let mut engine = MatchEngine::new(3)?;
//! engine.start(Mark::X)?;
//! engine.mark(0, 0)?;
//! engine.mark(1, 1)?;
//! let state = engine.mark(0, 1)?;
//! assert!(!state.match_ended());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod coord;
mod engine;
mod error;
mod events;
mod phase;
mod types;

// Public submodule trees
pub mod invariants;
pub mod render;
pub mod rules;

// Crate-level exports - engine
pub use engine::{MatchEngine, MIN_SIZE};

// Crate-level exports - domain types
pub use action::Move;
pub use coord::Coord;
pub use phase::{MatchPhase, Outcome};
pub use types::{Board, CellState, Mark, MatchState};

// Crate-level exports - errors and events
pub use error::EngineError;
pub use events::{MatchEvent, MatchObserver};
