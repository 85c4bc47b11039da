//! Text rendering collaborator.
//!
//! Rendering lives outside the engine contract: it consumes the three
//! notification shapes and draws to any writer. Swapping this for a
//! GUI or a log sink requires no engine changes.

use crate::events::{MatchEvent, MatchObserver};
use crate::types::{Board, CellState};
use std::io::{self, Write};
use tracing::warn;

/// Glyph drawn for an empty cell.
pub const EMPTY_GLYPH: char = '□';

/// Delimiter drawn between cells in a row.
pub const CELL_DELIMITER: char = '|';

/// Formats the board as one line of text per row.
///
/// Each cell renders as its mark's glyph or the placeholder for an
/// empty cell, delimited within a row by [`CELL_DELIMITER`].
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                out.push(CELL_DELIMITER);
            }
            match cell {
                CellState::Empty => out.push(EMPTY_GLYPH),
                CellState::Occupied(mark) => out.push_str(&mark.to_string()),
            }
        }
    }
    out
}

/// Observer that redraws the board and announces the outcome on a
/// writer.
///
/// Write failures are logged and swallowed: observers run inside the
/// engine's `mark` call and must not fail it.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl ConsoleRenderer<io::Stdout> {
    /// Renderer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// Renderer writing to the given sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the renderer, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}") {
            warn!(%err, "renderer write failed");
        }
    }
}

impl<W: Write> MatchObserver for ConsoleRenderer<W> {
    fn notify(&mut self, event: &MatchEvent) {
        match event {
            MatchEvent::StateUpdated { board, .. } => {
                let drawing = render_board(board);
                self.emit(&drawing);
            }
            MatchEvent::WinnerDecided { mark } => {
                self.emit(&format!("player {mark} wins!"));
            }
            MatchEvent::BoardFull { .. } => {
                self.emit("board full, match drawn");
            }
        }
    }
}
