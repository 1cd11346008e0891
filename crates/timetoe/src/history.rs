//! Immutable snapshots making up the game timeline.

use crate::{Board, Player, Position};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// 1-based column and row of a move, as shown in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({column},{row})")]
pub struct Coordinates {
    /// Column, 1 (left) to 3 (right).
    pub column: usize,
    /// Row, 1 (top) to 3 (bottom).
    pub row: usize,
}

impl From<Position> for Coordinates {
    fn from(pos: Position) -> Self {
        Self {
            column: pos.column() + 1,
            row: pos.row() + 1,
        }
    }
}

/// One step of the timeline: a board and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Square the move was played on; `None` for the starting position.
    last_move: Option<Position>,
}

impl HistoryEntry {
    /// The empty starting board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    /// Snapshot produced by playing `last_move`.
    pub(crate) fn after_move(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// Display coordinates of the move, if this is not the start entry.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.last_move.map(Coordinates::from)
    }

    /// Player who made the move, read back from the board.
    pub fn mover(&self) -> Option<Player> {
        self.last_move.and_then(|pos| self.board.get(pos).player())
    }
}
