//! Game state with a branching move timeline.
//!
//! [`GameState`] keeps every board reached so far plus a cursor marking the
//! board on display. Moves are always played on the displayed board: playing
//! from an earlier step throws away the steps after it and starts a new branch.
//! Jumping only moves the cursor.

use crate::error::{InvalidGameState, MoveError, StepError};
use crate::history::HistoryEntry;
use crate::rules;
use crate::{Board, Player, Position, Square};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    #[display("Next player: {}", next)]
    InProgress {
        /// Player whose turn it is.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {}", _0)]
    Won(Player),
    /// Every square is taken and nobody won.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Whether the game has ended on this board.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// Tic-tac-toe game with time-travel history.
///
/// Deserializing checks the timeline against
/// [`GameInvariants`](crate::invariants::GameInvariants), so a stored game
/// with a broken history or a cursor past the end is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TimelineRecord")]
pub struct GameState {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

/// Unchecked serialized form of [`GameState`].
#[derive(Deserialize)]
struct TimelineRecord {
    history: Vec<HistoryEntry>,
    current_step: usize,
}

impl TryFrom<TimelineRecord> for GameState {
    type Error = InvalidGameState;

    fn try_from(record: TimelineRecord) -> Result<Self, Self::Error> {
        let game = Self {
            history: record.history,
            current_step: record.current_step,
        };
        crate::invariants::check_game(&game).map_err(|violations| {
            let err = InvalidGameState::from(violations);
            warn!(%err, "Rejected stored game");
            err
        })?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game showing the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::start()],
            current_step: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(history: Vec<HistoryEntry>, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }

    /// All steps, starting with the empty board.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Index of the displayed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Index of the newest step in the timeline.
    pub fn latest_step(&self) -> usize {
        self.history.len() - 1
    }

    /// The displayed step.
    pub fn current_entry(&self) -> &HistoryEntry {
        &self.history[self.current_step]
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.current_entry().board()
    }

    /// Player to move on the displayed board, derived from step parity.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner on the displayed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        let board = self.current_board();
        if let Some(winner) = rules::check_winner(board) {
            GameStatus::Won(winner)
        } else if rules::is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_player(),
            }
        }
    }

    /// Plays the next player's mark at a board index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for an index past 8, otherwise
    /// whatever [`GameState::place`] returns. A failed move changes nothing.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Rejected move off the board");
            MoveError::OutOfBounds(index)
        })?;
        self.place(pos)
    }

    /// Plays the next player's mark at `pos` on the displayed board.
    ///
    /// Any steps after the displayed one are discarded before the new step
    /// is appended, so the new move always becomes the latest step.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the displayed board already has a winner.
    /// - [`MoveError::SquareOccupied`] if `pos` is taken.
    /// - [`MoveError::InvariantViolation`] if a debug-build postcondition fails.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.next_player()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        let board = *self.current_board();

        if rules::check_winner(&board).is_some() {
            warn!(?pos, "Rejected move after game over");
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(pos) {
            warn!(?pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.next_player();
        let next = board.with(pos, Square::Occupied(player));

        let discarded = self.history.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future branch");
        }
        self.history.truncate(self.current_step + 1);
        self.history.push(HistoryEntry::after_move(next, pos));
        self.current_step = self.history.len() - 1;

        #[cfg(debug_assertions)]
        {
            use crate::invariants::{GameInvariants, InvariantSet};
            if let Err(violations) = GameInvariants::check_all(self) {
                let InvalidGameState(description) = violations.into();
                tracing::error!(%description, "Invariant violated, rolling back move");
                *self = before;
                return Err(MoveError::InvariantViolation(description));
            }
        }

        debug!(step = self.current_step, "Move applied");
        Ok(())
    }

    /// Shows the board at `step` without altering the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::OutOfRange`] if `step` is past the latest step.
    #[instrument(skip(self), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepError> {
        if step >= self.history.len() {
            warn!(len = self.history.len(), "Rejected jump past end of history");
            return Err(StepError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        debug!("Jumped");
        Ok(())
    }

    /// Move-list label for a step, or `None` if the step does not exist.
    pub fn move_label(&self, step: usize) -> Option<String> {
        let entry = self.history.get(step)?;
        Some(match entry.coordinates() {
            None => "Go to game start".to_string(),
            Some(coords) => format!("Go to move # {step} {coords}"),
        })
    }

    /// Starts over from the empty board, dropping the whole timeline.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
