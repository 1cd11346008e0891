//! Errors reported by game operations.
//!
//! Every error here is recoverable: the operation that returned it left
//! the game untouched.

use crate::Position;
use crate::invariants::InvariantViolation;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square on the board.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The displayed board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error that can occur when jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum StepError {
    /// The requested step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for StepError {}

/// Error returned when a stored timeline breaks a game invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid game state: {}", _0)]
pub struct InvalidGameState(pub(crate) String);

impl std::error::Error for InvalidGameState {}

impl From<Vec<InvariantViolation>> for InvalidGameState {
    fn from(violations: Vec<InvariantViolation>) -> Self {
        Self(
            violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}
