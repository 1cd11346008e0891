//! Tic-tac-toe with a time-travel move history.
//!
//! The crate is the whole state machine behind a tic-tac-toe front end:
//!
//! - **Rules**: pure win and draw detection over a board snapshot
//! - **History**: immutable board snapshots, one per ply
//! - **Game**: the timeline plus a cursor, with move and jump operations
//! - **Invariants**: properties every reachable game satisfies
//!
//! Renderers read [`GameState`] after each event and call
//! [`GameState::apply_move`] or [`GameState::jump_to`] in response to clicks.
//!
//! # Example
//!
//! ```
//! use timetoe::{GameState, GameStatus, Player};
//!
//! let mut game = GameState::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! // Go back two plies and play somewhere else; the old future is dropped.
//! game.jump_to(3)?;
//! game.apply_move(8)?;
//! assert_eq!(game.history().len(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod history;
mod position;
mod types;

pub mod invariants;
pub mod rules;

pub use error::{InvalidGameState, MoveError, StepError};
pub use game::{GameState, GameStatus};
pub use history::{Coordinates, HistoryEntry};
pub use position::Position;
pub use types::{Board, Player, Square};
