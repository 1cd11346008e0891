//! Session state for the terminal front end.

use crate::input::{Action, move_cursor};
use derive_getters::Getters;
use timetoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// One play session: the game plus what the screen needs besides it.
///
/// The session owns the only [`GameState`]; drawing code borrows it.
#[derive(Debug, Clone, Getters)]
pub struct App {
    game: GameState,
    cursor: Position,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a session on a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            message: None,
            should_quit: false,
        }
    }

    /// Status line: game status plus the last rejection, if any.
    pub fn status_line(&self) -> String {
        let status = self.game.status();
        match &self.message {
            Some(message) => format!("{status} | {message}"),
            None => status.to_string(),
        }
    }

    /// A square was clicked.
    #[instrument(skip(self))]
    pub fn on_square_click(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(()) => {
                info!(step = self.game.current_step(), status = %self.game.status(), "Move played");
                self.message = None;
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// A move-list entry was clicked.
    #[instrument(skip(self))]
    pub fn on_history_click(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.message = None,
            Err(e) => {
                debug!(error = %e, "Jump rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Place(pos) => {
                self.cursor = pos;
                self.on_square_click(pos.to_index());
            }
            Action::PlaceAtCursor => self.on_square_click(self.cursor.to_index()),
            Action::MoveCursor(direction) => self.cursor = move_cursor(self.cursor, direction),
            Action::JumpTo(step) => self.on_history_click(step),
            Action::StepBack => match self.game.current_step().checked_sub(1) {
                Some(step) => self.on_history_click(step),
                None => self.message = Some("Already at game start".to_string()),
            },
            Action::StepForward => {
                if self.game.current_step() < self.game.latest_step() {
                    self.on_history_click(self.game.current_step() + 1);
                } else {
                    self.message = Some("Already at latest move".to_string());
                }
            }
            Action::JumpStart => self.on_history_click(0),
            Action::JumpLatest => self.on_history_click(self.game.latest_step()),
            Action::Restart => {
                info!("Restarting game");
                self.game.reset();
                self.cursor = Position::Center;
                self.message = Some("Game restarted".to_string());
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
