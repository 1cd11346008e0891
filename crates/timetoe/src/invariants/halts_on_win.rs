//! Halts on win invariant: nothing follows a winning step.

use super::Invariant;
use crate::{GameState, rules};

/// Invariant: only the latest step may have a winner.
pub struct HaltsOnWinInvariant;

impl Invariant<GameState> for HaltsOnWinInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|entry| rules::check_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No step follows a winning board"
    }
}
