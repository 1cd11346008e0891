//! Cursor invariant: the displayed step exists.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Current step lies within the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;

    #[test]
    fn test_holds_after_rejected_jump() {
        let mut game = GameState::new();
        assert!(game.jump_to(5).is_err());
        assert!(CursorInBoundsInvariant::holds(&game));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let game = GameState::from_parts(vec![HistoryEntry::start()], 1);
        assert!(!CursorInBoundsInvariant::holds(&game));
    }
}
