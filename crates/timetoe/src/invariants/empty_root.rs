//! Empty root invariant: the timeline starts from an empty board.

use super::Invariant;
use crate::GameState;

/// Invariant: step 0 is the empty board with no move attached.
pub struct EmptyRootInvariant;

impl Invariant<GameState> for EmptyRootInvariant {
    fn holds(game: &GameState) -> bool {
        game.history()
            .first()
            .is_some_and(|root| root.board().occupied_count() == 0 && root.last_move().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Board, Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(EmptyRootInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        assert!(!EmptyRootInvariant::holds(&GameState::from_parts(vec![], 0)));
    }

    #[test]
    fn test_marked_root_violates() {
        let root = HistoryEntry::after_move(
            Board::new().with(Position::TopLeft, Square::Occupied(Player::X)),
            Position::TopLeft,
        );
        assert!(!EmptyRootInvariant::holds(&GameState::from_parts(vec![root], 0)));
    }
}
