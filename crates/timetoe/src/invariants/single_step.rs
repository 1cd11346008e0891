//! Single step invariant: each ply adds exactly one mark, alternating X and O.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: step `k` differs from step `k - 1` in exactly one square.
///
/// That square is the one recorded as the step's move, it was empty
/// before, and it now holds X on odd steps and O on even steps.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().windows(2).enumerate().all(|(i, pair)| {
            let [prev, next] = pair else {
                return false;
            };
            let mover = Player::for_step(i);
            match *next.last_move() {
                Some(pos) => {
                    prev.board().diff(next.board()) == [pos]
                        && prev.board().is_empty(pos)
                        && next.board().get(pos) == Square::Occupied(mover)
                }
                None => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step adds one mark for the alternating player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Board, Position};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for m in [0, 4, 8, 2, 6] {
            game.apply_move(m).unwrap();
        }
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let first = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));
        let second = first.with(Position::Center, Square::Occupied(Player::X));
        let game = GameState::from_parts(
            vec![
                HistoryEntry::start(),
                HistoryEntry::after_move(first, Position::TopLeft),
                HistoryEntry::after_move(second, Position::Center),
            ],
            2,
        );
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_two_marks_in_one_step_violates() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::Center, Square::Occupied(Player::O));
        let game = GameState::from_parts(
            vec![
                HistoryEntry::start(),
                HistoryEntry::after_move(board, Position::TopLeft),
            ],
            1,
        );
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_recorded_move_violates() {
        let board = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));
        let game = GameState::from_parts(
            vec![
                HistoryEntry::start(),
                HistoryEntry::after_move(board, Position::BottomRight),
            ],
            1,
        );
        assert!(!SingleStepInvariant::holds(&game));
    }
}
