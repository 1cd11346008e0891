//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that must hold for every reachable
//! [`GameState`]. They are testable independently, checked after every move
//! in debug builds, and serve as documentation of system guarantees.

use crate::GameState;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ])
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
            (I4::holds(state), I4::description()),
        ])
    }
}

pub mod cursor_in_bounds;
pub mod empty_root;
pub mod halts_on_win;
pub mod single_step;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_root::EmptyRootInvariant;
pub use halts_on_win::HaltsOnWinInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type GameInvariants = (
    EmptyRootInvariant,
    SingleStepInvariant,
    HaltsOnWinInvariant,
    CursorInBoundsInvariant,
);

/// Checks [`GameInvariants`] against a game.
pub fn check_game(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use crate::{Board, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(check_game(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut game = GameState::new();
        for m in [4, 0, 8, 2] {
            game.apply_move(m).unwrap();
        }
        game.jump_to(1).unwrap();
        game.apply_move(6).unwrap();
        assert!(check_game(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_across_reset() {
        let mut game = GameState::new();
        for m in [0, 3, 1, 4, 2] {
            game.apply_move(m).unwrap();
            assert!(check_game(&game).is_ok());
        }
        game.jump_to(2).unwrap();
        assert!(check_game(&game).is_ok());

        game.reset();
        assert!(check_game(&game).is_ok());
        for m in [8, 4, 6] {
            game.apply_move(m).unwrap();
            assert!(check_game(&game).is_ok());
        }
        game.jump_to(0).unwrap();
        assert!(check_game(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let dirty_root = HistoryEntry::after_move(
            Board::new().with(Position::Center, Square::Occupied(Player::X)),
            Position::Center,
        );
        let game = GameState::from_parts(vec![dirty_root], 3);

        let violations = check_game(&game).unwrap_err();
        let descriptions: Vec<_> = violations.iter().map(|v| v.description.as_str()).collect();
        assert!(descriptions.contains(&EmptyRootInvariant::description()));
        assert!(descriptions.contains(&CursorInBoundsInvariant::description()));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (EmptyRootInvariant, CursorInBoundsInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
