//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every engine
//! transition. The engine checks them in debug builds; tests check them
//! directly.

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
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All tic-tac-toe invariants as a composable set.
pub type TicTacToeInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

/// Asserts the full invariant set in debug builds.
pub(crate) fn assert_invariants(game: &super::Game) {
    if cfg!(debug_assertions)
        && let Err(violations) = TicTacToeInvariants::check_all(game)
    {
        tracing::error!(?violations, board = %game.board().notation(), "Invariant violated");
        debug_assert!(violations.is_empty(), "Invariant violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Game, Player, Position, Square};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TicTacToeInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay(&[1, 5, 3]).unwrap();
        assert!(TicTacToeInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_for_finished_games() {
        let won = Game::replay(&[1, 4, 2, 5, 3]).unwrap();
        assert!(TicTacToeInvariants::check_all(&won).is_ok());

        let drawn = Game::replay(&[1, 2, 3, 5, 4, 6, 8, 7, 9]).unwrap();
        assert!(TicTacToeInvariants::check_all(&drawn).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::replay(&[5]).unwrap();
        // Corrupt the board behind the engine's back.
        game.board.set(Position::TopLeft, Square::Occupied(Player::O));

        let violations = TicTacToeInvariants::check_all(&game).unwrap_err();
        assert!(!violations.is_empty());
    }
}
