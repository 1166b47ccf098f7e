//! Monotonic board invariant: squares never change once set.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: replaying the move history onto an empty board, never
/// writing an occupied square, reproduces the current board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed = reconstructed.with(mov.position, mov.player);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let game = Game::replay(&[5, 1, 9, 3]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::replay(&[5, 1]).unwrap();
        game.board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
