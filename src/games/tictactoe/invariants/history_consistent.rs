//! History consistency invariant: history, counter and board agree.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: history length equals the move counter and the number of
/// occupied squares, and X leads O by at most one mark.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let board = game.board();
        let history_len = game.history().len();
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        history_len == usize::from(game.move_count())
            && history_len == board.occupied()
            && (x == o || x == o + 1)
    }

    fn description() -> &'static str {
        "History length matches move counter, occupied squares and mark balance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let game = Game::replay(&[1, 2, 3, 4]).unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_square_without_move_violates() {
        let mut game = Game::replay(&[1]).unwrap();
        game.board.set(Position::BottomRight, Square::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
