//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: players alternate turns, X first.
///
/// While the game is in progress the player to move follows from the
/// parity of the history. Once it is over, the player to move is frozen
/// on whoever made the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        if history.iter().enumerate().any(|(i, mov)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            mov.player != expected
        }) {
            return false;
        }

        match history.last() {
            Some(last) if game.is_over() => game.current_player() == last.player,
            Some(last) => game.current_player() == last.player.opponent(),
            None => game.current_player() == Player::X,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
