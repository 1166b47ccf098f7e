//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line (in [`WIN_LINES`] order) holding
/// three identical marks, `None` otherwise.
#[instrument(level = "trace", fields(board = %board.notation()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    WIN_LINES.iter().find_map(|[a, b, c]| {
        let sq = board.get(*a);
        match sq {
            Square::Occupied(player) if sq == board.get(*b) && sq == board.get(*c) => Some(player),
            _ => None,
        }
    })
}

/// Returns true if any line holds three identical non-empty marks.
pub fn has_winner(board: &Board) -> bool {
    check_winner(board).is_some()
}

/// Returns true if `player` holds a complete line on `board`.
pub fn would_win(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}
