//! Move records, move results and move errors.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// What a successful move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The mover completed a line.
    #[display("Player {} wins!", _0)]
    Win(Player),
    /// The board filled up without a line.
    #[display("It's a draw!")]
    Draw,
    /// The game continues with `next` to move.
    #[display("Player {}'s turn", next)]
    Continue {
        /// Player to move next.
        next: Player,
    },
}

impl MoveOutcome {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// Error that can occur when validating or applying a move.
///
/// Every variant leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell number is outside 1-9.
    #[display("Invalid position {}. Choose 1-9.", _0)]
    InvalidPosition(usize),

    /// The square at the position is already occupied.
    #[display("Position {} already taken. Choose another.", _0)]
    CellOccupied(Position),

    /// The game is already over; reset before playing again.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}
