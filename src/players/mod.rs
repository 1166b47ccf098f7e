//! Player trait and implementations.

mod heuristic;
mod human;

pub use heuristic::HeuristicPlayer;
pub use human::HumanPlayer;

use crate::console::Console;
use crate::games::tictactoe::{Game, Position};
use anyhow::Result;

/// Something that can choose moves: a person at the keyboard or the computer.
pub trait Player {
    /// Chooses a legal position for the player to move.
    fn choose_move(&mut self, game: &Game, console: &mut dyn Console) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
