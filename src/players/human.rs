//! Human player that types cell numbers.

use super::Player;
use crate::console::Console;
use crate::games::tictactoe::{Game, Position};
use anyhow::{Context, Result};
use tracing::{debug, instrument};

/// Human player reading cell numbers from the console.
///
/// Bad input never reaches the engine: the player is re-prompted with the
/// reason until a legal cell is entered.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, game: &Game, console: &mut dyn Console) -> Result<Position> {
        loop {
            write!(console.out(), "Enter position (1-9): ")?;
            let line = console
                .read_line()
                .context("Failed to read move")?
                .ok_or_else(|| anyhow::anyhow!("Input closed"))?;

            let Ok(number) = line.trim().parse::<usize>() else {
                debug!(input = %line, "Unparseable move");
                writeln!(console.out(), "\nInvalid input. Please enter a number 1-9.")?;
                continue;
            };

            match game.validate(number) {
                Ok(position) => return Ok(position),
                Err(e) => {
                    debug!(error = %e, "Rejected move");
                    writeln!(console.out(), "\n{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
