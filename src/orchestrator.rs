//! Game orchestration between players.

use crate::console::Console;
use crate::games::tictactoe::{Board, Game, GameStatus, Player as Mark};
use crate::players::Player;
use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

/// Orchestrates one game between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game is over and returns the final status.
    ///
    /// Prints the position key, then the board and the engine's message after
    /// every move.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<GameStatus> {
        info!("Starting game orchestration");
        writeln!(console.out(), "\nPosition Reference:\n{}", Board::position_reference())?;

        while !self.game.is_over() {
            let mark = self.game.current_player();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            writeln!(console.out(), "\n{}\n", self.game.board())?;
            writeln!(console.out(), "Player {}'s turn ({})", mark, player.name())?;

            debug!(player = %player.name(), "Waiting for move");
            let position = player.choose_move(&self.game, console)?;
            let outcome = self
                .game
                .place(position)
                .with_context(|| format!("{} chose an illegal move", player.name()))?;

            writeln!(console.out(), "\n{}", outcome)?;
        }

        writeln!(console.out(), "\n{}\n", self.game.board())?;
        info!(status = ?self.game.status(), moves = self.game.move_count(), "Game over");
        Ok(self.game.status())
    }

    /// Restarts the game with the same players.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}
