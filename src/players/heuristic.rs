//! Computer player driven by the one-ply heuristic.

use super::Player;
use crate::console::Console;
use crate::games::tictactoe::{Game, Position, TieBreaker, heuristic};
use anyhow::Result;
use tracing::{debug, instrument};

/// Computer player choosing moves with the heuristic opponent.
pub struct HeuristicPlayer<T> {
    name: String,
    tie_breaker: T,
    announce: bool,
}

impl<T: TieBreaker> HeuristicPlayer<T> {
    /// Creates a heuristic player using the given tie-breaker.
    pub fn new(name: impl Into<String>, tie_breaker: T) -> Self {
        Self {
            name: name.into(),
            tie_breaker,
            announce: true,
        }
    }

    /// Suppresses the "thinking" line (used when two computers play).
    pub fn quiet(mut self) -> Self {
        self.announce = false;
        self
    }
}

impl<T: TieBreaker> Player for HeuristicPlayer<T> {
    #[instrument(skip_all, fields(player = %self.name))]
    fn choose_move(&mut self, game: &Game, console: &mut dyn Console) -> Result<Position> {
        if self.announce {
            writeln!(console.out(), "AI is thinking...")?;
        }

        if game.is_over() {
            anyhow::bail!("No moves available");
        }

        let choice = heuristic::choose(game.board(), game.current_player(), &mut self.tie_breaker)
            .ok_or_else(|| anyhow::anyhow!("No moves available"))?;
        debug!(position = choice.position.number(), rule = %choice.rule, "AI chose position");
        Ok(choice.position)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
