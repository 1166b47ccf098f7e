//! Computer-vs-computer series.

use crate::config::AppConfig;
use crate::console::TextConsole;
use crate::orchestrator::Orchestrator;
use crate::players::HeuristicPlayer;
use crate::scoreboard::Scoreboard;
use anyhow::Result;
use std::io;
use tracing::{info, instrument};

/// Plays `games` heuristic-vs-heuristic games and returns the tally.
///
/// Both sides share the configured tie-breaking mode; with a seed, X uses
/// `seed` and O uses `seed + 1` so the two sides do not mirror each other.
#[instrument(skip(config))]
pub fn watch(config: &AppConfig, games: u32) -> Result<Scoreboard> {
    let mut scores = Scoreboard::new();
    let o_config = match config.seed() {
        Some(seed) => config.clone().with_seed(seed.wrapping_add(1)),
        None => config.clone(),
    };

    let mut orch = Orchestrator::new(
        Box::new(HeuristicPlayer::new("AI X", config.tie_breaker()).quiet()),
        Box::new(HeuristicPlayer::new("AI O", o_config.tie_breaker()).quiet()),
    );
    let mut console = TextConsole::new(io::empty(), io::sink());

    for _ in 0..games {
        let status = orch.run(&mut console)?;
        scores.record(status);
        orch.restart();
    }

    info!(
        x_wins = scores.x_wins(),
        o_wins = scores.o_wins(),
        draws = scores.draws(),
        "Series finished"
    );
    Ok(scores)
}
