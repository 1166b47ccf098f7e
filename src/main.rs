//! Tic-Tac-Toe - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Write;
use tictactoe::{
    AppConfig, Board, Menu, Orchestrator, Player, TextConsole, heuristic,
    players::HumanPlayer,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => run_menu(config),
        Command::TwoPlayer => run_two_player(),
        Command::VsAi { ai_mark } => {
            let config = match ai_mark {
                Some(mark) => config.with_ai_mark(mark),
                None => config,
            };
            run_vs_ai(config)
        }
        Command::Watch { games, json } => run_watch(config, games, json),
        Command::Hint { board, mark } => run_hint(config, board, mark),
    }
}

/// Merges the config file with command-line overrides.
#[instrument(skip_all, fields(path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(mode) = cli.tie_break {
        config = config.with_tie_break(mode);
    }
    info!(?config, "Configuration ready");
    Ok(config)
}

/// Run the interactive menu
fn run_menu(config: AppConfig) -> Result<()> {
    let mut console = TextConsole::stdio();
    Menu::new(config).run(&mut console)
}

/// Run a single two-player game
fn run_two_player() -> Result<()> {
    let mut console = TextConsole::stdio();
    let mut orch = Orchestrator::new(
        Box::new(HumanPlayer::new("Player X")),
        Box::new(HumanPlayer::new("Player O")),
    );
    orch.run(&mut console)?;
    Ok(())
}

/// Run a single game against the AI
fn run_vs_ai(config: AppConfig) -> Result<()> {
    let mut console = TextConsole::stdio();
    Menu::new(config).play_vs_ai(&mut console)?;
    Ok(())
}

/// Run an AI-vs-AI series and print the tally
fn run_watch(config: AppConfig, games: u32, json: bool) -> Result<()> {
    let scores = tictactoe::watch(&config, games)?;
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &scores).context("Failed to write JSON")?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "Scoreboard after {} games:\n{}", scores.total_games(), scores)?;
    }
    Ok(())
}

/// Print the AI's choice for a board
fn run_hint(config: AppConfig, board: Board, mark: Option<Player>) -> Result<()> {
    let mark = match mark {
        Some(mark) => mark,
        None => board
            .side_to_move()
            .context("Cannot infer the mark to move from this board; pass --mark")?,
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}\n", board)?;

    let mut tie_breaker = config.tie_breaker();
    match heuristic::choose(&board, mark, &mut tie_breaker) {
        Some(choice) => writeln!(stdout, "{} plays {} ({})", mark, choice.position, choice.rule)?,
        None => writeln!(stdout, "No moves available")?,
    }
    Ok(())
}
