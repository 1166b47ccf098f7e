//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe::{Board, Player, TieBreakMode};

/// Tic-Tac-Toe - play a friend or the heuristic computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with a heuristic AI opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (ignored if missing)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Seed for the AI's random tie-breaking
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Tie-breaking strategy for the AI
    #[arg(long, global = true, value_enum)]
    pub tie_break: Option<TieBreakMode>,

    /// Subcommand to run (defaults to the interactive menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive menu with scoreboard
    Menu,

    /// Play a single two-player game
    TwoPlayer,

    /// Play a single game against the AI
    VsAi {
        /// Mark the AI plays (overrides config)
        #[arg(long)]
        ai_mark: Option<Player>,
    },

    /// Watch the AI play itself and print the tally
    Watch {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the AI's move for a board
    Hint {
        /// Board in compact notation, e.g. "XX_OO____"
        board: Board,

        /// Mark to move (inferred from mark counts if omitted)
        #[arg(long)]
        mark: Option<Player>,
    },
}
