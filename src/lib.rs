//! Tic-tac-toe engine with a heuristic opponent and a terminal driver.
//!
//! # Architecture
//!
//! - **Engine** ([`Game`]): board state, move legality, win/draw detection
//! - **Heuristic** ([`heuristic`]): one-ply win/block/center/corner opponent
//!   with injected tie-breaking ([`TieBreaker`])
//! - **Scoreboard**: caller-owned tally of finished games
//! - **Driver**: [`Orchestrator`] for one game, [`Menu`] for a session
//!
//! # Example
//!
//! ```
//! use tictactoe::{Game, LowestIndex, MoveOutcome, Player};
//!
//! let mut game = Game::new();
//! game.make_move(1).unwrap();
//! game.make_move(4).unwrap();
//! game.make_move(2).unwrap();
//! game.make_move(5).unwrap();
//!
//! // X can complete the top row.
//! let pos = game.heuristic_move(&mut LowestIndex).unwrap();
//! assert_eq!(pos.number(), 3);
//! assert_eq!(game.place(pos).unwrap(), MoveOutcome::Win(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod console;
mod games;
pub mod menu;
pub mod orchestrator;
pub mod players;
pub mod scoreboard;
pub mod watch;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Choice, Game, GameStatus, LowestIndex, Move, MoveError, MoveOutcome,
    Player, Position, RandomTieBreaker, Rule, Square, TieBreaker, heuristic, invariants, rules,
};

// Crate-level exports - Driver
pub use config::{AppConfig, ConfigError, TieBreakMode};
pub use console::{Console, TextConsole};
pub use menu::{Menu, MenuChoice};
pub use orchestrator::Orchestrator;
pub use scoreboard::Scoreboard;
pub use watch::watch;
