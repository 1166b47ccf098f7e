//! Tic-tac-toe engine and heuristic opponent.

mod action;
mod game;
pub mod heuristic;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError, MoveOutcome};
pub use game::Game;
pub use heuristic::{Choice, LowestIndex, RandomTieBreaker, Rule, TieBreaker};
pub use position::Position;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
