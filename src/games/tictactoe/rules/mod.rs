//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board) snapshot. They never touch
//! engine state, so the heuristic can evaluate hypothetical boards with them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, check_winner, has_winner, would_win};
