//! One-ply heuristic opponent.
//!
//! Rules are tried in a fixed priority order:
//!
//! 1. **Win**: the first empty cell (ascending) that completes a line for the mover.
//! 2. **Block**: the first empty cell that would complete a line for the opponent.
//! 3. **Center**: cell 5, if empty.
//! 4. **Corner**: one of the empty corners, chosen by the [`TieBreaker`].
//! 5. **Fallback**: any empty cell, chosen by the [`TieBreaker`].
//!
//! The heuristic looks exactly one ply ahead, so it is not perfect play:
//! forks go unnoticed and an optimal opponent can beat it.

use super::position::Position;
use super::rules::would_win;
use super::types::{Board, Player};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Picks one of several equally ranked candidate positions.
pub trait TieBreaker {
    /// Returns one element of `candidates`, or `None` if it is empty.
    fn pick(&mut self, candidates: &[Position]) -> Option<Position>;
}

impl<T: TieBreaker + ?Sized> TieBreaker for &mut T {
    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        (**self).pick(candidates)
    }
}

impl<T: TieBreaker + ?Sized> TieBreaker for Box<T> {
    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        (**self).pick(candidates)
    }
}

/// Uniform random choice from an injected RNG.
#[derive(Debug, Clone)]
pub struct RandomTieBreaker<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomTieBreaker<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomTieBreaker<StdRng> {
    /// Reproducible tie-breaking from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Tie-breaking seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> TieBreaker for RandomTieBreaker<R> {
    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.choose(&mut self.rng).copied()
    }
}

/// Always takes the lowest-numbered candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowestIndex;

impl TieBreaker for LowestIndex {
    fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
        candidates.iter().min().copied()
    }
}

/// Which priority rule produced a heuristic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Rule {
    /// Completes a line for the mover.
    Win,
    /// Denies the opponent an immediate line.
    Block,
    /// Takes the center.
    Center,
    /// Takes an empty corner.
    Corner,
    /// Takes any empty cell.
    Fallback,
}

/// A heuristic move and the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Chosen position.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// First empty cell (ascending) where `player` would complete a line.
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|pos| would_win(&board.with(*pos, player), player))
}

/// Selects a move for `mark`, reporting which rule fired.
///
/// Returns `None` only when the board has no empty cell.
#[instrument(skip(tie_breaker), fields(board = %board.notation()))]
pub fn choose<T: TieBreaker + ?Sized>(
    board: &Board,
    mark: Player,
    tie_breaker: &mut T,
) -> Option<Choice> {
    let empty = board.empty_positions();
    if empty.is_empty() {
        return None;
    }

    let choice = if let Some(position) = completing_move(board, mark) {
        Choice {
            position,
            rule: Rule::Win,
        }
    } else if let Some(position) = completing_move(board, mark.opponent()) {
        Choice {
            position,
            rule: Rule::Block,
        }
    } else if board.is_empty(Position::Center) {
        Choice {
            position: Position::Center,
            rule: Rule::Center,
        }
    } else {
        let corners: Vec<Position> = empty.iter().copied().filter(|p| p.is_corner()).collect();
        if corners.is_empty() {
            Choice {
                position: tie_breaker.pick(&empty)?,
                rule: Rule::Fallback,
            }
        } else {
            Choice {
                position: tie_breaker.pick(&corners)?,
                rule: Rule::Corner,
            }
        }
    };

    debug!(position = choice.position.number(), rule = %choice.rule, "Heuristic choice");
    Some(choice)
}

/// Selects a move for `mark` on `board`.
pub fn heuristic_move<T: TieBreaker + ?Sized>(
    board: &Board,
    mark: Player,
    tie_breaker: &mut T,
) -> Option<Position> {
    choose(board, mark, tie_breaker).map(|c| c.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always takes the last candidate, so tests can tell it apart from `LowestIndex`.
    struct LastCandidate;

    impl TieBreaker for LastCandidate {
        fn pick(&mut self, candidates: &[Position]) -> Option<Position> {
            candidates.last().copied()
        }
    }

    fn board(notation: &str) -> Board {
        notation.parse().unwrap()
    }

    #[test]
    fn test_win_beats_block() {
        let choice = choose(&board("XX_OO____"), Player::X, &mut LowestIndex).unwrap();
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.rule, Rule::Win);
    }

    #[test]
    fn test_block_when_no_win() {
        let choice = choose(&board("X__OO____"), Player::X, &mut LowestIndex).unwrap();
        assert_eq!(choice.position, Position::MiddleRight);
        assert_eq!(choice.rule, Rule::Block);
    }

    #[test]
    fn test_lowest_winning_cell_taken_first() {
        // X can win at 3 (top row) or 7 (left column).
        let choice = choose(&board("XX_X___OO"), Player::X, &mut LastCandidate).unwrap();
        assert_eq!(choice.position, Position::TopRight);
        assert_eq!(choice.rule, Rule::Win);
    }

    #[test]
    fn test_center_on_open_board() {
        let choice = choose(&Board::new(), Player::X, &mut LastCandidate).unwrap();
        assert_eq!(choice.position, Position::Center);
        assert_eq!(choice.rule, Rule::Center);
    }

    #[test]
    fn test_corner_uses_tie_breaker() {
        let b = board("____X____");
        let low = choose(&b, Player::O, &mut LowestIndex).unwrap();
        let high = choose(&b, Player::O, &mut LastCandidate).unwrap();
        assert_eq!(low.position, Position::TopLeft);
        assert_eq!(high.position, Position::BottomRight);
        assert_eq!(high.rule, Rule::Corner);
    }

    #[test]
    fn test_fallback_when_corners_and_center_taken() {
        // X O X / _ X _ / O X O, O to move; neither side has an open line.
        let b = board("XOX_X_OXO");
        let choice = choose(&b, Player::O, &mut LastCandidate).unwrap();
        assert_eq!(choice.rule, Rule::Fallback);
        assert_eq!(choice.position, Position::MiddleRight);
    }

    #[test]
    fn test_full_board_has_no_move() {
        assert_eq!(heuristic_move(&board("XOXOXXOXO"), Player::O, &mut LowestIndex), None);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let b = board("____X____");
        let picks = |seed| {
            let mut tb = RandomTieBreaker::seeded(seed);
            (0..10)
                .map(|_| heuristic_move(&b, Player::O, &mut tb).unwrap())
                .collect::<Vec<_>>()
        };
        let first = picks(7);
        assert_eq!(first, picks(7));
        assert!(first.iter().all(|p| p.is_corner()));
    }

    #[test]
    fn test_rule_display() {
        assert_eq!(Rule::Block.to_string(), "block");
        assert_eq!(Rule::Fallback.to_string(), "fallback");
    }
}
