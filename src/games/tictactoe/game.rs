//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns one game's board and turn state. It is mutated only by
//! [`Game::make_move`] (or its typed twin [`Game::place`]) and
//! [`Game::reset`]; once a game is over it refuses further moves until reset.

use super::action::{Move, MoveError, MoveOutcome};
use super::heuristic::{self, TieBreaker};
use super::invariants::assert_invariants;
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(super) board: Board,
    pub(super) current_player: Player,
    pub(super) status: GameStatus,
    pub(super) move_count: u8,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            move_count: 0,
            history: Vec::new(),
        }
    }

    /// Plays a sequence of cell numbers (1-9) from a fresh game.
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument]
    pub fn replay(numbers: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &number in numbers {
            game.make_move(number)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Number of successful moves so far (0-9).
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty positions in ascending order.
    pub fn available_moves(&self) -> Vec<Position> {
        self.board.empty_positions()
    }

    /// Checks a cell number (1-9) against the current state without applying it.
    pub fn validate(&self, number: usize) -> Result<Position, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let pos = Position::from_number(number).ok_or(MoveError::InvalidPosition(number))?;

        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        Ok(pos)
    }

    /// Places the current player's mark at cell `number` (1-9).
    ///
    /// On success the result says whether the move won, drew, or passed the
    /// turn. A winning or drawing move leaves `current_player` on the mover.
    #[instrument(skip(self), fields(player = %self.current_player, board = %self.board.notation()))]
    pub fn make_move(&mut self, number: usize) -> Result<MoveOutcome, MoveError> {
        let pos = self.validate(number).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;
        Ok(self.apply(pos))
    }

    /// Places the current player's mark at `pos`.
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.make_move(pos.number())
    }

    fn apply(&mut self, pos: Position) -> MoveOutcome {
        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.move_count += 1;
        self.history.push(Move::new(player, pos));
        debug!(%player, position = pos.number(), move_count = self.move_count, "Move applied");

        let outcome = if rules::has_winner(&self.board) {
            self.status = GameStatus::Won(player);
            info!(winner = %player, moves = self.move_count, "Game won");
            MoveOutcome::Win(player)
        } else if usize::from(self.move_count) == self.board.squares().len() {
            self.status = GameStatus::Draw;
            info!("Game drawn");
            MoveOutcome::Draw
        } else {
            self.current_player = player.opponent();
            MoveOutcome::Continue {
                next: self.current_player,
            }
        };

        assert_invariants(self);
        outcome
    }

    /// Returns the engine to its initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Picks a move for the player to move using the one-ply heuristic.
    ///
    /// Returns `None` once the game is over.
    pub fn heuristic_move<T: TieBreaker + ?Sized>(&self, tie_breaker: &mut T) -> Option<Position> {
        if self.is_over() {
            return None;
        }
        heuristic::heuristic_move(&self.board, self.current_player, tie_breaker)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
