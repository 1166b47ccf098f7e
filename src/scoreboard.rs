//! Win/loss/draw tally across games.

use crate::games::tictactoe::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Caller-owned tally of finished games.
///
/// The engine keeps no state between games; whoever runs games feeds each
/// terminal status in here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(winner) => self.record_outcome(Some(winner)),
            GameStatus::Draw => self.record_outcome(None),
            GameStatus::InProgress => debug!("Ignoring unfinished game"),
        }
    }

    /// Records a winner, or a draw when `winner` is `None`.
    pub fn record_outcome(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }

    /// Wins for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Number of games recorded.
    pub fn total_games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears all counters.
    pub fn reset(&mut self) {
        info!(games = self.total_games(), "Scores reset");
        *self = Self::default();
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "   Player X: {} wins", self.x_wins)?;
        writeln!(f, "   Player O: {} wins", self.o_wins)?;
        write!(f, "   Draws: {}", self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut scores = Scoreboard::new();
        scores.record(GameStatus::Won(Player::X));
        scores.record(GameStatus::Won(Player::X));
        scores.record(GameStatus::Won(Player::O));
        scores.record(GameStatus::Draw);

        assert_eq!(*scores.x_wins(), 2);
        assert_eq!(scores.wins(Player::O), 1);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.total_games(), 4);
    }

    #[test]
    fn test_in_progress_not_counted() {
        let mut scores = Scoreboard::new();
        scores.record(GameStatus::InProgress);
        assert_eq!(scores.total_games(), 0);
    }

    #[test]
    fn test_reset_clears() {
        let mut scores = Scoreboard::new();
        scores.record_outcome(None);
        scores.reset();
        assert_eq!(scores, Scoreboard::default());
    }

    #[test]
    fn test_display() {
        let mut scores = Scoreboard::new();
        scores.record_outcome(Some(Player::O));
        assert_eq!(
            scores.to_string(),
            "   Player X: 0 wins\n   Player O: 1 wins\n   Draws: 0"
        );
    }

    #[test]
    fn test_json_summary() {
        let mut scores = Scoreboard::new();
        scores.record_outcome(Some(Player::X));
        let json = serde_json::to_value(scores).unwrap();
        assert_eq!(json["x_wins"], 1);
        assert_eq!(json["draws"], 0);
    }
}
