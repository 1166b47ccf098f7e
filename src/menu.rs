//! Main menu: game modes and the running scoreboard.

use crate::config::AppConfig;
use crate::console::Console;
use crate::games::tictactoe::{GameStatus, Player as Mark};
use crate::orchestrator::Orchestrator;
use crate::players::{HeuristicPlayer, HumanPlayer, Player};
use crate::scoreboard::Scoreboard;
use anyhow::{Context, Result};
use tracing::{debug, info, instrument, warn};

/// A main-menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MenuChoice {
    /// Two people share the keyboard.
    TwoPlayer,
    /// One person against the heuristic opponent.
    VsAi,
    /// Print the scoreboard.
    ViewScores,
    /// Zero the scoreboard.
    ResetScores,
    /// Leave the program.
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu prompt.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(MenuChoice::TwoPlayer),
            "2" => Some(MenuChoice::VsAi),
            "3" => Some(MenuChoice::ViewScores),
            "4" => Some(MenuChoice::ResetScores),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }

    /// Menu line text.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::TwoPlayer => "Two Player Mode",
            MenuChoice::VsAi => "Play vs AI",
            MenuChoice::ViewScores => "View Scores",
            MenuChoice::ResetScores => "Reset Scores",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Interactive menu owning the scoreboard for the session.
#[derive(Debug)]
pub struct Menu {
    config: AppConfig,
    scores: Scoreboard,
}

impl Menu {
    /// Creates a menu with an empty scoreboard.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            scores: Scoreboard::new(),
        }
    }

    /// Returns the session's scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Runs the menu loop until the player exits or input ends.
    #[instrument(skip_all)]
    pub fn run(&mut self, console: &mut dyn Console) -> Result<()> {
        let rule = "=".repeat(50);
        writeln!(console.out(), "{rule}\n       Welcome to Tic-Tac-Toe Game\n{rule}")?;

        loop {
            self.print_menu(console)?;
            let Some(line) = console.read_line().context("Failed to read menu choice")? else {
                debug!("Input closed at menu");
                return Ok(());
            };

            match MenuChoice::from_input(&line) {
                Some(MenuChoice::TwoPlayer) => {
                    self.play_two_player(console)?;
                }
                Some(MenuChoice::VsAi) => {
                    self.play_vs_ai(console)?;
                }
                Some(MenuChoice::ViewScores) => {
                    writeln!(console.out(), "\nScoreboard:\n{}", self.scores)?;
                }
                Some(MenuChoice::ResetScores) => {
                    self.scores.reset();
                    writeln!(console.out(), "\nScores reset!")?;
                }
                Some(MenuChoice::Exit) => {
                    writeln!(console.out(), "\nThanks for playing Tic-Tac-Toe! Goodbye!")?;
                    return Ok(());
                }
                None => {
                    warn!(input = %line, "Unknown menu choice");
                    writeln!(console.out(), "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn print_menu(&self, console: &mut dyn Console) -> Result<()> {
        let rule = "-".repeat(50);
        let out = console.out();
        writeln!(out, "\n{rule}")?;
        for (i, choice) in <MenuChoice as strum::IntoEnumIterator>::iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, choice.label())?;
        }
        writeln!(out, "{rule}")?;
        write!(out, "Enter your choice (1-5): ")?;
        Ok(())
    }

    /// Plays one game between two people and records the result.
    #[instrument(skip_all)]
    pub fn play_two_player(&mut self, console: &mut dyn Console) -> Result<GameStatus> {
        writeln!(console.out(), "\nTwo Player Mode")?;
        let mut orch = Orchestrator::new(
            Box::new(HumanPlayer::new("Player X")),
            Box::new(HumanPlayer::new("Player O")),
        );
        self.finish(orch.run(console)?)
    }

    /// Plays one game against the heuristic opponent and records the result.
    #[instrument(skip_all, fields(ai_mark = %self.config.ai_mark()))]
    pub fn play_vs_ai(&mut self, console: &mut dyn Console) -> Result<GameStatus> {
        let ai_mark = *self.config.ai_mark();
        writeln!(console.out(), "\nPlay vs AI Mode")?;
        writeln!(console.out(), "You are {}, AI is {}", ai_mark.opponent(), ai_mark)?;

        let human: Box<dyn Player> = Box::new(HumanPlayer::new("You"));
        let ai: Box<dyn Player> = Box::new(HeuristicPlayer::new("AI", self.config.tie_breaker()));
        let mut orch = match ai_mark {
            Mark::O => Orchestrator::new(human, ai),
            Mark::X => Orchestrator::new(ai, human),
        };
        self.finish(orch.run(console)?)
    }

    fn finish(&mut self, status: GameStatus) -> Result<GameStatus> {
        self.scores.record(status);
        info!(?status, games = self.scores.total_games(), "Game recorded");
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!(MenuChoice::from_input("1"), Some(MenuChoice::TwoPlayer));
        assert_eq!(MenuChoice::from_input(" 5 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::from_input("6"), None);
        assert_eq!(MenuChoice::from_input("two"), None);
    }

    #[test]
    fn test_labels_in_menu_order() {
        let labels: Vec<&str> = <MenuChoice as strum::IntoEnumIterator>::iter()
            .map(MenuChoice::label)
            .collect();
        assert_eq!(
            labels,
            ["Two Player Mode", "Play vs AI", "View Scores", "Reset Scores", "Exit"]
        );
    }
}
