//! Application configuration loaded from TOML.

use crate::games::tictactoe::{LowestIndex, Player, RandomTieBreaker, TieBreaker};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How the heuristic opponent breaks ties between equally ranked cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreakMode {
    /// Uniform random choice.
    #[default]
    Random,
    /// Always the lowest-numbered cell.
    LowestIndex,
}

/// Driver configuration.
///
/// Every field is optional in the file; missing fields take defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Mark played by the computer in vs-AI mode.
    #[serde(default = "default_ai_mark")]
    ai_mark: Player,

    /// Seed for random tie-breaking; OS entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Tie-breaking strategy.
    #[serde(default)]
    tie_break: TieBreakMode,
}

fn default_ai_mark() -> Player {
    Player::O
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai_mark: default_ai_mark(),
            seed: None,
            tie_break: TieBreakMode::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(ai_mark = %config.ai_mark, tie_break = ?config.tie_break, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the tie-breaking strategy.
    pub fn with_tie_break(mut self, mode: TieBreakMode) -> Self {
        self.tie_break = mode;
        self
    }

    /// Overrides the computer's mark.
    pub fn with_ai_mark(mut self, mark: Player) -> Self {
        self.ai_mark = mark;
        self
    }

    /// Builds the configured tie-breaker.
    pub fn tie_breaker(&self) -> Box<dyn TieBreaker> {
        match (self.tie_break, self.seed) {
            (TieBreakMode::LowestIndex, _) => Box::new(LowestIndex),
            (TieBreakMode::Random, Some(seed)) => Box::new(RandomTieBreaker::seeded(seed)),
            (TieBreakMode::Random, None) => Box::new(RandomTieBreaker::from_os_rng()),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
