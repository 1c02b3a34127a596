//! Arena configuration loaded from TOML.

use alphabeta_tictactoe::{Matchup, Player, Seat, StrategyKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by the `play` and `selfplay` commands.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Strategy pairing for self-play.
    #[serde(default)]
    matchup: Matchup,

    /// Number of self-play games.
    #[serde(default = "default_games")]
    games: u64,

    /// Mark that opens every game.
    #[serde(default = "default_first_mark")]
    first_mark: Player,

    /// Seed for random strategies; fresh entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Who opens in interactive play.
    #[serde(default)]
    opener: Seat,

    /// Strategy the computer uses in interactive play.
    #[serde(default = "default_computer")]
    computer: StrategyKind,
}

fn default_games() -> u64 {
    100
}

fn default_first_mark() -> Player {
    Player::X
}

fn default_computer() -> StrategyKind {
    StrategyKind::AlphaBeta
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            matchup: Matchup::default(),
            games: default_games(),
            first_mark: default_first_mark(),
            seed: None,
            opener: Seat::default(),
            computer: default_computer(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(matchup = %config.matchup, games = config.games, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Replaces the matchup.
    pub fn with_matchup(mut self, matchup: Option<Matchup>) -> Self {
        if let Some(matchup) = matchup {
            self.matchup = matchup;
        }
        self
    }

    /// Replaces the game count.
    pub fn with_games(mut self, games: Option<u64>) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        self
    }

    /// Replaces the opening mark.
    pub fn with_first_mark(mut self, first_mark: Option<Player>) -> Self {
        if let Some(first_mark) = first_mark {
            self.first_mark = first_mark;
        }
        self
    }

    /// Replaces the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Replaces the interactive opener.
    pub fn with_opener(mut self, opener: Option<Seat>) -> Self {
        if let Some(opener) = opener {
            self.opener = opener;
        }
        self
    }

    /// Replaces the computer's strategy.
    pub fn with_computer(mut self, computer: Option<StrategyKind>) -> Self {
        if let Some(computer) = computer {
            self.computer = computer;
        }
        self
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
