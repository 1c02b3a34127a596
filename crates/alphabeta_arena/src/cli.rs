//! Command-line interface for the arena.

use alphabeta_tictactoe::{Matchup, Player, Seat, StrategyKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// AlphaBeta Arena - play tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "alphabeta")]
#[command(about = "Tic-tac-toe against an alpha-beta engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (flags override its values)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Who moves first: human or computer
        #[arg(long)]
        first: Option<Seat>,

        /// Mark that opens the game: X or O
        #[arg(long)]
        first_mark: Option<Player>,

        /// Computer strategy: alphabeta or random
        #[arg(long)]
        computer: Option<StrategyKind>,

        /// Seed for a random computer
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run a batch of computer-vs-computer games and tally the results
    #[command(name = "selfplay", alias = "self-play")]
    SelfPlay {
        /// Strategy pairing: abvab, rvab or rvr
        #[arg(short, long)]
        matchup: Option<Matchup>,

        /// Number of games to play
        #[arg(short = 'n', long)]
        games: Option<u64>,

        /// Mark that opens each game: X or O
        #[arg(long)]
        first_mark: Option<Player>,

        /// Seed for random strategies
        #[arg(long)]
        seed: Option<u64>,

        /// Print the tally as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the value of every move in a position
    Analyze {
        /// Nine cells, row-major: X, O, and _ for empty (e.g. "OO_XX____")
        board: String,

        /// Side to move; inferred from the mark counts if omitted
        #[arg(long)]
        side: Option<Player>,
    },
}
