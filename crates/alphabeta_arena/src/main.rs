//! AlphaBeta Arena - unified CLI

#![warn(missing_docs)]

use alphabeta_arena::{ArenaConfig, Cli, Command, analyze_position, infer_side, play, self_play};
use alphabeta_tictactoe::{Board, Player};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ArenaConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            first,
            first_mark,
            computer,
            seed,
        } => {
            let config = config
                .with_opener(first)
                .with_first_mark(first_mark)
                .with_computer(computer)
                .with_seed(seed);
            run_play(&config)
        }
        Command::SelfPlay {
            matchup,
            games,
            first_mark,
            seed,
            json,
        } => {
            let config = config
                .with_matchup(matchup)
                .with_games(games)
                .with_first_mark(first_mark)
                .with_seed(seed);
            run_self_play(&config, json)
        }
        Command::Analyze { board, side } => run_analyze(&config, &board, side),
    }
}

/// Run an interactive game on stdin/stdout
fn run_play(config: &ArenaConfig) -> Result<()> {
    let stdin = std::io::stdin();
    play(config, stdin.lock(), std::io::stdout())?;
    Ok(())
}

/// Run a self-play batch and print the tally
#[instrument(skip(config))]
fn run_self_play(config: &ArenaConfig, json: bool) -> Result<()> {
    info!("Starting self-play");
    let record = self_play(config);
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{record}");
    }
    Ok(())
}

/// Analyze one position
fn run_analyze(config: &ArenaConfig, board: &str, side: Option<Player>) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let side = side.unwrap_or_else(|| infer_side(&board, *config.first_mark()));
    analyze_position(&board, side, std::io::stdout())
}
