//! Command implementations, written against generic readers and writers
//! so they can be driven from tests.

use crate::config::ArenaConfig;
use alphabeta_tictactoe::{
    Batch, BatchRecord, Board, GameStatus, LOSS, MoveError, Player, Position, Seat, Session, TIE,
    WIN, analyze, move_values, status,
};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  selfplay
// ─────────────────────────────────────────────────────────────

/// Runs the configured self-play batch.
#[instrument(skip(config), fields(matchup = %config.matchup(), games = config.games()))]
pub fn self_play(config: &ArenaConfig) -> BatchRecord {
    Batch::from_matchup(*config.matchup(), *config.seed())
        .with_first_mark(*config.first_mark())
        .run(*config.games())
}

// ─────────────────────────────────────────────────────────────
//  analyze
// ─────────────────────────────────────────────────────────────

/// Side to move judged from the mark counts; `first_mark` on equal counts.
pub fn infer_side(board: &Board, first_mark: Player) -> Player {
    let (x, o) = (board.count(Player::X), board.count(Player::O));
    if x > o {
        Player::O
    } else if o > x {
        Player::X
    } else {
        first_mark
    }
}

fn verdict(value: i32) -> &'static str {
    match value {
        WIN => "win",
        TIE => "tie",
        LOSS => "loss",
        _ => "?",
    }
}

/// Writes the value of every legal move for `side` and the chosen move.
#[instrument(skip(board, out), fields(board = %board))]
pub fn analyze_position(board: &Board, side: Player, mut out: impl Write) -> Result<()> {
    writeln!(out, "{}", board.display())?;

    let current = status(board);
    if current.is_over() {
        writeln!(out, "{current}")?;
        return Ok(());
    }

    writeln!(out, "{side} to move")?;
    for (pos, value) in move_values(board, side) {
        writeln!(out, "{:>2}  {:<13} {}", pos.to_index(), pos.label(), verdict(value))?;
    }

    let result = analyze(board, side)?;
    writeln!(
        out,
        "best: {} ({}) after {} nodes",
        result.best_move().to_index(),
        verdict(*result.value()),
        result.nodes()
    )?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────
//  play
// ─────────────────────────────────────────────────────────────

/// Plays one interactive game, reading the human's squares from `input`.
///
/// Returns the final status; `InProgress` if the human quit or the input
/// ran out before the game ended.
#[instrument(skip_all, fields(opener = %config.opener(), computer = %config.computer()))]
pub fn play(config: &ArenaConfig, input: impl BufRead, mut out: impl Write) -> Result<GameStatus> {
    let computer = config.computer().build(*config.seed());
    let mut session = Session::new(*config.opener(), *config.first_mark(), computer);

    writeln!(
        out,
        "You are {}. Enter a square 0-8 or its name, q to quit.",
        session.human_mark()
    )?;
    if session.opener() == Seat::Computer {
        let pos = session.opening_move()?;
        writeln!(out, "Computer plays {}", pos.to_index())?;
    }
    writeln!(out, "{}", session.game().board().display())?;

    let mut lines = input.lines();
    while !session.status().is_over() {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed before the game ended");
            break;
        };
        let line = line.context("Failed to read input")?;
        let entry = line.trim();
        if entry.eq_ignore_ascii_case("q") || entry.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(pos) = Position::from_label_or_number(entry) else {
            writeln!(out, "Not a square: {entry}")?;
            continue;
        };

        match session.human_move(pos.to_index()) {
            Ok(turn) => {
                if let Some(reply) = turn.reply {
                    writeln!(out, "Computer plays {}", reply.to_index())?;
                }
                writeln!(out, "{}", session.game().board().display())?;
            }
            Err(MoveError::OccupiedCell(taken)) => {
                warn!(position = %taken, "Human picked an occupied square");
                writeln!(out, "{} is taken", taken.to_index())?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    let result = session.status();
    let message = match result {
        GameStatus::Won { winner, .. } if winner == session.human_mark() => "You win!",
        GameStatus::Won { .. } => "Computer wins.",
        GameStatus::Tie => "Tie.",
        GameStatus::InProgress => "Game abandoned.",
    };
    writeln!(out, "{message}")?;
    Ok(result)
}
