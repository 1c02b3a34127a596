//! Tic-tac-toe against a perfect opponent.
//!
//! This crate holds the pure game engine: board storage, rules, an
//! exhaustive minimax search with alpha-beta pruning, move strategies,
//! and a self-play runner that tallies outcomes between two strategies.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order, indexed by [`Position`]
//! - **Rules**: legal moves, occupancy, fullness, win-line detection
//! - **Search**: [`analyze`] / [`best_move`] pick the optimal move
//! - **Strategies**: [`OptimalStrategy`] and [`RandomStrategy`] behind [`Strategy`]
//! - **Orchestration**: [`Game`] for one game, [`Session`] for human play,
//!   [`Batch`] / [`run_batch`] for self-play
//!
//! # Example
//!
//! ```
//! use alphabeta_tictactoe::{best_move, Board, Player, Position};
//!
//! let board: Board = "OO_XX____".parse().unwrap();
//! assert_eq!(best_move(&board, Player::O).unwrap(), Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod batch;
mod error;
mod game;
mod position;
pub mod rules;
mod search;
mod session;
mod strategy;
mod symmetry;
mod types;

// Crate-level exports - Board and domain types
pub use action::Move;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Errors
pub use error::{MoveError, ParseBoardError};

// Crate-level exports - Rules
pub use rules::{
    LegalMoves, WIN_LINES, WinLine, is_full, is_occupied, is_tie, legal_moves, status, win_line,
    winner,
};
pub use symmetry::Symmetry;

// Crate-level exports - Search
pub use search::{LOSS, SearchResult, TIE, WIN, analyze, best_move, move_values, search};

// Crate-level exports - Strategies
pub use strategy::{OptimalStrategy, RandomStrategy, Strategy, StrategyKind};

// Crate-level exports - Orchestration
pub use batch::{Batch, BatchRecord, Matchup, play_game, run_batch};
pub use game::{Game, side_to_move};
pub use session::{Seat, Session, Turn, mark_for, seat_to_move};
