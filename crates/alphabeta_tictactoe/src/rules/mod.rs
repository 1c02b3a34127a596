//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board): legal moves, occupancy,
//! fullness and win-line detection. Rules are kept apart from board
//! storage so the search can call them on a board it is mutating.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_full, is_tie};
pub use moves::{LegalMoves, is_occupied, legal_moves};
pub use win::{WIN_LINES, WinLine, win_line, winner};

use super::types::{Board, GameStatus};

/// Classifies a board. A win is reported even when the winning mark
/// also filled the last square.
pub fn status(board: &Board) -> GameStatus {
    if let Some(line) = win_line(board) {
        match board.get(line[0]) {
            super::Square::Occupied(winner) => return GameStatus::Won { winner, line },
            super::Square::Empty => {}
        }
    }
    if is_full(board) {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}
