//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use super::win::win_line;

/// Checks if the board is full (all squares occupied), whether or not
/// a line is complete.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no complete line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && win_line(board).is_none()
}
