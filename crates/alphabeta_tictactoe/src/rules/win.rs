//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// Three positions that win when they hold the same mark.
pub type WinLine = [Position; 3];

/// The 8 winning lines: rows, then columns, then diagonals.
///
/// Catalog order decides which line is reported when several are
/// complete at once.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line in catalog order, if any.
pub fn win_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the owner of the first complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    win_line(board).and_then(|[a, _, _]| match board.get(a) {
        Square::Occupied(player) => Some(player),
        Square::Empty => None,
    })
}
