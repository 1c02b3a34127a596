//! Error types for move application and board parsing.

use super::position::Position;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    OccupiedCell(#[error(not(source))] Position),

    /// The index is outside 0-8.
    #[display("Index {} is off the board (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// A strategy or the search was asked to move on a full board.
    #[display("No legal moves remain")]
    NoLegalMoves,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The opening move was requested after play had begun.
    #[display("Opening move requested after the game started")]
    GameAlreadyStarted,

    /// The move was requested from the seat that is not on turn.
    #[display("It is not this seat's turn")]
    WrongSeat,
}

/// Error reading a board from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    Length(#[error(not(source))] usize),

    /// Unrecognised cell character.
    #[display("Unrecognised cell {:?}", _0)]
    Cell(#[error(not(source))] char),
}
