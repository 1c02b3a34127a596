//! Core domain types for tic-tac-toe.

use super::error::ParseBoardError;
use super::position::Position;
use super::rules::WinLine;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the two marks in play.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player O.
    O,
    /// Player X.
    X,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol used in board text.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Nine squares are small enough to copy freely; the search still
/// mutates one board in place and undoes each trial move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Places a player's mark at the given position.
    pub fn place(&mut self, pos: Position, player: Player) {
        self.set(pos, Square::Occupied(player));
    }

    /// Empties the given position.
    pub fn clear(&mut self, pos: Position) {
        self.set(pos, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their index so a human can pick one.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => pos.to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    /// Compact 9-character form, `_` for empty squares.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            let c = match square {
                Square::Empty => '_',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Reads nine cells. Newlines and `|`, `/`, `,` separators are skipped;
    /// `_`, `.`, `-` and space are empty cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '\n' | '\r' | '|' | '/' | ','))
            .collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::Length(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (square, c) in squares.iter_mut().zip(cells) {
            *square = match c {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' | ' ' => Square::Empty,
                other => return Err(ParseBoardError::Cell(other)),
            };
        }
        Ok(Self { squares })
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win along `line`.
    Won {
        /// The winning mark.
        winner: Player,
        /// The completed line.
        line: WinLine,
    },
    /// Board is full with no winner.
    Tie,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won { winner, line } => write!(
                f,
                "Player {} wins on {}-{}-{}",
                winner,
                line[0].to_index(),
                line[1].to_index(),
                line[2].to_index()
            ),
            GameStatus::Tie => write!(f, "Tie"),
        }
    }
}
