//! Legal move generation.

use super::super::{Board, Position, Square};

/// Empty squares of a board, yielded in ascending index order.
///
/// Owns a snapshot bitmask rather than borrowing the board, so callers
/// may mutate the board while iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMoves {
    mask: u16,
}

impl LegalMoves {
    /// Number of moves not yet yielded.
    pub fn count_remaining(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Returns true if no moves remain.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Returns true if `pos` is among the remaining moves.
    pub fn contains(&self, pos: Position) -> bool {
        self.mask & (1 << pos.to_index()) != 0
    }
}

impl Iterator for LegalMoves {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.mask == 0 {
            return None;
        }
        let index = self.mask.trailing_zeros() as usize;
        self.mask &= self.mask - 1;
        Position::from_index(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count_remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for LegalMoves {}

/// All empty positions, in ascending index order.
pub fn legal_moves(board: &Board) -> LegalMoves {
    let mask = board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == Square::Empty)
        .fold(0u16, |mask, (i, _)| mask | (1 << i));
    LegalMoves { mask }
}

/// Returns true if the square holds a mark.
pub fn is_occupied(board: &Board, pos: Position) -> bool {
    !board.is_empty(pos)
}
