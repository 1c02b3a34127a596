//! The eight symmetries of the square board.

use super::position::Position;
use super::types::Board;
use serde::{Deserialize, Serialize};

/// An element of the board's dihedral symmetry group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Symmetry {
    /// No change.
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Quarter turn counter-clockwise.
    Rotate270,
    /// Mirror across the vertical axis.
    FlipHorizontal,
    /// Mirror across the horizontal axis.
    FlipVertical,
    /// Mirror across the main diagonal.
    Transpose,
    /// Mirror across the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    /// All eight symmetries.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rotate90,
        Symmetry::Rotate180,
        Symmetry::Rotate270,
        Symmetry::FlipHorizontal,
        Symmetry::FlipVertical,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    /// Where `pos` lands under this symmetry.
    pub fn apply(self, pos: Position) -> Position {
        let (r, c) = (pos.row(), pos.col());
        let (row, col) = match self {
            Symmetry::Identity => (r, c),
            Symmetry::Rotate90 => (c, 2 - r),
            Symmetry::Rotate180 => (2 - r, 2 - c),
            Symmetry::Rotate270 => (2 - c, r),
            Symmetry::FlipHorizontal => (r, 2 - c),
            Symmetry::FlipVertical => (2 - r, c),
            Symmetry::Transpose => (c, r),
            Symmetry::AntiTranspose => (2 - c, 2 - r),
        };
        // row and col stay in 0..3 for every arm above
        Position::ALL[row * 3 + col]
    }

    /// The board with every square moved by this symmetry.
    pub fn transform(self, board: &Board) -> Board {
        let mut out = Board::new();
        for pos in Position::ALL {
            out.set(self.apply(pos), board.get(pos));
        }
        out
    }
}
