//! Exhaustive minimax search with alpha-beta pruning.
//!
//! Values are scored from the point of view of the side passed as
//! `root_side`: [`WIN`] when that side wins, [`LOSS`] when it loses,
//! [`TIE`] otherwise. The tree is small enough to search to the end
//! from any position, so there is no depth limit and no heuristic.
//!
//! The board is mutated in place: every trial move is placed, searched,
//! and cleared again before the next sibling is tried.

use super::error::MoveError;
use super::position::Position;
use super::rules::{is_full, legal_moves, win_line};
use super::types::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position won by the root side.
pub const WIN: i32 = 1;
/// Value of a tied position.
pub const TIE: i32 = 0;
/// Value of a position lost by the root side.
pub const LOSS: i32 = -1;

/// Outcome of a root search: the chosen move and its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchResult {
    /// First move, in ascending index order, reaching the best value.
    best_move: Position,
    /// Game-theoretic value of `best_move` for the side to move.
    value: i32,
    /// Positions visited, counting terminal ones.
    nodes: u64,
}

// ─────────────────────────────────────────────────────────────
//  Recursive search
// ─────────────────────────────────────────────────────────────

/// Search state shared across one root call.
#[derive(Debug)]
struct AlphaBeta {
    root: Player,
    nodes: u64,
}

impl AlphaBeta {
    fn new(root: Player) -> Self {
        Self { root, nodes: 0 }
    }

    /// Minimax value of `board`. The maximizing layer places the root
    /// side's mark, the minimizing layer places the opponent's.
    fn search(
        &mut self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        // The side that just moved completed a line.
        if win_line(board).is_some() {
            return if maximizing { LOSS } else { WIN };
        }
        if is_full(board) {
            return TIE;
        }

        if maximizing {
            let mut best = i32::MIN;
            for pos in legal_moves(board) {
                board.place(pos, self.root);
                let score = self.search(board, false, alpha, beta);
                board.clear(pos);

                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            let mover = self.root.opponent();
            for pos in legal_moves(board) {
                board.place(pos, mover);
                let score = self.search(board, true, alpha, beta);
                board.clear(pos);

                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

/// Minimax value of `board` for `root_side`, searched to the end.
///
/// `maximizing` says whether `root_side` is to move. Pass `i32::MIN` and
/// `i32::MAX` as the initial window. Decided boards return their terminal
/// value immediately. The board is restored before returning.
pub fn search(
    board: &mut Board,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    root_side: Player,
) -> i32 {
    AlphaBeta::new(root_side).search(board, maximizing, alpha, beta)
}

// ─────────────────────────────────────────────────────────────
//  Root move selection
// ─────────────────────────────────────────────────────────────

/// Searches every legal move for `side` and keeps the strictly best one.
///
/// Each candidate is scored by searching the resulting position with the
/// opponent to move. Moves are tried in ascending index order and a later
/// move replaces the incumbent only with a strictly greater value, so the
/// lowest-index optimal move wins ties.
///
/// # Errors
///
/// - [`MoveError::GameOver`] if the board already has a complete line.
/// - [`MoveError::NoLegalMoves`] if the board is full.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, side: Player) -> Result<SearchResult, MoveError> {
    if win_line(board).is_some() {
        return Err(MoveError::GameOver);
    }

    let mut scratch = *board;
    let mut engine = AlphaBeta::new(side);
    let mut best: Option<(Position, i32)> = None;

    for pos in legal_moves(&scratch) {
        scratch.place(pos, side);
        let value = engine.search(&mut scratch, false, i32::MIN, i32::MAX);
        scratch.clear(pos);

        if best.is_none_or(|(_, incumbent)| value > incumbent) {
            best = Some((pos, value));
        }
    }

    let (best_move, value) = best.ok_or(MoveError::NoLegalMoves)?;
    debug!(best_move = %best_move, value, nodes = engine.nodes, "Search complete");

    Ok(SearchResult {
        best_move,
        value,
        nodes: engine.nodes,
    })
}

/// The move [`analyze`] selects. The caller applies it.
pub fn best_move(board: &Board, side: Player) -> Result<Position, MoveError> {
    analyze(board, side).map(|result| result.best_move)
}

/// Value of every legal move for `side`, in ascending index order.
///
/// Returns an empty list on full or decided boards.
#[instrument(skip(board), fields(board = %board))]
pub fn move_values(board: &Board, side: Player) -> Vec<(Position, i32)> {
    if win_line(board).is_some() {
        return Vec::new();
    }

    let mut scratch = *board;
    legal_moves(board)
        .map(|pos| {
            scratch.place(pos, side);
            let value = search(&mut scratch, false, i32::MIN, i32::MAX, side);
            scratch.clear(pos);
            (pos, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO_XX____".parse().unwrap();
        let result = analyze(&board, Player::O).unwrap();
        assert_eq!(*result.best_move(), Position::TopRight);
        assert_eq!(*result.value(), WIN);
    }

    #[test]
    fn test_blocks_immediate_loss() {
        // O threatens the top row; X has no win of its own.
        let board: Board = "OO__X____".parse().unwrap();
        assert_eq!(best_move(&board, Player::X).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_empty_board_is_a_tie_and_prefers_first_index() {
        let result = analyze(&Board::new(), Player::X).unwrap();
        assert_eq!(*result.value(), TIE);
        // Every opening ties, so the lowest index is kept.
        assert_eq!(*result.best_move(), Position::TopLeft);
    }

    #[test]
    fn test_tie_break_prefers_lowest_index_among_wins() {
        // X wins at once on index 2 (top row) or index 6 (left column);
        // index 8 leaves O facing both threats.
        let board: Board = "XX_XOO_O_".parse().unwrap();
        let values = move_values(&board, Player::X);
        let wins: Vec<_> = values
            .iter()
            .filter(|(_, v)| *v == WIN)
            .map(|(p, _)| *p)
            .collect();
        assert_eq!(
            wins,
            vec![Position::TopRight, Position::BottomLeft, Position::BottomRight]
        );
        assert_eq!(best_move(&board, Player::X).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_search_restores_board() {
        let mut board: Board = "X___O____".parse().unwrap();
        let before = board;
        search(&mut board, true, i32::MIN, i32::MAX, Player::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_search_on_decided_boards() {
        // O completed a line; from X's side as the mover that is a loss.
        let mut board: Board = "OOOXX____".parse().unwrap();
        assert_eq!(search(&mut board, true, i32::MIN, i32::MAX, Player::X), LOSS);
        // From O's side, with X to move, the same board is a win.
        assert_eq!(search(&mut board, false, i32::MIN, i32::MAX, Player::O), WIN);

        let mut full: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(search(&mut full, true, i32::MIN, i32::MAX, Player::O), TIE);
    }

    #[test]
    fn test_analyze_rejects_finished_boards() {
        let decided: Board = "OOOXX____".parse().unwrap();
        assert_eq!(analyze(&decided, Player::X), Err(MoveError::GameOver));

        let full: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(analyze(&full, Player::X), Err(MoveError::NoLegalMoves));
        assert!(move_values(&full, Player::X).is_empty());
    }

    #[test]
    fn test_forced_loss_is_recognised() {
        // X has a double threat (index 2 and index 6); O to move loses.
        let board: Board = "XX_XO__O_".parse().unwrap();
        let result = analyze(&board, Player::O).unwrap();
        assert_eq!(*result.value(), LOSS);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes_than_full_tree() {
        let result = analyze(&Board::new(), Player::X).unwrap();
        // The unpruned tree from the empty board has 549,946 nodes.
        assert!(*result.nodes() < 549_946);
        assert!(*result.nodes() > 9);
    }
}
