//! A single game: one board, one ply counter, one move history.
//!
//! The side to move is never stored. It is derived from the number of
//! plies played and the mark that opened the game, see [`side_to_move`].

use super::action::Move;
use super::error::MoveError;
use super::position::Position;
use super::rules;
use super::strategy::Strategy;
use super::types::{Board, GameStatus, Player};
use tracing::{debug, info, instrument};

/// Mark that moves on `ply` (0-based) when `first_mark` opens the game.
pub fn side_to_move(ply: usize, first_mark: Player) -> Player {
    if ply % 2 == 0 {
        first_mark
    } else {
        first_mark.opponent()
    }
}

/// State of one game from the empty board to its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    ply: usize,
    first_mark: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on an empty board with X to open.
    #[instrument]
    pub fn new() -> Self {
        Self::with_first_mark(Player::X)
    }

    /// Creates a new game on an empty board with `first_mark` to open.
    #[instrument]
    pub fn with_first_mark(first_mark: Player) -> Self {
        Self {
            board: Board::new(),
            ply: 0,
            first_mark,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of plies played so far.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The mark that opened (or will open) this game.
    pub fn first_mark(&self) -> Player {
        self.first_mark
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The mark due to play next.
    pub fn side_to_move(&self) -> Player {
        side_to_move(self.ply, self.first_mark)
    }

    /// Win, tie, or still in progress. A win on the last square is a win.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Places the side to move's mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has ended.
    /// - [`MoveError::OccupiedCell`] if `pos` is taken; the board is unchanged.
    #[instrument(skip(self), fields(ply = self.ply, side = %self.side_to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        self.ensure_in_progress()?;
        if rules::is_occupied(&self.board, pos) {
            return Err(MoveError::OccupiedCell(pos));
        }

        let side = self.side_to_move();
        self.board.place(pos, side);
        self.record(side, pos);
        Ok(self.status())
    }

    /// Like [`Game::play`], taking a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidIndex`] for indices outside 0-8, checked before
    /// anything else, then as [`Game::play`].
    pub fn play_index(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        self.play(pos)
    }

    /// Lets `strategy` choose and place the side to move's mark.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has ended, or whatever the
    /// strategy reports.
    #[instrument(skip(self, strategy), fields(ply = self.ply, strategy = strategy.name()))]
    pub fn play_strategy(&mut self, strategy: &mut dyn Strategy) -> Result<Position, MoveError> {
        self.ensure_in_progress()?;

        let side = self.side_to_move();
        let pos = strategy.choose_move(&mut self.board, side)?;
        self.record(side, pos);
        Ok(pos)
    }

    /// Clears the board and history, keeping the opening mark.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.ply = 0;
        self.history.clear();
    }

    fn ensure_in_progress(&self) -> Result<(), MoveError> {
        if self.status().is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, side: Player, pos: Position) {
        self.history.push(Move::new(side, pos));
        self.ply += 1;
        debug!(side = %side, position = %pos, ply = self.ply, "Move recorded");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OptimalStrategy;

    #[test]
    fn test_side_to_move_alternates_from_first_mark() {
        assert_eq!(side_to_move(0, Player::X), Player::X);
        assert_eq!(side_to_move(1, Player::X), Player::O);
        assert_eq!(side_to_move(8, Player::X), Player::X);
        assert_eq!(side_to_move(0, Player::O), Player::O);
        assert_eq!(side_to_move(3, Player::O), Player::X);
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.ply(), 0);
        assert_eq!(game.side_to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_occupied_cell_leaves_state_untouched() {
        let mut game = Game::new();
        game.play(Position::Center).unwrap();
        let before = game.clone();

        assert_eq!(
            game.play(Position::Center),
            Err(MoveError::OccupiedCell(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_invalid_index_rejected() {
        let mut game = Game::new();
        assert_eq!(game.play_index(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4] {
            game.play_index(index).unwrap();
        }
        let status = game.play_index(2).unwrap();
        assert_eq!(status.winner(), Some(Player::X));
        assert_eq!(game.play_index(8), Err(MoveError::GameOver));
        assert_eq!(
            game.play_strategy(&mut OptimalStrategy::new()),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_strategy_move_advances_ply() {
        let mut game = Game::with_first_mark(Player::O);
        let pos = game.play_strategy(&mut OptimalStrategy::new()).unwrap();
        assert_eq!(game.ply(), 1);
        assert_eq!(game.history(), &[Move::new(Player::O, pos)]);
        assert_eq!(game.side_to_move(), Player::X);
    }

    #[test]
    fn test_reset_keeps_first_mark() {
        let mut game = Game::with_first_mark(Player::O);
        game.play(Position::Center).unwrap();
        game.reset();
        assert_eq!(game, Game::with_first_mark(Player::O));
    }
}
