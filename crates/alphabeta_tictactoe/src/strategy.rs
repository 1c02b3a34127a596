//! Move-selection policies.

use super::error::MoveError;
use super::position::Position;
use super::rules::legal_moves;
use super::search::best_move;
use super::types::{Board, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A policy that picks a move for one side.
pub trait Strategy {
    /// Picks a move for `side` without touching the board.
    ///
    /// # Errors
    ///
    /// [`MoveError::NoLegalMoves`] on a full board. Callers are expected
    /// to check for a finished game before asking.
    fn decide(&mut self, board: &Board, side: Player) -> Result<Position, MoveError>;

    /// Display name, used to label batch results.
    fn name(&self) -> &str;

    /// Decides, places `side`'s mark, and returns the chosen position.
    fn choose_move(&mut self, board: &mut Board, side: Player) -> Result<Position, MoveError> {
        let pos = self.decide(board, side)?;
        if !board.is_empty(pos) {
            return Err(MoveError::OccupiedCell(pos));
        }
        board.place(pos, side);
        debug!(strategy = self.name(), side = %side, position = %pos, "Placed mark");
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Optimal
// ─────────────────────────────────────────────────────────────

/// Plays the alpha-beta search's best move. Never loses.
#[derive(Debug, Clone, Default)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    /// Creates the optimal strategy.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for OptimalStrategy {
    #[instrument(skip(self, board), fields(board = %board))]
    fn decide(&mut self, board: &Board, side: Player) -> Result<Position, MoveError> {
        best_move(board, side)
    }

    fn name(&self) -> &str {
        StrategyKind::AlphaBeta.label()
    }
}

// ─────────────────────────────────────────────────────────────
//  Random
// ─────────────────────────────────────────────────────────────

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn decide(&mut self, board: &Board, _side: Player) -> Result<Position, MoveError> {
        let legal: Vec<Position> = legal_moves(board).collect();
        legal
            .choose(&mut self.rng)
            .copied()
            .ok_or(MoveError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        StrategyKind::Random.label()
    }
}

// ─────────────────────────────────────────────────────────────
//  Selection by name
// ─────────────────────────────────────────────────────────────

/// The available strategies, selectable by name.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StrategyKind {
    /// [`OptimalStrategy`].
    AlphaBeta,
    /// [`RandomStrategy`].
    Random,
}

impl StrategyKind {
    /// Label shown in batch results.
    pub fn label(self) -> &'static str {
        match self {
            StrategyKind::AlphaBeta => "AlphaBeta",
            StrategyKind::Random => "Random",
        }
    }

    /// Builds the strategy. `seed` only affects [`StrategyKind::Random`].
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::AlphaBeta => Box::new(OptimalStrategy::new()),
            StrategyKind::Random => match seed {
                Some(seed) => Box::new(RandomStrategy::seeded(seed)),
                None => Box::new(RandomStrategy::new()),
            },
        }
    }
}
