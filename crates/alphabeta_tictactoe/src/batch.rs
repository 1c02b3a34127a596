//! Batch self-play between two strategies.
//!
//! Strategy A plays O and strategy B plays X. Results are tallied as
//! wins for A, wins for B, and ties. A game that fails part-way is
//! counted under `failures` and the batch carries on.

use super::error::MoveError;
use super::game::Game;
use super::strategy::{Strategy, StrategyKind};
use super::types::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Preset strategy pairings, named as in the self-play selector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Matchup {
    /// AlphaBeta (O) against AlphaBeta (X).
    #[default]
    #[serde(rename = "abvab")]
    #[strum(serialize = "abvab")]
    AlphaBetaVsAlphaBeta,
    /// AlphaBeta (O) against Random (X).
    #[serde(rename = "rvab")]
    #[strum(serialize = "rvab")]
    AlphaBetaVsRandom,
    /// Random (O) against Random (X).
    #[serde(rename = "rvr")]
    #[strum(serialize = "rvr")]
    RandomVsRandom,
}

impl Matchup {
    /// Strategies for slot A (O) and slot B (X).
    pub fn strategies(self) -> [StrategyKind; 2] {
        match self {
            Matchup::AlphaBetaVsAlphaBeta => [StrategyKind::AlphaBeta, StrategyKind::AlphaBeta],
            Matchup::AlphaBetaVsRandom => [StrategyKind::AlphaBeta, StrategyKind::Random],
            Matchup::RandomVsRandom => [StrategyKind::Random, StrategyKind::Random],
        }
    }
}

/// Tally of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Names of strategy A (O) and strategy B (X).
    labels: [String; 2],
    /// Games won by strategy A.
    wins_a: u64,
    /// Games won by strategy B.
    wins_b: u64,
    /// Games ending on a full board with no line.
    ties: u64,
    /// Games abandoned because a move failed.
    failures: u64,
}

impl BatchRecord {
    /// Empty tally for the given strategy labels.
    pub fn new(label_a: impl Into<String>, label_b: impl Into<String>) -> Self {
        Self {
            labels: [label_a.into(), label_b.into()],
            ..Self::default()
        }
    }

    /// Games that reached an outcome.
    pub fn completed(&self) -> u64 {
        self.wins_a + self.wins_b + self.ties
    }

    /// Percentages of A wins, B wins and ties among completed games.
    /// All zero when nothing completed.
    pub fn shares(&self) -> [f64; 3] {
        let total = self.completed();
        if total == 0 {
            return [0.0; 3];
        }
        let pct = |n: u64| n as f64 * 100.0 / total as f64;
        [pct(self.wins_a), pct(self.wins_b), pct(self.ties)]
    }

    fn tally(&mut self, result: Result<GameStatus, MoveError>) {
        match result {
            Ok(GameStatus::Won {
                winner: Player::O, ..
            }) => self.wins_a += 1,
            Ok(GameStatus::Won {
                winner: Player::X, ..
            }) => self.wins_b += 1,
            Ok(GameStatus::Tie) => self.ties += 1,
            Ok(GameStatus::InProgress) => {
                warn!("Game stopped before reaching an outcome");
                self.failures += 1;
            }
            Err(e) => {
                warn!(error = %e, "Game failed");
                self.failures += 1;
            }
        }
    }
}

impl std::fmt::Display for BatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, tie] = self.shares();
        write!(
            f,
            "({}) O: {} [{:.1}%]  ({}) X: {} [{:.1}%]  Tie: {} [{:.1}%]",
            self.labels[0], self.wins_a, a, self.labels[1], self.wins_b, b, self.ties, tie
        )?;
        if self.failures > 0 {
            write!(f, "  Failed: {}", self.failures)?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Single game
// ─────────────────────────────────────────────────────────────

/// Plays one game to the end on its own fresh board.
///
/// `o` plays every O ply and `x` every X ply; `first_mark` opens.
///
/// # Errors
///
/// The first error raised by either strategy.
#[instrument(skip(o, x), fields(o = o.name(), x = x.name()))]
pub fn play_game<'a>(
    o: &mut (dyn Strategy + 'a),
    x: &mut (dyn Strategy + 'a),
    first_mark: Player,
) -> Result<Game, MoveError> {
    let mut game = Game::with_first_mark(first_mark);
    while !game.status().is_over() {
        let strategy = match game.side_to_move() {
            Player::O => &mut *o,
            Player::X => &mut *x,
        };
        game.play_strategy(strategy)?;
    }
    debug!(status = %game.status(), plies = game.ply(), "Game finished");
    Ok(game)
}

// ─────────────────────────────────────────────────────────────
//  Batch runner
// ─────────────────────────────────────────────────────────────

/// Repeats self-play games between two owned strategies.
pub struct Batch {
    a: Box<dyn Strategy>,
    b: Box<dyn Strategy>,
    first_mark: Player,
}

impl Batch {
    /// Strategy `a` plays O, `b` plays X, X opens.
    pub fn new(a: Box<dyn Strategy>, b: Box<dyn Strategy>) -> Self {
        Self {
            a,
            b,
            first_mark: Player::X,
        }
    }

    /// Builds both strategies of a preset. Random strategies get
    /// distinct seeds derived from `seed` when one is given.
    #[instrument]
    pub fn from_matchup(matchup: Matchup, seed: Option<u64>) -> Self {
        let [a, b] = matchup.strategies();
        Self::new(a.build(seed), b.build(seed.map(|s| s.wrapping_add(1))))
    }

    /// Sets which mark opens each game.
    pub fn with_first_mark(mut self, first_mark: Player) -> Self {
        self.first_mark = first_mark;
        self
    }

    /// Plays `games` games. Zero games returns an all-zero tally.
    #[instrument(
        skip(self),
        fields(a = self.a.name(), b = self.b.name(), first = %self.first_mark)
    )]
    pub fn run(&mut self, games: u64) -> BatchRecord {
        run_games(self.a.as_mut(), self.b.as_mut(), games, self.first_mark)
    }
}

impl std::fmt::Debug for Batch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Batch")
            .field("a", &self.a.name())
            .field("b", &self.b.name())
            .field("first_mark", &self.first_mark)
            .finish()
    }
}

/// Plays `games` games with `a` as O and `b` as X, X opening.
pub fn run_batch(a: &mut dyn Strategy, b: &mut dyn Strategy, games: u64) -> BatchRecord {
    run_games(a, b, games, Player::X)
}

fn run_games(
    a: &mut dyn Strategy,
    b: &mut dyn Strategy,
    games: u64,
    first_mark: Player,
) -> BatchRecord {
    let mut record = BatchRecord::new(a.name(), b.name());
    for n in 0..games {
        let result = play_game(a, b, first_mark).map(|game| game.status());
        debug!(game = n, ?result, "Tallying game");
        record.tally(result);
    }
    info!(%record, "Batch complete");
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, OptimalStrategy, Position, RandomStrategy};

    /// Always answers the same square, so it fails once that square is taken.
    struct Stubborn;

    impl Strategy for Stubborn {
        fn decide(&mut self, _board: &Board, _side: Player) -> Result<Position, MoveError> {
            Ok(Position::Center)
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn test_zero_games_is_all_zero() {
        let record = run_batch(&mut OptimalStrategy::new(), &mut RandomStrategy::seeded(1), 0);
        assert_eq!(record.completed(), 0);
        assert_eq!(*record.failures(), 0);
        assert_eq!(record.shares(), [0.0; 3]);
        assert_eq!(record.labels(), &["AlphaBeta".to_string(), "Random".to_string()]);
    }

    #[test]
    fn test_optimal_never_loses_to_random() {
        let record = Batch::from_matchup(Matchup::AlphaBetaVsRandom, Some(9)).run(30);
        assert_eq!(*record.wins_b(), 0);
        assert_eq!(record.completed(), 30);
    }

    #[test]
    fn test_failing_game_is_isolated() {
        let mut a = Stubborn;
        let mut b = Stubborn;
        let record = run_batch(&mut a, &mut b, 3);
        assert_eq!(*record.failures(), 3);
        assert_eq!(record.completed(), 0);
    }

    #[test]
    fn test_play_game_uses_fresh_board() {
        let first = play_game(&mut OptimalStrategy::new(), &mut OptimalStrategy::new(), Player::X)
            .unwrap();
        let second = play_game(&mut OptimalStrategy::new(), &mut OptimalStrategy::new(), Player::X)
            .unwrap();
        assert_eq!(first.history(), second.history());
        assert_eq!(first.status(), GameStatus::Tie);
        assert_eq!(first.ply(), 9);
    }

    #[test]
    fn test_play_game_with_boxed_strategies_of_different_kinds() {
        let mut o: Box<dyn Strategy> = StrategyKind::AlphaBeta.build(None);
        let mut x: Box<dyn Strategy> = StrategyKind::Random.build(Some(5));
        let game = play_game(o.as_mut(), x.as_mut(), Player::O).unwrap();
        assert!(game.status().is_over());
        assert_eq!(game.history()[0].player, Player::O);
        assert_ne!(game.status().winner(), Some(Player::X));
    }

    #[test]
    fn test_matchup_names() {
        assert_eq!("rvab".parse::<Matchup>().unwrap(), Matchup::AlphaBetaVsRandom);
        assert_eq!(Matchup::AlphaBetaVsAlphaBeta.to_string(), "abvab");
        assert_eq!(
            Matchup::RandomVsRandom.strategies(),
            [StrategyKind::Random, StrategyKind::Random]
        );
    }

    #[test]
    fn test_shares_sum_to_hundred() {
        let record = Batch::from_matchup(Matchup::RandomVsRandom, Some(5)).run(40);
        let total: f64 = record.shares().iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
