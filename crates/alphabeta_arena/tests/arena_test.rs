//! Tests for configuration loading and the arena commands.

use alphabeta_arena::{ArenaConfig, analyze_position, infer_side, play, self_play};
use alphabeta_tictactoe::{Board, GameStatus, Matchup, Player, Seat, StrategyKind};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

fn run_play(config: &ArenaConfig, input: &str) -> (GameStatus, String) {
    let mut out = Vec::new();
    let status = play(config, Cursor::new(input), &mut out).expect("play failed");
    (status, String::from_utf8(out).expect("output is utf-8"))
}

// ─────────────────────────────────────────────────────────────
//  Config
// ─────────────────────────────────────────────────────────────

#[test]
fn test_empty_config_uses_defaults() {
    let file = write_config("");
    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(config, ArenaConfig::default());
    assert_eq!(*config.matchup(), Matchup::AlphaBetaVsAlphaBeta);
    assert_eq!(*config.games(), 100);
    assert_eq!(*config.first_mark(), Player::X);
    assert_eq!(*config.seed(), None);
    assert_eq!(*config.opener(), Seat::Human);
    assert_eq!(*config.computer(), StrategyKind::AlphaBeta);
}

#[test]
fn test_config_file_values() {
    let file = write_config(
        r#"
matchup = "rvr"
games = 25
first_mark = "O"
seed = 11
opener = "computer"
computer = "random"
"#,
    );
    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.matchup(), Matchup::RandomVsRandom);
    assert_eq!(*config.games(), 25);
    assert_eq!(*config.first_mark(), Player::O);
    assert_eq!(*config.seed(), Some(11));
    assert_eq!(*config.opener(), Seat::Computer);
    assert_eq!(*config.computer(), StrategyKind::Random);
}

#[test]
fn test_overrides_only_replace_given_values() {
    let config = ArenaConfig::default()
        .with_matchup(Some(Matchup::AlphaBetaVsRandom))
        .with_games(None)
        .with_first_mark(Some(Player::O))
        .with_seed(None);
    assert_eq!(*config.matchup(), Matchup::AlphaBetaVsRandom);
    assert_eq!(*config.games(), 100);
    assert_eq!(*config.first_mark(), Player::O);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_bad_config_is_an_error() {
    let file = write_config("matchup = \"chess\"");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ArenaConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_load_without_path_is_default() {
    assert_eq!(ArenaConfig::load(None).unwrap(), ArenaConfig::default());
}

// ─────────────────────────────────────────────────────────────
//  selfplay
// ─────────────────────────────────────────────────────────────

#[test]
fn test_self_play_uses_config() {
    let config = ArenaConfig::default()
        .with_matchup(Some(Matchup::RandomVsRandom))
        .with_games(Some(40))
        .with_seed(Some(5));
    let record = self_play(&config);
    assert_eq!(record.completed(), 40);
    assert_eq!(record.labels(), &["Random".to_string(), "Random".to_string()]);
}

#[test]
fn test_self_play_is_reproducible_with_a_seed() {
    let config = ArenaConfig::default()
        .with_matchup(Some(Matchup::AlphaBetaVsRandom))
        .with_games(Some(30))
        .with_seed(Some(17));
    assert_eq!(self_play(&config), self_play(&config));
}

#[test]
fn test_self_play_record_serializes() {
    let config = ArenaConfig::default().with_games(Some(3));
    let json = serde_json::to_value(self_play(&config)).unwrap();
    assert_eq!(json["ties"], 3);
    assert_eq!(json["labels"][0], "AlphaBeta");
}

// ─────────────────────────────────────────────────────────────
//  analyze
// ─────────────────────────────────────────────────────────────

#[test]
fn test_infer_side_from_counts() {
    let board: Board = "X________".parse().unwrap();
    assert_eq!(infer_side(&board, Player::X), Player::O);

    let board: Board = "O________".parse().unwrap();
    assert_eq!(infer_side(&board, Player::O), Player::X);

    let board: Board = "OO_XX____".parse().unwrap();
    assert_eq!(infer_side(&board, Player::O), Player::O);
    assert_eq!(infer_side(&board, Player::X), Player::X);
}

#[test]
fn test_analyze_reports_the_winning_square() {
    let board: Board = "OO_XX____".parse().unwrap();
    let mut out = Vec::new();
    analyze_position(&board, Player::O, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("O to move"));
    assert!(text.contains(" 2  Top-right"));
    assert!(text.contains("best: 2 (win)"));
}

#[test]
fn test_analyze_finished_board_prints_status() {
    let board: Board = "XXXOO____".parse().unwrap();
    let mut out = Vec::new();
    analyze_position(&board, Player::O, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Player X wins on 0-1-2"));
    assert!(!text.contains("best:"));
}

// ─────────────────────────────────────────────────────────────
//  play
// ─────────────────────────────────────────────────────────────

#[test]
fn test_play_quit_leaves_game_in_progress() {
    let (status, out) = run_play(&ArenaConfig::default(), "4\nq\n");
    assert_eq!(status, GameStatus::InProgress);
    assert!(out.contains("You are X."));
    assert!(out.contains("Computer plays"));
    assert!(out.contains("Game abandoned."));
}

#[test]
fn test_play_human_cannot_beat_alpha_beta() {
    // Squares in order; taken ones are rejected and the next line is read.
    let (status, out) = run_play(&ArenaConfig::default(), "0\n1\n2\n3\n4\n5\n6\n7\n8\n");
    assert!(status.is_over());
    assert_ne!(status.winner(), Some(Player::X));
    assert!(out.contains("Tie.") || out.contains("Computer wins."));
}

#[test]
fn test_play_rejects_bad_and_taken_squares() {
    let (_, out) = run_play(&ArenaConfig::default(), "12\nnowhere\n4\n4\nq\n");
    assert!(out.contains("Not a square: 12"));
    assert!(out.contains("Not a square: nowhere"));
    assert!(out.contains("4 is taken"));
}

#[test]
fn test_play_computer_opens() {
    let config = ArenaConfig::default().with_opener(Some(Seat::Computer));
    let (status, out) = run_play(&config, "top-left\n");
    assert_eq!(status, GameStatus::InProgress);
    assert!(out.contains("You are O."));
    assert!(out.contains("Computer plays 0"));
    assert!(out.contains("0 is taken"));
}

#[test]
fn test_play_accepts_square_names() {
    let (_, out) = run_play(&ArenaConfig::default(), "center\nq\n");
    assert!(out.contains("X|"));
    assert!(!out.contains("Not a square"));
}
