//! Terminal front end for the alpha-beta tic-tac-toe engine.
//!
//! Provides configuration loading, the command-line definition, and the
//! `play`, `selfplay` and `analyze` commands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ArenaConfig, ConfigError};

// Crate-level exports - Commands
pub use commands::{analyze_position, infer_side, play, self_play};
