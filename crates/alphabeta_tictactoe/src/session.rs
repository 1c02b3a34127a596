//! Human versus computer play.
//!
//! A session pairs one [`Game`] with a computer [`Strategy`]. The seat
//! that opens is chosen up front, independently of which mark opens, so
//! all four combinations of (human or computer first) and (X or O first)
//! go through the same ply arithmetic.

use super::error::MoveError;
use super::game::Game;
use super::position::Position;
use super::strategy::Strategy;
use super::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Who sits in a chair.
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
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Seat {
    /// The person at the keyboard.
    #[default]
    Human,
    /// The engine.
    Computer,
}

impl Seat {
    /// The other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::Human => Seat::Computer,
            Seat::Computer => Seat::Human,
        }
    }
}

/// Seat that moves on `ply` (0-based) when `opener` moves first.
pub fn seat_to_move(ply: usize, opener: Seat) -> Seat {
    if ply % 2 == 0 { opener } else { opener.other() }
}

/// Mark played by `seat` when `opener` moves first with `first_mark`.
pub fn mark_for(seat: Seat, opener: Seat, first_mark: Player) -> Player {
    if seat == opener {
        first_mark
    } else {
        first_mark.opponent()
    }
}

/// What happened in response to one human move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Where the human played.
    pub human: Position,
    /// The computer's reply, absent if the human's move ended the game.
    pub reply: Option<Position>,
    /// Status after both moves.
    pub status: GameStatus,
}

/// A game between a human and a computer strategy.
pub struct Session {
    game: Game,
    computer: Box<dyn Strategy>,
    opener: Seat,
}

impl Session {
    /// Creates a session. Nothing is played until [`Session::opening_move`]
    /// or [`Session::human_move`] is called.
    #[instrument(skip(computer), fields(computer = computer.name()))]
    pub fn new(opener: Seat, first_mark: Player, computer: Box<dyn Strategy>) -> Self {
        Self {
            game: Game::with_first_mark(first_mark),
            computer,
            opener,
        }
    }

    /// The underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Who opens.
    pub fn opener(&self) -> Seat {
        self.opener
    }

    /// The human's mark.
    pub fn human_mark(&self) -> Player {
        mark_for(Seat::Human, self.opener, self.game.first_mark())
    }

    /// The computer's mark.
    pub fn computer_mark(&self) -> Player {
        mark_for(Seat::Computer, self.opener, self.game.first_mark())
    }

    /// Seat due to play next.
    pub fn seat_to_move(&self) -> Seat {
        seat_to_move(self.game.ply(), self.opener)
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// The computer's first move when it opens.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyStarted`] after any ply has been played.
    /// - [`MoveError::WrongSeat`] if the human opens this session.
    #[instrument(skip(self))]
    pub fn opening_move(&mut self) -> Result<Position, MoveError> {
        if self.game.ply() != 0 {
            return Err(MoveError::GameAlreadyStarted);
        }
        if self.opener != Seat::Computer {
            return Err(MoveError::WrongSeat);
        }
        let pos = self.game.play_strategy(self.computer.as_mut())?;
        info!(position = %pos, mark = %self.computer_mark(), "Computer opened");
        Ok(pos)
    }

    /// Plays the human's move at `index`, then the computer's reply if
    /// the game is still going.
    ///
    /// # Errors
    ///
    /// - [`MoveError::InvalidIndex`] or [`MoveError::OccupiedCell`] for a
    ///   bad square; nothing is played.
    /// - [`MoveError::GameOver`] once the game has ended. Moves on a
    ///   finished board are rejected rather than ignored.
    /// - [`MoveError::WrongSeat`] if the computer still owes its opening move.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, index: usize) -> Result<Turn, MoveError> {
        let human = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;
        if self.game.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.seat_to_move() != Seat::Human {
            return Err(MoveError::WrongSeat);
        }

        let status = self.game.play(human)?;
        if status.is_over() {
            info!(%status, "Game over after human move");
            return Ok(Turn {
                human,
                reply: None,
                status,
            });
        }

        let reply = self.game.play_strategy(self.computer.as_mut())?;
        let status = self.game.status();
        if status.is_over() {
            info!(%status, "Game over after computer reply");
        }
        Ok(Turn {
            human,
            reply: Some(reply),
            status,
        })
    }

    /// Starts a fresh game with the same seats and marks.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("computer", &self.computer.name())
            .field("opener", &self.opener)
            .finish()
    }
}
