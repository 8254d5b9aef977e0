//! The game session: phase machine, turn rotation, and notifications.

use std::collections::VecDeque;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::board::Board;
use crate::error::{BuildError, SessionError};
use crate::notify::NotificationSink;
use crate::player::{Player, PlayerHandle};
use crate::rules::{RuleVariant, Rules};

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The identified player completed a winning line.
    WinBy(u32),
    /// The board filled with no winning line.
    Draw,
}

/// Lifecycle phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players may still register; no moves accepted.
    NotStarted,
    /// Moves are accepted for the front-of-rotation player.
    InProgress,
    /// Terminal; no further moves accepted.
    Finished(Outcome),
}

/// Result of submitting one move for the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Out of bounds or occupied: no state change, same player to act.
    Invalid,
    /// Move applied; the actor rotated to the back.
    Placed,
    /// Move applied and completed a winning line; session finished.
    Won,
    /// Move applied and filled the board with no winner; session finished.
    Draw,
}

/// Supplies one `(row, col)` move per request for the acting player.
///
/// The source performs no validation. Rejected moves come back through
/// [`MoveSource::reject`] on the same channel and the same player is asked
/// again.
pub trait MoveSource {
    /// Blocks until the player supplies a move.
    ///
    /// # Errors
    ///
    /// Fails only when the input channel is exhausted.
    fn next_move(&mut self, player: &Player, board: &Board) -> Result<(i32, i32)>;

    /// Reports a rejected move locally to the prompting channel.
    fn reject(&mut self, row: i32, col: i32) {
        let _ = (row, col);
    }
}

/// One game: a board, a rule engine, and a FIFO rotation of players.
///
/// The session owns its board and rules exclusively; players are shared
/// handles owned by the caller.
pub struct GameSession {
    board: Board,
    rules: Box<dyn Rules>,
    rotation: VecDeque<PlayerHandle>,
    sinks: Vec<Box<dyn NotificationSink>>,
    phase: Phase,
}

impl GameSession {
    /// Factory: builds a session for the given rule-variant identifier and
    /// board size.
    ///
    /// # Errors
    ///
    /// [`BuildError::UnknownVariant`] for an unrecognized identifier and
    /// [`BuildError::InvalidBoardSize`] for a zero side length. No partial
    /// session is produced on failure.
    #[instrument]
    pub fn build(variant: &str, size: usize) -> Result<Self, BuildError> {
        let variant = RuleVariant::from_str(variant)
            .map_err(|_| BuildError::UnknownVariant(variant.to_string()))?;
        let board = Board::new(size)?;
        info!(%variant, size, "session created");
        Ok(Self {
            board,
            rules: variant.engine(),
            rotation: VecDeque::new(),
            sinks: Vec::new(),
            phase: Phase::NotStarted,
        })
    }

    /// Registers a player at the back of the rotation.
    ///
    /// Rotation order is insertion order; the front player acts first.
    pub fn add_player(&mut self, player: PlayerHandle) {
        self.rotation.push_back(player);
    }

    /// Registers a notification sink; sinks fire in registration order.
    pub fn add_sink(&mut self, sink: Box<dyn NotificationSink>) {
        self.sinks.push(sink);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Terminal outcome, once the session is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player ids in rotation order; the front is next to act.
    pub fn rotation(&self) -> Vec<u32> {
        self.rotation.iter().map(|p| p.borrow().id()).collect()
    }

    /// The player whose turn it is, while the game is in progress.
    pub fn current_player(&self) -> Option<PlayerHandle> {
        match self.phase {
            Phase::InProgress => self.rotation.front().cloned(),
            _ => None,
        }
    }

    fn broadcast(&mut self, message: &str) {
        for sink in &mut self.sinks {
            sink.notify(message);
        }
    }

    /// Starts play.
    ///
    /// # Errors
    ///
    /// [`SessionError::InsufficientPlayers`] below two registered players;
    /// the session stays [`Phase::NotStarted`]. Starting a finished session
    /// fails with [`SessionError::Finished`].
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Finished(_) => return Err(SessionError::Finished),
            Phase::InProgress => return Ok(()),
            Phase::NotStarted => {}
        }
        if self.rotation.len() < 2 {
            warn!(players = self.rotation.len(), "refusing to start");
            return Err(SessionError::InsufficientPlayers);
        }
        self.phase = Phase::InProgress;
        info!(players = self.rotation.len(), "game started");
        self.broadcast("Game started.");
        Ok(())
    }

    /// Applies one move for the front-of-rotation player.
    ///
    /// An invalid move leaves the session untouched and keeps the same
    /// player to act. A valid move is broadcast, then checked for a win
    /// first and a draw second; a non-terminal move rotates the actor to
    /// the back of the rotation.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotStarted`] before [`GameSession::start`] and
    /// [`SessionError::Finished`] after a terminal outcome.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: i32, col: i32) -> Result<TurnOutcome, SessionError> {
        match self.phase {
            Phase::NotStarted => return Err(SessionError::NotStarted),
            Phase::Finished(_) => return Err(SessionError::Finished),
            Phase::InProgress => {}
        }
        let Some(current) = self.rotation.front().cloned() else {
            return Err(SessionError::NotStarted);
        };
        let (id, name, marker) = {
            let player = current.borrow();
            (player.id(), player.name().clone(), player.marker())
        };

        if !self.rules.is_valid_move(&self.board, row, col) {
            debug!(row, col, player = %name, "invalid move");
            return Ok(TurnOutcome::Invalid);
        }

        self.board.place(row, col, marker);
        self.broadcast(&format!("{name} played at ({row},{col})."));

        if self.rules.has_winner(&self.board, marker) {
            current.borrow_mut().increment_score();
            self.phase = Phase::Finished(Outcome::WinBy(id));
            info!(player = %name, "game won");
            self.broadcast(&format!("{name} has won the game."));
            return Ok(TurnOutcome::Won);
        }
        if self.rules.is_draw(&self.board) {
            self.phase = Phase::Finished(Outcome::Draw);
            info!("game drawn");
            self.broadcast("The game ended in a draw.");
            return Ok(TurnOutcome::Draw);
        }

        self.rotation.rotate_left(1);
        Ok(TurnOutcome::Placed)
    }

    /// Drives the blocking turn loop until a terminal outcome.
    ///
    /// Starts the session if needed, then repeatedly prompts the acting
    /// player through `source`. Invalid moves are rejected on the source's
    /// own channel without rotating or broadcasting.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionError`] from starting or moving, and any failure
    /// of the move source itself.
    #[instrument(skip_all)]
    pub fn run(&mut self, source: &mut dyn MoveSource) -> Result<Outcome> {
        self.start()?;
        loop {
            let Some(current) = self.current_player() else {
                anyhow::bail!("no player to act");
            };
            let (row, col) = source.next_move(&current.borrow(), &self.board)?;
            match self.submit_move(row, col)? {
                TurnOutcome::Invalid => source.reject(row, col),
                TurnOutcome::Placed => {}
                TurnOutcome::Won | TurnOutcome::Draw => {
                    let Phase::Finished(outcome) = self.phase else {
                        unreachable!("terminal turn must finish the session");
                    };
                    return Ok(outcome);
                }
            }
        }
    }
}
