//! Error types for session construction and play.
//!
//! All three conditions are expected, recoverable outcomes communicated
//! through return values rather than panics.

use derive_more::{Display, Error};

/// Failure to construct a session: the factory refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BuildError {
    /// The rule-variant identifier is not recognized.
    #[display("unknown rule variant: {_0}")]
    UnknownVariant(#[error(not(source))] String),
    /// The board side length must be at least 1.
    #[display("invalid board size: {_0}")]
    InvalidBoardSize(#[error(not(source))] usize),
}

/// Failure to start or continue play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Fewer than two players are registered.
    #[display("at least two players are required to start the game")]
    InsufficientPlayers,
    /// A move was submitted before play started.
    #[display("the game has not started")]
    NotStarted,
    /// The game already reached a terminal outcome.
    #[display("the game is already finished")]
    Finished,
}
