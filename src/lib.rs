//! Console tic-tac-toe: board state, pluggable rules, and the turn loop.
//!
//! # Architecture
//!
//! - **Board**: bounds-checked grid of cells; out-of-range reads report the
//!   empty sentinel so the rule scans stay simple
//! - **Rules**: pluggable variant deciding move legality and win/draw
//! - **GameSession**: FIFO player rotation driving the turn loop
//! - **NotificationSink** / **MoveSource**: the external collaborators for
//!   broadcast events and blocking move input
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, Marker, Player, TurnOutcome};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut session = GameSession::build("standard", 3)?;
//! session.add_player(Player::new(1, "Ada".to_string(), Marker::new('X')).into_handle());
//! session.add_player(Player::new(2, "Grace".to_string(), Marker::new('O')).into_handle());
//! session.start()?;
//! assert_eq!(session.submit_move(1, 1)?, TurnOutcome::Placed);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod cli;
mod console;
mod error;
mod notify;
mod player;
mod render;
mod rules;
mod session;

// Crate-level exports - board state
pub use board::{Board, Cell, Marker};

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - console collaborators
pub use console::ConsoleMoveSource;
pub use notify::{ConsoleNotifier, NotificationSink};
pub use render::render;

// Crate-level exports - errors
pub use error::{BuildError, SessionError};

// Crate-level exports - players and rules
pub use player::{Player, PlayerHandle};
pub use rules::{RuleVariant, Rules, StandardRules};

// Crate-level exports - session state machine
pub use session::{GameSession, MoveSource, Outcome, Phase, TurnOutcome};
