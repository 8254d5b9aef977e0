//! Player identity, marker assignment, and cumulative score.

use std::cell::RefCell;
use std::rc::Rc;

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::board::Marker;

/// Shared handle to a caller-owned player.
///
/// Sessions reference players through this handle rather than owning them,
/// so scores persist after a session ends. Play is single-threaded, so
/// `Rc<RefCell<_>>` suffices.
pub type PlayerHandle = Rc<RefCell<Player>>;

/// A participant: identity, assigned marker, and cumulative score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Player {
    /// Identifier unique within a session.
    #[getter(copy)]
    id: u32,
    /// Display name.
    name: String,
    /// Marker unique to this player within a session.
    #[getter(copy)]
    marker: Marker,
    /// Wins attributed to this player.
    #[new(default)]
    #[getter(copy)]
    score: u32,
}

impl Player {
    /// Wraps the player in a shared handle for session registration.
    pub fn into_handle(self) -> PlayerHandle {
        Rc::new(RefCell::new(self))
    }

    /// Records a win.
    pub(crate) fn increment_score(&mut self) {
        self.score += 1;
    }
}
