//! Rule variants: move legality and win/draw evaluation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Marker};

/// Identifier for a pluggable rule variant.
///
/// Parsed from its lowercase string identifier; unrecognized identifiers
/// fail to parse rather than falling back to a default.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum RuleVariant {
    /// Classic rules: fill a row, column, or diagonal to win.
    Standard,
}

impl RuleVariant {
    /// Instantiates the rule engine for this variant.
    pub fn engine(self) -> Box<dyn Rules> {
        match self {
            RuleVariant::Standard => Box::new(StandardRules),
        }
    }
}

/// Move legality and terminal-condition evaluation for one rule variant.
///
/// Variants could add misère rules, k-in-a-row on larger boards, or
/// gravity-drop placement without touching [`Board`] or the session.
pub trait Rules {
    /// A move is valid iff the target cell is in bounds and empty.
    fn is_valid_move(&self, board: &Board, row: i32, col: i32) -> bool;

    /// True when any full row, full column, or either diagonal holds only
    /// `marker`. Board size is read from the board, not assumed.
    fn has_winner(&self, board: &Board, marker: Marker) -> bool;

    /// True when no cell is empty.
    ///
    /// Callers must check the winner first: a full board with a winning
    /// line is a win, not a draw.
    fn is_draw(&self, board: &Board) -> bool;
}

/// The standard rules variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl Rules for StandardRules {
    fn is_valid_move(&self, board: &Board, row: i32, col: i32) -> bool {
        board.is_empty(row, col)
    }

    fn has_winner(&self, board: &Board, marker: Marker) -> bool {
        let n = board.size() as i32;
        let owned = |row, col| board.cell(row, col) == Cell::Marked(marker);

        (0..n).any(|i| (0..n).all(|j| owned(i, j)))
            || (0..n).any(|j| (0..n).all(|i| owned(i, j)))
            || (0..n).all(|i| owned(i, i))
            || (0..n).all(|i| owned(i, n - 1 - i))
    }

    fn is_draw(&self, board: &Board) -> bool {
        let n = board.size() as i32;
        (0..n).all(|i| (0..n).all(|j| board.cell(i, j) != Cell::Empty))
    }
}
