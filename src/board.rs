//! Board state: markers, cells, and the bounds-checked grid.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::BuildError;

/// A player's symbol. Equality is by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct Marker(char);

impl Marker {
    /// Creates a marker from its display character.
    pub fn new(value: char) -> Self {
        Self(value)
    }

    /// Returns the display character.
    pub fn value(self) -> char {
        self.0
    }
}

/// A grid position: the empty sentinel or a placed marker.
///
/// Empty is a distinguished value of its own, not an absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No marker placed here.
    Empty,
    /// Occupied by a player's marker.
    Marked(Marker),
}

/// Square grid of cells with bounds-checked access.
///
/// Out-of-range reads report [`Cell::Empty`] and out-of-range writes are
/// rejected; the rule engine relies on this leniency for its diagonal and
/// edge scans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: Vec<Cell>,
    /// Side length of the grid.
    size: usize,
}

impl Board {
    /// Creates an n×n board with every cell empty.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidBoardSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BuildError> {
        if size == 0 {
            return Err(BuildError::InvalidBoardSize(size));
        }
        Ok(Self {
            cells: vec![Cell::Empty; size * size],
            size,
        })
    }

    /// Flat index for in-bounds coordinates.
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        let n = self.size as i32;
        if row < 0 || row >= n || col < 0 || col >= n {
            return None;
        }
        Some(row as usize * self.size + col as usize)
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `(row, col)`, or [`Cell::Empty`] out of bounds.
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        self.index(row, col).map_or(Cell::Empty, |i| self.cells[i])
    }

    /// True only for an in-bounds, unoccupied cell.
    pub fn is_empty(&self, row: i32, col: i32) -> bool {
        self.index(row, col)
            .is_some_and(|i| self.cells[i] == Cell::Empty)
    }

    /// Places `marker` at `(row, col)`.
    ///
    /// Returns `false`, with no other effect, when the cell is occupied or
    /// out of bounds.
    #[instrument(skip(self))]
    pub fn place(&mut self, row: i32, col: i32, marker: Marker) -> bool {
        match self.index(row, col) {
            Some(i) if self.cells[i] == Cell::Empty => {
                self.cells[i] = Cell::Marked(marker);
                true
            }
            _ => false,
        }
    }
}
