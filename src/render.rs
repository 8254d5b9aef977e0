//! Textual board rendering with row and column headers.

use crate::board::{Board, Cell};

/// Character shown for the empty sentinel.
const EMPTY_GLYPH: char = '-';

/// Formats the board as a grid with numeric row and column headers.
pub fn render(board: &Board) -> String {
    let n = board.size();
    let mut out = String::from("\n   ");
    for col in 0..n {
        out.push_str(&format!("{col} "));
    }
    out.push('\n');
    for row in 0..n {
        out.push_str(&format!("{row}  "));
        for col in 0..n {
            let glyph = match board.cell(row as i32, col as i32) {
                Cell::Empty => EMPTY_GLYPH,
                Cell::Marked(marker) => marker.value(),
            };
            out.push(glyph);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}
