//! Console I/O: the stdin-backed move source.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use crate::board::Board;
use crate::player::Player;
use crate::render::render;
use crate::session::MoveSource;

/// Move source that prompts on stdout and reads `row col` pairs from a
/// buffered reader.
///
/// The board is rendered before every prompt, so the player always sees
/// the state produced by the previous transition.
pub struct ConsoleMoveSource<R> {
    input: R,
}

impl ConsoleMoveSource<io::StdinLock<'static>> {
    /// Reads moves from standard input.
    pub fn stdin() -> Self {
        Self {
            input: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> ConsoleMoveSource<R> {
    /// Reads moves from any buffered reader.
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

/// Parses a `row col` pair from one input line.
fn parse_pair(line: &str) -> Option<(i32, i32)> {
    let mut parts = line.split_whitespace().map(str::parse::<i32>);
    match (parts.next(), parts.next()) {
        (Some(Ok(row)), Some(Ok(col))) => Some((row, col)),
        _ => None,
    }
}

impl<R: BufRead> MoveSource for ConsoleMoveSource<R> {
    fn next_move(&mut self, player: &Player, board: &Board) -> Result<(i32, i32)> {
        loop {
            print!("{}", render(board));
            print!(
                "{} ({}) - Enter row and column: ",
                player.name(),
                player.marker()
            );
            io::stdout().flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before {} moved", player.name());
            }
            match parse_pair(&line) {
                Some(pair) => return Ok(pair),
                None => {
                    debug!(line = line.trim(), "unparseable move input");
                    println!("Enter two numbers separated by a space.");
                }
            }
        }
    }

    fn reject(&mut self, _row: i32, _col: i32) {
        println!("Invalid move. Please try again.");
    }
}
