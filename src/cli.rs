//! Command-line interface for the console game.

use clap::Parser;

/// Console tic-tac-toe with pluggable rule variants.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Turn-based tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length.
    #[arg(short, long, default_value_t = 3)]
    pub size: usize,

    /// Rule variant identifier.
    #[arg(long, default_value = "standard")]
    pub variant: String,

    /// Name of the first player (marker X, moves first).
    #[arg(long, default_value = "Henry")]
    pub player_x: String,

    /// Name of the second player (marker O).
    #[arg(long, default_value = "John")]
    pub player_o: String,
}
