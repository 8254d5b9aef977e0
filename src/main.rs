//! Console tic-tac-toe entry point.
//!
//! Wires the CLI configuration into a session with two console players,
//! a console notifier, and a stdin move source.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;
use tictactoe::{
    Cli, ConsoleMoveSource, ConsoleNotifier, GameSession, Marker, Outcome, Player, RuleVariant,
    render,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    println!("TIC TAC TOE");

    let mut session = GameSession::build(&cli.variant, cli.size).with_context(|| {
        format!(
            "known variants: {}",
            RuleVariant::iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;
    session.add_sink(Box::new(ConsoleNotifier));

    let players = [
        Player::new(1, cli.player_x, Marker::new('X')).into_handle(),
        Player::new(2, cli.player_o, Marker::new('O')).into_handle(),
    ];
    for player in &players {
        session.add_player(player.clone());
    }

    let mut source = ConsoleMoveSource::stdin();
    let outcome = session.run(&mut source)?;

    print!("{}", render(session.board()));
    match outcome {
        Outcome::WinBy(id) => {
            if let Some(winner) = players.iter().find(|p| p.borrow().id() == id) {
                let winner = winner.borrow();
                println!("{} wins the match! (score: {})", winner.name(), winner.score());
            }
        }
        Outcome::Draw => println!("Match ended in a draw."),
    }

    Ok(())
}
