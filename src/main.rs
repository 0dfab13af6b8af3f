//! Gess -- a rules engine for the 20x20 board game.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to adjust.

use std::io::{self, BufRead};

use tracing_subscriber::EnvFilter;

use gess::engine::Engine;
use gess::protocol::parser::{parse_command, Command};

/// Runs the main command loop, reading commands from stdin and writing
/// responses to stdout.
fn main() -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::NewGame => engine.new_game(),
            Command::Move {
                origin,
                destination,
            } => engine.handle_move(origin, destination, &mut out)?,
            Command::Resign => engine.handle_resign(&mut out)?,
            Command::Show => engine.handle_show(&mut out)?,
            Command::Ring { player } => engine.handle_ring(player, &mut out)?,
            Command::Status => engine.handle_status(&mut out)?,
            Command::SetOption { name, value } => engine.set_option(name, value),
            Command::IsReady => engine.handle_isready(&mut out)?,
            Command::Quit => break,
        }
    }
    Ok(())
}
