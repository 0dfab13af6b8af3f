//! Command parser for the text front end.
//!
//! Parses incoming lines into structured `Command` variants that the main
//! loop dispatches on.

use tracing::warn;

use super::notation::parse_center;
use crate::board::{Coord, Player};

/// A parsed front-end command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start a new game from the opening layout.
    NewGame,

    /// Move the piece centered on `origin` to `destination`.
    Move { origin: Coord, destination: Coord },

    /// The player to move concedes.
    Resign,

    /// Print the board.
    Show,

    /// Ask whether a player still has a ring.
    Ring { player: Player },

    /// Print the game status as JSON.
    Status,

    /// Set an option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Synchronization ping; the engine replies `readyok`.
    IsReady,

    /// Terminate the process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let first = *tokens.first()?;

    match first {
        "newgame" => Some(Command::NewGame),
        "resign" => Some(Command::Resign),
        "show" => Some(Command::Show),
        "status" => Some(Command::Status),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "move" => parse_move(&tokens[1..]),
        "ring" => parse_ring(&tokens),
        "setoption" => parse_setoption(&tokens),

        // A bare `<from> <to>` pair is shorthand for `move`.
        _ if tokens.len() == 2 => parse_move(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Parses the `<from> <to>` arguments of a move.
fn parse_move(args: &[&str]) -> Option<Command> {
    if args.len() != 2 {
        warn!("malformed move: expected 'move <from> <to>'");
        return None;
    }
    let origin = match parse_center(args[0]) {
        Ok(c) => c,
        Err(e) => {
            warn!(input = args[0], "malformed move origin: {}", e);
            return None;
        }
    };
    let destination = match parse_center(args[1]) {
        Ok(c) => c,
        Err(e) => {
            warn!(input = args[1], "malformed move destination: {}", e);
            return None;
        }
    };
    Some(Command::Move {
        origin,
        destination,
    })
}

/// Parses `ring <black|white>`.
fn parse_ring(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        warn!("malformed ring: expected 'ring <black|white>'");
        return None;
    }
    match Player::from_name(tokens[1]) {
        Some(player) => Some(Command::Ring { player }),
        None => {
            warn!("unknown player: '{}'", tokens[1]);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        warn!("malformed setoption: empty name");
        return None;
    }

    let name = name_parts.join(" ");
    let value = if value_parts.is_empty() {
        None
    } else {
        Some(value_parts.join(" "))
    };
    Some(Command::SetOption { name, value })
}
