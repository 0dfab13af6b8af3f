//! Engine session state.
//!
//! Holds the game in progress and the engine options, and answers each
//! front-end command by writing a response line.

use std::collections::HashMap;
use std::io::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::board::{Coord, Player};
use crate::game::{Game, GameState, MoveOutcome};

/// Option name: print the board after each committed move.
pub const OPT_AUTO_DISPLAY: &str = "AutoDisplay";

/// Option name: append capture counts to `moveok`.
pub const OPT_VERBOSE: &str = "Verbose";

/// Per-player boolean or count, serialized as `{"black": .., "white": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerPlayer<T> {
    pub black: T,
    pub white: T,
}

impl<T> PerPlayer<T> {
    fn from_fn(f: impl Fn(Player) -> T) -> Self {
        PerPlayer {
            black: f(Player::Black),
            white: f(Player::White),
        }
    }
}

/// Snapshot reported by the `status` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Status {
    pub state: GameState,
    pub turn: Player,
    pub rings: PerPlayer<bool>,
    pub stones: PerPlayer<usize>,
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Game,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates an engine with a fresh game and default options.
    pub fn new() -> Self {
        Engine {
            game: Game::new(),
            options: HashMap::new(),
        }
    }

    /// Discards the current game and starts over from the opening layout.
    pub fn new_game(&mut self) {
        self.game = Game::new();
    }

    /// Sets an engine option. A bare name is stored with an empty value.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Reads a boolean option; a bare name counts as `true`.
    fn flag(&self, name: &str) -> bool {
        match self.options.get(name).map(|v| v.to_ascii_lowercase()) {
            None => false,
            Some(v) => match v.as_str() {
                "" | "true" | "on" | "1" => true,
                "false" | "off" | "0" => false,
                other => {
                    warn!(option = name, value = other, "unrecognized boolean option value");
                    false
                }
            },
        }
    }

    pub fn auto_display(&self) -> bool {
        self.flag(OPT_AUTO_DISPLAY)
    }

    pub fn verbose(&self) -> bool {
        self.flag(OPT_VERBOSE)
    }

    /// Plays a move for the side to move and reports the result.
    pub fn handle_move<W: Write>(
        &mut self,
        origin: Coord,
        destination: Coord,
        out: &mut W,
    ) -> io::Result<()> {
        let outcome = match self.game.play(origin, destination) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("move refused: {}", e);
                writeln!(out, "moveillegal notation")?;
                return out.flush();
            }
        };

        match outcome {
            MoveOutcome::Played { report, state } => {
                if self.verbose() {
                    writeln!(
                        out,
                        "moveok captured {} edge {}",
                        report.captured, report.lost_at_edge
                    )?;
                } else {
                    writeln!(out, "moveok")?;
                }
                if self.auto_display() {
                    write!(out, "{}", self.game.board())?;
                }
                if state != GameState::Unfinished {
                    writeln!(out, "gameover {}", state.label())?;
                }
            }
            MoveOutcome::Rejected(rejection) => {
                writeln!(out, "moveillegal {}", rejection)?;
            }
            MoveOutcome::GameOver(state) => {
                writeln!(out, "moveillegal gameover {}", state.label())?;
            }
        }
        out.flush()
    }

    /// The side to move concedes.
    pub fn handle_resign<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let player = self.game.current_player();
        if !self.game.resign(player) {
            warn!("resign ignored: game already over");
        }
        writeln!(out, "gameover {}", self.game.state().label())?;
        out.flush()
    }

    pub fn handle_show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.game.board())?;
        out.flush()
    }

    pub fn handle_ring<W: Write>(&self, player: Player, out: &mut W) -> io::Result<()> {
        writeln!(out, "ring {} {}", player.name(), self.game.has_ring(player))?;
        out.flush()
    }

    /// Current status of the game.
    pub fn status(&self) -> Status {
        let stones = self.game.board().stones();
        Status {
            state: self.game.state(),
            turn: self.game.current_player(),
            rings: PerPlayer::from_fn(|p| self.game.has_ring(p)),
            stones: PerPlayer::from_fn(|p| stones.count_for(p)),
        }
    }

    pub fn handle_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(&self.status()).map_err(io::Error::from)?;
        writeln!(out, "status {}", json)?;
        out.flush()
    }

    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }
}
