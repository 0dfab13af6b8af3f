//! Turn sequencing, victory detection, and resignation.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{Board, Coord, CoordError, MoveReport, Player};
use crate::rules::{Move, Rejection};

/// Overall result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Unfinished,
    BlackWon,
    WhiteWon,
}

impl GameState {
    /// The state in which `player` has won.
    pub const fn won_by(player: Player) -> GameState {
        match player {
            Player::Black => GameState::BlackWon,
            Player::White => GameState::WhiteWon,
        }
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            GameState::Unfinished => None,
            GameState::BlackWon => Some(Player::Black),
            GameState::WhiteWon => Some(Player::White),
        }
    }

    /// Uppercase label used in protocol responses.
    pub const fn label(self) -> &'static str {
        match self {
            GameState::Unfinished => "UNFINISHED",
            GameState::BlackWon => "BLACK_WON",
            GameState::WhiteWon => "WHITE_WON",
        }
    }
}

/// Result of asking the game to play a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was made. `state` is the game state afterward.
    Played { report: MoveReport, state: GameState },
    /// The move broke a rule; nothing changed.
    Rejected(Rejection),
    /// The game had already ended.
    GameOver(GameState),
}

impl MoveOutcome {
    pub fn is_played(&self) -> bool {
        matches!(self, MoveOutcome::Played { .. })
    }
}

/// A game of Gess. Black moves first.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Player,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// Starts a game from the opening layout.
    pub fn new() -> Self {
        Game::from_board(Board::new(), Player::Black)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Game {
            board,
            current: to_move,
            state: GameState::Unfinished,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Unfinished
    }

    pub fn has_ring(&self, player: Player) -> bool {
        self.board.has_ring(player)
    }

    /// Plays a move for the player whose turn it is.
    ///
    /// After a committed move the mover wins if the opponent has no ring
    /// left, and the turn passes either way.
    pub fn play(&mut self, origin: Coord, destination: Coord) -> Result<MoveOutcome, CoordError> {
        if self.is_over() {
            return Ok(MoveOutcome::GameOver(self.state));
        }

        let mover = self.current;
        let report = match Move::new(&mut self.board, mover, origin, destination)?.commit() {
            Ok(report) => report,
            Err(rejection) => return Ok(MoveOutcome::Rejected(rejection)),
        };

        if !self.board.has_ring(mover.opponent()) {
            self.state = GameState::won_by(mover);
            info!(winner = ?mover, "last opposing ring destroyed");
        }
        self.current = mover.opponent();

        Ok(MoveOutcome::Played {
            report,
            state: self.state,
        })
    }

    /// Plays a move on behalf of `player`. Returns `Ok(false)` if it is not
    /// that player's turn, the game is over, or the move is illegal.
    pub fn make_move(
        &mut self,
        player: Player,
        origin: Coord,
        destination: Coord,
    ) -> Result<bool, CoordError> {
        if player != self.current {
            return Ok(false);
        }
        Ok(self.play(origin, destination)?.is_played())
    }

    /// Concedes the game for `player`. Returns false if it had already ended.
    pub fn resign(&mut self, player: Player) -> bool {
        if self.is_over() {
            return false;
        }
        self.state = GameState::won_by(player.opponent());
        info!(loser = ?player, "resigned");
        true
    }
}
