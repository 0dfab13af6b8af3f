//! Stones and their owners.
//!
//! A stone is the atomic board marker. It can be suppressed to make it
//! invisible to legality queries while a piece is probed "as if" lifted.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

/// Both players, Black first.
pub const ALL_PLAYERS: [Player; 2] = [Player::Black, Player::White];

impl Player {
    /// The other player.
    pub const fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Returns the single-character board symbol.
    pub const fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }

    /// Parses a player name, `black`/`white` or `b`/`w`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Player> {
        match name.to_ascii_lowercase().as_str() {
            "black" | "b" => Some(Player::Black),
            "white" | "w" => Some(Player::White),
            _ => None,
        }
    }

    /// Lowercase name used in protocol responses.
    pub const fn name(self) -> &'static str {
        match self {
            Player::Black => "black",
            Player::White => "white",
        }
    }
}

/// A single stone on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    location: Coord,
    owner: Player,
    suppressed: bool,
}

impl Stone {
    pub const fn new(location: Coord, owner: Player) -> Self {
        Stone {
            location,
            owner,
            suppressed: false,
        }
    }

    pub const fn location(&self) -> Coord {
        self.location
    }

    pub const fn owner(&self) -> Player {
        self.owner
    }

    pub const fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Shifts the stone by the given displacement. Returns false, leaving the
    /// stone in place, if the target cell is off the grid.
    pub fn translate(&mut self, d_row: i32, d_col: i32) -> bool {
        match self.location.offset(d_row, d_col) {
            Some(target) => {
                self.location = target;
                true
            }
            None => false,
        }
    }

    pub fn suppress(&mut self) {
        self.suppressed = true;
    }

    pub fn unsuppress(&mut self) {
        self.suppressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_involution() {
        for p in ALL_PLAYERS {
            assert_ne!(p.opponent(), p);
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn player_names() {
        assert_eq!(Player::from_name("Black"), Some(Player::Black));
        assert_eq!(Player::from_name("w"), Some(Player::White));
        assert_eq!(Player::from_name("red"), None);
        assert_eq!(Player::White.name(), "white");
    }

    #[test]
    fn translate_and_suppress() {
        let mut stone = Stone::new(Coord::new(5, 5).unwrap(), Player::White);
        assert!(stone.translate(-2, 3));
        assert_eq!(stone.location(), Coord::new(3, 8).unwrap());

        stone.suppress();
        assert!(stone.is_suppressed());
        stone.unsuppress();
        assert!(!stone.is_suppressed());
        assert_eq!(stone.owner(), Player::White);
    }

    #[test]
    fn translate_off_grid_keeps_location() {
        let mut stone = Stone::new(Coord::new(2, 2).unwrap(), Player::Black);
        assert!(!stone.translate(-2, 0));
        assert_eq!(stone.location(), Coord::new(2, 2).unwrap());
    }
}
