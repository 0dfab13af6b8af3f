//! The standard Gess opening layout.
//!
//! Each side has 43 stones on four rows. Black's rows are 2, 3, 4 and 7;
//! White's mirror them across the midline at 19, 18, 17 and 14.

use super::coord::{Coord, BOARD_SIZE};
use super::stone::{Player, ALL_PLAYERS};

/// Stones per side in the opening layout.
pub const STONES_PER_SIDE: usize = 43;

/// Columns occupied on a player's first and third ranks.
const FIRST_RANK: &[u8] = &[3, 5, 7, 8, 9, 10, 11, 12, 13, 14, 16, 18];

/// Columns occupied on a player's second rank.
const SECOND_RANK: &[u8] = &[2, 3, 4, 6, 8, 9, 10, 11, 13, 15, 17, 18, 19];

/// Columns occupied on a player's fourth rank.
const FOURTH_RANK: &[u8] = &[3, 6, 9, 12, 15, 18];

/// Rows counted from Black's edge, paired with their column lists.
const RANKS: [(u8, &[u8]); 4] = [
    (2, FIRST_RANK),
    (3, SECOND_RANK),
    (4, FIRST_RANK),
    (7, FOURTH_RANK),
];

/// Mirrors a Black row onto White's side.
const fn mirror_row(row: u8) -> u8 {
    BOARD_SIZE + 1 - row
}

/// Every stone of the opening layout, Black's first.
pub fn opening_stones() -> impl Iterator<Item = (Coord, Player)> {
    ALL_PLAYERS.into_iter().flat_map(|player| {
        RANKS.into_iter().flat_map(move |(row, cols)| {
            let row = match player {
                Player::Black => row,
                Player::White => mirror_row(row),
            };
            cols.iter().filter_map(move |&col| {
                Coord::new(row as i32, col as i32).ok().map(|c| (c, player))
            })
        })
    })
}
