//! Board representation and the stone-level operations moves are built on.
//!
//! Contains grid coordinates, stones and their owners, the stone arena,
//! pieces, the opening layout, and the board itself.

pub mod coord;
pub mod layout;
pub mod piece;
pub mod state;
pub mod stone;
pub mod stones;

pub use coord::{
    Coord, CoordError, Direction, DirectionSet, ALL_DIRECTIONS, BOARD_SIZE, INNER_MAX, INNER_MIN,
    OUTER_MAX, OUTER_MIN,
};
pub use layout::{opening_stones, STONES_PER_SIDE};
pub use piece::{Lift, MaxDistance, Piece, BOUNDED_DISTANCE};
pub use state::{Board, BoardError, MoveReport};
pub use stone::{Player, Stone, ALL_PLAYERS};
pub use stones::{Footprint, StoneId, StoneSet, RING_STONE_COUNT};
