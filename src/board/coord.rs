//! Grid coordinates and travel directions for the 20x20 Gess board.
//!
//! Rows and columns are 1-based. Every cell in 1..=20 exists, but only
//! cells in 2..=19 may serve as piece centers; the outermost ring of cells
//! is where stones disintegrate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the full board.
pub const BOARD_SIZE: u8 = 20;

/// Lowest row/column index that exists on the board.
pub const OUTER_MIN: u8 = 1;

/// Highest row/column index that exists on the board.
pub const OUTER_MAX: u8 = BOARD_SIZE;

/// Lowest row/column index a piece center may occupy.
pub const INNER_MIN: u8 = 2;

/// Highest row/column index a piece center may occupy.
pub const INNER_MAX: u8 = BOARD_SIZE - 1;

/// Errors raised when a coordinate violates the grid contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CoordError {
    #[error("cell ({row}, {col}) is outside the 1..=20 grid")]
    OffGrid { row: i32, col: i32 },

    #[error("cell {0} cannot be a piece center")]
    NotPlayable(Coord),
}

/// A cell on the board, addressed by 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, rejecting anything outside 1..=20.
    pub fn new(row: i32, col: i32) -> Result<Coord, CoordError> {
        let in_range = |v: i32| (OUTER_MIN as i32..=OUTER_MAX as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CoordError::OffGrid { row, col })
        }
    }

    /// Creates a coordinate that must also be a legal piece center.
    pub fn center(row: i32, col: i32) -> Result<Coord, CoordError> {
        let coord = Coord::new(row, col)?;
        coord.require_playable()
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns true if the cell may be used as a piece center (2..=19 on both axes).
    pub const fn is_playable(self) -> bool {
        self.row >= INNER_MIN
            && self.row <= INNER_MAX
            && self.col >= INNER_MIN
            && self.col <= INNER_MAX
    }

    /// Returns true if the cell lies on the outermost row or column.
    pub const fn is_boundary(self) -> bool {
        self.row == OUTER_MIN
            || self.row == OUTER_MAX
            || self.col == OUTER_MIN
            || self.col == OUTER_MAX
    }

    /// Passes the coordinate through if it is playable.
    pub fn require_playable(self) -> Result<Coord, CoordError> {
        if self.is_playable() {
            Ok(self)
        } else {
            Err(CoordError::NotPlayable(self))
        }
    }

    /// Shifts the coordinate, returning `None` if the result leaves the grid.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Coord> {
        Coord::new(self.row as i32 + d_row, self.col as i32 + d_col).ok()
    }

    /// Moves one cell in the given direction.
    pub fn step(self, direction: Direction) -> Option<Coord> {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row as i32, d_col as i32)
    }

    /// Row and column displacement from `self` to `other`.
    pub fn displacement_to(self, other: Coord) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }

    /// The cells of the 3x3 footprint around this center that exist on the grid.
    ///
    /// Scan order is row offset -1..=1, then column offset -1..=1.
    pub fn footprint(self) -> impl Iterator<Item = Coord> {
        FOOTPRINT_OFFSETS
            .into_iter()
            .filter_map(move |(d_row, d_col)| self.offset(d_row as i32, d_col as i32))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Offsets of the 3x3 footprint in scan order, center included.
pub const FOOTPRINT_OFFSETS: [(i8, i8); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One of the eight unit vectors a piece may travel along.
///
/// Rows grow toward White's side of the board, so `North` is `(+1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    SouthWest = 0,
    South = 1,
    SouthEast = 2,
    West = 3,
    East = 4,
    NorthWest = 5,
    North = 6,
    NorthEast = 7,
}

/// All directions in footprint scan order.
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::SouthWest,
    Direction::South,
    Direction::SouthEast,
    Direction::West,
    Direction::East,
    Direction::NorthWest,
    Direction::North,
    Direction::NorthEast,
];

impl Direction {
    /// Returns the `(d_row, d_col)` unit vector.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::SouthWest => (-1, -1),
            Direction::South => (-1, 0),
            Direction::SouthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (1, -1),
            Direction::North => (1, 0),
            Direction::NorthEast => (1, 1),
        }
    }

    /// Looks up the direction for a unit vector. `(0, 0)` and non-unit
    /// vectors have no direction.
    pub fn from_delta(d_row: i8, d_col: i8) -> Option<Direction> {
        ALL_DIRECTIONS
            .into_iter()
            .find(|d| d.delta() == (d_row, d_col))
    }

    /// The sign pair of a displacement, if it is not zero-length.
    pub fn from_displacement(d_row: i32, d_col: i32) -> Option<Direction> {
        Direction::from_delta(d_row.signum() as i8, d_col.signum() as i8)
    }
}

/// A set of directions, iterated in footprint scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const fn empty() -> Self {
        DirectionSet(0)
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1u8 << direction as u8;
    }

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & (1u8 << direction as u8) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Direction> {
        ALL_DIRECTIONS.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for d in iter {
            set.insert(d);
        }
        set
    }
}
