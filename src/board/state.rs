//! The Gess board: stone ownership plus the spatial and mutation operations
//! move validation is built from.

use std::fmt;

use tracing::debug;

use super::coord::{Coord, CoordError, Direction, BOARD_SIZE, OUTER_MAX, OUTER_MIN};
use super::layout::opening_stones;
use super::piece::Piece;
use super::stone::Player;
use super::stones::StoneSet;

/// Errors raised by board construction and commits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell {0} already holds a stone")]
    Occupied(Coord),

    #[error("piece at {0} was read from an older board position")]
    StalePiece(Coord),

    #[error(transparent)]
    Coord(#[from] CoordError),
}

/// What a committed move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveReport {
    /// Stones removed from the landing footprint.
    pub captured: usize,
    /// Member stones removed for landing on the outer edge.
    pub lost_at_edge: usize,
}

/// The board owns every stone in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stones: StoneSet,
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates a board in the standard opening layout.
    pub fn new() -> Self {
        let mut stones = StoneSet::new();
        for (coord, player) in opening_stones() {
            stones.insert(coord, player);
        }
        Board { stones }
    }

    /// Creates a board from an explicit list of stones.
    pub fn from_stones<I>(stones: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = (Coord, Player)>,
    {
        let mut set = StoneSet::new();
        for (coord, player) in stones {
            set.insert(coord, player).ok_or(BoardError::Occupied(coord))?;
        }
        Ok(Board { stones: set })
    }

    pub fn stones(&self) -> &StoneSet {
        &self.stones
    }

    pub(crate) fn stones_mut(&mut self) -> &mut StoneSet {
        &mut self.stones
    }

    /// Builds a piece from the stones currently around `center`.
    pub fn extract_piece(&self, center: Coord) -> Piece {
        Piece::from_stones(center, &self.stones)
    }

    /// Removes every visible stone in the 3x3 area around `center`.
    pub fn capture_footprint(&mut self, center: Coord) -> usize {
        self.stones.capture_footprint(center)
    }

    /// Moves `piece` so it is centered on `destination`.
    ///
    /// Whatever else lies in the landing footprint is captured. Member
    /// stones that end up on the outer edge are removed. No legality checks
    /// are made here; see `rules::Move`.
    pub fn apply_move(
        &mut self,
        piece: Piece,
        destination: Coord,
    ) -> Result<MoveReport, BoardError> {
        let destination = destination.require_playable()?;
        if piece.generation() != self.stones.generation() {
            return Err(BoardError::StalePiece(piece.center()));
        }
        Ok(self.land(&piece, destination))
    }

    /// Lands a piece known to be current on a playable `destination`.
    pub(crate) fn land(&mut self, piece: &Piece, destination: Coord) -> MoveReport {
        let mut lift = piece.lift(&mut self.stones);
        let captured = lift.capture_footprint(destination);
        let mut lost_at_edge = lift.put_down(destination);

        for id in piece.members() {
            let on_edge = self
                .stones
                .get(*id)
                .is_some_and(|s| s.location().is_boundary());
            if on_edge && self.stones.remove_id(*id) {
                lost_at_edge += 1;
            }
        }

        debug!(
            from = %piece.center(),
            to = %destination,
            captured,
            lost_at_edge,
            "applied move"
        );
        MoveReport {
            captured,
            lost_at_edge,
        }
    }

    /// Returns true if `piece` can travel from `origin` toward `destination`
    /// along `direction` without meeting another stone.
    ///
    /// Every center visited before `destination` must have a clear footprint
    /// with the piece itself lifted. The destination footprint is not
    /// checked: stones there are captured on landing.
    pub fn is_path_clear(
        &mut self,
        piece: &Piece,
        origin: Coord,
        destination: Coord,
        direction: Direction,
    ) -> bool {
        let lift = piece.lift(&mut self.stones);
        trace_path(lift.stones(), origin, destination, direction)
    }

    /// Returns true if `player` has at least one ring on the board.
    pub fn has_ring(&self, player: Player) -> bool {
        self.stones.has_ring(player)
    }
}

/// Walks unit steps from `origin` until reaching `destination`, requiring
/// each visited footprint to be clear. A walk that leaves the grid or never
/// reaches the destination is blocked.
pub(crate) fn trace_path(
    stones: &StoneSet,
    origin: Coord,
    destination: Coord,
    direction: Direction,
) -> bool {
    let mut center = origin;
    for _ in 0..BOARD_SIZE {
        if center == destination {
            return true;
        }
        if !stones.is_footprint_clear(center) {
            return false;
        }
        center = match center.step(direction) {
            Some(next) => next,
            None => return false,
        };
    }
    center == destination
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for col in OUTER_MIN..=OUTER_MAX {
            write!(f, " {} ", (b'a' + col - 1) as char)?;
        }
        writeln!(f)?;

        for row in (OUTER_MIN..=OUTER_MAX).rev() {
            write!(f, "{:>2} |", row)?;
            for col in OUTER_MIN..=OUTER_MAX {
                let symbol = Coord::new(row as i32, col as i32)
                    .ok()
                    .and_then(|c| self.stones.stone_at(c))
                    .map_or('-', |s| s.owner().symbol());
                write!(f, " {} ", symbol)?;
            }
            writeln!(f, "| {}", row)?;
        }
        Ok(())
    }
}
