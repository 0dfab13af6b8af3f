//! Pieces: the transient 3x3 view over the stones around a chosen center.
//!
//! A `Piece` never owns stones. It records the ids of its members together
//! with the geometry derived from them (legal directions and travel range),
//! and the generation of the `StoneSet` it was read from so a stale view can
//! be refused at commit time.

use smallvec::SmallVec;

use super::coord::{Coord, Direction, DirectionSet};
use super::stone::Player;
use super::stones::{Footprint, StoneId, StoneSet};

/// Travel range of a piece without a center stone.
pub const BOUNDED_DISTANCE: u8 = 3;

/// How far a piece may travel in one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxDistance {
    Bounded(u8),
    Unbounded,
}

impl MaxDistance {
    /// Returns true if a displacement of `d_row`/`d_col` is within range.
    pub fn allows(self, d_row: i32, d_col: i32) -> bool {
        match self {
            MaxDistance::Unbounded => true,
            MaxDistance::Bounded(max) => {
                d_row.unsigned_abs() <= max as u32 && d_col.unsigned_abs() <= max as u32
            }
        }
    }
}

/// The stones in a 3x3 footprint, treated as one movable unit.
#[derive(Debug, PartialEq, Eq)]
pub struct Piece {
    center: Coord,
    members: Footprint,
    owners: SmallVec<[Player; 9]>,
    center_occupied: bool,
    directions: DirectionSet,
    generation: u64,
}

impl Piece {
    /// Builds a piece from the non-suppressed stones around `center`.
    pub fn from_stones(center: Coord, stones: &StoneSet) -> Piece {
        let members = stones.visible_in_footprint(center);
        let mut owners = SmallVec::new();
        let mut center_occupied = false;
        let mut directions = DirectionSet::empty();

        for stone in members.iter().filter_map(|id| stones.get(*id)) {
            owners.push(stone.owner());
            let (d_row, d_col) = center.displacement_to(stone.location());
            match Direction::from_delta(d_row as i8, d_col as i8) {
                Some(direction) => directions.insert(direction),
                None => center_occupied = true,
            }
        }

        Piece {
            center,
            members,
            owners,
            center_occupied,
            directions,
            generation: stones.generation(),
        }
    }

    pub fn center(&self) -> Coord {
        self.center
    }

    /// Ids of the member stones in footprint scan order.
    pub fn members(&self) -> &[StoneId] {
        &self.members
    }

    pub fn stone_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Directions this piece may travel, one per occupied non-center offset.
    pub fn legal_directions(&self) -> DirectionSet {
        self.directions
    }

    /// Unbounded if a stone occupies the center cell, otherwise three.
    pub fn max_distance(&self) -> MaxDistance {
        if self.center_occupied {
            MaxDistance::Unbounded
        } else {
            MaxDistance::Bounded(BOUNDED_DISTANCE)
        }
    }

    pub fn contains_owner(&self, player: Player) -> bool {
        self.owners.contains(&player)
    }

    /// Returns true if `player` may move this piece: it must be non-empty,
    /// hold no opponent stones, and not consist of a lone center stone.
    pub fn is_legal_for(&self, player: Player) -> bool {
        if self.members.is_empty() || self.contains_owner(player.opponent()) {
            return false;
        }
        !(self.members.len() == 1 && self.center_occupied)
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Picks the piece up, suppressing every member stone until the returned
    /// guard is dropped or put down.
    pub fn lift<'a>(&'a self, stones: &'a mut StoneSet) -> Lift<'a> {
        Lift::new(stones, &self.members, self.center)
    }
}

/// A piece held off the board.
///
/// While the guard lives, the piece's stones are suppressed and invisible to
/// clearance and ring queries. Dropping the guard puts them back where they
/// were; `put_down` lands them around a new center instead.
pub struct Lift<'a> {
    stones: &'a mut StoneSet,
    members: &'a [StoneId],
    origin: Coord,
    held: bool,
}

impl<'a> Lift<'a> {
    fn new(stones: &'a mut StoneSet, members: &'a [StoneId], origin: Coord) -> Self {
        for id in members {
            stones.set_suppressed(*id, true);
        }
        Lift {
            stones,
            members,
            origin,
            held: true,
        }
    }

    /// Read access to the board as it looks with the piece lifted.
    pub fn stones(&self) -> &StoneSet {
        &*self.stones
    }

    /// Removes every visible stone in the footprint around `center`. The
    /// lifted piece is never captured by its own landing.
    pub fn capture_footprint(&mut self, center: Coord) -> usize {
        self.stones.capture_footprint(center)
    }

    /// Unsuppresses the piece and translates it so its center lands on
    /// `center`. Returns the number of stones that fell off the grid.
    pub fn put_down(mut self, center: Coord) -> usize {
        self.reveal();
        self.held = false;
        let (d_row, d_col) = self.origin.displacement_to(center);
        if (d_row, d_col) == (0, 0) {
            return 0;
        }
        self.stones.relocate(self.members, d_row, d_col)
    }

    fn reveal(&mut self) {
        for id in self.members {
            self.stones.set_suppressed(*id, false);
        }
    }
}

impl Drop for Lift<'_> {
    fn drop(&mut self) {
        if self.held {
            self.reveal();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn set_with(cells: &[(i32, i32, Player)]) -> StoneSet {
        let mut set = StoneSet::new();
        for &(r, c, p) in cells {
            set.insert(at(r, c), p).unwrap();
        }
        set
    }

    #[test]
    fn directions_follow_occupied_offsets() {
        let set = set_with(&[
            (11, 9, Player::White),
            (11, 10, Player::White),
            (11, 11, Player::White),
        ]);
        let piece = Piece::from_stones(at(10, 10), &set);
        let dirs: Vec<Direction> = piece.legal_directions().iter().collect();
        assert_eq!(
            dirs,
            vec![Direction::NorthWest, Direction::North, Direction::NorthEast]
        );
        assert_eq!(piece.max_distance(), MaxDistance::Bounded(3));
        assert!(piece.is_legal_for(Player::White));
    }

    #[test]
    fn lone_center_stone_is_illegal() {
        let set = set_with(&[(10, 10, Player::Black)]);
        let piece = Piece::from_stones(at(10, 10), &set);
        assert!(piece.legal_directions().is_empty());
        assert!(!piece.is_legal_for(Player::Black));
    }

    #[test]
    fn center_stone_with_neighbor_is_unbounded() {
        let set = set_with(&[(10, 10, Player::Black), (9, 10, Player::Black)]);
        let piece = Piece::from_stones(at(10, 10), &set);
        assert_eq!(piece.max_distance(), MaxDistance::Unbounded);
        assert!(piece.is_legal_for(Player::Black));
    }

    #[test]
    fn empty_and_mixed_pieces_are_illegal() {
        let set = set_with(&[(9, 9, Player::Black), (9, 11, Player::White)]);
        assert!(!Piece::from_stones(at(15, 15), &set).is_legal_for(Player::Black));
        let mixed = Piece::from_stones(at(10, 10), &set);
        assert!(mixed.contains_owner(Player::White));
        assert!(!mixed.is_legal_for(Player::Black));
        assert!(!mixed.is_legal_for(Player::White));
    }

    #[test]
    fn distance_bound() {
        assert!(MaxDistance::Bounded(3).allows(-3, 3));
        assert!(!MaxDistance::Bounded(3).allows(4, 0));
        assert!(MaxDistance::Unbounded.allows(17, 0));
    }

    #[test]
    fn dropped_lift_restores_in_place() {
        let mut set = set_with(&[(9, 9, Player::Black), (10, 10, Player::Black)]);
        let before = set.clone();
        let piece = Piece::from_stones(at(10, 10), &set);
        {
            let lift = piece.lift(&mut set);
            assert!(lift.stones().is_footprint_clear(at(10, 10)));
        }
        assert_eq!(set, before);
    }

    #[test]
    fn put_down_translates_members() {
        let mut set = set_with(&[(9, 9, Player::Black), (10, 10, Player::Black)]);
        let piece = Piece::from_stones(at(10, 10), &set);
        let lost = piece.lift(&mut set).put_down(at(12, 12));
        assert_eq!(lost, 0);
        assert!(set.stone_at(at(11, 11)).is_some());
        assert!(set.stone_at(at(12, 12)).is_some());
        assert!(set.stone_at(at(10, 10)).is_none());
        assert!(set.iter().all(|(_, s)| !s.is_suppressed()));
    }

    #[test]
    fn lifted_piece_survives_capture() {
        let mut set = set_with(&[
            (10, 10, Player::Black),
            (10, 11, Player::Black),
            (10, 12, Player::White),
        ]);
        let piece = Piece::from_stones(at(10, 10), &set);
        let mut lift = piece.lift(&mut set);
        assert_eq!(lift.capture_footprint(at(10, 11)), 1);
        lift.put_down(at(10, 11));
        assert_eq!(set.len(), 2);
        assert_eq!(set.stone_at(at(10, 12)).map(|s| s.owner()), Some(Player::Black));
    }
}
