//! The authoritative collection of stones on the board.
//!
//! Stones live in an arena addressed by `StoneId`. A per-cell index makes
//! spatial lookups O(1); removed stones leave a tombstone so ids stay stable
//! for the lifetime of the set.

use smallvec::SmallVec;

use super::coord::{Coord, BOARD_SIZE, INNER_MAX, INNER_MIN};
use super::stone::{Player, Stone};

/// Number of stones a ring footprint must hold around its empty center.
pub const RING_STONE_COUNT: usize = 8;

/// Stable handle to a stone in a `StoneSet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoneId(u16);

impl StoneId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Up to nine stone ids from a 3x3 footprint, in scan order.
pub type Footprint = SmallVec<[StoneId; 9]>;

const SIDE: usize = BOARD_SIZE as usize;

/// All stones on the board.
///
/// Invariant: each cell holds at most one stone, suppressed or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneSet {
    stones: Vec<Option<Stone>>,
    cells: [[Option<StoneId>; SIDE]; SIDE],
    /// Bumped on every insert, removal, or relocation.
    generation: u64,
}

impl Default for StoneSet {
    fn default() -> Self {
        StoneSet::new()
    }
}

fn cell_index(coord: Coord) -> (usize, usize) {
    (coord.row() as usize - 1, coord.col() as usize - 1)
}

impl StoneSet {
    /// Creates an empty stone set.
    pub fn new() -> Self {
        StoneSet {
            stones: Vec::new(),
            cells: [[None; SIDE]; SIDE],
            generation: 0,
        }
    }

    /// Places a new stone. Returns `None` if the cell is already occupied.
    pub fn insert(&mut self, location: Coord, owner: Player) -> Option<StoneId> {
        let (r, c) = cell_index(location);
        if self.cells[r][c].is_some() {
            return None;
        }
        let id = StoneId(self.stones.len() as u16);
        self.stones.push(Some(Stone::new(location, owner)));
        self.cells[r][c] = Some(id);
        self.generation += 1;
        Some(id)
    }

    pub fn get(&self, id: StoneId) -> Option<&Stone> {
        self.stones.get(id.index()).and_then(|s| s.as_ref())
    }

    /// Id of the stone at the cell, suppressed or not.
    pub fn id_at(&self, coord: Coord) -> Option<StoneId> {
        let (r, c) = cell_index(coord);
        self.cells[r][c]
    }

    /// The stone at the cell, suppressed or not.
    pub fn stone_at(&self, coord: Coord) -> Option<&Stone> {
        self.id_at(coord).and_then(|id| self.get(id))
    }

    /// All stones in the 3x3 footprint around `center`, suppressed or not,
    /// in scan order. Filtering by suppression is the caller's job.
    pub fn stones_in_footprint(&self, center: Coord) -> Footprint {
        center.footprint().filter_map(|cell| self.id_at(cell)).collect()
    }

    /// The non-suppressed stones in the footprint around `center`.
    pub fn visible_in_footprint(&self, center: Coord) -> Footprint {
        self.stones_in_footprint(center)
            .into_iter()
            .filter(|id| self.get(*id).is_some_and(|s| !s.is_suppressed()))
            .collect()
    }

    /// True iff no non-suppressed stone lies in the footprint around `center`.
    pub fn is_footprint_clear(&self, center: Coord) -> bool {
        center
            .footprint()
            .filter_map(|cell| self.stone_at(cell))
            .all(|s| s.is_suppressed())
    }

    /// Removes the stone at `coord` unless it is absent or suppressed.
    pub fn remove(&mut self, coord: Coord) -> bool {
        match self.id_at(coord) {
            Some(id) if self.get(id).is_some_and(|s| !s.is_suppressed()) => self.remove_id(id),
            _ => false,
        }
    }

    /// Removes a stone by id regardless of suppression.
    pub(crate) fn remove_id(&mut self, id: StoneId) -> bool {
        let Some(stone) = self.stones.get_mut(id.index()).and_then(|s| s.take()) else {
            return false;
        };
        let (r, c) = cell_index(stone.location());
        if self.cells[r][c] == Some(id) {
            self.cells[r][c] = None;
        }
        self.generation += 1;
        true
    }

    /// Removes every non-suppressed stone in the footprint around `center`.
    /// Returns how many stones were removed.
    pub fn capture_footprint(&mut self, center: Coord) -> usize {
        let targets = self.visible_in_footprint(center);
        targets.into_iter().filter(|id| self.remove_id(*id)).count()
    }

    pub(crate) fn set_suppressed(&mut self, id: StoneId, suppressed: bool) {
        if let Some(stone) = self.stones.get_mut(id.index()).and_then(|s| s.as_mut()) {
            if suppressed {
                stone.suppress();
            } else {
                stone.unsuppress();
            }
        }
    }

    /// Translates a group of stones by one displacement.
    ///
    /// The group is vacated first so members may land on each other's old
    /// cells. A landing stone replaces any other stone already on its target
    /// cell. Stones whose target lies off the grid are removed. Returns the
    /// number of stones removed that way.
    pub(crate) fn relocate(&mut self, ids: &[StoneId], d_row: i32, d_col: i32) -> usize {
        for id in ids {
            if let Some(stone) = self.get(*id) {
                let (r, c) = cell_index(stone.location());
                if self.cells[r][c] == Some(*id) {
                    self.cells[r][c] = None;
                }
            }
        }

        let mut lost = 0;
        for id in ids {
            let Some(stone) = self.stones.get_mut(id.index()).and_then(|s| s.as_mut()) else {
                continue;
            };
            if !stone.translate(d_row, d_col) {
                self.stones[id.index()] = None;
                lost += 1;
                continue;
            }
            let (r, c) = cell_index(stone.location());
            if let Some(occupant) = self.cells[r][c].replace(*id) {
                self.stones[occupant.index()] = None;
            }
        }
        self.generation += 1;
        lost
    }

    /// Returns true if `player` has at least one ring.
    ///
    /// Ring centers are scanned over 3..=18 so the whole footprint stays
    /// inside the playable area. A center qualifies when no stone sits on it
    /// and its footprint holds exactly eight stones, none suppressed and
    /// none belonging to the opponent.
    pub fn has_ring(&self, player: Player) -> bool {
        let opponent = player.opponent();
        for row in INNER_MIN + 1..INNER_MAX {
            for col in INNER_MIN + 1..INNER_MAX {
                let Ok(center) = Coord::new(row as i32, col as i32) else {
                    continue;
                };
                if self.id_at(center).is_some() {
                    continue;
                }
                let footprint = self.stones_in_footprint(center);
                if footprint.len() != RING_STONE_COUNT {
                    continue;
                }
                let is_ring = footprint.iter().filter_map(|id| self.get(*id)).all(|s| {
                    !s.is_suppressed() && s.owner() != opponent
                });
                if is_ring {
                    return true;
                }
            }
        }
        false
    }

    /// Iterates over all live stones with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (StoneId, &Stone)> {
        self.stones
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (StoneId(i as u16), s)))
    }

    /// Number of live stones.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of live stones owned by `player`.
    pub fn count_for(&self, player: Player) -> usize {
        self.iter().filter(|(_, s)| s.owner() == player).count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    /// Eight stones around an empty (r, c).
    fn place_ring(set: &mut StoneSet, r: i32, c: i32, owner: Player) {
        for cell in at(r, c).footprint() {
            if cell != at(r, c) {
                set.insert(cell, owner).unwrap();
            }
        }
    }

    #[test]
    fn insert_rejects_occupied_cell() {
        let mut set = StoneSet::new();
        assert!(set.insert(at(5, 5), Player::Black).is_some());
        assert!(set.insert(at(5, 5), Player::White).is_none());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn footprint_is_scan_ordered() {
        let mut set = StoneSet::new();
        let a = set.insert(at(6, 6), Player::Black).unwrap();
        let b = set.insert(at(4, 4), Player::Black).unwrap();
        let c = set.insert(at(5, 6), Player::Black).unwrap();
        set.insert(at(8, 8), Player::Black).unwrap();
        assert_eq!(set.stones_in_footprint(at(5, 5)).as_slice(), &[b, c, a]);
    }

    #[test]
    fn suppressed_stones_are_invisible_to_clearance() {
        let mut set = StoneSet::new();
        let id = set.insert(at(5, 5), Player::White).unwrap();
        assert!(!set.is_footprint_clear(at(5, 6)));

        set.set_suppressed(id, true);
        assert!(set.is_footprint_clear(at(5, 6)));
        assert_eq!(set.stones_in_footprint(at(5, 6)).len(), 1);
        assert!(set.visible_in_footprint(at(5, 6)).is_empty());
    }

    #[test]
    fn remove_skips_suppressed() {
        let mut set = StoneSet::new();
        let id = set.insert(at(5, 5), Player::White).unwrap();
        set.set_suppressed(id, true);
        assert!(!set.remove(at(5, 5)));
        set.set_suppressed(id, false);
        assert!(set.remove(at(5, 5)));
        assert!(!set.remove(at(5, 5)));
        assert!(set.stone_at(at(5, 5)).is_none());
    }

    #[test]
    fn capture_is_idempotent() {
        let mut set = StoneSet::new();
        set.insert(at(5, 5), Player::White).unwrap();
        set.insert(at(6, 4), Player::Black).unwrap();
        set.insert(at(9, 9), Player::Black).unwrap();
        assert_eq!(set.capture_footprint(at(5, 5)), 2);
        assert_eq!(set.capture_footprint(at(5, 5)), 0);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn relocate_group_onto_own_cells() {
        let mut set = StoneSet::new();
        let a = set.insert(at(5, 5), Player::Black).unwrap();
        let b = set.insert(at(5, 6), Player::Black).unwrap();
        assert_eq!(set.relocate(&[a, b], 0, 1), 0);
        assert_eq!(set.id_at(at(5, 5)), None);
        assert_eq!(set.id_at(at(5, 6)), Some(a));
        assert_eq!(set.id_at(at(5, 7)), Some(b));
    }

    #[test]
    fn relocate_drops_stones_off_grid() {
        let mut set = StoneSet::new();
        let a = set.insert(at(19, 5), Player::White).unwrap();
        let b = set.insert(at(20, 5), Player::White).unwrap();
        assert_eq!(set.relocate(&[a, b], 1, 0), 1);
        assert_eq!(set.len(), 1);
        assert_eq!(set.id_at(at(20, 5)), Some(a));
    }

    #[test]
    fn generation_tracks_structure_not_suppression() {
        let mut set = StoneSet::new();
        let id = set.insert(at(5, 5), Player::Black).unwrap();
        let g = set.generation();
        set.set_suppressed(id, true);
        set.set_suppressed(id, false);
        assert_eq!(set.generation(), g);
        set.remove(at(5, 5));
        assert!(set.generation() > g);
    }

    #[test]
    fn ring_detected() {
        let mut set = StoneSet::new();
        place_ring(&mut set, 10, 10, Player::White);
        assert!(set.has_ring(Player::White));
        assert!(!set.has_ring(Player::Black));
    }

    #[test]
    fn ring_with_occupied_center_is_not_a_ring() {
        let mut set = StoneSet::new();
        place_ring(&mut set, 10, 10, Player::White);
        set.insert(at(10, 10), Player::White).unwrap();
        assert!(!set.has_ring(Player::White));
    }

    #[test]
    fn ring_with_opponent_stone_is_not_a_ring() {
        let mut set = StoneSet::new();
        place_ring(&mut set, 10, 10, Player::White);
        set.remove(at(9, 9));
        set.insert(at(9, 9), Player::Black).unwrap();
        assert!(!set.has_ring(Player::White));
        assert!(!set.has_ring(Player::Black));
    }

    #[test]
    fn ring_with_suppressed_stone_is_not_a_ring() {
        let mut set = StoneSet::new();
        place_ring(&mut set, 10, 10, Player::Black);
        let id = set.id_at(at(11, 11)).unwrap();
        set.set_suppressed(id, true);
        assert!(!set.has_ring(Player::Black));
    }

    #[test]
    fn ring_centered_on_playable_edge_is_ignored() {
        let mut set = StoneSet::new();
        place_ring(&mut set, 2, 10, Player::Black);
        assert!(!set.has_ring(Player::Black));
    }
}
