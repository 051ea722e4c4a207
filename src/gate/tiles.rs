//! Puzzle tiles and the slots that hold them.

use crate::config::TILE_COUNT;
use crate::shuffle::shuffled;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Identity of a puzzle piece, independent of where it sits.
pub type TileId = u8;

/// Tile identifiers in solved order.
const SOLVED: [TileId; TILE_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileSetError {
    #[error("expected {expected} tiles, found {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("tile {tile} is out of range")]
    OutOfRange { tile: TileId },

    #[error("tile {tile} appears more than once")]
    Duplicate { tile: TileId },

    #[error("slot {index} is outside the grid")]
    SlotOutOfRange { index: usize },
}

/// A position in the puzzle grid, `0..TILE_COUNT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Slot(u8);

impl Slot {
    /// Checked constructor; `None` for indices outside the grid.
    pub fn new(index: usize) -> Option<Self> {
        if index < TILE_COUNT {
            u8::try_from(index).ok().map(Self)
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Every slot in grid order.
    pub fn all() -> impl Iterator<Item = Slot> {
        (0..TILE_COUNT).filter_map(Slot::new)
    }
}

impl TryFrom<usize> for Slot {
    type Error = TileSetError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Slot::new(index).ok_or(TileSetError::SlotOutOfRange { index })
    }
}

impl From<Slot> for usize {
    fn from(slot: Slot) -> Self {
        slot.index()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which tile sits in which slot.
///
/// Always a permutation of `0..TILE_COUNT`: every slot holds exactly one
/// tile and every tile is in exactly one slot. The only mutation is
/// [`TileSet::swap`], which cannot break that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<TileId>", into = "Vec<TileId>")]
pub struct TileSet([TileId; TILE_COUNT]);

impl TileSet {
    /// The solved arrangement: slot `i` holds tile `i`.
    pub const fn identity() -> Self {
        Self(SOLVED)
    }

    /// A uniformly random arrangement.
    pub fn shuffled(rng: &mut impl Rng) -> Self {
        let mut tiles = SOLVED;
        for (slot, tile) in tiles.iter_mut().zip(shuffled(&SOLVED, rng)) {
            *slot = tile;
        }
        Self(tiles)
    }

    /// Build from untrusted data, rejecting anything that is not a
    /// permutation of the tile identifiers.
    pub fn from_tiles(tiles: &[TileId]) -> Result<Self, TileSetError> {
        if tiles.len() != TILE_COUNT {
            return Err(TileSetError::WrongLength {
                expected: TILE_COUNT,
                found: tiles.len(),
            });
        }

        let mut seen = [false; TILE_COUNT];
        let mut out = SOLVED;
        for (slot, &tile) in out.iter_mut().zip(tiles) {
            let index = usize::from(tile);
            if index >= TILE_COUNT {
                return Err(TileSetError::OutOfRange { tile });
            }
            if seen[index] {
                return Err(TileSetError::Duplicate { tile });
            }
            seen[index] = true;
            *slot = tile;
        }
        Ok(Self(out))
    }

    /// Exchange the tiles in two slots. Swapping a slot with itself is a no-op.
    pub fn swap(&mut self, a: Slot, b: Slot) {
        self.0.swap(a.index(), b.index());
    }

    pub fn tile_at(&self, slot: Slot) -> TileId {
        self.0[slot.index()]
    }

    /// Tile identifiers in slot order.
    pub fn tiles(&self) -> &[TileId; TILE_COUNT] {
        &self.0
    }

    /// `(slot, tile)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, TileId)> + '_ {
        Slot::all().zip(self.0.iter().copied())
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<Vec<TileId>> for TileSet {
    type Error = TileSetError;

    fn try_from(tiles: Vec<TileId>) -> Result<Self, Self::Error> {
        Self::from_tiles(&tiles)
    }
}

impl From<TileSet> for Vec<TileId> {
    fn from(tiles: TileSet) -> Self {
        tiles.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn slot(i: usize) -> Slot {
        Slot::new(i).unwrap()
    }

    #[test]
    fn slot_bounds() {
        assert!(Slot::new(0).is_some());
        assert!(Slot::new(8).is_some());
        assert!(Slot::new(9).is_none());
        assert_eq!(Slot::all().count(), TILE_COUNT);
    }

    #[test]
    fn identity_holds_each_tile_in_its_slot() {
        let tiles = TileSet::identity();
        for (slot, tile) in tiles.iter() {
            assert_eq!(slot.index(), usize::from(tile));
        }
    }

    #[test]
    fn swap_exchanges_two_slots_only() {
        let mut tiles = TileSet::from_tiles(&[3, 1, 4, 0, 5, 8, 2, 6, 7]).unwrap();

        tiles.swap(slot(0), slot(5));

        assert_eq!(tiles.tiles(), &[8, 1, 4, 0, 5, 3, 2, 6, 7]);
    }

    #[test]
    fn swap_with_itself_is_noop() {
        let mut tiles = TileSet::from_tiles(&[2, 0, 1, 3, 4, 5, 6, 7, 8]).unwrap();
        let before = tiles;

        tiles.swap(slot(4), slot(4));

        assert_eq!(tiles, before);
    }

    #[test]
    fn from_tiles_rejects_non_permutations() {
        assert_eq!(
            TileSet::from_tiles(&[0, 1, 2]),
            Err(TileSetError::WrongLength { expected: 9, found: 3 })
        );
        assert_eq!(
            TileSet::from_tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(TileSetError::OutOfRange { tile: 9 })
        );
        assert_eq!(
            TileSet::from_tiles(&[0, 1, 2, 3, 4, 5, 6, 7, 7]),
            Err(TileSetError::Duplicate { tile: 7 })
        );
    }

    #[test]
    fn shuffled_is_a_permutation() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..50 {
            let tiles = TileSet::shuffled(&mut rng);
            let mut sorted = *tiles.tiles();
            sorted.sort_unstable();
            assert_eq!(sorted, SOLVED);
        }
    }

    #[test]
    fn serde_rejects_invalid_arrangement() {
        let tiles = TileSet::from_tiles(&[8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
        let json = serde_json::to_string(&tiles).unwrap();
        assert_eq!(json, "[8,7,6,5,4,3,2,1,0]");
        assert_eq!(serde_json::from_str::<TileSet>(&json).unwrap(), tiles);

        assert!(serde_json::from_str::<TileSet>("[0,0,1,2,3,4,5,6,7]").is_err());
    }

    #[test]
    fn slot_serde_is_checked() {
        assert_eq!(serde_json::from_str::<Slot>("4").unwrap(), slot(4));
        assert!(serde_json::from_str::<Slot>("9").is_err());
    }
}
