//! Sparse voxel storage
//!
//! One flat map keyed by voxel position; absent keys read as air. A
//! second map records player edits so saves only carry the diff against
//! generated terrain, and so regenerated chunks keep their edits.

use rustc_hash::FxHashMap;

use crate::constants::core::CHUNK_SIZE;
use crate::world::core::{is_solid_block, BlockId, ChunkPos, VoxelPos};

#[derive(Default)]
pub struct VoxelStore {
    voxels: FxHashMap<VoxelPos, BlockId>,
    /// Player edits, including breaks recorded as AIR
    edits: FxHashMap<VoxelPos, BlockId>,
}

impl VoxelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block at `pos`, AIR when unset. Never fails.
    pub fn get(&self, pos: VoxelPos) -> BlockId {
        self.voxels.get(&pos).copied().unwrap_or(BlockId::AIR)
    }

    pub fn is_solid(&self, pos: VoxelPos) -> bool {
        is_solid_block(self.get(pos))
    }

    /// Apply a gameplay edit and report the chunk columns whose meshes
    /// went stale.
    ///
    /// Writing the value already present is a no-op and reports nothing.
    /// Otherwise the report holds the owning column plus the X/Z
    /// face neighbors when `pos` sits on a chunk boundary plane.
    pub fn set(&mut self, pos: VoxelPos, id: BlockId) -> Vec<ChunkPos> {
        if self.get(pos) == id {
            return Vec::new();
        }
        self.edits.insert(pos, id);
        self.write_raw(pos, id);
        dirty_chunks(pos)
    }

    /// Terrain-generation write: no edit record, no dirty report.
    /// Skips cells the player has already edited.
    pub fn fill(&mut self, pos: VoxelPos, id: BlockId) {
        if self.edits.contains_key(&pos) {
            return;
        }
        self.write_raw(pos, id);
    }

    /// Re-apply recorded edits inside one chunk column, used after the
    /// column is regenerated on reload.
    pub fn apply_edits_in(&mut self, chunk: ChunkPos) {
        let overlay: Vec<(VoxelPos, BlockId)> = self
            .edits
            .iter()
            .filter(|(pos, _)| pos.chunk() == chunk)
            .map(|(pos, id)| (*pos, *id))
            .collect();
        for (pos, id) in overlay {
            self.write_raw(pos, id);
        }
    }

    /// Delete every voxel in one chunk column. Edits stay recorded.
    pub fn remove_column(&mut self, chunk: ChunkPos) {
        self.voxels.retain(|pos, _| pos.chunk() != chunk);
    }

    pub fn column_is_empty(&self, chunk: ChunkPos) -> bool {
        !self.voxels.keys().any(|pos| pos.chunk() == chunk)
    }

    /// Edit diff for saving, in no particular order.
    pub fn edits(&self) -> impl Iterator<Item = (VoxelPos, BlockId)> + '_ {
        self.edits.iter().map(|(pos, id)| (*pos, *id))
    }

    /// Replace the edit diff wholesale (snapshot load).
    pub fn load_edits(&mut self, edits: impl IntoIterator<Item = (VoxelPos, BlockId)>) {
        self.edits = edits.into_iter().collect();
    }

    pub fn clear(&mut self) {
        self.voxels.clear();
        self.edits.clear();
    }

    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    fn write_raw(&mut self, pos: VoxelPos, id: BlockId) {
        if id == BlockId::AIR {
            self.voxels.remove(&pos);
        } else {
            self.voxels.insert(pos, id);
        }
    }
}

/// Columns invalidated by a write at `pos`: the owner, plus face
/// neighbors when the cell lies on a boundary plane.
fn dirty_chunks(pos: VoxelPos) -> Vec<ChunkPos> {
    let owner = pos.chunk();
    let (lx, lz) = pos.local_xz();
    let mut report = vec![owner];
    if lx == 0 {
        report.push(ChunkPos::new(owner.x - 1, owner.z));
    } else if lx == CHUNK_SIZE - 1 {
        report.push(ChunkPos::new(owner.x + 1, owner.z));
    }
    if lz == 0 {
        report.push(ChunkPos::new(owner.x, owner.z - 1));
    } else if lz == CHUNK_SIZE - 1 {
        report.push(ChunkPos::new(owner.x, owner.z + 1));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_reads_as_air() {
        let store = VoxelStore::new();
        assert_eq!(store.get(VoxelPos::new(5, 5, 5)), BlockId::AIR);
        assert!(!store.is_solid(VoxelPos::new(5, 5, 5)));
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(1, 2, 3), BlockId::STONE);
        assert_eq!(store.get(VoxelPos::new(1, 2, 3)), BlockId::STONE);
        assert!(store.is_solid(VoxelPos::new(1, 2, 3)));
    }

    #[test]
    fn redundant_set_reports_nothing() {
        let mut store = VoxelStore::new();
        let first = store.set(VoxelPos::new(4, 4, 4), BlockId::DIRT);
        assert!(!first.is_empty());
        let second = store.set(VoxelPos::new(4, 4, 4), BlockId::DIRT);
        assert!(second.is_empty());
        let air = store.set(VoxelPos::new(9, 9, 9), BlockId::AIR);
        assert!(air.is_empty(), "clearing empty space is a no-op");
    }

    #[test]
    fn interior_write_dirties_one_chunk() {
        let mut store = VoxelStore::new();
        let report = store.set(VoxelPos::new(5, 10, 5), BlockId::STONE);
        assert_eq!(report, vec![ChunkPos::new(0, 0)]);
    }

    #[test]
    fn boundary_write_dirties_neighbors() {
        let mut store = VoxelStore::new();
        // Both local coordinates 0: owner plus -X and -Z neighbors
        let report = store.set(VoxelPos::new(16, 10, 32), BlockId::STONE);
        assert_eq!(report.len(), 3);
        assert!(report.contains(&ChunkPos::new(1, 2)));
        assert!(report.contains(&ChunkPos::new(0, 2)));
        assert!(report.contains(&ChunkPos::new(1, 1)));

        let report = store.set(VoxelPos::new(15, 10, 8), BlockId::STONE);
        assert!(report.contains(&ChunkPos::new(0, 0)));
        assert!(report.contains(&ChunkPos::new(1, 0)));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn air_set_removes_entry() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(2, 2, 2), BlockId::STONE);
        assert_eq!(store.len(), 1);
        store.set(VoxelPos::new(2, 2, 2), BlockId::AIR);
        assert_eq!(store.len(), 0);
        assert_eq!(store.get(VoxelPos::new(2, 2, 2)), BlockId::AIR);
    }

    #[test]
    fn remove_column_leaves_other_columns() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(1, 1, 1), BlockId::STONE);
        store.set(VoxelPos::new(20, 1, 1), BlockId::STONE);
        store.remove_column(ChunkPos::new(0, 0));
        assert!(store.column_is_empty(ChunkPos::new(0, 0)));
        assert_eq!(store.get(VoxelPos::new(20, 1, 1)), BlockId::STONE);
    }

    #[test]
    fn edits_survive_regeneration() {
        let mut store = VoxelStore::new();
        // Player breaks a generated block and places another
        store.fill(VoxelPos::new(3, 29, 3), BlockId::STONE);
        store.set(VoxelPos::new(3, 29, 3), BlockId::AIR);
        store.set(VoxelPos::new(3, 30, 3), BlockId::PLANKS);

        // Column unloads, terrain regenerates
        store.remove_column(ChunkPos::new(0, 0));
        store.fill(VoxelPos::new(3, 29, 3), BlockId::STONE);
        store.apply_edits_in(ChunkPos::new(0, 0));

        assert_eq!(store.get(VoxelPos::new(3, 29, 3)), BlockId::AIR);
        assert_eq!(store.get(VoxelPos::new(3, 30, 3)), BlockId::PLANKS);
    }

    #[test]
    fn fill_never_overwrites_an_edit() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(0, 10, 0), BlockId::GLASS);
        store.fill(VoxelPos::new(0, 10, 0), BlockId::STONE);
        assert_eq!(store.get(VoxelPos::new(0, 10, 0)), BlockId::GLASS);
    }
}
