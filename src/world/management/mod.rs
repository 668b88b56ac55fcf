//! Chunk streaming and rebuild scheduling
//!
//! Tracks which chunk columns are loaded and which meshes are stale.
//! Loading generates terrain and overlays recorded edits; unloading
//! uses a hysteresis margin so pacing at a radius boundary does not
//! thrash. Un-forced rebuild passes mesh at most one chunk per call.

use rustc_hash::FxHashMap;

use crate::constants::core::UNLOAD_HYSTERESIS;
use crate::world::core::{BlockRegistry, ChunkPos};
use crate::world::generation::TerrainGenerator;
use crate::world::meshing::{build_chunk_mesh, MeshSink};
use crate::world::storage::VoxelStore;

#[derive(Debug, Default, Clone, Copy)]
struct ChunkState {
    dirty: bool,
    meshed: bool,
}

/// Loaded/dirty bookkeeping snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkStats {
    pub loaded: usize,
    pub dirty: usize,
    pub meshed: usize,
}

#[derive(Default)]
pub struct ChunkManager {
    chunks: FxHashMap<ChunkPos, ChunkState>,
}

impl ChunkManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self, chunk: ChunkPos) -> bool {
        self.chunks.contains_key(&chunk)
    }

    pub fn is_dirty(&self, chunk: ChunkPos) -> bool {
        self.chunks.get(&chunk).map(|s| s.dirty).unwrap_or(false)
    }

    /// Flag a loaded chunk's mesh as stale. Unloaded chunks are
    /// ignored; they mesh fresh on load anyway.
    pub fn mark_dirty(&mut self, chunk: ChunkPos) {
        if let Some(state) = self.chunks.get_mut(&chunk) {
            state.dirty = true;
        }
    }

    pub fn mark_all_dirty(&mut self) {
        for state in self.chunks.values_mut() {
            state.dirty = true;
        }
    }

    pub fn stats(&self) -> ChunkStats {
        ChunkStats {
            loaded: self.chunks.len(),
            dirty: self.chunks.values().filter(|s| s.dirty).count(),
            meshed: self.chunks.values().filter(|s| s.meshed).count(),
        }
    }

    /// Stream chunks around the player.
    ///
    /// Ensures every column within Chebyshev `load_radius` of the
    /// player's chunk exists, generating terrain on first load. Columns
    /// farther than `load_radius + UNLOAD_HYSTERESIS` are torn down:
    /// mesh disposed, voxels deleted, state dropped.
    pub fn update_chunks(
        &mut self,
        store: &mut VoxelStore,
        generator: &TerrainGenerator,
        player_x: f32,
        player_z: f32,
        load_radius: i32,
        sink: &mut dyn MeshSink,
    ) {
        let center = ChunkPos::from_world(player_x, player_z);
        let unload_radius = load_radius + UNLOAD_HYSTERESIS;

        let stale: Vec<ChunkPos> = self
            .chunks
            .keys()
            .copied()
            .filter(|chunk| chunk.chebyshev_distance(center) > unload_radius)
            .collect();
        for chunk in stale {
            log::debug!("unloading chunk ({}, {})", chunk.x, chunk.z);
            if let Some(state) = self.chunks.remove(&chunk) {
                if state.meshed {
                    sink.dispose(chunk);
                }
            }
            store.remove_column(chunk);
        }

        for cx in (center.x - load_radius)..=(center.x + load_radius) {
            for cz in (center.z - load_radius)..=(center.z + load_radius) {
                let chunk = ChunkPos::new(cx, cz);
                if self.chunks.contains_key(&chunk) {
                    continue;
                }
                log::debug!("loading chunk ({}, {})", chunk.x, chunk.z);
                generator.generate_chunk(store, chunk);
                store.apply_edits_in(chunk);
                self.chunks.insert(
                    chunk,
                    ChunkState {
                        dirty: true,
                        meshed: false,
                    },
                );
            }
        }
    }

    /// Rebuild stale meshes near the player, nearest first.
    ///
    /// At most one chunk is rebuilt per call unless `force_all` is set,
    /// keeping per-frame mesh work bounded. Returns the rebuild count.
    pub fn rebuild_dirty(
        &mut self,
        store: &VoxelStore,
        registry: &BlockRegistry,
        player_x: f32,
        player_z: f32,
        render_radius: i32,
        force_all: bool,
        sink: &mut dyn MeshSink,
    ) -> usize {
        let center = ChunkPos::from_world(player_x, player_z);
        let mut pending: Vec<ChunkPos> = self
            .chunks
            .iter()
            .filter(|(chunk, state)| {
                state.dirty && chunk.chebyshev_distance(center) <= render_radius
            })
            .map(|(chunk, _)| *chunk)
            .collect();
        pending.sort_by_key(|chunk| (chunk.chebyshev_distance(center), chunk.x, chunk.z));
        if !force_all {
            pending.truncate(1);
        }

        let mut rebuilt = 0;
        for chunk in pending {
            let state = match self.chunks.get_mut(&chunk) {
                Some(state) => state,
                None => continue,
            };
            if state.meshed {
                sink.dispose(chunk);
                state.meshed = false;
            }
            match build_chunk_mesh(store, registry, chunk) {
                Some(mesh) => {
                    sink.upload(chunk, mesh);
                    state.meshed = true;
                }
                None => {
                    // Column went fully hollow; nothing to show
                }
            }
            state.dirty = false;
            rebuilt += 1;
        }
        if rebuilt > 0 {
            log::debug!("rebuilt {} chunk meshes", rebuilt);
        }
        rebuilt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::{BlockId, VoxelPos};
    use crate::world::meshing::ChunkMesh;

    #[derive(Default)]
    struct RecordingSink {
        uploads: Vec<ChunkPos>,
        disposes: Vec<ChunkPos>,
    }

    impl MeshSink for RecordingSink {
        fn upload(&mut self, chunk: ChunkPos, _mesh: ChunkMesh) {
            self.uploads.push(chunk);
        }
        fn dispose(&mut self, chunk: ChunkPos) {
            self.disposes.push(chunk);
        }
    }

    fn world() -> (ChunkManager, VoxelStore, TerrainGenerator, BlockRegistry) {
        (
            ChunkManager::new(),
            VoxelStore::new(),
            TerrainGenerator::new(42.0),
            BlockRegistry::new(),
        )
    }

    #[test]
    fn loads_square_around_player() {
        let (mut manager, mut store, generator, _) = world();
        let mut sink = RecordingSink::default();
        manager.update_chunks(&mut store, &generator, 8.0, 8.0, 1, &mut sink);
        assert_eq!(manager.stats().loaded, 9);
        assert!(manager.is_loaded(ChunkPos::new(-1, 1)));
        assert!(!manager.is_loaded(ChunkPos::new(2, 0)));
        assert!(!store.is_empty());
    }

    #[test]
    fn retains_chunks_inside_hysteresis_band() {
        let (mut manager, mut store, generator, _) = world();
        let mut sink = RecordingSink::default();
        manager.update_chunks(&mut store, &generator, 8.0, 8.0, 1, &mut sink);

        // Two chunks over: farthest old chunk sits at distance 3,
        // exactly load_radius + margin, so nothing unloads
        manager.update_chunks(&mut store, &generator, 8.0 + 32.0, 8.0, 1, &mut sink);
        assert!(manager.is_loaded(ChunkPos::new(-1, 0)));
        assert!(sink.disposes.is_empty());
    }

    #[test]
    fn far_chunks_unload_and_release_voxels() {
        let (mut manager, mut store, generator, registry) = world();
        let mut sink = RecordingSink::default();
        manager.update_chunks(&mut store, &generator, 8.0, 8.0, 1, &mut sink);
        manager.rebuild_dirty(&store, &registry, 8.0, 8.0, 1, true, &mut sink);
        assert_eq!(sink.uploads.len(), 9);

        manager.update_chunks(&mut store, &generator, 8.0 + 160.0, 8.0, 1, &mut sink);
        assert!(!manager.is_loaded(ChunkPos::new(0, 0)));
        assert!(store.column_is_empty(ChunkPos::new(0, 0)));
        assert!(sink.disposes.contains(&ChunkPos::new(0, 0)));
        // Old square fully gone, new square fully loaded
        assert_eq!(manager.stats().loaded, 9);
    }

    #[test]
    fn unforced_rebuild_takes_one_chunk() {
        let (mut manager, mut store, generator, registry) = world();
        let mut sink = RecordingSink::default();
        manager.update_chunks(&mut store, &generator, 8.0, 8.0, 1, &mut sink);
        assert_eq!(manager.stats().dirty, 9);

        let rebuilt = manager.rebuild_dirty(&store, &registry, 8.0, 8.0, 1, false, &mut sink);
        assert_eq!(rebuilt, 1);
        assert_eq!(manager.stats().dirty, 8);
        // Nearest first: the player's own chunk
        assert_eq!(sink.uploads, vec![ChunkPos::new(0, 0)]);

        let rebuilt = manager.rebuild_dirty(&store, &registry, 8.0, 8.0, 1, true, &mut sink);
        assert_eq!(rebuilt, 8);
        assert_eq!(manager.stats().dirty, 0);
    }

    #[test]
    fn rebuild_disposes_before_reupload() {
        let (mut manager, mut store, generator, registry) = world();
        let mut sink = RecordingSink::default();
        manager.update_chunks(&mut store, &generator, 8.0, 8.0, 0, &mut sink);
        manager.rebuild_dirty(&store, &registry, 8.0, 8.0, 0, true, &mut sink);
        assert!(sink.disposes.is_empty());

        store.set(VoxelPos::new(4, 45, 4), BlockId::PLANKS);
        manager.mark_dirty(ChunkPos::new(0, 0));
        manager.rebuild_dirty(&store, &registry, 8.0, 8.0, 0, true, &mut sink);
        assert_eq!(sink.disposes, vec![ChunkPos::new(0, 0)]);
        assert_eq!(sink.uploads.len(), 2);
    }

    #[test]
    fn mark_dirty_ignores_unloaded_chunks() {
        let mut manager = ChunkManager::new();
        manager.mark_dirty(ChunkPos::new(7, 7));
        assert!(!manager.is_dirty(ChunkPos::new(7, 7)));
        assert_eq!(manager.stats().loaded, 0);
    }
}
