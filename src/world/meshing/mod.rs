//! Chunk mesh building
//!
//! Walks a chunk column and emits one quad per exposed face of each
//! solid voxel. Neighbor tests go through the store, so faces against a
//! neighboring chunk's blocks are culled the same as interior faces.
//! Output is grouped per block id; rendering is left to a `MeshSink`.

use rustc_hash::FxHashMap;

use crate::constants::core::{CHUNK_SIZE, WORLD_HEIGHT};
use crate::world::blocks::GRASS_FACE_COLORS;
use crate::world::core::{unpack_rgb, BlockFace, BlockId, BlockRegistry, ChunkPos, VoxelPos};
use crate::world::storage::VoxelStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

/// Shading group a face belongs to. Only grass distinguishes these;
/// everything else renders uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceMaterial {
    Top,
    Bottom,
    Side,
}

impl FaceMaterial {
    fn from_face(face: BlockFace) -> Self {
        match face {
            BlockFace::Top => FaceMaterial::Top,
            BlockFace::Bottom => FaceMaterial::Bottom,
            _ => FaceMaterial::Side,
        }
    }

    fn grass_color(self) -> [f32; 3] {
        let hex = match self {
            FaceMaterial::Top => GRASS_FACE_COLORS[0],
            FaceMaterial::Bottom => GRASS_FACE_COLORS[1],
            FaceMaterial::Side => GRASS_FACE_COLORS[2],
        };
        unpack_rgb(hex)
    }
}

/// Contiguous index range sharing one face material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialGroup {
    pub material: FaceMaterial,
    pub first_index: u32,
    pub index_count: u32,
}

/// All geometry for one block id within a chunk
#[derive(Debug, Clone)]
pub struct MeshBatch {
    pub block: BlockId,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Populated only for blocks with per-face shading (grass)
    pub groups: Vec<MaterialGroup>,
}

#[derive(Debug, Clone)]
pub struct ChunkMesh {
    pub batches: Vec<MeshBatch>,
}

impl ChunkMesh {
    pub fn quad_count(&self) -> usize {
        self.batches
            .iter()
            .map(|batch| batch.indices.len() / 6)
            .sum()
    }

    pub fn vertex_count(&self) -> usize {
        self.batches.iter().map(|batch| batch.vertices.len()).sum()
    }
}

/// Renderer seam. The engine hands finished meshes to the sink and
/// tells it when a chunk's geometry is gone.
pub trait MeshSink {
    fn upload(&mut self, chunk: ChunkPos, mesh: ChunkMesh);
    fn dispose(&mut self, chunk: ChunkPos);
}

/// Sink that drops everything, for headless runs
#[derive(Default)]
pub struct NullMeshSink;

impl MeshSink for NullMeshSink {
    fn upload(&mut self, _chunk: ChunkPos, _mesh: ChunkMesh) {}
    fn dispose(&mut self, _chunk: ChunkPos) {}
}

/// Corner offsets per face, counter-clockwise seen from outside.
/// Indexed in `BlockFace::ALL` order.
const FACE_CORNERS: [[[f32; 3]; 4]; 6] = [
    // Right (+X)
    [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [1.0, 1.0, 1.0], [1.0, 0.0, 1.0]],
    // Left (-X)
    [[0.0, 0.0, 1.0], [0.0, 1.0, 1.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]],
    // Top (+Y)
    [[0.0, 1.0, 0.0], [0.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, 0.0]],
    // Bottom (-Y)
    [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 1.0]],
    // Front (+Z)
    [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [1.0, 1.0, 1.0], [0.0, 1.0, 1.0]],
    // Back (-Z)
    [[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
];

/// Build the mesh for one chunk column, `None` when nothing is solid.
pub fn build_chunk_mesh(
    store: &VoxelStore,
    registry: &BlockRegistry,
    chunk: ChunkPos,
) -> Option<ChunkMesh> {
    let mut buckets: FxHashMap<(BlockId, FaceMaterial), (Vec<Vertex>, Vec<u32>)> =
        FxHashMap::default();
    let (ox, oz) = chunk.origin();

    for lx in 0..CHUNK_SIZE {
        for lz in 0..CHUNK_SIZE {
            for y in 0..WORLD_HEIGHT {
                let pos = VoxelPos::new(ox + lx, y, oz + lz);
                let block = store.get(pos);
                if !registry.is_solid(block) {
                    continue;
                }
                for (face_index, face) in BlockFace::ALL.iter().enumerate() {
                    let step = face.offset();
                    let neighbor = pos.offset(step.x, step.y, step.z);
                    if store.is_solid(neighbor) {
                        continue;
                    }
                    emit_face(&mut buckets, registry, block, pos, *face, face_index);
                }
            }
        }
    }

    if buckets.is_empty() {
        return None;
    }
    Some(assemble(buckets))
}

fn emit_face(
    buckets: &mut FxHashMap<(BlockId, FaceMaterial), (Vec<Vertex>, Vec<u32>)>,
    registry: &BlockRegistry,
    block: BlockId,
    pos: VoxelPos,
    face: BlockFace,
    face_index: usize,
) {
    let material = if block == BlockId::GRASS {
        FaceMaterial::from_face(face)
    } else {
        FaceMaterial::Side
    };
    let color = if block == BlockId::GRASS {
        material.grass_color()
    } else {
        registry.color_rgb(block)
    };
    let normal = face.normal();

    let (vertices, indices) = buckets.entry((block, material)).or_default();
    let base = vertices.len() as u32;
    for corner in &FACE_CORNERS[face_index] {
        vertices.push(Vertex {
            position: [
                pos.x as f32 + corner[0],
                pos.y as f32 + corner[1],
                pos.z as f32 + corner[2],
            ],
            normal: [normal.x, normal.y, normal.z],
            color,
        });
    }
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

fn assemble(
    buckets: FxHashMap<(BlockId, FaceMaterial), (Vec<Vertex>, Vec<u32>)>,
) -> ChunkMesh {
    let mut per_block: FxHashMap<BlockId, Vec<(FaceMaterial, Vec<Vertex>, Vec<u32>)>> =
        FxHashMap::default();
    for ((block, material), (vertices, indices)) in buckets {
        per_block
            .entry(block)
            .or_default()
            .push((material, vertices, indices));
    }

    let mut batches = Vec::with_capacity(per_block.len());
    for (block, mut parts) in per_block {
        // Stable material order keeps group layout deterministic
        parts.sort_by_key(|(material, _, _)| *material as u8);
        let mut batch = MeshBatch {
            block,
            vertices: Vec::new(),
            indices: Vec::new(),
            groups: Vec::new(),
        };
        for (material, vertices, indices) in parts {
            let vertex_base = batch.vertices.len() as u32;
            let first_index = batch.indices.len() as u32;
            batch
                .indices
                .extend(indices.iter().map(|index| index + vertex_base));
            batch.vertices.extend(vertices);
            if block == BlockId::GRASS {
                batch.groups.push(MaterialGroup {
                    material,
                    first_index,
                    index_count: batch.indices.len() as u32 - first_index,
                });
            }
        }
        batches.push(batch);
    }
    batches.sort_by_key(|batch| batch.block.0);
    ChunkMesh { batches }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_store(origin: VoxelPos, size: i32, id: BlockId) -> VoxelStore {
        let mut store = VoxelStore::new();
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    store.set(origin.offset(x, y, z), id);
                }
            }
        }
        store
    }

    #[test]
    fn empty_chunk_builds_nothing() {
        let store = VoxelStore::new();
        let registry = BlockRegistry::new();
        assert!(build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).is_none());
    }

    #[test]
    fn lone_block_exposes_six_faces() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(4, 10, 4), BlockId::STONE);
        let registry = BlockRegistry::new();
        let mesh = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).unwrap();
        assert_eq!(mesh.quad_count(), 6);
        assert_eq!(mesh.vertex_count(), 24);
    }

    #[test]
    fn solid_cube_meshes_only_its_shell() {
        let store = cube_store(VoxelPos::new(4, 10, 4), 3, BlockId::STONE);
        let registry = BlockRegistry::new();
        let mesh = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).unwrap();
        // 9 exposed quads per direction, 6 directions
        assert_eq!(mesh.quad_count(), 54);
    }

    #[test]
    fn buried_voxel_contributes_no_faces() {
        let mut store = cube_store(VoxelPos::new(4, 10, 4), 3, BlockId::STONE);
        let registry = BlockRegistry::new();
        let shell = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0))
            .unwrap()
            .quad_count();
        // Swapping the hidden center block changes nothing visible
        store.set(VoxelPos::new(5, 11, 5), BlockId::DIRT);
        let mesh = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).unwrap();
        assert_eq!(mesh.quad_count(), shell);
        assert!(mesh.batches.iter().all(|batch| batch.block != BlockId::DIRT));
    }

    #[test]
    fn neighbor_chunk_blocks_cull_boundary_faces() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(15, 10, 4), BlockId::STONE);
        store.set(VoxelPos::new(16, 10, 4), BlockId::STONE);
        let registry = BlockRegistry::new();
        let mesh = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).unwrap();
        // The +X face presses against the neighbor chunk's block
        assert_eq!(mesh.quad_count(), 5);
    }

    #[test]
    fn non_solid_blocks_are_skipped() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(2, 10, 2), BlockId::FLOWER_RED);
        let registry = BlockRegistry::new();
        assert!(build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).is_none());
    }

    #[test]
    fn grass_batch_carries_face_groups() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(1, 10, 1), BlockId::GRASS);
        let registry = BlockRegistry::new();
        let mesh = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).unwrap();

        assert_eq!(mesh.batches.len(), 1);
        let batch = &mesh.batches[0];
        assert_eq!(batch.block, BlockId::GRASS);
        assert_eq!(batch.groups.len(), 3);

        let mut covered = 0;
        for group in &batch.groups {
            assert_eq!(group.first_index, covered);
            covered += group.index_count;
        }
        assert_eq!(covered as usize, batch.indices.len());

        let top = batch
            .groups
            .iter()
            .find(|group| group.material == FaceMaterial::Top)
            .unwrap();
        assert_eq!(top.index_count, 6);
        let side = batch
            .groups
            .iter()
            .find(|group| group.material == FaceMaterial::Side)
            .unwrap();
        assert_eq!(side.index_count, 24);
    }

    #[test]
    fn quads_index_four_fresh_vertices() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(3, 3, 3), BlockId::BRICK);
        let registry = BlockRegistry::new();
        let mesh = build_chunk_mesh(&store, &registry, ChunkPos::new(0, 0)).unwrap();
        let batch = &mesh.batches[0];
        for quad in batch.indices.chunks(6) {
            assert_eq!(quad[0], quad[3]);
            assert_eq!(quad[2], quad[4]);
            let max = *quad.iter().max().unwrap() as usize;
            assert!(max < batch.vertices.len());
        }
    }
}
