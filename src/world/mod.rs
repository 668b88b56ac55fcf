//! Voxel world: blocks, storage, generation, streaming, meshing

pub mod blocks;
pub mod core;
pub mod generation;
pub mod lighting;
pub mod management;
pub mod meshing;
pub mod storage;

pub use blocks::{block_info, BlockInfo};
pub use core::{
    is_solid_block, BlockFace, BlockId, BlockRegistry, ChunkPos, Ray, RaycastHit, VoxelPos,
};
pub use generation::TerrainGenerator;
pub use lighting::DayNightCycle;
pub use management::{ChunkManager, ChunkStats};
pub use meshing::{build_chunk_mesh, ChunkMesh, FaceMaterial, MeshBatch, MeshSink, NullMeshSink};
pub use storage::VoxelStore;
