//! Core voxel world types
//!
//! Block ids, voxel/chunk coordinates, rays, and the block registry.
//! Everything above this module (storage, meshing, physics, game) is
//! built from these types.

pub mod block;
pub mod position;
pub mod ray;
pub mod registry;

pub use block::BlockId;
pub use position::{ChunkPos, VoxelPos};
pub use ray::{BlockFace, Ray, RaycastHit};
pub use registry::{is_solid_block, unpack_rgb, BlockRegistry};
