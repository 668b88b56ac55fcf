use crate::constants::core::CHUNK_SIZE;
use cgmath::Point3;
use serde::{Deserialize, Serialize};

/// Integer voxel coordinate
///
/// One voxel is a unit cube whose corner sits at (x, y, z). Fractional
/// world positions map onto the voxel containing them via `floor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Voxel containing a fractional world-space point
    pub fn from_world(point: Point3<f32>) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
            z: point.z.floor() as i32,
        }
    }

    /// Chunk column owning this voxel
    pub fn chunk(&self) -> ChunkPos {
        ChunkPos {
            x: self.x.div_euclid(CHUNK_SIZE),
            z: self.z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Local X/Z within the owning chunk, in 0..CHUNK_SIZE
    pub fn local_xz(&self) -> (i32, i32) {
        (self.x.rem_euclid(CHUNK_SIZE), self.z.rem_euclid(CHUNK_SIZE))
    }

    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// Chunk column coordinate
///
/// Chunks are CHUNK_SIZE x CHUNK_SIZE columns spanning the full world
/// height, so a chunk coordinate has no Y component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing a fractional world-space X/Z
    pub fn from_world(x: f32, z: f32) -> Self {
        Self {
            x: (x / CHUNK_SIZE as f32).floor() as i32,
            z: (z / CHUNK_SIZE as f32).floor() as i32,
        }
    }

    /// World-space voxel coordinate of the chunk's minimum corner
    pub fn origin(&self) -> (i32, i32) {
        (self.x * CHUNK_SIZE, self.z * CHUNK_SIZE)
    }

    /// Chebyshev distance to another chunk, in chunk units
    pub fn chebyshev_distance(&self, other: ChunkPos) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voxel_to_chunk_conversion() {
        assert_eq!(VoxelPos::new(65, 32, -15).chunk(), ChunkPos::new(4, -1));
        assert_eq!(VoxelPos::new(-1, 0, 16).chunk(), ChunkPos::new(-1, 1));
        assert_eq!(VoxelPos::new(0, 0, 0).chunk(), ChunkPos::new(0, 0));
    }

    #[test]
    fn local_coordinates_wrap_for_negative_positions() {
        assert_eq!(VoxelPos::new(-1, 0, -16).local_xz(), (15, 0));
        assert_eq!(VoxelPos::new(17, 0, 31).local_xz(), (1, 15));
    }

    #[test]
    fn from_world_floors_fractional_coordinates() {
        let pos = VoxelPos::from_world(Point3::new(1.9, -0.1, 3.0));
        assert_eq!(pos, VoxelPos::new(1, -1, 3));
    }

    #[test]
    fn chebyshev_distance_takes_max_axis() {
        let a = ChunkPos::new(0, 0);
        assert_eq!(a.chebyshev_distance(ChunkPos::new(3, -2)), 3);
        assert_eq!(a.chebyshev_distance(ChunkPos::new(-1, 5)), 5);
    }
}
