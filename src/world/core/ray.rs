use super::{BlockId, VoxelPos};
use cgmath::{InnerSpace, Point3, Vector3};

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockFace {
    Right,  // +X
    Left,   // -X
    Top,    // +Y
    Bottom, // -Y
    Front,  // +Z
    Back,   // -Z
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Right,
        BlockFace::Left,
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Front,
        BlockFace::Back,
    ];

    pub fn normal(&self) -> Vector3<f32> {
        let (x, y, z) = self.offset_tuple();
        Vector3::new(x as f32, y as f32, z as f32)
    }

    /// Integer offset to the neighboring voxel across this face
    pub fn offset(&self) -> Vector3<i32> {
        let (x, y, z) = self.offset_tuple();
        Vector3::new(x, y, z)
    }

    fn offset_tuple(&self) -> (i32, i32, i32) {
        match self {
            BlockFace::Right => (1, 0, 0),
            BlockFace::Left => (-1, 0, 0),
            BlockFace::Top => (0, 1, 0),
            BlockFace::Bottom => (0, -1, 0),
            BlockFace::Front => (0, 0, 1),
            BlockFace::Back => (0, 0, -1),
        }
    }
}

/// Result of a successful voxel pick
///
/// `position + face.offset()` names the empty cell a new block would be
/// placed into.
#[derive(Debug, Clone)]
pub struct RaycastHit {
    pub position: VoxelPos,
    pub face: BlockFace,
    pub point: Point3<f32>,
    pub distance: f32,
    pub block: BlockId,
}

impl RaycastHit {
    /// Adjacent cell on the struck face, where a block may be placed
    pub fn placement_pos(&self) -> VoxelPos {
        let o = self.face.offset();
        self.position.offset(o.x, o.y, o.z)
    }
}

/// Which face of `voxel_pos` a hit point lies on, by nearest face plane
pub(crate) fn hit_face(hit_point: Point3<f32>, voxel_pos: VoxelPos) -> BlockFace {
    let local_x = hit_point.x - voxel_pos.x as f32;
    let local_y = hit_point.y - voxel_pos.y as f32;
    let local_z = hit_point.z - voxel_pos.z as f32;

    let distances = [
        (local_x, BlockFace::Left),
        (1.0 - local_x, BlockFace::Right),
        (local_y, BlockFace::Bottom),
        (1.0 - local_y, BlockFace::Top),
        (local_z, BlockFace::Back),
        (1.0 - local_z, BlockFace::Front),
    ];

    distances
        .iter()
        .min_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, face)| *face)
        .unwrap_or(BlockFace::Top)
}
