//! Voxel collision queries and the entity movement sweep

use cgmath::{Point3, Vector3};

use crate::constants::physics::{RAYCAST_INSIDE_EPSILON, RAYCAST_STEP};
use crate::physics::aabb::Aabb;
use crate::world::core::ray::hit_face;
use crate::world::core::{Ray, RaycastHit, VoxelPos};
use crate::world::storage::VoxelStore;

/// Whether any solid voxel overlaps the box
pub fn collides(store: &VoxelStore, aabb: &Aabb) -> bool {
    let min_x = aabb.min.x.floor() as i32;
    let min_y = aabb.min.y.floor() as i32;
    let min_z = aabb.min.z.floor() as i32;
    let max_x = aabb.max.x.floor() as i32;
    let max_y = aabb.max.y.floor() as i32;
    let max_z = aabb.max.z.floor() as i32;

    for x in min_x..=max_x {
        for y in min_y..=max_y {
            for z in min_z..=max_z {
                if store.is_solid(VoxelPos::new(x, y, z))
                    && aabb.intersects(&Aabb::voxel(x, y, z))
                {
                    return true;
                }
            }
        }
    }
    false
}

/// Outcome of one movement sweep
#[derive(Debug, Clone, Copy)]
pub struct SweepResult {
    pub position: Point3<f32>,
    pub velocity: Vector3<f32>,
    pub grounded: bool,
}

/// Move an entity box through the world, one axis at a time.
///
/// X first, then Z, then Y; a blocked axis keeps its old coordinate and
/// zeroes that velocity component. Sliding along walls falls out of the
/// separation; `grounded` reports a canceled downward Y move.
pub fn sweep_entity(
    store: &VoxelStore,
    position: Point3<f32>,
    velocity: Vector3<f32>,
    dt: f32,
    width: f32,
    height: f32,
) -> SweepResult {
    let delta = velocity * dt;
    let mut pos = position;
    let mut vel = velocity;
    let mut grounded = false;

    let try_x = Point3::new(pos.x + delta.x, pos.y, pos.z);
    if collides(store, &Aabb::entity(try_x, width, height)) {
        vel.x = 0.0;
    } else {
        pos = try_x;
    }

    let try_z = Point3::new(pos.x, pos.y, pos.z + delta.z);
    if collides(store, &Aabb::entity(try_z, width, height)) {
        vel.z = 0.0;
    } else {
        pos = try_z;
    }

    let try_y = Point3::new(pos.x, pos.y + delta.y, pos.z);
    if collides(store, &Aabb::entity(try_y, width, height)) {
        if vel.y < 0.0 {
            grounded = true;
        }
        vel.y = 0.0;
    } else {
        pos = try_y;
    }

    SweepResult {
        position: pos,
        velocity: vel,
        grounded,
    }
}

/// March a ray through the grid and return the first solid voxel.
///
/// Fixed-step sampling; each sample point is nudged slightly forward
/// along the ray before flooring, so a sample landing exactly on a
/// voxel boundary resolves to the cell the ray is entering rather than
/// the one it is leaving.
pub fn raycast(store: &VoxelStore, ray: Ray, max_distance: f32) -> Option<RaycastHit> {
    let mut distance = 0.0;
    while distance <= max_distance {
        let point = ray.origin + ray.direction * distance;
        let probe = point + ray.direction * RAYCAST_INSIDE_EPSILON;
        let voxel = VoxelPos::from_world(probe);
        let block = store.get(voxel);
        if store.is_solid(voxel) {
            return Some(RaycastHit {
                position: voxel,
                face: hit_face(point, voxel),
                point,
                distance,
                block,
            });
        }
        distance += RAYCAST_STEP;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::core::{BlockFace, BlockId};

    fn floor_plate(store: &mut VoxelStore, y: i32) {
        for x in -4..8 {
            for z in -4..8 {
                store.set(VoxelPos::new(x, y, z), BlockId::STONE);
            }
        }
    }

    #[test]
    fn box_in_empty_space_does_not_collide() {
        let store = VoxelStore::new();
        let aabb = Aabb::entity(Point3::new(0.0, 20.0, 0.0), 0.6, 1.8);
        assert!(!collides(&store, &aabb));
    }

    #[test]
    fn box_overlapping_a_solid_voxel_collides() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(0, 20, 0), BlockId::STONE);
        let aabb = Aabb::entity(Point3::new(0.5, 20.5, 0.5), 0.6, 1.8);
        assert!(collides(&store, &aabb));
    }

    #[test]
    fn box_resting_on_a_surface_does_not_collide() {
        let mut store = VoxelStore::new();
        floor_plate(&mut store, 10);
        let aabb = Aabb::entity(Point3::new(2.0, 11.0, 2.0), 0.6, 1.8);
        assert!(!collides(&store, &aabb));
    }

    #[test]
    fn falling_entity_lands_and_grounds() {
        let mut store = VoxelStore::new();
        floor_plate(&mut store, 10);
        let result = sweep_entity(
            &store,
            Point3::new(2.0, 11.3, 2.0),
            Vector3::new(0.0, -10.0, 0.0),
            0.1,
            0.6,
            1.8,
        );
        assert!(result.grounded);
        assert_eq!(result.velocity.y, 0.0);
        assert_eq!(result.position.y, 11.3);
    }

    #[test]
    fn wall_cancels_only_the_blocked_axis() {
        let mut store = VoxelStore::new();
        for y in 10..14 {
            store.set(VoxelPos::new(3, y, 2), BlockId::STONE);
        }
        let result = sweep_entity(
            &store,
            Point3::new(2.5, 10.0, 2.5),
            Vector3::new(5.0, 0.0, 5.0),
            0.1,
            0.6,
            1.8,
        );
        assert_eq!(result.velocity.x, 0.0);
        assert_eq!(result.position.x, 2.5);
        assert!(result.position.z > 2.5);
        assert_eq!(result.velocity.z, 5.0);
    }

    #[test]
    fn raycast_down_hits_the_top_face() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(0, 10, 0), BlockId::GRASS);
        let ray = Ray::new(Point3::new(0.5, 13.0, 0.5), Vector3::new(0.0, -1.0, 0.0));
        let hit = raycast(&store, ray, 10.0).unwrap();
        assert_eq!(hit.position, VoxelPos::new(0, 10, 0));
        assert_eq!(hit.face, BlockFace::Top);
        assert_eq!(hit.block, BlockId::GRASS);
        assert_eq!(hit.placement_pos(), VoxelPos::new(0, 11, 0));
        assert!(!store.is_solid(hit.placement_pos()));
    }

    #[test]
    fn raycast_ignores_non_solid_blocks() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(2, 10, 0), BlockId::FLOWER_RED);
        store.set(VoxelPos::new(4, 10, 0), BlockId::STONE);
        let ray = Ray::new(Point3::new(0.5, 10.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        let hit = raycast(&store, ray, 10.0).unwrap();
        assert_eq!(hit.position, VoxelPos::new(4, 10, 0));
        assert_eq!(hit.face, BlockFace::Left);
    }

    #[test]
    fn raycast_misses_past_max_distance() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(20, 10, 0), BlockId::STONE);
        let ray = Ray::new(Point3::new(0.5, 10.5, 0.5), Vector3::new(1.0, 0.0, 0.0));
        assert!(raycast(&store, ray, 5.0).is_none());
    }

    #[test]
    fn boundary_sample_resolves_to_the_entered_block() {
        let mut store = VoxelStore::new();
        store.set(VoxelPos::new(1, 10, 2), BlockId::STONE);
        // Marching in -X, the sample at x == 2.0 lies exactly on the
        // far face plane; the hit must name the solid block, not the
        // empty cell at x == 2.
        let ray = Ray::new(Point3::new(3.5, 10.5, 2.5), Vector3::new(-1.0, 0.0, 0.0));
        let hit = raycast(&store, ray, 10.0).unwrap();
        assert_eq!(hit.position, VoxelPos::new(1, 10, 2));
        assert_eq!(hit.face, BlockFace::Right);
        assert_eq!(hit.placement_pos(), VoxelPos::new(2, 10, 2));
    }
}
