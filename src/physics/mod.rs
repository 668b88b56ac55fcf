//! AABB physics against the voxel grid

pub mod aabb;
pub mod collision;

pub use aabb::Aabb;
pub use collision::{collides, raycast, sweep_entity, SweepResult};
