//! Axis-aligned bounding boxes

use cgmath::{Point3, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Self { min, max }
    }

    /// Box for an entity standing at `feet` (feet-centered in X/Z)
    pub fn entity(feet: Point3<f32>, width: f32, height: f32) -> Self {
        let half = width / 2.0;
        Self {
            min: Point3::new(feet.x - half, feet.y, feet.z - half),
            max: Point3::new(feet.x + half, feet.y + height, feet.z + half),
        }
    }

    /// Unit cube of the voxel at integer coordinates
    pub fn voxel(x: i32, y: i32, z: i32) -> Self {
        Self {
            min: Point3::new(x as f32, y as f32, z as f32),
            max: Point3::new(x as f32 + 1.0, y as f32 + 1.0, z as f32 + 1.0),
        }
    }

    /// Strict overlap test. Boxes that only touch do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    pub fn translated(&self, delta: Vector3<f32>) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    pub fn contains_point(&self, point: Point3<f32>) -> bool {
        point.x >= self.min.x
            && point.x < self.max.x
            && point.y >= self.min.y
            && point.y < self.max.y
            && point.z >= self.min.z
            && point.z < self.max.z
    }

    pub fn center(&self) -> Point3<f32> {
        Point3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }
}
