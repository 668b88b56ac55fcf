//! First-person player: movement, breaking, health

use cgmath::{InnerSpace, Point3, Vector3};

use crate::constants::physics::{GRAVITY, KILL_PLANE_Y};
use crate::physics::{sweep_entity, Aabb};
use crate::world::core::{Ray, VoxelPos};
use crate::world::storage::VoxelStore;

pub const PLAYER_WIDTH: f32 = 0.6;
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const EYE_HEIGHT: f32 = 1.7;
pub const MOVE_SPEED: f32 = 5.0;
pub const JUMP_POWER: f32 = 10.0;
pub const MAX_HEALTH: f32 = 20.0;
/// Breaking progress per second of held mining
pub const BREAK_RATE: f32 = 0.5;
/// Block interaction reach in world units
pub const REACH: f32 = 10.0;

pub const SPAWN_POINT: Point3<f32> = Point3 {
    x: 50.0,
    y: 40.0,
    z: 50.0,
};

/// Per-tick input, fed by whatever input layer hosts the game
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementIntent {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Held mining button; breaking progress accumulates while set
    pub mine: bool,
    pub yaw: f32,
    pub pitch: f32,
}

pub struct Player {
    pub position: Point3<f32>,
    pub velocity: Vector3<f32>,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    on_ground: bool,
    breaking: Option<(VoxelPos, f32)>,
}

impl Player {
    pub fn new() -> Self {
        Self {
            position: SPAWN_POINT,
            velocity: Vector3::new(0.0, 0.0, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            health: MAX_HEALTH,
            on_ground: false,
            breaking: None,
        }
    }

    pub fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0.0
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::entity(self.position, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Camera position, above the feet
    pub fn eye_position(&self) -> Point3<f32> {
        Point3::new(self.position.x, self.position.y + EYE_HEIGHT, self.position.z)
    }

    /// Unit view direction from yaw/pitch, -Z forward at rest
    pub fn look_direction(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vector3::new(-sin_yaw * cos_pitch, sin_pitch, -cos_yaw * cos_pitch).normalize()
    }

    pub fn look_ray(&self) -> Ray {
        Ray::new(self.eye_position(), self.look_direction())
    }

    /// Apply one tick of input and movement
    pub fn update(&mut self, store: &VoxelStore, intent: &MovementIntent, dt: f32) {
        self.yaw = intent.yaw;
        self.pitch = intent.pitch;

        let mut wish = Vector3::new(0.0, 0.0, 0.0);
        if intent.forward {
            wish.z -= 1.0;
        }
        if intent.backward {
            wish.z += 1.0;
        }
        if intent.left {
            wish.x -= 1.0;
        }
        if intent.right {
            wish.x += 1.0;
        }
        if wish.magnitude2() > 0.0 {
            let wish = wish.normalize();
            // Rotate the wish vector into world space around Y
            let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
            self.velocity.x = (wish.x * cos_yaw + wish.z * sin_yaw) * MOVE_SPEED;
            self.velocity.z = (-wish.x * sin_yaw + wish.z * cos_yaw) * MOVE_SPEED;
        } else {
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        }

        if intent.jump && self.on_ground {
            self.velocity.y = JUMP_POWER;
            self.on_ground = false;
        }
        if !self.on_ground {
            self.velocity.y += GRAVITY * dt;
        }

        let result = sweep_entity(
            store,
            self.position,
            self.velocity,
            dt,
            PLAYER_WIDTH,
            PLAYER_HEIGHT,
        );
        self.position = result.position;
        self.velocity = result.velocity;
        self.on_ground = result.grounded;
        if self.on_ground {
            // Snap to the surface so repeated landings do not drift
            self.position.y = self.position.y.floor();
        }

        if self.position.y < KILL_PLANE_Y {
            self.respawn();
        }
    }

    /// Advance timed breaking toward `target`.
    ///
    /// Progress accumulates only while the target stays the same voxel;
    /// looking away or switching blocks resets it. Returns the voxel
    /// once it finishes breaking.
    pub fn advance_breaking(&mut self, target: Option<VoxelPos>, dt: f32) -> Option<VoxelPos> {
        let target = match target {
            Some(pos) => pos,
            None => {
                self.breaking = None;
                return None;
            }
        };
        let progress = match &mut self.breaking {
            Some((pos, progress)) if *pos == target => {
                *progress += dt * BREAK_RATE;
                *progress
            }
            _ => {
                self.breaking = Some((target, 0.0));
                0.0
            }
        };
        if progress >= 1.0 {
            self.breaking = None;
            Some(target)
        } else {
            None
        }
    }

    pub fn breaking_progress(&self) -> Option<(VoxelPos, f32)> {
        self.breaking
    }

    pub fn stop_breaking(&mut self) {
        self.breaking = None;
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
        log::debug!("player took {} damage, {} health left", amount, self.health);
    }

    pub fn respawn(&mut self) {
        log::info!("player respawned");
        self.position = SPAWN_POINT;
        self.velocity = Vector3::new(0.0, 0.0, 0.0);
        self.health = MAX_HEALTH;
        self.breaking = None;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
