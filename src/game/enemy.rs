//! Hostile mobs: chase, obstacle hops, melee, creeper blasts

use cgmath::{InnerSpace, MetricSpace, Point3, Vector3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::core::WORLD_HEIGHT;
use crate::constants::physics::GRAVITY;
use crate::game::player::Player;
use crate::physics::sweep_entity;
use crate::world::core::{BlockId, ChunkPos, VoxelPos};
use crate::world::storage::VoxelStore;

pub const ENEMY_WIDTH: f32 = 0.6;
pub const ENEMY_HEIGHT: f32 = 1.8;
pub const DETECTION_RANGE: f32 = 20.0;
pub const ATTACK_RANGE: f32 = 2.0;
pub const ATTACK_DELAY: f32 = 1.0;
pub const CREEPER_FUSE: f32 = 1.5;
pub const BLAST_RADIUS: f32 = 5.0;

pub const MAX_ENEMIES: usize = 3;
pub const SPAWN_INTERVAL: f32 = 30.0;
pub const SPAWN_RING_MIN: f32 = 15.0;
pub const SPAWN_RING_SPREAD: f32 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Zombie,
    Skeleton,
    Spider,
    Creeper,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::Zombie,
        EnemyKind::Skeleton,
        EnemyKind::Spider,
        EnemyKind::Creeper,
    ];

    pub fn params(&self) -> &'static EnemyParams {
        match self {
            EnemyKind::Zombie => &EnemyParams {
                max_health: 20.0,
                speed: 2.0,
                damage: 3.0,
                jump_power: 8.0,
            },
            EnemyKind::Skeleton => &EnemyParams {
                max_health: 15.0,
                speed: 2.5,
                damage: 4.0,
                jump_power: 8.0,
            },
            EnemyKind::Spider => &EnemyParams {
                max_health: 16.0,
                speed: 3.0,
                damage: 2.0,
                jump_power: 10.0,
            },
            EnemyKind::Creeper => &EnemyParams {
                max_health: 20.0,
                speed: 1.5,
                damage: 10.0,
                jump_power: 8.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyParams {
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
    pub jump_power: f32,
}

pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Point3<f32>,
    pub velocity: Vector3<f32>,
    pub health: f32,
    on_ground: bool,
    attack_cooldown: f32,
    fuse: Option<f32>,
}

impl Enemy {
    pub fn new(kind: EnemyKind, position: Point3<f32>) -> Self {
        Self {
            kind,
            position,
            velocity: Vector3::new(0.0, 0.0, 0.0),
            health: kind.params().max_health,
            on_ground: false,
            attack_cooldown: 0.0,
            fuse: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_fusing(&self) -> bool {
        self.fuse.is_some()
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.health = (self.health - amount).max(0.0);
    }

    /// One AI tick. Returns true when a creeper's fuse ran out; the
    /// manager then applies the blast.
    pub fn update(&mut self, store: &VoxelStore, player: &mut Player, dt: f32) -> bool {
        if !self.is_alive() {
            return false;
        }
        let params = self.kind.params();
        let distance = self.position.distance(player.position);

        if distance < DETECTION_RANGE {
            self.chase(store, player, params);
            if distance < ATTACK_RANGE {
                self.attack(player, params);
            }
        } else {
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        }

        if !self.on_ground {
            self.velocity.y += GRAVITY * dt;
        }
        let result = sweep_entity(
            store,
            self.position,
            self.velocity,
            dt,
            ENEMY_WIDTH,
            ENEMY_HEIGHT,
        );
        self.position = result.position;
        self.velocity = result.velocity;
        self.on_ground = result.grounded;
        if self.on_ground {
            self.position.y = self.position.y.floor();
        }

        if self.attack_cooldown > 0.0 {
            self.attack_cooldown -= dt;
        }

        if let Some(fuse) = &mut self.fuse {
            *fuse += dt;
            if *fuse >= CREEPER_FUSE {
                return true;
            }
        }
        false
    }

    fn chase(&mut self, store: &VoxelStore, player: &Player, params: &EnemyParams) {
        let mut direction = player.position - self.position;
        direction.y = 0.0;
        if direction.magnitude2() < 1e-6 {
            return;
        }
        let direction = direction.normalize();
        self.velocity.x = direction.x * params.speed;
        self.velocity.z = direction.z * params.speed;

        // Hop over a block in the way
        if self.on_ground {
            let front = VoxelPos::new(
                (self.position.x + direction.x * 2.0).floor() as i32,
                (self.position.y + 1.0).floor() as i32,
                (self.position.z + direction.z * 2.0).floor() as i32,
            );
            if store.is_solid(front) {
                self.velocity.y = params.jump_power;
            }
        }
    }

    fn attack(&mut self, player: &mut Player, params: &EnemyParams) {
        if self.attack_cooldown > 0.0 {
            return;
        }
        if self.kind == EnemyKind::Creeper {
            if self.fuse.is_none() {
                log::debug!("creeper fuse lit");
                self.fuse = Some(0.0);
            }
        } else {
            player.take_damage(params.damage);
            self.attack_cooldown = ATTACK_DELAY;
        }
    }
}

pub struct EnemyManager {
    enemies: Vec<Enemy>,
    spawn_timer: f32,
    rng: StdRng,
}

impl EnemyManager {
    pub fn new(seed: u64) -> Self {
        Self {
            enemies: Vec::new(),
            spawn_timer: 0.0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn count(&self) -> usize {
        self.enemies.len()
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }

    /// Direct insert, used by spawning and tests
    pub fn push(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Tick every enemy, apply blasts, cull the dead, and spawn at
    /// night. Returns chunk columns whose blocks an explosion changed.
    pub fn update(
        &mut self,
        store: &mut VoxelStore,
        player: &mut Player,
        dt: f32,
        is_night: bool,
    ) -> Vec<ChunkPos> {
        let mut blasts = Vec::new();
        for enemy in &mut self.enemies {
            if enemy.update(store, player, dt) {
                blasts.push(enemy.position);
                enemy.health = 0.0;
            }
        }
        self.enemies.retain(|enemy| enemy.is_alive());

        let mut dirty = Vec::new();
        for center in blasts {
            dirty.extend(self.explode(store, player, center));
        }

        if is_night && self.enemies.len() < MAX_ENEMIES {
            self.spawn_timer += dt;
            if self.spawn_timer >= SPAWN_INTERVAL {
                self.spawn_timer = 0.0;
                self.spawn_near(store, player.position);
            }
        } else if !is_night {
            self.spawn_timer = 0.0;
        }

        dirty
    }

    /// Creeper blast: distance-scaled player damage plus random
    /// destruction of a 5x5x5 cube around the center.
    fn explode(
        &mut self,
        store: &mut VoxelStore,
        player: &mut Player,
        center: Point3<f32>,
    ) -> Vec<ChunkPos> {
        log::info!(
            "creeper exploded at ({:.1}, {:.1}, {:.1})",
            center.x,
            center.y,
            center.z
        );
        let distance = center.distance(player.position);
        if distance < BLAST_RADIUS {
            let scale = 1.0 - distance / BLAST_RADIUS;
            let damage = (EnemyKind::Creeper.params().damage * scale).floor();
            player.take_damage(damage);
        }

        let mut dirty = Vec::new();
        for dx in -2..=2 {
            for dy in -2..=2 {
                for dz in -2..=2 {
                    if self.rng.gen::<f64>() >= 0.5 {
                        continue;
                    }
                    let pos = VoxelPos::new(
                        (center.x + dx as f32).floor() as i32,
                        (center.y + dy as f32).floor() as i32,
                        (center.z + dz as f32).floor() as i32,
                    );
                    dirty.extend(store.set(pos, BlockId::AIR));
                }
            }
        }
        dirty.sort_by_key(|chunk| (chunk.x, chunk.z));
        dirty.dedup();
        dirty
    }

    fn spawn_near(&mut self, store: &VoxelStore, around: Point3<f32>) {
        let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
        let distance = SPAWN_RING_MIN + self.rng.gen::<f32>() * SPAWN_RING_SPREAD;
        let x = around.x + angle.cos() * distance;
        let z = around.z + angle.sin() * distance;

        // Snap to the terrain surface
        let mut y = WORLD_HEIGHT - 1;
        while y > 0 && !store.is_solid(VoxelPos::new(x.floor() as i32, y, z.floor() as i32)) {
            y -= 1;
        }
        let kind = EnemyKind::ALL[self.rng.gen_range(0..EnemyKind::ALL.len())];
        log::debug!("spawning {:?} at ({:.1}, {}, {:.1})", kind, x, y + 2, z);
        self.enemies
            .push(Enemy::new(kind, Point3::new(x, (y + 2) as f32, z)));
    }

    /// Melee sweep: damage every enemy within `range` of `center`.
    /// Returns the number hit.
    pub fn attack_enemies(&mut self, center: Point3<f32>, range: f32, damage: f32) -> usize {
        let mut hits = 0;
        for enemy in &mut self.enemies {
            if enemy.position.distance(center) < range {
                enemy.take_damage(damage);
                hits += 1;
            }
        }
        self.enemies.retain(|enemy| enemy.is_alive());
        hits
    }
}
