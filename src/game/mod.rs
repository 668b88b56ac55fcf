//! Game orchestration: one tick of the whole simulation
//!
//! `GameState` owns the world, the player, mobs, and the clock, and
//! wires them together the way the display loop expects: movement and
//! mining first, then chunk streaming and budgeted mesh rebuilds, then
//! the day/night clock, with enemy AI decimated to every fifth tick.

pub mod crafting;
pub mod enemy;
pub mod inventory;
pub mod player;

use crate::constants::core::WORLD_HEIGHT;
use crate::constants::timing::{ENEMY_UPDATE_INTERVAL, MAX_DELTA_SECS};
use crate::physics::{raycast, Aabb};
use crate::world::core::{BlockId, BlockRegistry, VoxelPos};
use crate::world::generation::TerrainGenerator;
use crate::world::lighting::DayNightCycle;
use crate::world::management::ChunkManager;
use crate::world::meshing::MeshSink;
use crate::world::storage::VoxelStore;

pub use crafting::{craft, CraftingGrid};
pub use enemy::{Enemy, EnemyKind, EnemyManager};
pub use inventory::Inventory;
pub use player::{MovementIntent, Player};

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub seed: f32,
    /// Chebyshev chunk radius kept loaded around the player
    pub load_radius: i32,
    /// Chebyshev chunk radius meshed for display
    pub render_radius: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 0.0,
            load_radius: 2,
            render_radius: 2,
        }
    }
}

pub struct GameState {
    pub store: VoxelStore,
    pub registry: BlockRegistry,
    pub generator: TerrainGenerator,
    pub chunks: ChunkManager,
    pub player: Player,
    pub inventory: Inventory,
    pub enemies: EnemyManager,
    pub daynight: DayNightCycle,
    config: GameConfig,
    enemy_ticks: u32,
    enemy_dt: f32,
    force_rebuild: bool,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        log::info!("new world, seed {}", config.seed);
        Self {
            store: VoxelStore::new(),
            registry: BlockRegistry::new(),
            generator: TerrainGenerator::new(config.seed),
            chunks: ChunkManager::new(),
            player: Player::new(),
            inventory: Inventory::new(),
            enemies: EnemyManager::new(config.seed.to_bits() as u64),
            daynight: DayNightCycle::new(),
            config,
            enemy_ticks: 0,
            enemy_dt: 0.0,
            force_rebuild: false,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Advance the whole simulation by one frame.
    ///
    /// `dt` is clamped so a stalled display loop cannot launch entities
    /// through walls.
    pub fn update(&mut self, dt: f32, intent: &MovementIntent, sink: &mut dyn MeshSink) {
        let dt = dt.min(MAX_DELTA_SECS);

        self.player.update(&self.store, intent, dt);

        if intent.mine {
            self.advance_mining(dt);
        } else {
            self.player.stop_breaking();
        }

        self.chunks.update_chunks(
            &mut self.store,
            &self.generator,
            self.player.position.x,
            self.player.position.z,
            self.config.load_radius,
            sink,
        );
        let force_all = self.force_rebuild;
        self.force_rebuild = false;
        self.chunks.rebuild_dirty(
            &self.store,
            &self.registry,
            self.player.position.x,
            self.player.position.z,
            self.config.render_radius,
            force_all,
            sink,
        );

        self.daynight.advance(dt);

        self.enemy_ticks += 1;
        self.enemy_dt += dt;
        if self.enemy_ticks >= ENEMY_UPDATE_INTERVAL {
            let is_night = self.daynight.is_night();
            let dirty = self
                .enemies
                .update(&mut self.store, &mut self.player, self.enemy_dt, is_night);
            for chunk in dirty {
                self.chunks.mark_dirty(chunk);
            }
            self.enemy_ticks = 0;
            self.enemy_dt = 0.0;
        }
    }

    fn advance_mining(&mut self, dt: f32) {
        let target = raycast(&self.store, self.player.look_ray(), player::REACH)
            .map(|hit| hit.position);
        if let Some(pos) = self.player.advance_breaking(target, dt) {
            let block = self.store.get(pos);
            let drop = self.registry.drop_for(block);
            for chunk in self.store.set(pos, BlockId::AIR) {
                self.chunks.mark_dirty(chunk);
            }
            if drop != BlockId::AIR {
                self.inventory.add(drop, 1);
            }
            log::debug!(
                "mined {} at ({}, {}, {})",
                self.registry.name(block),
                pos.x,
                pos.y,
                pos.z
            );
        }
    }

    /// Place the selected item against the block under the crosshair.
    ///
    /// Fails without consuming anything when nothing is targeted, the
    /// cell is outside the world, or it overlaps the player.
    pub fn place_block(&mut self) -> bool {
        let item = match self.inventory.selected_item() {
            Some(item) => item,
            None => return false,
        };
        let hit = match raycast(&self.store, self.player.look_ray(), player::REACH) {
            Some(hit) => hit,
            None => return false,
        };
        let pos = hit.placement_pos();
        if pos.y < 0 || pos.y >= WORLD_HEIGHT {
            return false;
        }
        let cell = Aabb::voxel(pos.x, pos.y, pos.z);
        if cell.intersects(&self.player.aabb()) {
            return false;
        }
        if self.store.is_solid(pos) {
            return false;
        }
        self.inventory.consume_selected();
        for chunk in self.store.set(pos, item) {
            self.chunks.mark_dirty(chunk);
        }
        true
    }

    /// Melee swing at everything near the player. Damage depends on
    /// the selected item; bare hands deal 1.
    pub fn attack(&mut self) -> usize {
        let damage = match self.inventory.selected_item() {
            Some(BlockId::WOODEN_SWORD) | Some(BlockId::GOLD_SWORD) => 4.0,
            Some(BlockId::STONE_SWORD) => 5.0,
            Some(BlockId::IRON_SWORD) => 6.0,
            Some(BlockId::DIAMOND_SWORD) => 7.0,
            _ => 1.0,
        };
        let hits = self.enemies.attack_enemies(self.player.position, 3.0, damage);
        if hits > 0 {
            log::debug!("hit {} enemies for {}", hits, damage);
        }
        hits
    }

    /// Whether a crafting table block sits within reach of the player
    pub fn near_crafting_table(&self) -> bool {
        let feet = VoxelPos::from_world(self.player.position);
        for dx in -2..=2 {
            for dy in -2..=2 {
                for dz in -2..=2 {
                    if self.store.get(feet.offset(dx, dy, dz)) == BlockId::CRAFTING_TABLE {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn craft(&mut self, grid: CraftingGrid) -> Option<(BlockId, u32)> {
        let near_table = self.near_crafting_table();
        crafting::craft(&mut self.inventory, grid, near_table)
    }

    /// Force the next rebuild pass to mesh every dirty chunk, used
    /// after a snapshot load replaces the world.
    pub fn request_full_rebuild(&mut self) {
        self.chunks.mark_all_dirty();
        self.force_rebuild = true;
    }

    pub(crate) fn reset_world(&mut self, seed: f32) {
        self.config.seed = seed;
        self.generator = TerrainGenerator::new(seed);
        self.store.clear();
        self.chunks = ChunkManager::new();
        self.enemies.clear();
    }

}
