//! Seeded terrain generation
//!
//! Closed-form rolling heightmap, depth-banded ores, and surface flora.
//! Every random choice draws from an RNG seeded by (world seed, chunk
//! coordinates), so regenerating a column after an unload reproduces it
//! exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::core::{CHUNK_SIZE, WORLD_HEIGHT};
use crate::world::core::{BlockId, ChunkPos, VoxelPos};
use crate::world::storage::VoxelStore;

pub struct TerrainGenerator {
    seed: f32,
}

impl TerrainGenerator {
    pub fn new(seed: f32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    /// Terrain surface height at a world column. Pure in (x, z, seed).
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        let fx = (x as f32 + self.seed) * 0.1;
        let fz = (z as f32 + self.seed) * 0.1;
        let h = 30.0 + fx.sin() * 3.0 + fz.cos() * 3.0;
        (h.floor() as i32).clamp(1, WORLD_HEIGHT)
    }

    /// Fill one chunk column with terrain and decorations.
    ///
    /// Writes go through `VoxelStore::fill`, so recorded player edits
    /// are never clobbered; callers overlay edits afterwards.
    pub fn generate_chunk(&self, store: &mut VoxelStore, chunk: ChunkPos) {
        let mut rng = self.chunk_rng(chunk);
        let origin = chunk.origin();
        for lx in 0..CHUNK_SIZE {
            for lz in 0..CHUNK_SIZE {
                let x = origin.0 + lx;
                let z = origin.1 + lz;
                let height = self.surface_height(x, z);
                self.fill_column(store, &mut rng, x, z, height);
                self.decorate_column(store, &mut rng, x, z, height);
            }
        }
    }

    fn fill_column(
        &self,
        store: &mut VoxelStore,
        rng: &mut StdRng,
        x: i32,
        z: i32,
        height: i32,
    ) {
        store.fill(VoxelPos::new(x, 0, z), BlockId::STONE);
        for y in 1..height {
            let id = if y < height - 5 {
                ore_or_stone(rng, y)
            } else if y < height - 1 {
                BlockId::DIRT
            } else {
                BlockId::GRASS
            };
            store.fill(VoxelPos::new(x, y, z), id);
        }
    }

    fn decorate_column(
        &self,
        store: &mut VoxelStore,
        rng: &mut StdRng,
        x: i32,
        z: i32,
        height: i32,
    ) {
        if store.get(VoxelPos::new(x, height - 1, z)) != BlockId::GRASS {
            return;
        }

        if rng.gen::<f64>() < 0.002 && rng.gen::<f64>() < 0.5 {
            store.fill(VoxelPos::new(x, height, z), BlockId::FLOWER_RED);
        }

        // One roll shared by the crop bands
        let crop = rng.gen::<f64>();
        if crop < 0.004 {
            plant_stack(store, x, height, z, BlockId::SUGAR_CANE, 3);
        } else if crop < 0.007 {
            plant_stack(store, x, height, z, BlockId::WHEAT, 2);
        } else if crop < 0.009 {
            plant_stack(store, x, height, z, BlockId::COFFEE_BEANS, 2);
        }

        if rng.gen::<f64>() < 0.003 {
            self.grow_tree(store, rng, x, height, z);
        }

        // Cold pockets on a 50-block lattice
        if x.rem_euclid(50) < 10 && z.rem_euclid(50) < 10 && rng.gen::<f64>() < 0.002 {
            plant_stack(store, x, height, z, BlockId::ICE, 2);
        }
    }

    fn grow_tree(&self, store: &mut VoxelStore, rng: &mut StdRng, x: i32, base: i32, z: i32) {
        for dy in 0..3 {
            store.fill(VoxelPos::new(x, base + dy, z), BlockId::WOOD);
        }
        for dy in 2..4 {
            for dx in -1..=1 {
                for dz in -1..=1 {
                    if dy == 2 && dx == 0 && dz == 0 {
                        continue; // trunk cell
                    }
                    store.fill(VoxelPos::new(x + dx, base + dy, z + dz), BlockId::LEAVES);
                }
            }
        }
        // Most trees carry a pair of hanging fruit columns
        if rng.gen::<f64>() < 0.9 {
            for _ in 0..2 {
                let fruit = if rng.gen::<f64>() < 0.5 {
                    BlockId::LEMON
                } else {
                    BlockId::COCOA_BEANS
                };
                let dx = rng.gen_range(-1..=1);
                let dz = rng.gen_range(-1..=1);
                if dx == 0 && dz == 0 {
                    continue;
                }
                for dy in 1..3 {
                    store.fill(VoxelPos::new(x + dx, base + dy, z + dz), fruit);
                }
            }
        }
    }

    fn chunk_rng(&self, chunk: ChunkPos) -> StdRng {
        let mut state = self.seed.to_bits() as u64;
        state ^= (chunk.x as i64 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        state ^= (chunk.z as i64 as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
        StdRng::seed_from_u64(state)
    }
}

fn plant_stack(store: &mut VoxelStore, x: i32, base: i32, z: i32, id: BlockId, count: i32) {
    for dy in 0..count {
        store.fill(VoxelPos::new(x, base + dy, z), id);
    }
}

/// Deep stone with depth-banded ore substitution. One roll per cell.
fn ore_or_stone(rng: &mut StdRng, y: i32) -> BlockId {
    let roll = rng.gen::<f64>();
    if y < 10 {
        if roll < 0.0003 {
            BlockId::DIAMOND_ORE
        } else if roll < 0.0005 {
            BlockId::GOLD_ORE
        } else {
            BlockId::STONE
        }
    } else if y < 20 {
        if roll < 0.001 {
            BlockId::IRON_ORE
        } else if roll < 0.0015 {
            BlockId::COAL_ORE
        } else {
            BlockId::STONE
        }
    } else if roll < 0.002 {
        BlockId::COAL_ORE
    } else {
        BlockId::STONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_formula_is_pure() {
        let gen = TerrainGenerator::new(12.5);
        let a = gen.surface_height(100, -40);
        let b = gen.surface_height(100, -40);
        assert_eq!(a, b);
        assert!((1..=WORLD_HEIGHT).contains(&a));
    }

    #[test]
    fn different_seeds_shift_the_surface() {
        let a = TerrainGenerator::new(0.0);
        let b = TerrainGenerator::new(500.0);
        let differs = (0..64).any(|x| a.surface_height(x, 0) != b.surface_height(x, 0));
        assert!(differs);
    }

    #[test]
    fn generation_is_deterministic() {
        let gen = TerrainGenerator::new(77.0);
        let chunk = ChunkPos::new(-2, 3);

        let mut first = VoxelStore::new();
        gen.generate_chunk(&mut first, chunk);
        let mut second = VoxelStore::new();
        gen.generate_chunk(&mut second, chunk);

        assert_eq!(first.len(), second.len());
        let (ox, oz) = chunk.origin();
        for lx in 0..CHUNK_SIZE {
            for lz in 0..CHUNK_SIZE {
                for y in 0..WORLD_HEIGHT {
                    let pos = VoxelPos::new(ox + lx, y, oz + lz);
                    assert_eq!(first.get(pos), second.get(pos));
                }
            }
        }
    }

    #[test]
    fn columns_are_layered() {
        let gen = TerrainGenerator::new(3.0);
        let mut store = VoxelStore::new();
        gen.generate_chunk(&mut store, ChunkPos::new(0, 0));

        for x in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                let h = gen.surface_height(x, z);
                assert_eq!(store.get(VoxelPos::new(x, 0, z)), BlockId::STONE);
                assert_eq!(store.get(VoxelPos::new(x, h - 1, z)), BlockId::GRASS);
                assert_eq!(store.get(VoxelPos::new(x, h - 3, z)), BlockId::DIRT);
                let deep = store.get(VoxelPos::new(x, 2, z));
                assert!(
                    deep == BlockId::STONE
                        || deep == BlockId::DIAMOND_ORE
                        || deep == BlockId::GOLD_ORE,
                    "unexpected deep block {:?}",
                    deep
                );
            }
        }
    }
}
