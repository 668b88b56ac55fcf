//! Crafting recipes and grid matching
//!
//! Two recipe books: a 2x2 grid craftable by hand and a 3x3 grid that
//! needs a placed crafting table. Matching is exact per cell, with AIR
//! as the empty cell.

use crate::game::inventory::Inventory;
use crate::world::core::BlockId;

#[derive(Debug, Clone, Copy)]
pub struct Recipe<const N: usize> {
    pub pattern: [BlockId; N],
    pub result: BlockId,
    pub count: u32,
}

const A: BlockId = BlockId::AIR;

pub static RECIPES_2X2: &[Recipe<4>] = &[
    Recipe { pattern: [BlockId::WOOD, A, A, A], result: BlockId::PLANKS, count: 4 },
    Recipe { pattern: [BlockId::PLANKS, A, A, BlockId::PLANKS], result: BlockId::STICK, count: 4 },
    Recipe {
        pattern: [BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS],
        result: BlockId::CRAFTING_TABLE,
        count: 1,
    },
    Recipe {
        pattern: [BlockId::STONE, BlockId::STONE, BlockId::STONE, BlockId::STONE],
        result: BlockId::BRICK,
        count: 1,
    },
    Recipe {
        pattern: [BlockId::IRON_INGOT, BlockId::IRON_INGOT, BlockId::IRON_INGOT, BlockId::IRON_INGOT],
        result: BlockId::IRON_BLOCK,
        count: 1,
    },
    Recipe {
        pattern: [BlockId::GOLD_INGOT, BlockId::GOLD_INGOT, BlockId::GOLD_INGOT, BlockId::GOLD_INGOT],
        result: BlockId::GOLD_BLOCK,
        count: 1,
    },
    Recipe {
        pattern: [BlockId::DIAMOND, BlockId::DIAMOND, BlockId::DIAMOND, BlockId::DIAMOND],
        result: BlockId::DIAMOND_BLOCK,
        count: 1,
    },
    Recipe { pattern: [BlockId::SUGAR_CANE, A, A, A], result: BlockId::SUGAR, count: 2 },
    Recipe { pattern: [BlockId::COFFEE_BEANS, A, A, A], result: BlockId::COFFEE, count: 1 },
    Recipe {
        pattern: [BlockId::WHEAT, BlockId::WHEAT, BlockId::WHEAT, A],
        result: BlockId::BREAD,
        count: 1,
    },
    Recipe {
        pattern: [BlockId::ICE, BlockId::ICE, BlockId::ICE, A],
        result: BlockId::COLA,
        count: 1,
    },
];

pub static RECIPES_3X3: &[Recipe<9>] = &[
    // Tools
    Recipe {
        pattern: [
            BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS,
            A, BlockId::STICK, A,
            A, BlockId::STICK, A,
        ],
        result: BlockId::WOODEN_PICKAXE,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::STONE, BlockId::STONE, BlockId::STONE,
            A, BlockId::STICK, A,
            A, BlockId::STICK, A,
        ],
        result: BlockId::STONE_PICKAXE,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::IRON_INGOT, BlockId::IRON_INGOT, BlockId::IRON_INGOT,
            A, BlockId::STICK, A,
            A, BlockId::STICK, A,
        ],
        result: BlockId::IRON_PICKAXE,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::DIAMOND, BlockId::DIAMOND, BlockId::DIAMOND,
            A, BlockId::STICK, A,
            A, BlockId::STICK, A,
        ],
        result: BlockId::DIAMOND_PICKAXE,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::PLANKS, BlockId::PLANKS, A,
            BlockId::PLANKS, BlockId::STICK, A,
            A, BlockId::STICK, A,
        ],
        result: BlockId::WOODEN_AXE,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::STONE, BlockId::STONE, A,
            BlockId::STONE, BlockId::STICK, A,
            A, BlockId::STICK, A,
        ],
        result: BlockId::STONE_AXE,
        count: 1,
    },
    // Swords
    Recipe {
        pattern: [A, BlockId::PLANKS, A, A, BlockId::PLANKS, A, A, BlockId::STICK, A],
        result: BlockId::WOODEN_SWORD,
        count: 1,
    },
    Recipe {
        pattern: [A, BlockId::STONE, A, A, BlockId::STONE, A, A, BlockId::STICK, A],
        result: BlockId::STONE_SWORD,
        count: 1,
    },
    Recipe {
        pattern: [A, BlockId::IRON_INGOT, A, A, BlockId::IRON_INGOT, A, A, BlockId::STICK, A],
        result: BlockId::IRON_SWORD,
        count: 1,
    },
    Recipe {
        pattern: [A, BlockId::GOLD_INGOT, A, A, BlockId::GOLD_INGOT, A, A, BlockId::STICK, A],
        result: BlockId::GOLD_SWORD,
        count: 1,
    },
    Recipe {
        pattern: [A, BlockId::DIAMOND, A, A, BlockId::DIAMOND, A, A, BlockId::STICK, A],
        result: BlockId::DIAMOND_SWORD,
        count: 1,
    },
    // Storage and utility
    Recipe {
        pattern: [
            BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS,
            BlockId::PLANKS, A, BlockId::PLANKS,
            BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS,
        ],
        result: BlockId::CHEST,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::STONE, BlockId::STONE, BlockId::STONE,
            BlockId::STONE, A, BlockId::STONE,
            BlockId::STONE, BlockId::STONE, BlockId::STONE,
        ],
        result: BlockId::FURNACE,
        count: 1,
    },
    Recipe {
        pattern: [A, BlockId::COAL, A, A, BlockId::STICK, A, A, A, A],
        result: BlockId::TORCH,
        count: 4,
    },
    Recipe {
        pattern: [
            BlockId::IRON_INGOT, A, BlockId::IRON_INGOT,
            A, BlockId::IRON_INGOT, A,
            A, A, A,
        ],
        result: BlockId::BUCKET,
        count: 1,
    },
    // Novelties
    Recipe {
        pattern: [
            BlockId::DIAMOND, BlockId::GOLD_INGOT, BlockId::IRON_INGOT,
            BlockId::GOLD_INGOT, BlockId::DIAMOND, BlockId::GOLD_INGOT,
            BlockId::IRON_INGOT, BlockId::GOLD_INGOT, BlockId::DIAMOND,
        ],
        result: BlockId::RAINBOW_BLOCK,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::GOLD_INGOT, BlockId::DIAMOND, BlockId::GOLD_INGOT,
            BlockId::DIAMOND, BlockId::GOLD_INGOT, BlockId::DIAMOND,
            BlockId::GOLD_INGOT, BlockId::DIAMOND, BlockId::GOLD_INGOT,
        ],
        result: BlockId::SMILE_BLOCK,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS,
            BlockId::APPLE, BlockId::APPLE, BlockId::APPLE,
            BlockId::PLANKS, BlockId::PLANKS, BlockId::PLANKS,
        ],
        result: BlockId::CAKE,
        count: 1,
    },
    // Drinks
    Recipe {
        pattern: [
            BlockId::SUGAR, BlockId::COCOA_BEANS, BlockId::ICE,
            BlockId::WATER_BUCKET, A, A,
            A, A, A,
        ],
        result: BlockId::COLA,
        count: 1,
    },
    Recipe {
        pattern: [
            BlockId::LEMON, BlockId::SUGAR, A,
            BlockId::WATER_BUCKET, A, A,
            A, A, A,
        ],
        result: BlockId::LEMONADE,
        count: 1,
    },
];

/// Recipe whose pattern equals the grid cell for cell
pub fn find_recipe_2x2(grid: &[BlockId; 4]) -> Option<&'static Recipe<4>> {
    RECIPES_2X2.iter().find(|recipe| recipe.pattern == *grid)
}

pub fn find_recipe_3x3(grid: &[BlockId; 9]) -> Option<&'static Recipe<9>> {
    RECIPES_3X3.iter().find(|recipe| recipe.pattern == *grid)
}

/// Craft from a grid against the inventory.
///
/// The grid names one inventory item per occupied cell. On a match with
/// enough materials, the cells are consumed and the result added;
/// otherwise the inventory is untouched and `None` returned.
pub fn craft(
    inventory: &mut Inventory,
    grid: CraftingGrid,
    near_table: bool,
) -> Option<(BlockId, u32)> {
    let (pattern, result, count): (&[BlockId], BlockId, u32) = match grid {
        CraftingGrid::Hand(cells) => {
            let recipe = find_recipe_2x2(&cells)?;
            (&recipe.pattern, recipe.result, recipe.count)
        }
        CraftingGrid::Table(cells) => {
            if !near_table {
                return None;
            }
            let recipe = find_recipe_3x3(&cells)?;
            (&recipe.pattern, recipe.result, recipe.count)
        }
    };

    for &cell in pattern {
        if cell == BlockId::AIR {
            continue;
        }
        let needed = pattern.iter().filter(|&&c| c == cell).count() as u32;
        if !inventory.has(cell, needed) {
            return None;
        }
    }
    for &cell in pattern {
        if cell != BlockId::AIR {
            inventory.remove(cell, 1);
        }
    }
    inventory.add(result, count);
    log::debug!("crafted {}x {:?}", count, result);
    Some((result, count))
}

/// Grid contents handed to `craft`. 2x2 works bare-handed; 3x3 needs a
/// crafting table nearby.
#[derive(Debug, Clone, Copy)]
pub enum CraftingGrid {
    Hand([BlockId; 4]),
    Table([BlockId; 9]),
}
