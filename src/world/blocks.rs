//! Built-in block and item catalog
//!
//! One entry per id, immutable after process start. `BlockRegistry` wraps
//! this table for lookups; everything here is plain data.

use crate::world::core::BlockId;

/// Catalog entry for one block/item kind
#[derive(Debug, Clone, Copy)]
pub struct BlockInfo {
    pub name: &'static str,
    /// Hotbar/menu glyph
    pub icon: &'static str,
    /// Base display color, 0xRRGGBB
    pub color: u32,
    /// Solid blocks occupy space, stop movement, and get meshed
    pub solid: bool,
    /// Item granted when a placed block of this kind is destroyed
    pub drops: BlockId,
}

/// Per-face coloring for grass (top / bottom / side)
pub const GRASS_FACE_COLORS: [u32; 3] = [0x5FAD56, 0x8B7355, 0x8B9D6C];

const fn entry(
    name: &'static str,
    icon: &'static str,
    color: u32,
    solid: bool,
    drops: BlockId,
) -> BlockInfo {
    BlockInfo {
        name,
        icon,
        color,
        solid,
        drops,
    }
}

/// Static catalog, sorted by id
///
/// Ids without an entry read as air: non-solid, invisible, no drop.
pub static BLOCK_TABLE: &[(BlockId, BlockInfo)] = &[
    (BlockId::AIR, entry("Air", "", 0x000000, false, BlockId::AIR)),
    (BlockId::DIRT, entry("Dirt", "🟤", 0x654321, true, BlockId::DIRT)),
    (BlockId::GRASS, entry("Grass", "🟢", 0x5FAD56, true, BlockId::DIRT)),
    (BlockId::STONE, entry("Stone", "⚪", 0x999999, true, BlockId::STONE)),
    (BlockId::WOOD, entry("Wood", "🟫", 0x8B4513, true, BlockId::WOOD)),
    (BlockId::LEAVES, entry("Leaves", "🍃", 0x228B22, true, BlockId::AIR)),
    (BlockId::SAND, entry("Sand", "🟡", 0xF4A460, true, BlockId::SAND)),
    (BlockId::PLANKS, entry("Planks", "🟫", 0xDEB887, true, BlockId::PLANKS)),
    (BlockId::STICK, entry("Stick", "🪵", 0x8B7355, false, BlockId::STICK)),
    (
        BlockId::CRAFTING_TABLE,
        entry("Crafting Table", "🔨", 0x8B4513, true, BlockId::CRAFTING_TABLE),
    ),
    (
        BlockId::WOODEN_PICKAXE,
        entry("Wooden Pickaxe", "⛏️", 0x8B4513, false, BlockId::WOODEN_PICKAXE),
    ),
    (
        BlockId::STONE_PICKAXE,
        entry("Stone Pickaxe", "⛏️", 0x808080, false, BlockId::STONE_PICKAXE),
    ),
    (
        BlockId::IRON_PICKAXE,
        entry("Iron Pickaxe", "⛏️", 0xC0C0C0, false, BlockId::IRON_PICKAXE),
    ),
    (
        BlockId::DIAMOND_PICKAXE,
        entry("Diamond Pickaxe", "⛏️", 0x00FFFF, false, BlockId::DIAMOND_PICKAXE),
    ),
    (
        BlockId::WOODEN_AXE,
        entry("Wooden Axe", "🪓", 0x8B4513, false, BlockId::WOODEN_AXE),
    ),
    (
        BlockId::STONE_AXE,
        entry("Stone Axe", "🪓", 0x808080, false, BlockId::STONE_AXE),
    ),
    (BlockId::CHEST, entry("Chest", "📦", 0x8B4513, true, BlockId::CHEST)),
    (BlockId::FURNACE, entry("Furnace", "🔥", 0x696969, true, BlockId::FURNACE)),
    (BlockId::GLASS, entry("Glass", "⬜", 0xE0FFFF, true, BlockId::GLASS)),
    (BlockId::BRICK, entry("Brick", "🧱", 0xB22222, true, BlockId::BRICK)),
    (
        BlockId::IRON_BLOCK,
        entry("Iron Block", "⚪", 0xC0C0C0, true, BlockId::IRON_BLOCK),
    ),
    (
        BlockId::GOLD_BLOCK,
        entry("Gold Block", "🟡", 0xFFD700, true, BlockId::GOLD_BLOCK),
    ),
    (
        BlockId::DIAMOND_BLOCK,
        entry("Diamond Block", "💎", 0x00FFFF, true, BlockId::DIAMOND_BLOCK),
    ),
    (
        BlockId::RAINBOW_BLOCK,
        entry("Rainbow Block", "🌈", 0xFF00FF, true, BlockId::RAINBOW_BLOCK),
    ),
    (
        BlockId::SMILE_BLOCK,
        entry("Smile Block", "😊", 0xFFFF00, true, BlockId::SMILE_BLOCK),
    ),
    (BlockId::CAKE, entry("Cake", "🍰", 0xFFB6C1, true, BlockId::CAKE)),
    (
        BlockId::FLOWER_RED,
        entry("Red Flower", "🌹", 0xFF0000, false, BlockId::FLOWER_RED),
    ),
    (
        BlockId::FLOWER_YELLOW,
        entry("Yellow Flower", "🌻", 0xFFFF00, false, BlockId::FLOWER_YELLOW),
    ),
    (
        BlockId::MUSHROOM_RED,
        entry("Red Mushroom", "🍄", 0xFF0000, false, BlockId::MUSHROOM_RED),
    ),
    (
        BlockId::MUSHROOM_BROWN,
        entry("Brown Mushroom", "🍄", 0x8B4513, false, BlockId::MUSHROOM_BROWN),
    ),
    (BlockId::TORCH, entry("Torch", "🔦", 0xFFA500, false, BlockId::TORCH)),
    (BlockId::LADDER, entry("Ladder", "🪜", 0x8B4513, false, BlockId::LADDER)),
    (BlockId::DOOR, entry("Door", "🚪", 0x8B4513, true, BlockId::DOOR)),
    (BlockId::COAL_ORE, entry("Coal Ore", "⚫", 0x2F4F4F, true, BlockId::COAL)),
    (BlockId::IRON_ORE, entry("Iron Ore", "🟤", 0xD2B48C, true, BlockId::IRON_ORE)),
    (BlockId::GOLD_ORE, entry("Gold Ore", "🟡", 0xFFD700, true, BlockId::GOLD_ORE)),
    (
        BlockId::DIAMOND_ORE,
        entry("Diamond Ore", "💎", 0x00CED1, true, BlockId::DIAMOND),
    ),
    (
        BlockId::WOODEN_SWORD,
        entry("Wooden Sword", "⚔️", 0x8B4513, false, BlockId::WOODEN_SWORD),
    ),
    (
        BlockId::STONE_SWORD,
        entry("Stone Sword", "⚔️", 0x808080, false, BlockId::STONE_SWORD),
    ),
    (
        BlockId::IRON_SWORD,
        entry("Iron Sword", "⚔️", 0xC0C0C0, false, BlockId::IRON_SWORD),
    ),
    (
        BlockId::GOLD_SWORD,
        entry("Gold Sword", "⚔️", 0xFFD700, false, BlockId::GOLD_SWORD),
    ),
    (
        BlockId::DIAMOND_SWORD,
        entry("Diamond Sword", "⚔️", 0x00FFFF, false, BlockId::DIAMOND_SWORD),
    ),
    (
        BlockId::LEATHER_HELMET,
        entry("Leather Helmet", "🎩", 0x8B4513, false, BlockId::LEATHER_HELMET),
    ),
    (
        BlockId::LEATHER_CHESTPLATE,
        entry("Leather Chestplate", "👕", 0x8B4513, false, BlockId::LEATHER_CHESTPLATE),
    ),
    (
        BlockId::LEATHER_LEGGINGS,
        entry("Leather Leggings", "👖", 0x8B4513, false, BlockId::LEATHER_LEGGINGS),
    ),
    (
        BlockId::LEATHER_BOOTS,
        entry("Leather Boots", "👢", 0x8B4513, false, BlockId::LEATHER_BOOTS),
    ),
    (
        BlockId::IRON_HELMET,
        entry("Iron Helmet", "🎩", 0xC0C0C0, false, BlockId::IRON_HELMET),
    ),
    (
        BlockId::IRON_CHESTPLATE,
        entry("Iron Chestplate", "👕", 0xC0C0C0, false, BlockId::IRON_CHESTPLATE),
    ),
    (
        BlockId::IRON_LEGGINGS,
        entry("Iron Leggings", "👖", 0xC0C0C0, false, BlockId::IRON_LEGGINGS),
    ),
    (
        BlockId::IRON_BOOTS,
        entry("Iron Boots", "👢", 0xC0C0C0, false, BlockId::IRON_BOOTS),
    ),
    (BlockId::COAL, entry("Coal", "⚫", 0x2F4F4F, false, BlockId::COAL)),
    (
        BlockId::IRON_INGOT,
        entry("Iron Ingot", "◼️", 0xC0C0C0, false, BlockId::IRON_INGOT),
    ),
    (
        BlockId::GOLD_INGOT,
        entry("Gold Ingot", "◼️", 0xFFD700, false, BlockId::GOLD_INGOT),
    ),
    (BlockId::DIAMOND, entry("Diamond", "💎", 0x00FFFF, false, BlockId::DIAMOND)),
    (BlockId::ARROW, entry("Arrow", "➡️", 0x8B4513, false, BlockId::ARROW)),
    (BlockId::BOW, entry("Bow", "🏹", 0x8B4513, false, BlockId::BOW)),
    (BlockId::BREAD, entry("Bread", "🍞", 0xFFE4B5, false, BlockId::BREAD)),
    (BlockId::APPLE, entry("Apple", "🍎", 0xFF0000, false, BlockId::APPLE)),
    (
        BlockId::GOLDEN_APPLE,
        entry("Golden Apple", "🍎", 0xFFD700, false, BlockId::GOLDEN_APPLE),
    ),
    (BlockId::BUCKET, entry("Bucket", "🪣", 0x808080, false, BlockId::BUCKET)),
    (
        BlockId::WATER_BUCKET,
        entry("Water Bucket", "🪣", 0x1E90FF, false, BlockId::WATER_BUCKET),
    ),
    (
        BlockId::SUGAR_CANE,
        entry("Sugar Cane", "🌾", 0x00FF00, true, BlockId::SUGAR_CANE),
    ),
    (BlockId::SUGAR, entry("Sugar", "🧂", 0xFFFFFF, true, BlockId::SUGAR)),
    (
        BlockId::COCOA_BEANS,
        entry("Cocoa Beans", "🫘", 0xFF6600, true, BlockId::COCOA_BEANS),
    ),
    (BlockId::ICE, entry("Ice", "🧊", 0x00FFFF, true, BlockId::ICE)),
    (BlockId::COLA, entry("Cola", "🥤", 0xA0522D, true, BlockId::COLA)),
    (
        BlockId::COFFEE_BEANS,
        entry("Coffee Beans", "☕", 0xFFAA00, true, BlockId::COFFEE_BEANS),
    ),
    (BlockId::COFFEE, entry("Coffee", "☕", 0x6F4E37, true, BlockId::COFFEE)),
    (BlockId::LEMON, entry("Lemon", "🍋", 0xFFFF00, true, BlockId::LEMON)),
    (BlockId::LEMONADE, entry("Lemonade", "🍹", 0xFFFACD, true, BlockId::LEMONADE)),
    (BlockId::WHEAT, entry("Wheat", "🌾", 0xFFFF66, true, BlockId::WHEAT)),
];

/// Static catalog lookup; `None` for unregistered ids
pub fn block_info(id: BlockId) -> Option<&'static BlockInfo> {
    BLOCK_TABLE
        .binary_search_by_key(&id.0, |(block_id, _)| block_id.0)
        .ok()
        .map(|index| &BLOCK_TABLE[index].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_dense() {
        for (i, (id, _)) in BLOCK_TABLE.iter().enumerate() {
            assert_eq!(id.0 as usize, i, "catalog must be sorted with no gaps");
        }
    }

    #[test]
    fn drops_differ_from_block_where_configured() {
        assert_eq!(block_info(BlockId::GRASS).unwrap().drops, BlockId::DIRT);
        assert_eq!(block_info(BlockId::LEAVES).unwrap().drops, BlockId::AIR);
        assert_eq!(block_info(BlockId::COAL_ORE).unwrap().drops, BlockId::COAL);
        assert_eq!(
            block_info(BlockId::DIAMOND_ORE).unwrap().drops,
            BlockId::DIAMOND
        );
        assert_eq!(block_info(BlockId::STONE).unwrap().drops, BlockId::STONE);
    }

    #[test]
    fn unknown_id_has_no_entry() {
        assert!(block_info(BlockId::new(999)).is_none());
    }
}
