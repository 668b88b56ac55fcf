use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a block or item kind
///
/// Blocks and inventory items share one id space; whether an id occupies
/// world space is a catalog property (`solid`), not a property of the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct BlockId(pub u16);

impl Default for BlockId {
    fn default() -> Self {
        BlockId::AIR
    }
}

impl BlockId {
    pub const AIR: BlockId = BlockId(0);

    // Basic blocks (1-6)
    pub const DIRT: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const STONE: BlockId = BlockId(3);
    pub const WOOD: BlockId = BlockId(4);
    pub const LEAVES: BlockId = BlockId(5);
    pub const SAND: BlockId = BlockId(6);

    // Craftable blocks (7-22)
    pub const PLANKS: BlockId = BlockId(7);
    pub const STICK: BlockId = BlockId(8);
    pub const CRAFTING_TABLE: BlockId = BlockId(9);
    pub const WOODEN_PICKAXE: BlockId = BlockId(10);
    pub const STONE_PICKAXE: BlockId = BlockId(11);
    pub const IRON_PICKAXE: BlockId = BlockId(12);
    pub const DIAMOND_PICKAXE: BlockId = BlockId(13);
    pub const WOODEN_AXE: BlockId = BlockId(14);
    pub const STONE_AXE: BlockId = BlockId(15);
    pub const CHEST: BlockId = BlockId(16);
    pub const FURNACE: BlockId = BlockId(17);
    pub const GLASS: BlockId = BlockId(18);
    pub const BRICK: BlockId = BlockId(19);
    pub const IRON_BLOCK: BlockId = BlockId(20);
    pub const GOLD_BLOCK: BlockId = BlockId(21);
    pub const DIAMOND_BLOCK: BlockId = BlockId(22);

    // Novelty blocks (23-32)
    pub const RAINBOW_BLOCK: BlockId = BlockId(23);
    pub const SMILE_BLOCK: BlockId = BlockId(24);
    pub const CAKE: BlockId = BlockId(25);
    pub const FLOWER_RED: BlockId = BlockId(26);
    pub const FLOWER_YELLOW: BlockId = BlockId(27);
    pub const MUSHROOM_RED: BlockId = BlockId(28);
    pub const MUSHROOM_BROWN: BlockId = BlockId(29);
    pub const TORCH: BlockId = BlockId(30);
    pub const LADDER: BlockId = BlockId(31);
    pub const DOOR: BlockId = BlockId(32);

    // Ores (33-36)
    pub const COAL_ORE: BlockId = BlockId(33);
    pub const IRON_ORE: BlockId = BlockId(34);
    pub const GOLD_ORE: BlockId = BlockId(35);
    pub const DIAMOND_ORE: BlockId = BlockId(36);

    // Swords (37-41)
    pub const WOODEN_SWORD: BlockId = BlockId(37);
    pub const STONE_SWORD: BlockId = BlockId(38);
    pub const IRON_SWORD: BlockId = BlockId(39);
    pub const GOLD_SWORD: BlockId = BlockId(40);
    pub const DIAMOND_SWORD: BlockId = BlockId(41);

    // Armor (42-49)
    pub const LEATHER_HELMET: BlockId = BlockId(42);
    pub const LEATHER_CHESTPLATE: BlockId = BlockId(43);
    pub const LEATHER_LEGGINGS: BlockId = BlockId(44);
    pub const LEATHER_BOOTS: BlockId = BlockId(45);
    pub const IRON_HELMET: BlockId = BlockId(46);
    pub const IRON_CHESTPLATE: BlockId = BlockId(47);
    pub const IRON_LEGGINGS: BlockId = BlockId(48);
    pub const IRON_BOOTS: BlockId = BlockId(49);

    // Raw materials and consumables (50-60)
    pub const COAL: BlockId = BlockId(50);
    pub const IRON_INGOT: BlockId = BlockId(51);
    pub const GOLD_INGOT: BlockId = BlockId(52);
    pub const DIAMOND: BlockId = BlockId(53);
    pub const ARROW: BlockId = BlockId(54);
    pub const BOW: BlockId = BlockId(55);
    pub const BREAD: BlockId = BlockId(56);
    pub const APPLE: BlockId = BlockId(57);
    pub const GOLDEN_APPLE: BlockId = BlockId(58);
    pub const BUCKET: BlockId = BlockId(59);
    pub const WATER_BUCKET: BlockId = BlockId(60);

    // Food and drink ingredients (61-70)
    pub const SUGAR_CANE: BlockId = BlockId(61);
    pub const SUGAR: BlockId = BlockId(62);
    pub const COCOA_BEANS: BlockId = BlockId(63);
    pub const ICE: BlockId = BlockId(64);
    pub const COLA: BlockId = BlockId(65);
    pub const COFFEE_BEANS: BlockId = BlockId(66);
    pub const COFFEE: BlockId = BlockId(67);
    pub const LEMON: BlockId = BlockId(68);
    pub const LEMONADE: BlockId = BlockId(69);
    pub const WHEAT: BlockId = BlockId(70);

    /// Create a BlockId from a raw u16 value
    pub const fn new(id: u16) -> Self {
        BlockId(id)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match crate::world::blocks::block_info(*self) {
            Some(info) => write!(f, "{}", info.name),
            None => write!(f, "Block({})", self.0),
        }
    }
}
