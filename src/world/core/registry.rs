//! Block registry with solidity, drop, and display lookups

use rustc_hash::FxHashMap;

use crate::world::blocks::{block_info, BlockInfo, BLOCK_TABLE};
use crate::world::core::BlockId;

/// Runtime view over the static block catalog
///
/// Ids with no catalog entry behave like air: non-solid, invisible,
/// and dropping nothing when destroyed.
pub struct BlockRegistry {
    blocks: FxHashMap<BlockId, &'static BlockInfo>,
}

impl BlockRegistry {
    pub fn new() -> Self {
        let mut blocks = FxHashMap::default();
        for (id, info) in BLOCK_TABLE {
            blocks.insert(*id, info);
        }
        Self { blocks }
    }

    pub fn info(&self, id: BlockId) -> Option<&'static BlockInfo> {
        self.blocks.get(&id).copied()
    }

    pub fn name(&self, id: BlockId) -> &'static str {
        self.info(id).map(|info| info.name).unwrap_or("Unknown")
    }

    /// Whether the block occupies space (stops movement, gets meshed)
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.info(id).map(|info| info.solid).unwrap_or(false)
    }

    /// Item granted when a placed block of this kind is destroyed
    pub fn drop_for(&self, id: BlockId) -> BlockId {
        self.info(id).map(|info| info.drops).unwrap_or(BlockId::AIR)
    }

    /// Base color as linear RGB in 0.0..=1.0
    pub fn color_rgb(&self, id: BlockId) -> [f32; 3] {
        let hex = self.info(id).map(|info| info.color).unwrap_or(0xFF00FF);
        unpack_rgb(hex)
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand 0xRRGGBB into [r, g, b] floats
pub fn unpack_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// Registry-free solidity check used by hot paths that only have an id
pub fn is_solid_block(id: BlockId) -> bool {
    block_info(id).map(|info| info.solid).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn air_is_not_solid() {
        let registry = BlockRegistry::new();
        assert!(!registry.is_solid(BlockId::AIR));
        assert!(registry.is_solid(BlockId::STONE));
    }

    #[test]
    fn unknown_ids_behave_like_air() {
        let registry = BlockRegistry::new();
        let bogus = BlockId::new(4242);
        assert!(!registry.is_solid(bogus));
        assert_eq!(registry.drop_for(bogus), BlockId::AIR);
        assert_eq!(registry.name(bogus), "Unknown");
    }

    #[test]
    fn decorations_do_not_block_movement() {
        let registry = BlockRegistry::new();
        assert!(!registry.is_solid(BlockId::FLOWER_RED));
        assert!(!registry.is_solid(BlockId::TORCH));
        assert!(registry.is_solid(BlockId::SUGAR_CANE));
    }

    #[test]
    fn unpack_rgb_matches_hex_channels() {
        assert_eq!(unpack_rgb(0xFF0000), [1.0, 0.0, 0.0]);
        assert_eq!(unpack_rgb(0x000000), [0.0, 0.0, 0.0]);
        let [r, g, b] = unpack_rgb(0x5FAD56);
        assert!((r - 0x5F as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0xAD as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0x56 as f32 / 255.0).abs() < 1e-6);
    }
}
