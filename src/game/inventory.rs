//! Player hotbar inventory

use serde::{Deserialize, Serialize};

use crate::world::core::BlockId;

pub const SLOT_COUNT: usize = 9;

/// One hotbar slot. Empty slots hold AIR with a zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub item: BlockId,
    pub count: u32,
}

impl Slot {
    pub const EMPTY: Slot = Slot {
        item: BlockId::AIR,
        count: 0,
    };

    pub fn is_empty(&self) -> bool {
        self.count == 0 || self.item == BlockId::AIR
    }
}

pub struct Inventory {
    slots: [Slot; SLOT_COUNT],
    selected: usize,
}

impl Inventory {
    /// Fresh inventory with the starter kit
    pub fn new() -> Self {
        let mut inventory = Self::empty();
        inventory.add(BlockId::GRASS, 10);
        inventory.add(BlockId::DIRT, 10);
        inventory.add(BlockId::WOOD, 5);
        inventory
    }

    pub fn empty() -> Self {
        Self {
            slots: [Slot::EMPTY; SLOT_COUNT],
            selected: 0,
        }
    }

    pub fn slots(&self) -> &[Slot; SLOT_COUNT] {
        &self.slots
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < SLOT_COUNT {
            self.selected = index;
        }
    }

    /// Item in the selected slot, `None` when it is empty
    pub fn selected_item(&self) -> Option<BlockId> {
        let slot = self.slots[self.selected];
        (!slot.is_empty()).then_some(slot.item)
    }

    /// Add items, stacking onto an existing slot first, then into the
    /// first empty one. Returns false (leaving nothing applied) when no
    /// slot can take them.
    pub fn add(&mut self, item: BlockId, count: u32) -> bool {
        if item == BlockId::AIR || count == 0 {
            return false;
        }
        if let Some(slot) = self
            .slots
            .iter_mut()
            .find(|slot| !slot.is_empty() && slot.item == item)
        {
            slot.count += count;
            return true;
        }
        if let Some(slot) = self.slots.iter_mut().find(|slot| slot.is_empty()) {
            *slot = Slot { item, count };
            return true;
        }
        false
    }

    /// Remove items across slots; false (and no change) if short
    pub fn remove(&mut self, item: BlockId, count: u32) -> bool {
        if !self.has(item, count) {
            return false;
        }
        let mut remaining = count;
        for slot in self.slots.iter_mut() {
            if remaining == 0 {
                break;
            }
            if slot.is_empty() || slot.item != item {
                continue;
            }
            let taken = slot.count.min(remaining);
            slot.count -= taken;
            remaining -= taken;
            if slot.count == 0 {
                *slot = Slot::EMPTY;
            }
        }
        true
    }

    /// Take one item from the selected slot
    pub fn consume_selected(&mut self) -> Option<BlockId> {
        let slot = &mut self.slots[self.selected];
        if slot.is_empty() {
            return None;
        }
        let item = slot.item;
        slot.count -= 1;
        if slot.count == 0 {
            *slot = Slot::EMPTY;
        }
        Some(item)
    }

    pub fn has(&self, item: BlockId, count: u32) -> bool {
        self.count_of(item) >= count
    }

    pub fn count_of(&self, item: BlockId) -> u32 {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty() && slot.item == item)
            .map(|slot| slot.count)
            .sum()
    }

    /// Snapshot restore: replace contents wholesale
    pub fn restore(&mut self, slots: [Slot; SLOT_COUNT], selected: usize) {
        self.slots = slots;
        self.selected = selected.min(SLOT_COUNT - 1);
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_starter_kit() {
        let inventory = Inventory::new();
        assert_eq!(inventory.count_of(BlockId::GRASS), 10);
        assert_eq!(inventory.count_of(BlockId::DIRT), 10);
        assert_eq!(inventory.count_of(BlockId::WOOD), 5);
        assert_eq!(inventory.selected_item(), Some(BlockId::GRASS));
    }

    #[test]
    fn add_stacks_before_opening_a_new_slot() {
        let mut inventory = Inventory::empty();
        assert!(inventory.add(BlockId::STONE, 3));
        assert!(inventory.add(BlockId::STONE, 2));
        assert_eq!(inventory.count_of(BlockId::STONE), 5);
        assert_eq!(
            inventory.slots().iter().filter(|s| !s.is_empty()).count(),
            1
        );
    }

    #[test]
    fn add_fails_when_every_slot_is_taken() {
        let mut inventory = Inventory::empty();
        for id in 1..=SLOT_COUNT as u16 {
            assert!(inventory.add(BlockId::new(id), 1));
        }
        assert!(!inventory.add(BlockId::new(99), 1));
        // Stacking onto an existing item still works
        assert!(inventory.add(BlockId::new(3), 1));
    }

    #[test]
    fn remove_spans_slots_and_rejects_shortfalls() {
        let mut inventory = Inventory::empty();
        inventory.add(BlockId::STONE, 3);
        inventory.add(BlockId::DIRT, 1);
        assert!(!inventory.remove(BlockId::STONE, 5));
        assert_eq!(inventory.count_of(BlockId::STONE), 3);
        assert!(inventory.remove(BlockId::STONE, 3));
        assert_eq!(inventory.count_of(BlockId::STONE), 0);
    }

    #[test]
    fn consume_selected_empties_the_slot() {
        let mut inventory = Inventory::empty();
        inventory.add(BlockId::PLANKS, 1);
        inventory.select(0);
        assert_eq!(inventory.consume_selected(), Some(BlockId::PLANKS));
        assert_eq!(inventory.consume_selected(), None);
        assert!(inventory.selected_item().is_none());
    }

    #[test]
    fn select_ignores_out_of_range_indices() {
        let mut inventory = Inventory::new();
        inventory.select(4);
        inventory.select(42);
        assert_eq!(inventory.selected_index(), 4);
    }
}
