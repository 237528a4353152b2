//! In-memory world and inventory, for tests and sandbox hosts

use crate::{ActorId, Inventory, ItemId, Material, ToolState, World};
use glam::IVec3;
use std::collections::HashMap;

/// Record of one `break_naturally` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenBlock {
    /// Where the break happened
    pub position: IVec3,
    /// What was there (air if the block was already gone)
    pub material: Material,
    /// Item the break was attributed to
    pub tool: ItemId,
}

/// Sparse voxel world; unset positions are air
#[derive(Debug, Clone, Default)]
pub struct MemoryWorld {
    blocks: HashMap<IVec3, Material>,
    breaks: Vec<BrokenBlock>,
}

impl MemoryWorld {
    /// Create an empty world
    pub fn new() -> Self {
        MemoryWorld::default()
    }

    /// Place a block (placing air clears the position)
    pub fn set(&mut self, position: IVec3, material: Material) {
        if material.is_air() {
            self.blocks.remove(&position);
        } else {
            self.blocks.insert(position, material);
        }
    }

    /// Get the block at a position, if any
    pub fn get(&self, position: IVec3) -> Option<&Material> {
        self.blocks.get(&position)
    }

    /// Get the number of non-air blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the world holds no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Count blocks of one material
    pub fn count(&self, material: &Material) -> usize {
        self.blocks.values().filter(|m| *m == material).count()
    }

    /// Every break performed so far, in order
    pub fn breaks(&self) -> &[BrokenBlock] {
        &self.breaks
    }

    /// Tally of broken materials (air breaks excluded)
    pub fn drops(&self) -> HashMap<Material, usize> {
        let mut drops = HashMap::new();
        for broken in self.breaks.iter().filter(|b| !b.material.is_air()) {
            *drops.entry(broken.material.clone()).or_insert(0) += 1;
        }
        drops
    }
}

impl World for MemoryWorld {
    fn material_at(&self, position: IVec3) -> Material {
        self.blocks.get(&position).cloned().unwrap_or_else(Material::air)
    }

    fn break_naturally(&mut self, position: IVec3, tool: &ToolState) {
        let material = self.blocks.remove(&position).unwrap_or_else(Material::air);
        self.breaks.push(BrokenBlock {
            position,
            material,
            tool: tool.item,
        });
    }
}

/// Main-hand slots of every actor
#[derive(Debug, Clone, Default)]
pub struct MemoryInventory {
    hands: HashMap<ActorId, ToolState>,
    removed: Vec<(ActorId, ItemId)>,
}

impl MemoryInventory {
    /// Create an inventory with empty hands
    pub fn new() -> Self {
        MemoryInventory::default()
    }

    /// Put a tool in an actor's main hand
    pub fn equip(&mut self, actor: ActorId, tool: ToolState) {
        self.hands.insert(actor, tool);
    }

    /// Tool currently held by an actor
    pub fn held(&self, actor: ActorId) -> Option<&ToolState> {
        self.hands.get(&actor)
    }

    /// Every removal performed so far, in order
    pub fn removed(&self) -> &[(ActorId, ItemId)] {
        &self.removed
    }
}

impl Inventory for MemoryInventory {
    fn main_hand_tool(&self, actor: ActorId) -> Option<ToolState> {
        self.hands.get(&actor).cloned()
    }

    fn remove_item(&mut self, actor: ActorId, item: ItemId) {
        if self.hands.get(&actor).is_some_and(|tool| tool.item == item) {
            self.hands.remove(&actor);
        }
        self.removed.push((actor, item));
    }

    fn persist_tool_state(&mut self, item: ItemId, wear: u32) {
        for tool in self.hands.values_mut().filter(|tool| tool.item == item) {
            tool.wear = wear;
        }
    }
}
