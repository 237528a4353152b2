//! Host collaborators the engine reads from and writes to

use crate::{ActorId, ItemId, Material, ToolState};
use glam::IVec3;

/// Block access provided by the host
///
/// This trait allows the engine to query and mutate the world without
/// depending on a specific voxel implementation.
pub trait World {
    /// Get the material at a world position (air if empty)
    fn material_at(&self, position: IVec3) -> Material;

    /// Remove a block as if mined with `tool`, dropping its items
    fn break_naturally(&mut self, position: IVec3, tool: &ToolState);
}

/// Inventory access provided by the host
pub trait Inventory {
    /// Tool currently held in the actor's main hand
    fn main_hand_tool(&self, actor: ActorId) -> Option<ToolState>;

    /// Take an item away from an actor
    fn remove_item(&mut self, actor: ActorId, item: ItemId);

    /// Store a new wear value on an item
    fn persist_tool_state(&mut self, item: ItemId, wear: u32);
}
