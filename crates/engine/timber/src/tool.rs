//! Tool state and the handle shared across one felling chain

use crate::Material;
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// Host identifier of an actor (player)
pub type ActorId = u64;

/// Host identifier of an item stack
pub type ItemId = u64;

/// Wear state of one tool instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    /// Item stack this state belongs to
    pub item: ItemId,

    /// Material of the tool (e.g. `DIAMOND_AXE`)
    pub material: Material,

    /// Uses consumed so far
    pub wear: u32,

    /// Wear at which the tool is exhausted
    pub max_durability: u32,

    /// Unbreaking-style enchantment level (0 = none)
    pub wear_reduction: u32,
}

impl ToolState {
    /// Create an unworn, unenchanted tool
    pub fn new(item: ItemId, material: Material, max_durability: u32) -> Self {
        ToolState {
            item,
            material,
            wear: 0,
            max_durability,
            wear_reduction: 0,
        }
    }

    /// Builder-style wear
    pub fn with_wear(mut self, wear: u32) -> Self {
        self.wear = wear;
        self
    }

    /// Builder-style wear reduction level
    pub fn with_wear_reduction(mut self, level: u32) -> Self {
        self.wear_reduction = level;
        self
    }

    /// Check if the tool has no uses left
    pub fn is_exhausted(&self) -> bool {
        self.wear >= self.max_durability
    }

    /// Uses left before exhaustion
    pub fn remaining(&self) -> u32 {
        self.max_durability.saturating_sub(self.wear)
    }
}

/// Shared reference to the tool a chain was started with
///
/// Every pending removal of a chain holds a clone of the same handle, so wear
/// accumulates across the whole chain. Single-threaded by construction.
#[derive(Debug, Clone)]
pub struct ToolHandle(Rc<RefCell<ToolState>>);

impl ToolHandle {
    /// Capture a tool state
    pub fn new(state: ToolState) -> Self {
        ToolHandle(Rc::new(RefCell::new(state)))
    }

    /// Borrow the current state
    pub fn borrow(&self) -> Ref<'_, ToolState> {
        self.0.borrow()
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> ToolState {
        self.0.borrow().clone()
    }

    /// Mutate the state in place
    pub(crate) fn update<T>(&self, f: impl FnOnce(&mut ToolState) -> T) -> T {
        f(&mut self.0.borrow_mut())
    }

    /// Number of clones of this handle alive
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Check if two handles refer to the same tool capture
    pub fn ptr_eq(&self, other: &ToolHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Payload of a pending removal: who is felling, with what
#[derive(Debug, Clone)]
pub struct Wielder {
    /// Actor whose inventory holds the tool
    pub actor: ActorId,

    /// The tool captured when the chain started
    pub tool: ToolHandle,
}
