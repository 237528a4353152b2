//! Felling triggers and candidate validation

use crate::{ActorId, Classification, Filter, Material, PendingQueue, ToolState};
use glam::IVec3;

/// Body posture of the actor who broke a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Posture {
    /// Normal stance; felling is not triggered
    #[default]
    Standing,
    /// Sneaking; breaking a log fells the tree
    Crouching,
}

/// A block break reported by the host
///
/// Delivered while the block is still in place, so `material` is what was
/// broken.
#[derive(Debug, Clone)]
pub struct BreakEvent {
    /// Actor who broke the block
    pub actor: ActorId,
    /// Posture of the actor at the time
    pub posture: Posture,
    /// Tool in the actor's main hand
    pub tool: ToolState,
    /// Position of the broken block
    pub position: IVec3,
    /// Material of the broken block
    pub material: Material,
}

/// Why a candidate was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The actor was not crouching
    NotCrouching,
    /// The position is already queued
    AlreadyQueued,
    /// The held item is not a felling tool
    NotATool,
    /// The block does not match the probe's filter
    FilterMismatch(Filter),
}

/// What a break event did to the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// The broken block was queued as the root of a new chain
    Queued,
    /// Nothing happened
    Ignored(IgnoreReason),
}

/// Decides whether a candidate position may be queued
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    classes: &'a Classification,
}

impl<'a> Validator<'a> {
    /// Create a validator over a classification
    pub fn new(classes: &'a Classification) -> Self {
        Validator { classes }
    }

    /// Check a candidate, reporting the first failed condition
    pub fn check<T>(
        &self,
        queue: &PendingQueue<T>,
        position: IVec3,
        tool: &ToolState,
        material: &Material,
        filter: Filter,
    ) -> Result<(), IgnoreReason> {
        if queue.contains(position) {
            return Err(IgnoreReason::AlreadyQueued);
        }
        if !self.classes.is_tool(&tool.material) {
            return Err(IgnoreReason::NotATool);
        }
        let matches = match filter {
            Filter::Log => self.classes.is_log(material),
            Filter::Leaves => self.classes.is_leaf(material),
        };
        if matches {
            Ok(())
        } else {
            Err(IgnoreReason::FilterMismatch(filter))
        }
    }

    /// Check if a candidate is valid for a filter
    pub fn is_valid<T>(
        &self,
        queue: &PendingQueue<T>,
        position: IVec3,
        tool: &ToolState,
        material: &Material,
        filter: Filter,
    ) -> bool {
        self.check(queue, position, tool, material, filter).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn classes() -> Classification {
        Classification::resolve(
            &Catalog::vanilla(),
            &["stone_axe"],
            &["spruce_log"],
            &["spruce_leaves"],
        )
    }

    fn axe() -> ToolState {
        ToolState::new(1, Material::new("STONE_AXE"), 131)
    }

    #[test]
    fn test_valid_log_candidate() {
        let classes = classes();
        let validator = Validator::new(&classes);
        let queue: PendingQueue<()> = PendingQueue::new();
        let log = Material::new("SPRUCE_LOG");
        assert!(validator.is_valid(&queue, IVec3::ZERO, &axe(), &log, Filter::Log));
        assert_eq!(
            validator.check(&queue, IVec3::ZERO, &axe(), &log, Filter::Leaves),
            Err(IgnoreReason::FilterMismatch(Filter::Leaves))
        );
    }

    #[test]
    fn test_valid_leaf_candidate() {
        let classes = classes();
        let validator = Validator::new(&classes);
        let queue: PendingQueue<()> = PendingQueue::new();
        let leaves = Material::new("SPRUCE_LEAVES");
        assert!(validator.is_valid(&queue, IVec3::ONE, &axe(), &leaves, Filter::Leaves));
        assert!(!validator.is_valid(&queue, IVec3::ONE, &axe(), &leaves, Filter::Log));
    }

    #[test]
    fn test_queued_position_rejected_first() {
        let classes = classes();
        let validator = Validator::new(&classes);
        let mut queue = PendingQueue::new();
        queue.enqueue(IVec3::ZERO, ());
        let shovel = ToolState::new(2, Material::new("IRON_SHOVEL"), 250);
        assert_eq!(
            validator.check(&queue, IVec3::ZERO, &shovel, &Material::air(), Filter::Log),
            Err(IgnoreReason::AlreadyQueued)
        );
    }

    #[test]
    fn test_non_tool_rejected() {
        let classes = classes();
        let validator = Validator::new(&classes);
        let queue: PendingQueue<()> = PendingQueue::new();
        let diamond = ToolState::new(3, Material::new("DIAMOND_AXE"), 1561);
        assert_eq!(
            validator.check(
                &queue,
                IVec3::ZERO,
                &diamond,
                &Material::new("SPRUCE_LOG"),
                Filter::Log
            ),
            Err(IgnoreReason::NotATool)
        );
    }
}
