//! Tool wear applied once per processed block

use crate::ToolState;
use rand::Rng;

/// Result of one use of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WearOutcome {
    /// The tool was already spent; it must be taken away and the block left alone
    Exhausted,

    /// One point of wear was applied; carries the new wear value
    Worn {
        /// Wear after this use
        wear: u32,
    },

    /// The wear reduction roll spared the tool this time
    Spared,
}

impl WearOutcome {
    /// Check if processing may continue with the block removal
    pub fn proceeds(&self) -> bool {
        !matches!(self, WearOutcome::Exhausted)
    }
}

/// Apply one use to a tool
///
/// An exhausted tool (`wear >= max_durability`) is left untouched. Otherwise
/// wear goes up by one with probability `1 / (wear_reduction + 1)`.
pub fn apply_use<R: Rng + ?Sized>(tool: &mut ToolState, rng: &mut R) -> WearOutcome {
    if tool.is_exhausted() {
        return WearOutcome::Exhausted;
    }

    let level = tool.wear_reduction;
    if level == 0 || rng.random_ratio(1, level.saturating_add(1)) {
        tool.wear += 1;
        WearOutcome::Worn { wear: tool.wear }
    } else {
        WearOutcome::Spared
    }
}
