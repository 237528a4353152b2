//! Timber - deferred tree felling for voxel worlds
//!
//! When a crouching actor fells a log with an axe, the engine removes the
//! rest of the connected structure over several scheduler ticks, wearing the
//! axe down as it goes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Timber (engine)                       │
//! ├─────────────────────────────────────────────────────────┤
//! │  on_block_break                                          │
//! │  ├── Posture gate (crouching only)                      │
//! │  ├── Candidate validation (tool, filter, dedup)         │
//! │  └── PendingQueue::enqueue (root)                       │
//! ├─────────────────────────────────────────────────────────┤
//! │  tick                                                    │
//! │  ├── PendingQueue::dequeue_up_to(max_breaks_per_cycle)  │
//! │  ├── Durability roll (exhausted => halt)                │
//! │  ├── World::break_naturally                             │
//! │  └── Expansion probes => PendingQueue::enqueue          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns the world and the inventories and hands them to the engine
//! through the [`World`] and [`Inventory`] traits on every callback.
//!
//! # Example
//!
//! ```rust
//! use timber::{
//!     BreakEvent, Catalog, Classification, Material, MemoryInventory, MemoryWorld,
//!     OperatingMode, Posture, Timber, ToolState,
//! };
//! use timber::glam::IVec3;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let catalog = Catalog::vanilla();
//! let classes = Classification::resolve(
//!     &catalog,
//!     &["diamond_axe"],
//!     &["oak_log"],
//!     &["oak_leaves"],
//! );
//! let mut engine = Timber::new(classes, OperatingMode::Classic, 10, StdRng::seed_from_u64(7));
//!
//! let mut world = MemoryWorld::new();
//! for y in 0..4 {
//!     world.set(IVec3::new(0, y, 0), Material::new("OAK_LOG"));
//! }
//! let mut inventory = MemoryInventory::new();
//! let axe = ToolState::new(1, Material::new("DIAMOND_AXE"), 1561);
//! inventory.equip(1, axe.clone());
//!
//! engine.on_block_break(BreakEvent {
//!     actor: 1,
//!     posture: Posture::Crouching,
//!     tool: axe,
//!     position: IVec3::ZERO,
//!     material: Material::new("OAK_LOG"),
//! });
//! engine.run_until_idle(&mut world, &mut inventory);
//! assert!(world.is_empty());
//! ```

mod classify;
mod config;
mod durability;
mod engine;
mod error;
mod expansion;
mod material;
mod memory;
mod queue;
mod tool;
mod trigger;
mod world;

pub use classify::Classification;
pub use config::{TimberConfig, DEFAULT_CONFIG, TICK_DURATION};
pub use durability::{apply_use, WearOutcome};
pub use engine::{ItemOutcome, TickReport, Timber};
pub use error::{Error, Result};
pub use expansion::{Filter, OperatingMode, Probe, CUBE_OFFSETS};
pub use material::{Catalog, Material};
pub use memory::{BrokenBlock, MemoryInventory, MemoryWorld};
pub use queue::PendingQueue;
pub use tool::{ActorId, ItemId, ToolHandle, ToolState, Wielder};
pub use trigger::{BreakEvent, IgnoreReason, Posture, TriggerOutcome, Validator};
pub use world::{Inventory, World};

// Re-export glam for convenience
pub use glam;
