//! Timber sandbox host
//!
//! A minimal stand-in for a game server: it enables the plugin from a config
//! file, keeps an in-memory world and inventory, and drives break events and
//! felling cycles from a single task.

pub mod plugin;
pub mod scene;
pub mod scheduler;

pub use plugin::TimberPlugin;
pub use scene::{Planted, TreeSpec};
pub use scheduler::{HostEvent, RunStats, Scheduler};
