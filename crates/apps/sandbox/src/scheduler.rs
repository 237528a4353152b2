//! Single-task host loop
//!
//! Break events arrive over an mpsc channel and felling cycles fire on a
//! tokio interval. Both are handled by one `select!` loop on one task, so the
//! engine never sees a break event in the middle of a cycle.

use crate::plugin::TimberPlugin;
use glam::IVec3;
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use timber::{ActorId, BreakEvent, Inventory, Posture, TickReport, TriggerOutcome, World};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Events delivered by the host world
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// An actor broke the block at `position`
    BlockBreak {
        /// Actor who broke the block
        actor: ActorId,
        /// Posture of the actor at the time
        posture: Posture,
        /// Position of the broken block
        position: IVec3,
    },
}

/// Counters accumulated over one scheduler run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Host events received
    pub events: usize,
    /// Events that started a felling chain
    pub triggers_queued: usize,
    /// Events that did nothing
    pub triggers_ignored: usize,
    /// Felling cycles run
    pub ticks: usize,
    /// Removals taken off the queue
    pub processed: usize,
    /// Blocks broken
    pub broken: usize,
    /// Removals stopped by an exhausted tool
    pub halted: usize,
}

impl RunStats {
    fn record(&mut self, report: &TickReport) {
        self.ticks += 1;
        self.processed += report.processed;
        self.broken += report.expanded;
        self.halted += report.halted;
    }
}

/// Owns the plugin and the host state it mutates
pub struct Scheduler<W, I, R> {
    plugin: TimberPlugin<R>,
    world: W,
    inventory: I,
    tick: Duration,
}

impl<W, I, R> Scheduler<W, I, R>
where
    W: World,
    I: Inventory,
    R: Rng,
{
    /// Create a scheduler ticking at the plugin's configured interval
    pub fn new(plugin: TimberPlugin<R>, world: W, inventory: I) -> Self {
        let tick = plugin.tick_interval();
        Scheduler {
            plugin,
            world,
            inventory,
            tick,
        }
    }

    /// Override the tick interval (at least 1 ms)
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }

    pub fn plugin(&self) -> &TimberPlugin<R> {
        &self.plugin
    }

    pub fn plugin_mut(&mut self) -> &mut TimberPlugin<R> {
        &mut self.plugin
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    /// Take the world and inventory back
    pub fn into_parts(self) -> (TimberPlugin<R>, W, I) {
        (self.plugin, self.world, self.inventory)
    }

    /// Turn a host event into a break event and hand it to the plugin
    ///
    /// The block is read before it is gone, and the tool is whatever the actor
    /// holds in the main hand. An empty hand never triggers anything.
    pub fn deliver(&mut self, event: HostEvent) -> Option<TriggerOutcome> {
        let HostEvent::BlockBreak {
            actor,
            posture,
            position,
        } = event;

        let Some(tool) = self.inventory.main_hand_tool(actor) else {
            tracing::trace!(actor, position = ?position, "Break with empty hand");
            return None;
        };
        let material = self.world.material_at(position);

        Some(self.plugin.on_block_break(BreakEvent {
            actor,
            posture,
            tool,
            position,
            material,
        }))
    }

    /// Serve events and ticks until the channel is closed and the queue drained
    pub async fn run_until_idle(&mut self, mut events: mpsc::Receiver<HostEvent>) -> RunStats {
        let mut interval = tokio::time::interval(self.tick);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut stats = RunStats::default();
        let mut open = true;

        while open || self.plugin.engine().pending() > 0 {
            tokio::select! {
                biased;

                event = events.recv(), if open => match event {
                    Some(event) => {
                        stats.events += 1;
                        match self.deliver(event) {
                            Some(TriggerOutcome::Queued) => stats.triggers_queued += 1,
                            Some(TriggerOutcome::Ignored(_)) | None => stats.triggers_ignored += 1,
                        }
                    }
                    None => {
                        tracing::debug!("Event channel closed");
                        open = false;
                    }
                },
                _ = interval.tick() => {
                    let report = self.plugin.on_tick(&mut self.world, &mut self.inventory);
                    stats.record(&report);
                }
            }
        }

        tracing::debug!(
            ticks = stats.ticks,
            broken = stats.broken,
            halted = stats.halted,
            "Scheduler idle"
        );
        stats
    }
}
