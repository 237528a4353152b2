//! The felling engine: trigger handling and the per-tick worker

use crate::{
    apply_use, BreakEvent, Catalog, Classification, Filter, IgnoreReason, Inventory, ItemId,
    OperatingMode, PendingQueue, Posture, TimberConfig, ToolHandle, ToolState, TriggerOutcome,
    Validator, WearOutcome, Wielder, World,
};
use glam::IVec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

/// Terminal state of one processed removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// The block was broken and its neighbors probed
    Expanded {
        /// Neighbors newly queued by this item
        queued: usize,
    },
    /// The tool was exhausted; nothing was broken and the branch stops here
    Halted,
}

/// Summary of one worker tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Items taken off the queue
    pub processed: usize,
    /// Items that broke their block
    pub expanded: usize,
    /// Items stopped by an exhausted tool
    pub halted: usize,
    /// Neighbors queued during the tick
    pub queued: usize,
    /// Queue depth after the tick
    pub remaining: usize,
}

impl TickReport {
    /// Check if the tick found nothing to do
    pub fn is_idle(&self) -> bool {
        self.processed == 0
    }
}

/// Felling engine state
///
/// Owns the queue of pending removals and the random source for wear rolls.
/// Both callbacks take `&mut self`, so a host that drives them from a single
/// task gets the required serialization for free. The engine is `!Send`:
/// tool handles are shared through `Rc`.
///
/// There is one live handle per item while any removal using that item is
/// queued, so chains started with the same tool wear down the same counter.
#[derive(Debug)]
pub struct Timber<R = StdRng> {
    classes: Classification,
    mode: OperatingMode,
    max_breaks_per_cycle: usize,
    queue: PendingQueue<Wielder>,
    tools: HashMap<ItemId, ToolHandle>,
    rng: R,
}

impl Timber<StdRng> {
    /// Build an engine from a validated configuration, seeding wear rolls from the OS
    pub fn from_config(config: &TimberConfig, catalog: &Catalog) -> Self {
        Timber::with_config(config, catalog, StdRng::from_os_rng())
    }
}

impl<R: Rng> Timber<R> {
    /// Create an engine
    ///
    /// `max_breaks_per_cycle` is clamped to at least 1.
    pub fn new(
        classes: Classification,
        mode: OperatingMode,
        max_breaks_per_cycle: usize,
        rng: R,
    ) -> Self {
        Timber {
            classes,
            mode,
            max_breaks_per_cycle: max_breaks_per_cycle.max(1),
            queue: PendingQueue::new(),
            tools: HashMap::new(),
            rng,
        }
    }

    /// Build an engine from a validated configuration and a given random source
    pub fn with_config(config: &TimberConfig, catalog: &Catalog, rng: R) -> Self {
        Timber::new(
            config.classification(catalog),
            config.mode,
            config.max_breaks_per_cycle,
            rng,
        )
    }

    /// Get the operating mode
    pub fn mode(&self) -> OperatingMode {
        self.mode
    }

    /// Get the per-tick processing cap
    pub fn max_breaks_per_cycle(&self) -> usize {
        self.max_breaks_per_cycle
    }

    /// Get the material classification
    pub fn classification(&self) -> &Classification {
        &self.classes
    }

    /// Get the pending queue
    pub fn queue(&self) -> &PendingQueue<Wielder> {
        &self.queue
    }

    /// Get the number of pending removals
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Get the number of tools with removals still queued
    pub fn active_tools(&self) -> usize {
        self.tools.len()
    }

    /// Drop all pending work, returning how many removals were dropped
    pub fn clear(&mut self) -> usize {
        self.tools.clear();
        self.queue.clear()
    }

    /// Live handle for a tool, shared with any chain already using that item
    ///
    /// The host may report wear the engine has not seen yet, so the larger
    /// of the two counts is kept.
    fn handle_for(&mut self, tool: ToolState) -> ToolHandle {
        match self.tools.get(&tool.item) {
            Some(handle) => {
                handle.update(|live| live.wear = live.wear.max(tool.wear));
                handle.clone()
            }
            None => {
                let item = tool.item;
                let handle = ToolHandle::new(tool);
                self.tools.insert(item, handle.clone());
                handle
            }
        }
    }

    /// Handle a block break reported by the host
    ///
    /// A crouching actor breaking a log with a felling tool queues that log
    /// as the root of a chain. Anything else is ignored without side effects.
    pub fn on_block_break(&mut self, event: BreakEvent) -> TriggerOutcome {
        if event.posture != Posture::Crouching {
            return TriggerOutcome::Ignored(IgnoreReason::NotCrouching);
        }

        let validator = Validator::new(&self.classes);
        if let Err(reason) = validator.check(
            &self.queue,
            event.position,
            &event.tool,
            &event.material,
            Filter::Log,
        ) {
            tracing::trace!(position = ?event.position, ?reason, "Break ignored");
            return TriggerOutcome::Ignored(reason);
        }

        tracing::debug!(
            actor = event.actor,
            position = ?event.position,
            material = %event.material,
            tool = %event.tool.material,
            "Felling started"
        );
        let tool = self.handle_for(event.tool);
        self.queue.enqueue(
            event.position,
            Wielder {
                actor: event.actor,
                tool,
            },
        );
        TriggerOutcome::Queued
    }

    /// Run one worker cycle
    ///
    /// Takes up to `max_breaks_per_cycle` removals off the queue in FIFO
    /// order and processes each to completion.
    pub fn tick<W, I>(&mut self, world: &mut W, inventory: &mut I) -> TickReport
    where
        W: World + ?Sized,
        I: Inventory + ?Sized,
    {
        let batch = self.queue.dequeue_up_to(self.max_breaks_per_cycle);
        let mut report = TickReport::default();

        for (position, wielder) in batch {
            report.processed += 1;
            match self.process(position, wielder, world, inventory) {
                ItemOutcome::Expanded { queued } => {
                    report.expanded += 1;
                    report.queued += queued;
                }
                ItemOutcome::Halted => report.halted += 1,
            }
        }

        // the engine's own entry is the last holder once a tool's chains are done
        self.tools.retain(|_, handle| handle.holders() > 1);

        report.remaining = self.queue.len();
        if !report.is_idle() {
            tracing::debug!(
                processed = report.processed,
                halted = report.halted,
                queued = report.queued,
                remaining = report.remaining,
                "Felling cycle"
            );
        }
        report
    }

    /// Tick until the queue is empty, returning the number of ticks run
    ///
    /// Only terminates if the world actually removes the blocks it is asked
    /// to break.
    pub fn run_until_idle<W, I>(&mut self, world: &mut W, inventory: &mut I) -> usize
    where
        W: World + ?Sized,
        I: Inventory + ?Sized,
    {
        let mut ticks = 0;
        while !self.queue.is_empty() {
            self.tick(world, inventory);
            ticks += 1;
        }
        ticks
    }

    /// Process one dequeued removal
    ///
    /// The item is trusted as validated at enqueue time; the block is not
    /// re-checked before breaking.
    fn process<W, I>(
        &mut self,
        position: IVec3,
        wielder: Wielder,
        world: &mut W,
        inventory: &mut I,
    ) -> ItemOutcome
    where
        W: World + ?Sized,
        I: Inventory + ?Sized,
    {
        let rng = &mut self.rng;
        let wear = wielder.tool.update(|tool| apply_use(tool, rng));
        let tool = wielder.tool.snapshot();

        match wear {
            WearOutcome::Exhausted => {
                tracing::debug!(
                    actor = wielder.actor,
                    item = tool.item,
                    position = ?position,
                    "Tool exhausted"
                );
                inventory.remove_item(wielder.actor, tool.item);
                return ItemOutcome::Halted;
            }
            WearOutcome::Worn { wear } => inventory.persist_tool_state(tool.item, wear),
            WearOutcome::Spared => {}
        }

        world.break_naturally(position, &tool);

        let validator = Validator::new(&self.classes);
        let mut queued = 0;
        for probe in self.mode.probes() {
            let target = probe.target(position);
            let material = world.material_at(target);
            if validator.is_valid(&self.queue, target, &tool, &material, probe.filter) {
                self.queue.enqueue(target, wielder.clone());
                queued += 1;
            }
        }

        tracing::trace!(position = ?position, queued, "Removal expanded");
        ItemOutcome::Expanded { queued }
    }
}
