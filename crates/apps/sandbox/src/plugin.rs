//! Plugin lifecycle around the felling engine

use rand::rngs::StdRng;
use rand::Rng;
use std::path::Path;
use std::time::Duration;
use timber::{
    BreakEvent, Catalog, Inventory, Timber, TimberConfig, TickReport, TriggerOutcome, World,
};

/// An enabled Timber instance
///
/// Holds the configuration it was enabled with and the engine built from it.
/// Dropping the plugin without calling [`TimberPlugin::disable`] drops the
/// pending work silently.
#[derive(Debug)]
pub struct TimberPlugin<R = StdRng> {
    config: TimberConfig,
    engine: Timber<R>,
}

impl<R: Rng> TimberPlugin<R> {
    /// Enable the plugin from a configuration file
    ///
    /// Writes the bundled default configuration when `config_path` does not
    /// exist. Any load or validation error aborts enabling.
    pub fn enable(config_path: &Path, catalog: &Catalog, rng: R) -> timber::Result<Self> {
        let config = TimberConfig::load_or_init(config_path)?;
        Ok(Self::with_config(config, catalog, rng))
    }

    /// Enable the plugin from an already validated configuration
    pub fn with_config(config: TimberConfig, catalog: &Catalog, rng: R) -> Self {
        let engine = Timber::with_config(&config, catalog, rng);
        tracing::info!(
            mode = %config.mode,
            break_delay = config.break_delay,
            max_breaks_per_cycle = config.max_breaks_per_cycle,
            tools = engine.classification().tools().len(),
            logs = engine.classification().logs().len(),
            leaves = engine.classification().leaves().len(),
            "Timber enabled"
        );
        TimberPlugin { config, engine }
    }

    /// Disable the plugin, dropping pending removals
    ///
    /// Returns the number of removals that were dropped.
    pub fn disable(&mut self) -> usize {
        let dropped = self.engine.clear();
        tracing::info!(dropped, "Timber disabled");
        dropped
    }

    /// Get the configuration
    pub fn config(&self) -> &TimberConfig {
        &self.config
    }

    /// Get the engine
    pub fn engine(&self) -> &Timber<R> {
        &self.engine
    }

    /// Wall-clock time between two felling cycles
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Forward a block break to the engine
    pub fn on_block_break(&mut self, event: BreakEvent) -> TriggerOutcome {
        self.engine.on_block_break(event)
    }

    /// Run one felling cycle
    pub fn on_tick<W, I>(&mut self, world: &mut W, inventory: &mut I) -> TickReport
    where
        W: World + ?Sized,
        I: Inventory + ?Sized,
    {
        self.engine.tick(world, inventory)
    }
}
