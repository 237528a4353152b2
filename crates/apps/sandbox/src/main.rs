use anyhow::{bail, Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;
use timber::{ActorId, Catalog, MemoryInventory, MemoryWorld, Posture, ToolState};
use timber_sandbox::{HostEvent, RunStats, Scheduler, TimberPlugin, TreeSpec};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ACTOR: ActorId = 1;
const TOOL_ITEM: u64 = 1;

/// Upper bound for the trunk height and canopy radius flags
const MAX_TREE_SIZE: i64 = 256;

#[derive(Parser, Debug)]
#[command(name = "timber-sandbox")]
#[command(about = "Fell a generated tree with the Timber engine", long_about = None)]
struct Args {
    /// Configuration file, written with defaults if missing
    #[arg(long, default_value = "plugins/Timber/config.toml")]
    config: PathBuf,

    /// Seed for wear rolls (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Wood species of the tree
    #[arg(long, default_value = "oak")]
    species: String,

    /// Number of trunk logs
    #[arg(
        long,
        default_value = "6",
        value_parser = clap::value_parser!(i32).range(1..=MAX_TREE_SIZE)
    )]
    trunk_height: i32,

    /// Canopy radius around the top log
    #[arg(
        long,
        default_value = "2",
        value_parser = clap::value_parser!(i32).range(0..=MAX_TREE_SIZE)
    )]
    canopy_radius: i32,

    /// Tool held in the main hand
    #[arg(long, default_value = "diamond_axe")]
    tool: String,

    /// Wear already on the tool
    #[arg(long, default_value = "0")]
    wear: u32,

    /// Unbreaking level of the tool
    #[arg(long, default_value = "0")]
    unbreaking: u32,

    /// Break the base while standing instead of crouching
    #[arg(long)]
    standing: bool,

    /// Tick interval in milliseconds (defaults to break-delay x 50 ms)
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Serialize)]
struct Summary {
    mode: String,
    planted_logs: usize,
    planted_leaves: usize,
    logs_left: usize,
    leaves_left: usize,
    tool_wear: Option<u32>,
    tool_destroyed: bool,
    stats: RunStats,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = args.log_level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("timber={log_level},timber_sandbox={log_level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Timber sandbox v{}", env!("CARGO_PKG_VERSION"));

    let catalog = Catalog::vanilla();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let plugin = TimberPlugin::enable(&args.config, &catalog, rng)
        .with_context(|| format!("Failed to enable Timber from {}", args.config.display()))?;
    let mode = plugin.config().mode.to_string();

    let tree = TreeSpec {
        species: args.species.clone(),
        trunk_height: args.trunk_height,
        canopy_radius: args.canopy_radius,
        ..TreeSpec::default()
    };
    let mut world = MemoryWorld::new();
    let planted = tree.plant(&mut world);
    tracing::info!(logs = planted.logs, leaves = planted.leaves, "Tree planted");

    let material = catalog
        .resolve(&args.tool)
        .with_context(|| format!("Unknown tool: {}", args.tool))?;
    let max_durability = catalog.max_durability(&material);
    if max_durability == 0 {
        bail!("{} has no durability", material);
    }
    let mut inventory = MemoryInventory::new();
    inventory.equip(
        ACTOR,
        ToolState::new(TOOL_ITEM, material, max_durability)
            .with_wear(args.wear)
            .with_wear_reduction(args.unbreaking),
    );

    let mut scheduler = Scheduler::new(plugin, world, inventory);
    if let Some(ms) = args.tick_ms {
        scheduler = scheduler.with_tick(Duration::from_millis(ms));
    }

    let (events, receiver) = mpsc::channel(16);
    let posture = if args.standing {
        Posture::Standing
    } else {
        Posture::Crouching
    };
    events
        .send(HostEvent::BlockBreak {
            actor: ACTOR,
            posture,
            position: tree.base,
        })
        .await
        .context("Failed to deliver break event")?;
    drop(events);

    let stats = scheduler.run_until_idle(receiver).await;
    let (mut plugin, world, inventory) = scheduler.into_parts();
    plugin.disable();

    let held = inventory.held(ACTOR);
    let summary = Summary {
        mode,
        planted_logs: planted.logs,
        planted_leaves: planted.leaves,
        logs_left: world.count(&tree.log()),
        leaves_left: world.count(&tree.leaves()),
        tool_wear: held.map(|tool| tool.wear),
        tool_destroyed: held.is_none(),
        stats,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Mode:        {}", summary.mode);
        println!(
            "Planted:     {} logs, {} leaves",
            summary.planted_logs, summary.planted_leaves
        );
        println!(
            "Broken:      {} blocks in {} ticks",
            summary.stats.broken, summary.stats.ticks
        );
        println!(
            "Left:        {} logs, {} leaves",
            summary.logs_left, summary.leaves_left
        );
        match summary.tool_wear {
            Some(wear) => println!("Tool wear:   {}/{}", wear, max_durability),
            None => println!("Tool wear:   destroyed"),
        }
    }

    Ok(())
}
