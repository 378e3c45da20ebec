use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use horizon_core::commands::PlayerCommand;
use horizon_sim::assets::{AssetCatalog, BuiltinModels, ManifestModels};
use horizon_sim::config::{SimConfig, TuningConfig};
use horizon_sim::persistence::{JsonFileStore, MemoryStore, ProgressStore};
use horizon_sim::SimulationEngine;

use horizon_app::game_loop::{self, LoopOptions};
use horizon_app::state::new_shared_snapshot;

/// Run an EVENT HORIZON arcade session headlessly.
#[derive(Parser, Debug)]
#[command(name = "event-horizon", version, about)]
struct Args {
    /// RNG seed; the same seed and input replay the same session.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Stop after this many frames.
    #[arg(long)]
    frames: Option<u64>,

    /// Tuning overrides (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model manifest (JSON). Built-in dimensions are used when omitted.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Progress file (JSON). Progress is kept in memory when omitted.
    #[arg(long)]
    progress: Option<PathBuf>,

    /// Fly the ship with the built-in autopilot.
    #[arg(long)]
    autopilot: bool,

    /// Print every Nth snapshot to stdout as a JSON line.
    #[arg(long)]
    snapshot_every: Option<u64>,

    /// Do not pace frames to real time.
    #[arg(long)]
    unpaced: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let tuning = match &args.config {
        Some(path) => TuningConfig::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => TuningConfig::default(),
    };

    let assets = match &args.assets {
        Some(path) => {
            let manifest = ManifestModels::load(path)
                .with_context(|| format!("reading model manifest {}", path.display()))?;
            AssetCatalog::load(&manifest)
        }
        None => AssetCatalog::load(&BuiltinModels),
    }
    .context("loading models")?;

    let store: Box<dyn ProgressStore> = match &args.progress {
        Some(path) => Box::new(JsonFileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    };

    let mut engine = SimulationEngine::new(
        SimConfig {
            seed: args.seed,
            tuning,
        },
        assets,
        store,
    );
    engine.queue_command(PlayerCommand::StartGame);

    let handle = game_loop::spawn_game_loop(
        engine,
        LoopOptions {
            max_frames: args.frames,
            autopilot: args.autopilot,
            snapshot_every: args.snapshot_every,
            unpaced: args.unpaced,
        },
        new_shared_snapshot(),
        None,
    )?;
    let summary = handle.join()?;

    log::info!(
        "Finished after {} frames: {:?} at level {}",
        summary.frames,
        summary.phase,
        summary.level
    );
    Ok(())
}
