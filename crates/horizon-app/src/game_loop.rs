//! Game loop thread: runs the simulation engine at 60Hz and publishes snapshots.
//!
//! The engine is moved into this thread. Commands arrive via `mpsc` channel.
//! Snapshots are stored in shared state for polling and, when requested,
//! printed to stdout as JSON lines.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use anyhow::anyhow;

use horizon_core::commands::PlayerCommand;
use horizon_core::constants::{DT, TICK_RATE};
use horizon_core::state::GameStateSnapshot;
use horizon_sim::SimulationEngine;

use crate::audio::{self, AudioSink};
use crate::autopilot::Autopilot;
use crate::state::{GameLoopCommand, LoopSummary, SharedSnapshot};

/// Nominal duration of one frame.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs and when it stops.
#[derive(Debug, Clone, Default)]
pub struct LoopOptions {
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Feed autopilot input every frame.
    pub autopilot: bool,
    /// Print every Nth snapshot as a JSON line.
    pub snapshot_every: Option<u64>,
    /// Run as fast as possible instead of at `TICK_RATE`.
    pub unpaced: bool,
}

/// A running game loop.
pub struct GameLoopHandle {
    pub commands: mpsc::Sender<GameLoopCommand>,
    thread: JoinHandle<LoopSummary>,
}

impl GameLoopHandle {
    /// Wait for the loop to end on its own (terminal phase, frame limit, or Shutdown).
    pub fn join(self) -> anyhow::Result<LoopSummary> {
        let Self { commands, thread } = self;
        let summary = thread
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"));
        drop(commands);
        summary
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> anyhow::Result<LoopSummary> {
        // The loop may already have exited; that is not an error.
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        self.join()
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
    latest_snapshot: SharedSnapshot,
    audio_sink: Option<Box<dyn AudioSink>>,
) -> anyhow::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let thread = std::thread::Builder::new()
        .name("horizon-game-loop".into())
        .spawn(move || run_game_loop(engine, options, cmd_rx, &latest_snapshot, audio_sink))?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread,
    })
}

/// The game loop. Runs until a terminal phase, the frame limit, Shutdown, or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &std::sync::Mutex<Option<GameStateSnapshot>>,
    mut audio_sink: Option<Box<dyn AudioSink>>,
) -> LoopSummary {
    let pilot = Autopilot::default();
    let mut last_snapshot: Option<GameStateSnapshot> = None;
    let mut frames = 0u64;
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => return summarize(&engine, frames),
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return summarize(&engine, frames),
            }
        }

        // 2. Autopilot steers from what the last frame showed
        if options.autopilot {
            if let Some(snapshot) = &last_snapshot {
                engine.queue_command(PlayerCommand::SetInput {
                    input: pilot.input(snapshot),
                });
            }
        }

        // 3. Advance one frame
        let snapshot = engine.tick(DT);
        frames += 1;

        audio::dispatch(&mut audio_sink, &snapshot.audio_events);

        if let Some(every) = options.snapshot_every.filter(|n| *n > 0) {
            if frames % every == 0 {
                match serde_json::to_string(&snapshot) {
                    Ok(json) => println!("{json}"),
                    Err(err) => log::warn!("Failed to serialize snapshot: {err}"),
                }
            }
        }

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        if snapshot.phase.is_terminal() {
            log::info!("Session ended: {:?}", snapshot.phase);
            return summarize(&engine, frames);
        }
        if options.max_frames.is_some_and(|max| frames >= max) {
            return summarize(&engine, frames);
        }
        last_snapshot = Some(snapshot);

        // 5. Sleep until next tick
        if options.unpaced {
            continue;
        }
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn summarize(engine: &SimulationEngine, frames: u64) -> LoopSummary {
    LoopSummary {
        frames,
        phase: engine.phase(),
        level: engine.waves().level(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use horizon_core::enums::GamePhase;
    use horizon_core::events::AudioEvent;
    use horizon_sim::assets::{AssetCatalog, BuiltinModels};
    use horizon_sim::config::SimConfig;
    use horizon_sim::persistence::MemoryStore;

    use crate::state::new_shared_snapshot;

    fn engine(seed: u64) -> SimulationEngine {
        SimulationEngine::new(
            SimConfig::with_seed(seed),
            AssetCatalog::load(&BuiltinModels).unwrap(),
            Box::new(MemoryStore::new()),
        )
    }

    struct SharedRecorder(Arc<Mutex<Vec<AudioEvent>>>);

    impl AudioSink for SharedRecorder {
        fn play(&mut self, event: &AudioEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartGame))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_stops_at_frame_limit() {
        let mut engine = engine(1);
        engine.queue_command(PlayerCommand::StartGame);
        let latest = new_shared_snapshot();
        let events = Arc::new(Mutex::new(Vec::new()));

        let handle = spawn_game_loop(
            engine,
            LoopOptions {
                max_frames: Some(30),
                unpaced: true,
                ..Default::default()
            },
            latest.clone(),
            Some(Box::new(SharedRecorder(events.clone()))),
        )
        .unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.frames, 30);
        assert_eq!(summary.phase, GamePhase::Active);
        assert_eq!(summary.level, 1);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 30);
        assert!(events
            .lock()
            .unwrap()
            .iter()
            .any(|e| matches!(e, AudioEvent::WaveStarted { level: 1, .. })));
    }

    #[test]
    fn test_shutdown_command_stops_loop() {
        let handle = spawn_game_loop(
            engine(2),
            LoopOptions::default(),
            new_shared_snapshot(),
            None,
        )
        .unwrap();
        let summary = handle.shutdown().unwrap();
        assert_eq!(summary.phase, GamePhase::MainMenu);
    }

    #[test]
    fn test_autopilot_steers_toward_enemies() {
        let mut engine = engine(3);
        engine.queue_command(PlayerCommand::StartGame);
        let initial = engine.tick(DT).player.unwrap().rotation;
        let latest = new_shared_snapshot();

        let handle = spawn_game_loop(
            engine,
            LoopOptions {
                max_frames: Some(90),
                autopilot: true,
                unpaced: true,
                ..Default::default()
            },
            latest.clone(),
            None,
        )
        .unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        let player = snapshot.player.expect("still flying");
        assert!(player.rotation.angle_between(initial) > 0.1);
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = engine(4);
        engine.queue_command(PlayerCommand::StartGame);
        for _ in 0..50 {
            engine.tick(DT);
        }

        let snapshot = engine.tick(DT);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_tick_duration_constant() {
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
