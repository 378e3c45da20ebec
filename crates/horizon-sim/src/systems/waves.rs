//! Arcade wave director.
//!
//! `starting_wave → normal → spawning_boss → boss → level_up_transition →
//! (starting_wave | victory)`. The pause after a boss kill is a timestamped
//! pending transition consumed by `tick`, never a deferred callback.

use glam::DVec3;
use hecs::World;
use rand::Rng;

use horizon_core::constants::STARTING_LEVEL;
use horizon_core::enums::WavePhase;
use horizon_core::events::AudioEvent;

use crate::assets::AssetCatalog;
use crate::config::TuningConfig;
use crate::persistence::ProgressStore;

use super::enemies;

/// Progression state of one arcade run.
#[derive(Debug, Clone, PartialEq)]
pub struct WaveState {
    level: u32,
    phase: WavePhase,
    enemies_remaining: u32,
    /// When the level-up pause ends (sim seconds).
    transition_due: Option<f64>,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            level: STARTING_LEVEL,
            phase: WavePhase::None,
            enemies_remaining: 0,
            transition_due: None,
        }
    }
}

impl WaveState {
    /// A run about to spawn its first wave at `level`.
    pub fn begin(level: u32) -> Self {
        Self {
            level,
            phase: WavePhase::StartingWave,
            ..Self::default()
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn enemies_remaining(&self) -> u32 {
        self.enemies_remaining
    }

    /// When the pending level-up transition fires, if one is scheduled.
    pub fn transition_due(&self) -> Option<f64> {
        self.transition_due
    }

    /// Count one confirmed enemy kill. Never goes below zero.
    pub fn record_kill(&mut self) {
        self.enemies_remaining = self.enemies_remaining.saturating_sub(1);
    }

    pub fn record_kills(&mut self, count: u32) {
        self.enemies_remaining = self.enemies_remaining.saturating_sub(count);
    }
}

/// Result of one wave tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    Continue,
    /// The final level was cleared.
    Victory,
}

/// Everything the wave director touches while spawning and persisting.
pub struct WaveContext<'a, R: Rng + ?Sized> {
    pub world: &'a mut World,
    pub rng: &'a mut R,
    pub assets: &'a AssetCatalog,
    pub store: &'a mut dyn ProgressStore,
    pub tuning: &'a TuningConfig,
    /// Center of the wave spawn ring (the player's position).
    pub spawn_center: DVec3,
    pub now: f64,
    pub audio_events: &'a mut Vec<AudioEvent>,
}

/// Advance the state machine by at most one transition.
pub fn tick<R: Rng + ?Sized>(state: &mut WaveState, ctx: &mut WaveContext<R>) -> WaveOutcome {
    match state.phase {
        WavePhase::StartingWave => {
            let spawned = enemies::spawn_wave(
                ctx.world,
                ctx.rng,
                ctx.assets,
                state.level,
                ctx.tuning.wave_enemy_count,
                ctx.spawn_center,
                ctx.now,
            );
            state.enemies_remaining = spawned;
            state.phase = WavePhase::Normal;
            ctx.audio_events.push(AudioEvent::WaveStarted {
                level: state.level,
                enemies: spawned,
            });
        }
        WavePhase::Normal if state.enemies_remaining == 0 => {
            state.phase = WavePhase::SpawningBoss;
            let spawned = enemies::spawn_boss(ctx.world, ctx.rng, ctx.assets, state.level, ctx.now);
            state.enemies_remaining = spawned;
            state.phase = WavePhase::Boss;
            ctx.audio_events.push(AudioEvent::BossSpawned {
                level: state.level,
                enemies: spawned,
            });
        }
        WavePhase::Boss if state.enemies_remaining == 0 => {
            log::info!("Level {} cleared", state.level);
            ctx.audio_events.push(AudioEvent::LevelCleared { level: state.level });
            state.level += 1;
            persist(ctx.store, state.level);
            state.phase = WavePhase::LevelUpTransition;
            state.transition_due = Some(ctx.now + ctx.tuning.level_up_delay_secs);
        }
        WavePhase::LevelUpTransition => {
            let due = state.transition_due.unwrap_or(ctx.now);
            if ctx.now >= due {
                state.transition_due = None;
                if state.level > ctx.tuning.max_level {
                    log::info!("Final level cleared");
                    state.phase = WavePhase::Victory;
                    persist(ctx.store, STARTING_LEVEL);
                    ctx.audio_events.push(AudioEvent::Victory);
                    return WaveOutcome::Victory;
                }
                state.phase = WavePhase::StartingWave;
            }
        }
        _ => {}
    }
    WaveOutcome::Continue
}

/// Store failures never interrupt play.
fn persist(store: &mut dyn ProgressStore, level: u32) {
    if let Err(err) = store.save_level(level) {
        log::warn!("Failed to save arcade level {level}: {err}");
    }
}
