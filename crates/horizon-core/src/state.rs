//! Game state snapshot: the complete visible state handed to the renderer each frame.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::SimTime;

/// Complete game state broadcast after each frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub speed: SpeedView,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub asteroids: Vec<AsteroidView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub well: WellView,
    pub audio_events: Vec<AudioEvent>,
}

/// Arcade progression.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub level: u32,
    pub wave_phase: WavePhase,
    pub enemies_remaining: u32,
}

/// Gravity-well multipliers applied this frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedView {
    pub player_speed_factor: f64,
    pub env_speed_factor: f64,
}

impl Default for SpeedView {
    fn default() -> Self {
        Self {
            player_speed_factor: 1.0,
            env_speed_factor: 1.0,
        }
    }
}

/// The player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub rotation: DQuat,
    pub velocity: DVec3,
    pub hits: u32,
    pub max_hits: u32,
    /// Whether the damaged appearance is showing.
    pub damaged: bool,
    pub boosting: bool,
    /// Seconds until boost is ready (0 = ready).
    pub boost_cooldown: f64,
    pub constant_thrust: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: DVec3,
    pub rotation: DQuat,
    pub scale: f64,
    pub health: f64,
    pub max_health: f64,
    pub emissive: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsteroidView {
    pub size: AsteroidSize,
    pub position: DVec3,
    pub rotation: DQuat,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileView {
    pub owner: ProjectileOwner,
    pub position: DVec3,
    pub velocity: DVec3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: DVec3,
    pub scale: f64,
    pub opacity: f64,
}

/// The black hole and its accretion disk.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WellView {
    pub position: DVec3,
    pub radius: f64,
    pub spin: f64,
    pub disk_spin: f64,
}
