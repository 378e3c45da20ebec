//! Events emitted by the simulation for audio and UI feedback.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;

/// Fire-and-forget cues for the audio collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Player fired a bullet.
    PlayerShot,
    /// An enemy fired a bullet.
    EnemyShot { kind: EnemyKind },
    /// A bullet struck an enemy without destroying it.
    Hit { position: DVec3 },
    /// Something blew up.
    Explosion { position: DVec3 },
    /// The player's ship took damage.
    PlayerHit { hits: u32 },
    /// Player triggered a boost.
    Boost,
    /// A wave of normal enemies arrived.
    WaveStarted { level: u32, enemies: u32 },
    /// A boss (and any escorts) arrived.
    BossSpawned { level: u32, enemies: u32 },
    /// The boss wave was cleared.
    LevelCleared { level: u32 },
    /// The player's ship was destroyed.
    GameOver,
    /// The final level was cleared.
    Victory,
}
