//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Aabb;

/// World placement of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: DVec3,
    pub rotation: DQuat,
    /// Uniform scale.
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: 1.0,
        }
    }
}

/// Linear velocity (units/s).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Bounding volume used by the collision pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Collider {
    /// Half extents of the model at scale 1, in local space.
    pub local_half_extents: DVec3,
    /// World-space box, refreshed from the transform before collision tests.
    pub bounds: Aabb,
}

/// Marks the player's ship. Exactly one exists while a run is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Hit counter of the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub hits: u32,
    pub max_hits: u32,
}

/// Timed damaged appearance of the player's ship.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DamageVisual {
    pub active: bool,
    /// Simulation time of the last hit.
    pub since: f64,
}

/// Cooldowns and toggles driven by player input.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipControls {
    /// Seconds until the next shot is allowed.
    pub fire_cooldown: f64,
    /// Seconds until boost is available again.
    pub boost_cooldown: f64,
    /// Seconds the boosting flag stays raised.
    pub boost_remaining: f64,
    pub constant_thrust: bool,
    /// Boost flag seen last frame, for edge detection.
    pub boost_was_held: bool,
}

/// A hostile ship (normal or boss).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub level: u32,
    pub health: f64,
    pub max_health: f64,
    pub speed: f64,
    /// Seconds between shots.
    pub fire_rate: f64,
    /// 0.0 (wild) to 1.0 (perfect).
    pub accuracy: f64,
    pub last_shot_time: f64,
    pub state: EnemyState,
    /// Set while the spawn grow-in is running, cleared once it completes.
    pub spawn_time: Option<f64>,
    /// Escorts spawned alongside this enemy (bosses only).
    pub escorts: u32,
}

/// Emissive material state of an enemy, with the pre-flash color saved during a hit flash.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HitFlash {
    pub emissive: u32,
    pub saved_emissive: Option<u32>,
    pub hit_time: Option<f64>,
}

/// A rock orbiting the well.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    pub size: AsteroidSize,
    pub radius: f64,
    /// Angular speed around the well (rad/s).
    pub orbit_speed: f64,
    /// Only fragments carry their own drift velocity.
    pub fragment_velocity: Option<DVec3>,
}

/// A bullet. Exactly one owner tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    /// Seconds remaining.
    pub life: f64,
}

/// A short-lived explosion effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub life: f64,
    pub opacity: f64,
}
