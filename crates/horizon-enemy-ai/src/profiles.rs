//! Level-driven stat profiles for each enemy variant.
//!
//! Every stat is linear in the level. Fire rate is floored so no enemy
//! fires faster than its variant's floor.

use horizon_core::constants::*;
use horizon_core::enums::EnemyKind;

/// Combat stats for one enemy at a given level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub health: f64,
    pub speed: f64,
    /// Seconds between shots.
    pub fire_rate: f64,
    /// Clamped to `[0, 1]`.
    pub accuracy: f64,
    /// Preferred distance to the player.
    pub standoff: f64,
    /// Scale once the spawn grow-in finishes.
    pub final_scale: f64,
    /// Escorts that accompany this enemy (bosses only).
    pub escorts: u32,
}

/// Coefficients of one variant's stat curves.
struct StatCurve {
    health: (f64, f64),
    speed: (f64, f64),
    fire_rate: (f64, f64),
    fire_rate_floor: f64,
    accuracy: (f64, f64),
}

const NORMAL_CURVE: StatCurve = StatCurve {
    health: (ENEMY_HEALTH_BASE, ENEMY_HEALTH_PER_LEVEL),
    speed: (ENEMY_SPEED_BASE, ENEMY_SPEED_PER_LEVEL),
    fire_rate: (ENEMY_FIRE_RATE_BASE, ENEMY_FIRE_RATE_PER_LEVEL),
    fire_rate_floor: ENEMY_FIRE_RATE_FLOOR,
    accuracy: (ENEMY_ACCURACY_BASE, ENEMY_ACCURACY_PER_LEVEL),
};

const BOSS_CURVE: StatCurve = StatCurve {
    health: (BOSS_HEALTH_BASE, BOSS_HEALTH_PER_LEVEL),
    speed: (BOSS_SPEED_BASE, BOSS_SPEED_PER_LEVEL),
    fire_rate: (BOSS_FIRE_RATE_BASE, BOSS_FIRE_RATE_PER_LEVEL),
    fire_rate_floor: BOSS_FIRE_RATE_FLOOR,
    accuracy: (BOSS_ACCURACY_BASE, BOSS_ACCURACY_PER_LEVEL),
};

/// Get the stat profile for a variant at `level`.
pub fn get_profile(kind: EnemyKind, level: u32) -> EnemyProfile {
    let curve = match kind {
        EnemyKind::Normal => &NORMAL_CURVE,
        EnemyKind::Boss => &BOSS_CURVE,
    };
    let l = level as f64;
    let linear = |(base, per_level): (f64, f64)| base + per_level * l;

    EnemyProfile {
        health: linear(curve.health),
        speed: linear(curve.speed),
        fire_rate: linear(curve.fire_rate).max(curve.fire_rate_floor),
        accuracy: linear(curve.accuracy).clamp(0.0, 1.0),
        standoff: match kind {
            EnemyKind::Normal => ENEMY_STANDOFF,
            EnemyKind::Boss => BOSS_STANDOFF,
        },
        final_scale: match kind {
            EnemyKind::Normal => ENEMY_FINAL_SCALE,
            EnemyKind::Boss => BOSS_FINAL_SCALE,
        },
        escorts: match kind {
            EnemyKind::Normal => 0,
            EnemyKind::Boss => escort_count(level),
        },
    }
}

/// Escorts spawned with a boss: none up to the threshold level, then one per
/// level above it, capped.
pub fn escort_count(level: u32) -> u32 {
    if level > ESCORT_LEVEL_THRESHOLD {
        (level - 1).min(MAX_ESCORTS)
    } else {
        0
    }
}
