//! Gravity-well speed field.
//!
//! Maps the player's distance to the well onto two multipliers: the
//! player's maneuverability (slower near the well) and the environment's
//! speed (faster near the well). Also keeps the player out of the well.

use std::f64::consts::TAU;

use glam::DVec3;
use hecs::World;

use horizon_core::components::{PlayerShip, Transform};
use horizon_core::constants::*;
use horizon_core::state::WellView;

/// Multipliers produced for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedFactors {
    pub player: f64,
    pub env: f64,
}

impl Default for SpeedFactors {
    fn default() -> Self {
        Self {
            player: 1.0,
            env: 1.0,
        }
    }
}

/// Closest the player may get to the well center.
pub fn effective_min_distance() -> f64 {
    WELL_RADIUS * WELL_MIN_DISTANCE_FACTOR
}

/// Factors for a given distance to the well center.
///
/// Environment speed falls off quadratically with normalized distance;
/// player speed ramps up with its square root.
pub fn compute(distance: f64) -> SpeedFactors {
    let min = effective_min_distance();
    let d = distance.clamp(min, WELL_MAX_DISTANCE);
    let normalized = (d - min) / (WELL_MAX_DISTANCE - min);

    SpeedFactors {
        player: MIN_PLAYER_SPEED_FACTOR + (1.0 - MIN_PLAYER_SPEED_FACTOR) * normalized.sqrt(),
        env: 1.0 + (MAX_ENV_SPEED_FACTOR - 1.0) * (1.0 - normalized).powi(2),
    }
}

/// Position after enforcing the exclusion floor, or `None` if already outside it.
pub fn push_out(position: DVec3, well_center: DVec3) -> Option<DVec3> {
    let offset = position - well_center;
    let distance = offset.length();
    let min = effective_min_distance();
    if distance >= min {
        return None;
    }
    let direction = offset.try_normalize().unwrap_or(DVec3::Z);
    Some(position + direction * (min - distance) * WELL_PUSH_OUT_FACTOR)
}

/// Compute this frame's factors from the player's position and push the
/// player out of the well if needed. Without a player, both factors are 1.
pub fn run(world: &mut World, well_center: DVec3) -> SpeedFactors {
    let mut factors = SpeedFactors::default();
    for (_entity, (_ship, transform)) in world.query_mut::<(&PlayerShip, &mut Transform)>() {
        factors = compute(transform.position.distance(well_center));
        if let Some(pushed) = push_out(transform.position, well_center) {
            transform.position = pushed;
        }
    }
    factors
}

/// The well at the world origin, unspun.
pub fn initial_well() -> WellView {
    WellView {
        position: DVec3::ZERO,
        radius: WELL_RADIUS,
        spin: 0.0,
        disk_spin: 0.0,
    }
}

/// Spin the well and counter-spin its disk, faster near the player.
pub fn spin_well(well: &mut WellView, delta: f64, env_speed_factor: f64) {
    let step = delta * env_speed_factor;
    well.spin = (well.spin + WELL_SPIN_RATE * step).rem_euclid(TAU);
    well.disk_spin = (well.disk_spin - DISK_SPIN_RATE * step).rem_euclid(TAU);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors_at_extremes() {
        let near = compute(0.0);
        assert!((near.env - MAX_ENV_SPEED_FACTOR).abs() < 1e-12);
        assert!((near.player - MIN_PLAYER_SPEED_FACTOR).abs() < 1e-12);

        let far = compute(WELL_MAX_DISTANCE * 2.0);
        assert!((far.env - 1.0).abs() < 1e-12);
        assert!((far.player - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic_over_range() {
        let min = effective_min_distance();
        let mut prev = compute(min);
        let steps = 500;
        for i in 1..=steps {
            let d = min + (WELL_MAX_DISTANCE - min) * i as f64 / steps as f64;
            let f = compute(d);
            assert!(f.env <= prev.env, "env factor rose at d={d}");
            assert!(f.player >= prev.player, "player factor fell at d={d}");
            prev = f;
        }
    }

    #[test]
    fn test_push_out_clears_floor() {
        let min = effective_min_distance();
        let center = DVec3::new(3.0, -2.0, 1.0);
        for offset in [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 9.9, 0.0),
            DVec3::new(-2.0, 3.0, 4.0),
            DVec3::ZERO,
        ] {
            let pushed = push_out(center + offset, center).expect("inside the floor");
            assert!(pushed.distance(center) >= min);
        }
        assert!(push_out(center + DVec3::new(0.0, 0.0, min), center).is_none());
    }
}
