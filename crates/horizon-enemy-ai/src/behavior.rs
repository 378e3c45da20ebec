//! Enemy attack behavior.
//!
//! Pure functions that compute facing, stand-off movement and aim for
//! one enemy from its situation. No ECS dependency, operates on plain data.

use glam::{DQuat, DVec3};
use rand::Rng;

use horizon_core::constants::*;
use horizon_core::types::{forward, frame_independent_factor, look_rotation};

/// Input to the behavior for a single enemy.
pub struct EnemyContext {
    pub position: DVec3,
    pub rotation: DQuat,
    pub player_position: DVec3,
    pub speed: f64,
    pub standoff: f64,
    pub delta: f64,
    pub env_speed_factor: f64,
    /// Simulation clock, drives the strafe oscillation.
    pub elapsed_secs: f64,
}

/// What the enemy does about its distance to the player this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandoffAction {
    /// Too far: move forward.
    Approach,
    /// Too close: back off at reduced speed.
    Retreat,
    /// Inside the dead band: slide sideways.
    Strafe,
}

/// Output from the behavior.
pub struct EnemyUpdate {
    pub new_rotation: DQuat,
    pub new_position: DVec3,
    pub action: StandoffAction,
}

/// Evaluate one frame of attack behavior: turn toward the player, then move.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let to_player = ctx.player_position - ctx.position;
    let distance = to_player.length();

    let new_rotation = turn_toward(ctx.rotation, to_player, ctx.delta);
    let action = decide_standoff(distance, ctx.standoff);

    let step = ctx.speed * ctx.delta * ctx.env_speed_factor;
    let displacement = match action {
        StandoffAction::Approach => forward(new_rotation) * step,
        StandoffAction::Retreat => forward(new_rotation) * (-step * RETREAT_SPEED_FACTOR),
        StandoffAction::Strafe => {
            let sway = (ctx.elapsed_secs * ctx.speed).sin();
            (new_rotation * DVec3::X) * (step * STRAFE_SPEED_FACTOR * sway)
        }
    };

    EnemyUpdate {
        new_rotation,
        new_position: ctx.position + displacement,
        action,
    }
}

/// Pick the stand-off action for a distance, with a dead band of `STANDOFF_MARGIN`.
pub fn decide_standoff(distance: f64, standoff: f64) -> StandoffAction {
    if distance > standoff + STANDOFF_MARGIN {
        StandoffAction::Approach
    } else if distance < standoff - STANDOFF_MARGIN {
        StandoffAction::Retreat
    } else {
        StandoffAction::Strafe
    }
}

/// Smoothly rotate `current` toward facing `direction`.
///
/// Uses the reference per-frame factor converted for `delta`, so turn rate
/// does not depend on frame rate.
pub fn turn_toward(current: DQuat, direction: DVec3, delta: f64) -> DQuat {
    if direction.length_squared() < 1e-12 {
        return current;
    }
    let target = look_rotation(direction, DVec3::Y);
    let t = frame_independent_factor(ENEMY_TURN_FACTOR, delta);
    current.slerp(target, t).normalize()
}

/// Whether enough time has passed since the last shot.
pub fn ready_to_fire(now: f64, last_shot_time: f64, fire_rate: f64) -> bool {
    now - last_shot_time > fire_rate
}

/// Direction from `from` to `target`, perturbed by a random spread that
/// shrinks as `accuracy` approaches 1. Always unit length.
pub fn aim_direction<R: Rng + ?Sized>(
    rng: &mut R,
    from: DVec3,
    target: DVec3,
    accuracy: f64,
) -> DVec3 {
    let base = (target - from).normalize_or_zero();
    if base == DVec3::ZERO {
        return DVec3::Z;
    }
    let spread = (1.0 - accuracy.clamp(0.0, 1.0)) * AIM_SPREAD_SCALE;
    let perturbed = base
        + DVec3::new(
            rand_spread(rng, spread),
            rand_spread(rng, spread),
            rand_spread(rng, spread),
        );
    let dir = perturbed.normalize_or_zero();
    if dir == DVec3::ZERO {
        base
    } else {
        dir
    }
}

/// Uniform sample in `[-range/2, range/2]`.
pub fn rand_spread<R: Rng + ?Sized>(rng: &mut R, range: f64) -> f64 {
    range * (0.5 - rng.gen::<f64>())
}
