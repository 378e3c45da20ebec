//! Deterministic input source for headless runs.
//!
//! Steers toward the nearest enemy and fires once the nose is close enough
//! to it. Pure function of the snapshot, so a seeded run stays reproducible.

use glam::DVec3;

use horizon_core::input::InputState;
use horizon_core::state::{GameStateSnapshot, PlayerView};

/// Steering thresholds.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Lateral offset (in the ship's local frame, unit direction) tolerated before turning.
    pub dead_zone: f64,
    /// Minimum cosine between nose and target to open fire.
    pub fire_alignment: f64,
    /// Targets farther than this are not shot at.
    pub fire_range: f64,
    /// Thrust while the target is farther than this.
    pub close_distance: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            dead_zone: 0.05,
            fire_alignment: 0.97,
            fire_range: 600.0,
            close_distance: 120.0,
        }
    }
}

impl Autopilot {
    /// Input for the next frame. Idle when there is no ship or nothing to chase.
    pub fn input(&self, snapshot: &GameStateSnapshot) -> InputState {
        let Some(player) = snapshot.player.as_ref() else {
            return InputState::default();
        };
        let Some(target) = nearest_enemy(player, snapshot) else {
            return InputState::default();
        };

        let offset = target - player.position;
        let distance = offset.length();
        let Some(direction) = offset.try_normalize() else {
            return InputState::default();
        };
        // Target direction in ship space: +Z is the nose.
        let local = player.rotation.inverse() * direction;

        InputState {
            thrust: distance > self.close_distance,
            shoot: local.z >= self.fire_alignment && distance <= self.fire_range,
            // Positive yaw swings the nose toward +X, positive pitch toward -Y.
            yaw_left: local.x > self.dead_zone,
            yaw_right: local.x < -self.dead_zone,
            pitch_up: local.y < -self.dead_zone,
            pitch_down: local.y > self.dead_zone,
            ..Default::default()
        }
    }
}

fn nearest_enemy(player: &PlayerView, snapshot: &GameStateSnapshot) -> Option<DVec3> {
    snapshot
        .enemies
        .iter()
        .map(|e| e.position)
        .min_by(|a, b| {
            a.distance_squared(player.position)
                .total_cmp(&b.distance_squared(player.position))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DQuat;
    use horizon_core::enums::EnemyKind;
    use horizon_core::state::EnemyView;

    fn snapshot_with(player_rotation: DQuat, enemies: &[DVec3]) -> GameStateSnapshot {
        GameStateSnapshot {
            player: Some(PlayerView {
                position: DVec3::ZERO,
                rotation: player_rotation,
                velocity: DVec3::ZERO,
                hits: 0,
                max_hits: 3,
                damaged: false,
                boosting: false,
                boost_cooldown: 0.0,
                constant_thrust: false,
            }),
            enemies: enemies
                .iter()
                .map(|&position| EnemyView {
                    kind: EnemyKind::Normal,
                    position,
                    rotation: DQuat::IDENTITY,
                    scale: 3.0,
                    health: 60.0,
                    max_health: 60.0,
                    emissive: 0,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_without_target() {
        let pilot = Autopilot::default();
        assert_eq!(pilot.input(&GameStateSnapshot::default()), InputState::default());
        assert_eq!(pilot.input(&snapshot_with(DQuat::IDENTITY, &[])), InputState::default());
    }

    #[test]
    fn test_fires_when_aligned() {
        let input = Autopilot::default().input(&snapshot_with(
            DQuat::IDENTITY,
            &[DVec3::new(0.0, 0.0, 200.0)],
        ));
        assert!(input.shoot);
        assert!(input.thrust);
        assert!(!input.yaw_left && !input.yaw_right && !input.pitch_up && !input.pitch_down);
    }

    #[test]
    fn test_turns_toward_nearest() {
        // Far target straight ahead, near target off to +X.
        let input = Autopilot::default().input(&snapshot_with(
            DQuat::IDENTITY,
            &[DVec3::new(0.0, 0.0, 500.0), DVec3::new(100.0, 0.0, 0.0)],
        ));
        assert!(input.yaw_left);
        assert!(!input.shoot);
        assert!(!input.thrust);
    }

    #[test]
    fn test_yaw_command_closes_the_gap() {
        // One yaw-left step must bring the nose closer to a target on +X.
        let target = DVec3::new(1.0, 0.0, 1.0).normalize();
        let input = Autopilot::default().input(&snapshot_with(DQuat::IDENTITY, &[target * 200.0]));
        assert!(input.yaw_left);
        let turned = DQuat::from_rotation_y(0.1) * DVec3::Z;
        assert!(turned.dot(target) > DVec3::Z.dot(target));
    }

    #[test]
    fn test_pitch_command_closes_the_gap() {
        let target = DVec3::new(0.0, 1.0, 1.0).normalize();
        let input = Autopilot::default().input(&snapshot_with(DQuat::IDENTITY, &[target * 200.0]));
        assert!(input.pitch_down);
        let turned = DQuat::from_rotation_x(-0.1) * DVec3::Z;
        assert!(turned.dot(target) > DVec3::Z.dot(target));
    }
}
