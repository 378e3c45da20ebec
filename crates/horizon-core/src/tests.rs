#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{DQuat, DVec3};

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::AudioEvent;
    use crate::input::InputState;
    use crate::state::GameStateSnapshot;
    use crate::types::*;

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert_relative_eq!(time.elapsed_secs, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_aabb_intersection() {
        let a = Aabb::from_center(DVec3::ZERO, DVec3::splat(1.0));
        let b = Aabb::from_center(DVec3::new(1.5, 0.0, 0.0), DVec3::splat(1.0));
        let c = Aabb::from_center(DVec3::new(3.5, 0.0, 0.0), DVec3::splat(1.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Touching faces intersect.
        let d = Aabb::from_center(DVec3::new(2.0, 0.0, 0.0), DVec3::splat(1.0));
        assert!(a.intersects(&d));
    }

    #[test]
    fn test_oriented_aabb_grows_under_rotation() {
        let half = DVec3::new(2.0, 1.0, 1.0);
        let axis_aligned = Aabb::from_oriented(DVec3::ZERO, half, DQuat::IDENTITY, 1.0);
        assert_relative_eq!(axis_aligned.size().x, 4.0, epsilon = 1e-9);

        let quarter = DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2);
        let rotated = Aabb::from_oriented(DVec3::ZERO, half, quarter, 1.0);
        assert_relative_eq!(rotated.size().x, 2.0, epsilon = 1e-9);
        assert_relative_eq!(rotated.size().z, 4.0, epsilon = 1e-9);

        let eighth = DQuat::from_rotation_y(std::f64::consts::FRAC_PI_4);
        let diagonal = Aabb::from_oriented(DVec3::ZERO, half, eighth, 2.0);
        assert!(diagonal.size().x > 4.0, "45° box should be wider than its scaled width");
    }

    #[test]
    fn test_look_rotation_points_forward_axis() {
        let targets = [
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, -1.0),
            DVec3::new(3.0, 4.0, -2.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(0.0, -5.0, 0.0),
        ];
        for dir in targets {
            let rot = look_rotation(dir, DVec3::Y);
            let fwd = forward(rot);
            assert_relative_eq!(fwd.dot(dir.normalize()), 1.0, epsilon = 1e-9);
        }
        assert_eq!(look_rotation(DVec3::ZERO, DVec3::Y), DQuat::IDENTITY);
    }

    #[test]
    fn test_orbit_about_up_preserves_radius_and_height() {
        let p = DVec3::new(100.0, 12.0, 0.0);
        let q = orbit_about_up(p, 1.0);
        assert_relative_eq!(q.y, 12.0, epsilon = 1e-9);
        assert_relative_eq!(
            (q.x * q.x + q.z * q.z).sqrt(),
            100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_frame_independent_factor_matches_reference_rate() {
        assert_relative_eq!(
            frame_independent_factor(0.05, 1.0 / 60.0),
            0.05,
            epsilon = 1e-12
        );
        // Two half-frames compose to the same turn as one full frame.
        let half = frame_independent_factor(0.05, 1.0 / 120.0);
        let composed = 1.0 - (1.0 - half) * (1.0 - half);
        assert_relative_eq!(composed, 0.05, epsilon = 1e-12);
        assert_relative_eq!(
            frame_independent_retention(0.99, 1.0 / 60.0),
            0.99,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_map_linear_inverse_mapping() {
        assert_relative_eq!(map_linear(200.0, 200.0, 800.0, 0.2, 0.05), 0.2);
        assert_relative_eq!(map_linear(800.0, 200.0, 800.0, 0.2, 0.05), 0.05);
        assert_relative_eq!(map_linear(500.0, 200.0, 800.0, 0.2, 0.05), 0.125);
    }

    #[test]
    fn test_asteroid_tiers() {
        assert_eq!(AsteroidSize::Large.fragment_size(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.fragment_size(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.fragment_size(), None);
        assert!(AsteroidSize::Large.radius() > AsteroidSize::Medium.radius());
        assert!(AsteroidSize::Medium.radius() > AsteroidSize::Small.radius());
    }

    #[test]
    fn test_input_rotation_axes() {
        let input = InputState {
            pitch_up: true,
            yaw_left: true,
            yaw_right: true,
            roll_right: true,
            ..Default::default()
        };
        assert_eq!(input.rotation_axes(), (1.0, 0.0, -1.0));
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GamePhase::GameOver.is_terminal());
        assert!(GamePhase::Victory.is_terminal());
        assert!(!GamePhase::Active.is_terminal());
        assert!(!GamePhase::Paused.is_terminal());
    }

    #[test]
    fn test_command_tagged_json() {
        let json = serde_json::to_string(&PlayerCommand::StartGame).unwrap();
        assert_eq!(json, r#"{"type":"StartGame"}"#);

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"SetInput","input":{"thrust":true,"boost":false,"shoot":true,"pitch_up":false,"pitch_down":false,"yaw_left":false,"yaw_right":false,"roll_left":false,"roll_right":false}}"#)
                .unwrap();
        match cmd {
            PlayerCommand::SetInput { input } => {
                assert!(input.thrust);
                assert!(input.shoot);
                assert!(!input.boost);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_audio_event_tagged_json() {
        let event = AudioEvent::WaveStarted {
            level: 3,
            enemies: 3,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"WaveStarted""#));
        let back: AudioEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.phase, GamePhase::MainMenu);
        assert!(back.player.is_none());
        assert_eq!(back.speed.env_speed_factor, 1.0);
    }
}
