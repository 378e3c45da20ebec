#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use glam::{DQuat, DVec3};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use horizon_core::constants::*;
    use horizon_core::enums::EnemyKind;
    use horizon_core::types::forward;

    use crate::behavior::{
        aim_direction, decide_standoff, evaluate, ready_to_fire, turn_toward, EnemyContext,
        StandoffAction,
    };
    use crate::profiles::{escort_count, get_profile};

    fn make_context(player_z: f64, elapsed: f64) -> EnemyContext {
        EnemyContext {
            position: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            player_position: DVec3::new(0.0, 0.0, player_z),
            speed: 10.0,
            standoff: ENEMY_STANDOFF,
            delta: 0.1,
            env_speed_factor: 1.0,
            elapsed_secs: elapsed,
        }
    }

    // --- Profiles ---

    #[test]
    fn test_normal_profile_level_one() {
        let p = get_profile(EnemyKind::Normal, 1);
        assert_abs_diff_eq!(p.health, 60.0);
        assert_abs_diff_eq!(p.speed, 5.5);
        assert_abs_diff_eq!(p.fire_rate, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(p.accuracy, 0.62, epsilon = 1e-12);
        assert_eq!(p.standoff, ENEMY_STANDOFF);
        assert_eq!(p.final_scale, ENEMY_FINAL_SCALE);
        assert_eq!(p.escorts, 0);
    }

    #[test]
    fn test_normal_profile_max_level() {
        let p = get_profile(EnemyKind::Normal, MAX_LEVEL);
        assert_abs_diff_eq!(p.health, 150.0);
        assert_abs_diff_eq!(p.speed, 10.0);
        assert_abs_diff_eq!(p.fire_rate, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(p.accuracy, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_boss_profile() {
        let p = get_profile(EnemyKind::Boss, 1);
        assert_abs_diff_eq!(p.health, 250.0);
        assert_abs_diff_eq!(p.speed, 11.0);
        assert_abs_diff_eq!(p.fire_rate, 0.46, epsilon = 1e-12);
        assert_abs_diff_eq!(p.accuracy, 0.73, epsilon = 1e-12);
        assert_eq!(p.standoff, BOSS_STANDOFF);
        assert_eq!(p.final_scale, BOSS_FINAL_SCALE);

        let p = get_profile(EnemyKind::Boss, MAX_LEVEL);
        assert_abs_diff_eq!(p.health, 700.0);
        assert_abs_diff_eq!(p.speed, 20.0);
        assert_abs_diff_eq!(p.fire_rate, BOSS_FIRE_RATE_FLOOR, epsilon = 1e-12);
        assert_abs_diff_eq!(p.accuracy, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fire_rate_floor_and_accuracy_clamp() {
        for level in [15, 20, 50] {
            let n = get_profile(EnemyKind::Normal, level);
            assert!(n.fire_rate >= ENEMY_FIRE_RATE_FLOOR);
            assert!(n.accuracy <= 1.0);
            let b = get_profile(EnemyKind::Boss, level);
            assert!(b.fire_rate >= BOSS_FIRE_RATE_FLOOR);
            assert!(b.accuracy <= 1.0);
        }
        assert_eq!(get_profile(EnemyKind::Normal, 20).fire_rate, ENEMY_FIRE_RATE_FLOOR);
        assert_eq!(get_profile(EnemyKind::Boss, 20).accuracy, 1.0);
    }

    #[test]
    fn test_escort_count() {
        assert_eq!(escort_count(1), 0);
        assert_eq!(escort_count(2), 0);
        assert_eq!(escort_count(3), 2);
        assert_eq!(escort_count(10), MAX_ESCORTS);
        assert_eq!(get_profile(EnemyKind::Boss, 5).escorts, 2);
    }

    // --- Stand-off ---

    #[test]
    fn test_standoff_bands() {
        assert_eq!(decide_standoff(100.0, 60.0), StandoffAction::Approach);
        assert_eq!(decide_standoff(71.0, 60.0), StandoffAction::Approach);
        assert_eq!(decide_standoff(70.0, 60.0), StandoffAction::Strafe);
        assert_eq!(decide_standoff(60.0, 60.0), StandoffAction::Strafe);
        assert_eq!(decide_standoff(50.0, 60.0), StandoffAction::Strafe);
        assert_eq!(decide_standoff(49.0, 60.0), StandoffAction::Retreat);
    }

    #[test]
    fn test_approach_moves_forward() {
        let update = evaluate(&make_context(200.0, 0.0));
        assert_eq!(update.action, StandoffAction::Approach);
        assert_abs_diff_eq!(update.new_position.z, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(update.new_position.x, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_retreat_at_half_speed() {
        let update = evaluate(&make_context(30.0, 0.0));
        assert_eq!(update.action, StandoffAction::Retreat);
        assert_abs_diff_eq!(update.new_position.z, -0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_strafe_sideways() {
        // sin(elapsed * speed) == 1
        let elapsed = std::f64::consts::FRAC_PI_2 / 10.0;
        let update = evaluate(&make_context(ENEMY_STANDOFF, elapsed));
        assert_eq!(update.action, StandoffAction::Strafe);
        assert_abs_diff_eq!(update.new_position.x, 0.3, epsilon = 1e-9);
        assert_abs_diff_eq!(update.new_position.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_env_factor_scales_movement() {
        let mut ctx = make_context(200.0, 0.0);
        ctx.env_speed_factor = 3.0;
        let update = evaluate(&ctx);
        assert_abs_diff_eq!(update.new_position.z, 3.0, epsilon = 1e-9);
    }

    // --- Turning ---

    #[test]
    fn test_turn_is_partial_and_toward_target() {
        let dir = DVec3::X;
        let turned = turn_toward(DQuat::IDENTITY, dir, DT);
        let fwd = forward(turned);
        assert!(fwd.x > 0.0, "should start turning toward +X");
        assert!(fwd.z > fwd.x, "should not snap in one frame");
    }

    #[test]
    fn test_turn_frame_rate_independent() {
        let dir = DVec3::new(1.0, 0.5, 0.0);
        let once = turn_toward(DQuat::IDENTITY, dir, 2.0 * DT);
        let half = turn_toward(DQuat::IDENTITY, dir, DT);
        let twice = turn_toward(half, dir, DT);
        assert_abs_diff_eq!(once.angle_between(twice), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_turn_zero_direction_keeps_rotation() {
        let q = DQuat::from_rotation_y(0.7);
        assert_eq!(turn_toward(q, DVec3::ZERO, DT), q);
    }

    // --- Firing ---

    #[test]
    fn test_ready_to_fire() {
        assert!(ready_to_fire(1.0, 0.5, 0.4));
        assert!(!ready_to_fire(1.0, 0.8, 0.4));
    }

    #[test]
    fn test_perfect_accuracy_aims_exactly() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let dir = aim_direction(&mut rng, DVec3::ZERO, DVec3::new(0.0, 30.0, 40.0), 1.0);
        assert_abs_diff_eq!(dir.y, 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.z, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_poor_accuracy_stays_near_target() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let target = DVec3::new(10.0, 0.0, 0.0);
        for _ in 0..200 {
            let dir = aim_direction(&mut rng, DVec3::ZERO, target, 0.0);
            assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-9);
            assert!(dir.dot(DVec3::X) > 0.85);
        }
    }

    #[test]
    fn test_aim_is_deterministic_per_seed() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        let target = DVec3::new(5.0, 5.0, 5.0);
        for _ in 0..10 {
            assert_eq!(
                aim_direction(&mut a, DVec3::ZERO, target, 0.6),
                aim_direction(&mut b, DVec3::ZERO, target, 0.6)
            );
        }
    }
}
