//! Asteroid field: seeding, orbital motion, and splitting on destruction.
//!
//! Large asteroids are seeded on a ring around the well. Destroying a large
//! or medium asteroid replaces it with three fragments one tier smaller;
//! small asteroids just vanish.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3, EulerRot};
use hecs::{Entity, World};
use rand::Rng;

use horizon_core::components::{Asteroid, Collider, Transform};
use horizon_core::constants::*;
use horizon_core::enums::AsteroidSize;
use horizon_core::events::AudioEvent;
use horizon_core::types::{frame_independent_retention, map_linear, orbit_about_up, Aabb};

use super::{effects, projectiles};

/// Seed `count` large asteroids on the ring around the well.
pub fn spawn_field<R: Rng + ?Sized>(world: &mut World, rng: &mut R, count: usize) -> usize {
    for _ in 0..count {
        let r = rng.gen_range(ASTEROID_MIN_RADIUS..ASTEROID_MAX_RADIUS);
        let angle = rng.gen_range(0.0..TAU);
        let y = ASTEROID_HEIGHT_SPREAD * (0.5 - rng.gen::<f64>());
        let position = DVec3::new(angle.cos() * r, y, angle.sin() * r);
        let orbit_speed = map_linear(
            r,
            ASTEROID_MIN_RADIUS,
            ASTEROID_MAX_RADIUS,
            ASTEROID_ORBIT_SPEED_NEAR,
            ASTEROID_ORBIT_SPEED_FAR,
        );
        spawn(world, AsteroidSize::Large, position, orbit_speed, None);
    }
    count
}

/// Spawn a single asteroid of `size`.
pub fn spawn(
    world: &mut World,
    size: AsteroidSize,
    position: DVec3,
    orbit_speed: f64,
    fragment_velocity: Option<DVec3>,
) -> Entity {
    let radius = size.radius();
    let half = DVec3::splat(radius);
    world.spawn((
        Asteroid {
            size,
            radius,
            orbit_speed,
            fragment_velocity,
        },
        Transform {
            position,
            rotation: DQuat::IDENTITY,
            scale: 1.0,
        },
        Collider {
            local_half_extents: half,
            bounds: Aabb::from_center(position, half),
        },
    ))
}

/// Orbit every asteroid about the well, spin it, and drift fragments with damping.
pub fn advance(world: &mut World, delta: f64, env_speed_factor: f64) {
    let spin = DQuat::from_euler(
        EulerRot::XYZ,
        ASTEROID_SPIN[0] * delta,
        ASTEROID_SPIN[1] * delta,
        ASTEROID_SPIN[2] * delta,
    );
    let retention = frame_independent_retention(FRAGMENT_DAMPING, delta);

    for (_entity, (asteroid, transform)) in world.query_mut::<(&mut Asteroid, &mut Transform)>() {
        transform.position = orbit_about_up(
            transform.position,
            asteroid.orbit_speed * env_speed_factor * delta,
        );
        transform.rotation = (transform.rotation * spin).normalize();

        if let Some(velocity) = asteroid.fragment_velocity.as_mut() {
            transform.position += *velocity * delta;
            *velocity *= retention;
        }
    }
}

/// Destroy an asteroid, leaving an explosion and any fragments in its place.
///
/// If a projectile caused the destruction it is removed too. Returns the
/// spawned fragments; a stale handle yields none and changes nothing.
pub fn split<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    asteroid: Entity,
    projectile: Option<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) -> Vec<Entity> {
    let (parent, position) = match world.query_one_mut::<(&Asteroid, &Transform)>(asteroid) {
        Ok((a, t)) => (*a, t.position),
        Err(_) => return Vec::new(),
    };

    let _ = world.despawn(asteroid);
    effects::spawn_explosion(world, position, audio_events);
    if let Some(projectile) = projectile {
        projectiles::remove(world, projectile);
    }

    let Some(fragment_size) = parent.size.fragment_size() else {
        return Vec::new();
    };
    let (orbit_mult, fragment_speed) = match parent.size {
        AsteroidSize::Large => (FRAGMENT_ORBIT_MULT_FROM_LARGE, FRAGMENT_SPEED_FROM_LARGE),
        _ => (FRAGMENT_ORBIT_MULT_FROM_MEDIUM, FRAGMENT_SPEED_FROM_MEDIUM),
    };
    let inherited = parent.fragment_velocity.unwrap_or(DVec3::ZERO);
    let spacing = parent.radius + fragment_size.radius();

    (0..ASTEROID_FRAGMENT_COUNT)
        .map(|_| {
            let direction = random_unit(rng);
            let distance = spacing * rng.gen_range(FRAGMENT_OFFSET_MIN..FRAGMENT_OFFSET_MAX);
            spawn(
                world,
                fragment_size,
                position + direction * distance,
                parent.orbit_speed * orbit_mult,
                Some(inherited + direction * fragment_speed),
            )
        })
        .collect()
}

/// Number of live asteroids of `size`.
pub fn count(world: &World, size: AsteroidSize) -> usize {
    world
        .query::<&Asteroid>()
        .iter()
        .filter(|(_, a)| a.size == size)
        .count()
}

fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> DVec3 {
    let v = DVec3::new(
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
        rng.gen::<f64>() - 0.5,
    );
    v.try_normalize().unwrap_or(DVec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_field_on_ring_with_inverse_orbit_speed() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        spawn_field(&mut world, &mut rng, 40);
        assert_eq!(count(&world, AsteroidSize::Large), 40);

        for (_e, (a, t)) in world.query::<(&Asteroid, &Transform)>().iter() {
            let r = DVec3::new(t.position.x, 0.0, t.position.z).length();
            assert!((ASTEROID_MIN_RADIUS..=ASTEROID_MAX_RADIUS).contains(&r));
            assert!(t.position.y.abs() <= ASTEROID_HEIGHT_SPREAD / 2.0);
            assert!(a.orbit_speed <= ASTEROID_ORBIT_SPEED_NEAR + 1e-12);
            assert!(a.orbit_speed >= ASTEROID_ORBIT_SPEED_FAR - 1e-12);
            assert!(a.fragment_velocity.is_none());
        }
    }

    #[test]
    fn test_orbit_preserves_radius() {
        let mut world = World::new();
        let e = spawn(
            &mut world,
            AsteroidSize::Large,
            DVec3::new(300.0, 5.0, 0.0),
            0.2,
            None,
        );
        advance(&mut world, 0.5, 3.0);
        let t = world.get::<&Transform>(e).unwrap();
        assert!((t.position.length() - DVec3::new(300.0, 5.0, 0.0).length()).abs() < 1e-9);
        assert!((t.position.y - 5.0).abs() < 1e-12);
        assert!(t.position.z.abs() > 1.0, "should have swept around the well");
    }

    #[test]
    fn test_fragment_velocity_damps() {
        let mut world = World::new();
        let e = spawn(
            &mut world,
            AsteroidSize::Small,
            DVec3::new(300.0, 0.0, 0.0),
            0.0,
            Some(DVec3::new(0.0, 100.0, 0.0)),
        );
        advance(&mut world, 1.0 / 60.0, 1.0);
        let a = world.get::<&Asteroid>(e).unwrap();
        let v = a.fragment_velocity.unwrap();
        assert!((v.y - 99.0).abs() < 1e-9);
    }

    #[test]
    fn test_split_tiers() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut audio = Vec::new();

        let large = spawn(&mut world, AsteroidSize::Large, DVec3::new(250.0, 0.0, 0.0), 0.1, None);
        let mediums = split(&mut world, &mut rng, large, None, &mut audio);
        assert_eq!(mediums.len(), 3);
        assert!(!world.contains(large));
        assert_eq!(count(&world, AsteroidSize::Medium), 3);

        for &m in &mediums {
            let a = world.get::<&Asteroid>(m).unwrap();
            assert!((a.orbit_speed - 0.1 * FRAGMENT_ORBIT_MULT_FROM_LARGE).abs() < 1e-12);
            let speed = a.fragment_velocity.unwrap().length();
            assert!((speed - FRAGMENT_SPEED_FROM_LARGE).abs() < 1e-9);
            let t = world.get::<&Transform>(m).unwrap();
            let offset = t.position.distance(DVec3::new(250.0, 0.0, 0.0));
            let spacing = ASTEROID_RADIUS_LARGE + ASTEROID_RADIUS_MEDIUM;
            assert!(offset >= spacing * FRAGMENT_OFFSET_MIN - 1e-9);
            assert!(offset <= spacing * FRAGMENT_OFFSET_MAX + 1e-9);
        }

        let smalls = split(&mut world, &mut rng, mediums[0], None, &mut audio);
        assert_eq!(smalls.len(), 3);
        assert_eq!(count(&world, AsteroidSize::Small), 3);
        assert_eq!(count(&world, AsteroidSize::Medium), 2);

        let none = split(&mut world, &mut rng, smalls[0], None, &mut audio);
        assert!(none.is_empty());
        assert_eq!(count(&world, AsteroidSize::Small), 2);

        // One explosion per destroyed asteroid.
        assert_eq!(audio.len(), 3);
    }

    #[test]
    fn test_split_stale_handle_is_noop() {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut audio = Vec::new();
        let e = spawn(&mut world, AsteroidSize::Large, DVec3::X * 300.0, 0.1, None);
        split(&mut world, &mut rng, e, None, &mut audio);
        let before = world.len();
        assert!(split(&mut world, &mut rng, e, None, &mut audio).is_empty());
        assert_eq!(world.len(), before);
    }
}
