//! Projectile lifecycle: spawn with inherited velocity, advance, expire, remove.
//!
//! Collision handling lives in `collision`; it removes projectiles through
//! `remove` so this module stays the only one that despawns them.

use glam::DVec3;
use hecs::{Entity, World};

use horizon_core::components::{Collider, Projectile, Transform, Velocity};
use horizon_core::constants::BULLET_SIZE;
use horizon_core::enums::ProjectileOwner;
use horizon_core::types::{look_rotation, Aabb};

use crate::config::TuningConfig;

/// Everything needed to fire one projectile.
#[derive(Debug, Clone, Copy)]
pub struct Shot {
    pub owner: ProjectileOwner,
    /// Firer position.
    pub origin: DVec3,
    /// Unit muzzle direction.
    pub direction: DVec3,
    /// Firer velocity at the moment of firing.
    pub inherited_velocity: DVec3,
    /// Distance ahead of the origin the projectile appears, so it starts clear of the firer.
    pub spawn_offset: f64,
}

/// Spawn a projectile. Velocity is the inherited velocity plus the muzzle speed along `direction`.
pub fn fire(world: &mut World, shot: Shot, tuning: &TuningConfig) -> Entity {
    let direction = shot.direction.try_normalize().unwrap_or(DVec3::Z);
    let position = shot.origin + direction * shot.spawn_offset;
    let velocity = shot.inherited_velocity + direction * tuning.bullet_speed;
    let half = DVec3::splat(BULLET_SIZE * 0.5);

    world.spawn((
        Projectile {
            owner: shot.owner,
            life: tuning.bullet_lifetime,
        },
        Transform {
            position,
            rotation: look_rotation(direction, DVec3::Y),
            scale: 1.0,
        },
        Velocity(velocity),
        Collider {
            local_half_extents: half,
            bounds: Aabb::from_center(position, half),
        },
    ))
}

/// Move every projectile and despawn the ones whose life ran out.
pub fn advance(world: &mut World, delta: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (projectile, transform, velocity)) in
        world.query_mut::<(&mut Projectile, &mut Transform, &Velocity)>()
    {
        transform.position += velocity.0 * delta;
        projectile.life -= delta;
        if projectile.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Remove a projectile that hit something. Returns false for stale handles
/// or entities that are not projectiles.
pub fn remove(world: &mut World, entity: Entity) -> bool {
    if world.get::<&Projectile>(entity).is_err() {
        return false;
    }
    world.despawn(entity).is_ok()
}

/// Number of live projectiles fired by `owner`.
pub fn count(world: &World, owner: ProjectileOwner) -> usize {
    world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.owner == owner)
        .count()
}
