//! Bounding-volume refresh, run after all movement and before collision.
//!
//! Oriented bodies (ship, enemies) get the box enclosing their rotated,
//! scaled model. Asteroids and projectiles use an axis-aligned cube.
//! Enemies still growing in keep their spawn-scale box until the grow-in
//! completes; the enemy system snaps it then.

use hecs::World;

use horizon_core::components::{Asteroid, Collider, Enemy, PlayerShip, Projectile, Transform};
use horizon_core::types::Aabb;

/// Recompute every collider's world bounds from its transform.
pub fn run(world: &mut World) {
    for (_entity, (_ship, transform, collider)) in
        world.query_mut::<(&PlayerShip, &Transform, &mut Collider)>()
    {
        collider.bounds = oriented(transform, collider);
    }

    for (_entity, (enemy, transform, collider)) in
        world.query_mut::<(&Enemy, &Transform, &mut Collider)>()
    {
        if enemy.spawn_time.is_none() {
            collider.bounds = oriented(transform, collider);
        }
    }

    for (_entity, (_asteroid, transform, collider)) in
        world.query_mut::<(&Asteroid, &Transform, &mut Collider)>()
    {
        collider.bounds =
            Aabb::from_center(transform.position, collider.local_half_extents * transform.scale);
    }

    for (_entity, (_projectile, transform, collider)) in
        world.query_mut::<(&Projectile, &Transform, &mut Collider)>()
    {
        collider.bounds = Aabb::from_center(transform.position, collider.local_half_extents);
    }
}

fn oriented(transform: &Transform, collider: &Collider) -> Aabb {
    Aabb::from_oriented(
        transform.position,
        collider.local_half_extents,
        transform.rotation,
        transform.scale,
    )
}
