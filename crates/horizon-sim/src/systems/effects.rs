//! Explosion effects: spawn, grow, fade, expire.

use glam::DVec3;
use hecs::{Entity, World};

use horizon_core::components::{Explosion, Transform};
use horizon_core::constants::{EXPLOSION_GROWTH, EXPLOSION_LIFETIME};
use horizon_core::events::AudioEvent;

/// Spawn an explosion at `position` and queue its audio cue.
pub fn spawn_explosion(
    world: &mut World,
    position: DVec3,
    audio_events: &mut Vec<AudioEvent>,
) -> Entity {
    audio_events.push(AudioEvent::Explosion { position });
    world.spawn((
        Explosion {
            life: EXPLOSION_LIFETIME,
            opacity: 1.0,
        },
        Transform {
            position,
            ..Transform::default()
        },
    ))
}

/// Grow and fade every explosion; despawn the ones that have burned out.
pub fn advance(world: &mut World, delta: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (explosion, transform)) in world.query_mut::<(&mut Explosion, &mut Transform)>() {
        explosion.life -= delta;
        transform.scale *= 1.0 + EXPLOSION_GROWTH * delta;
        explosion.opacity = (explosion.life / EXPLOSION_LIFETIME).clamp(0.0, 1.0);
        if explosion.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explosion_grows_fades_and_expires() {
        let mut world = World::new();
        let mut audio = Vec::new();
        let mut buffer = Vec::new();
        let e = spawn_explosion(&mut world, DVec3::ONE, &mut audio);
        assert_eq!(audio, vec![AudioEvent::Explosion { position: DVec3::ONE }]);

        advance(&mut world, 0.3, &mut buffer);
        {
            let ex = world.get::<&Explosion>(e).unwrap();
            assert!((ex.opacity - 0.5).abs() < 1e-9);
            let t = world.get::<&Transform>(e).unwrap();
            assert!((t.scale - 2.2).abs() < 1e-9);
        }

        advance(&mut world, 0.31, &mut buffer);
        assert!(!world.contains(e));
    }
}
