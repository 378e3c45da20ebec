//! Player ship: spawn, flight controls, boost, shooting and hull damage.

use glam::{DQuat, DVec3};
use hecs::{Entity, World};

use horizon_core::components::*;
use horizon_core::constants::*;
use horizon_core::enums::ProjectileOwner;
use horizon_core::events::AudioEvent;
use horizon_core::input::InputState;
use horizon_core::types::{forward, Aabb};

use crate::assets::AssetCatalog;
use crate::config::TuningConfig;

use super::projectiles;

/// Spawn the player's ship at the start position.
pub fn spawn(world: &mut World, assets: &AssetCatalog, tuning: &TuningConfig) -> Entity {
    let position = DVec3::from_array(PLAYER_START_POSITION);
    let rotation = DQuat::from_rotation_y(PLAYER_START_YAW);
    let half = assets.ship_half_extents();

    world.spawn((
        PlayerShip,
        Transform {
            position,
            rotation,
            scale: 1.0,
        },
        Velocity::default(),
        Hull {
            hits: 0,
            max_hits: tuning.ship_max_hits,
        },
        DamageVisual::default(),
        ShipControls::default(),
        Collider {
            local_half_extents: half,
            bounds: Aabb::from_oriented(position, half, rotation, 1.0),
        },
    ))
}

/// The player's position, if one is alive.
pub fn position(world: &World) -> Option<DVec3> {
    world
        .query::<(&PlayerShip, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, t))| t.position)
}

/// Whether the hull has taken its maximum number of hits.
pub fn is_destroyed(hull: &Hull) -> bool {
    hull.hits >= hull.max_hits
}

/// Add `hits` of damage to the player and arm the damaged appearance.
/// Returns true if the ship is now destroyed; false without a live player.
pub fn apply_damage(
    world: &mut World,
    hits: u32,
    now: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let Some((_entity, (_ship, hull, visual))) = world
        .query_mut::<(&PlayerShip, &mut Hull, &mut DamageVisual)>()
        .into_iter()
        .next()
    else {
        return false;
    };
    hull.hits = hull.hits.saturating_add(hits);
    visual.active = true;
    visual.since = now;
    audio_events.push(AudioEvent::PlayerHit { hits: hull.hits });
    log::debug!("Player hit: {}/{}", hull.hits, hull.max_hits);
    is_destroyed(hull)
}

/// Flip hands-free forward thrust.
pub fn toggle_constant_thrust(world: &mut World) {
    for (_entity, (_ship, controls)) in world.query_mut::<(&PlayerShip, &mut ShipControls)>() {
        controls.constant_thrust = !controls.constant_thrust;
    }
}

/// Per-frame inputs for the player update.
pub struct PlayerFrame<'a> {
    pub input: &'a InputState,
    pub player_speed_factor: f64,
    pub delta: f64,
    pub now: f64,
    pub tuning: &'a TuningConfig,
}

/// Rotate, thrust, boost, move and shoot; expire the damaged appearance.
pub fn run(world: &mut World, frame: &PlayerFrame, audio_events: &mut Vec<AudioEvent>) {
    let mut shot = None;
    let delta = frame.delta;

    for (_entity, (_ship, transform, velocity, controls, visual, collider)) in world.query_mut::<(
        &PlayerShip,
        &mut Transform,
        &mut Velocity,
        &mut ShipControls,
        &mut DamageVisual,
        &Collider,
    )>() {
        let (pitch, yaw, roll) = frame.input.rotation_axes();
        let angle = PLAYER_ROTATION_SPEED * frame.player_speed_factor * delta;
        transform.rotation = (transform.rotation
            * DQuat::from_rotation_x(pitch * angle)
            * DQuat::from_rotation_y(yaw * angle)
            * DQuat::from_rotation_z(roll * angle))
        .normalize();
        let heading = forward(transform.rotation);

        if frame.input.thrust || controls.constant_thrust {
            velocity.0 += heading * PLAYER_THRUST * frame.player_speed_factor * delta;
        }

        controls.boost_cooldown = (controls.boost_cooldown - delta).max(0.0);
        controls.boost_remaining = (controls.boost_remaining - delta).max(0.0);
        if frame.input.boost && !controls.boost_was_held && controls.boost_cooldown <= 0.0 {
            velocity.0 += heading * BOOST_IMPULSE;
            controls.boost_cooldown = frame.tuning.boost_cooldown;
            controls.boost_remaining = BOOST_DURATION;
            audio_events.push(AudioEvent::Boost);
        }
        controls.boost_was_held = frame.input.boost;

        velocity.0 *= (-PLAYER_DRAG * delta).exp();
        if controls.boost_remaining <= 0.0 {
            velocity.0 = velocity.0.clamp_length_max(PLAYER_MAX_SPEED);
        }
        transform.position += velocity.0 * delta;

        controls.fire_cooldown = (controls.fire_cooldown - delta).max(0.0);
        if frame.input.shoot && controls.fire_cooldown <= 0.0 {
            let length = 2.0 * collider.local_half_extents.z * transform.scale;
            shot = Some(projectiles::Shot {
                owner: ProjectileOwner::Player,
                origin: transform.position,
                direction: heading,
                inherited_velocity: velocity.0,
                spawn_offset: length * BULLET_SPAWN_OFFSET_FACTOR,
            });
            controls.fire_cooldown = frame.tuning.player_fire_cooldown;
        }

        if visual.active && frame.now - visual.since >= SHIP_DAMAGE_DISPLAY_SECS {
            visual.active = false;
        }
    }

    if let Some(shot) = shot {
        projectiles::fire(world, shot, frame.tuning);
        audio_events.push(AudioEvent::PlayerShot);
    }
}
