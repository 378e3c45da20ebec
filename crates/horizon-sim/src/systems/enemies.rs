//! Enemy director: spawning waves and bosses, per-frame AI and firing,
//! hit handling and destruction.
//!
//! Steering and aim math lives in `horizon_enemy_ai`; this module applies it
//! to the ECS world and owns every enemy entity's lifecycle.

use std::f64::consts::TAU;

use glam::{DQuat, DVec3};
use hecs::{Entity, World};
use rand::Rng;

use horizon_core::components::{Collider, Enemy, HitFlash, Transform};
use horizon_core::constants::*;
use horizon_core::enums::{EnemyKind, EnemyState, ProjectileOwner};
use horizon_core::events::AudioEvent;
use horizon_core::types::Aabb;
use horizon_enemy_ai::behavior::{self, EnemyContext};
use horizon_enemy_ai::profiles::get_profile;

use crate::assets::AssetCatalog;
use crate::config::TuningConfig;

use super::{effects, projectiles};

/// Per-frame inputs shared by every enemy.
pub struct EnemyFrame<'a> {
    /// `None` while there is no live player; enemies then hold still.
    pub player_position: Option<DVec3>,
    pub delta: f64,
    pub env_speed_factor: f64,
    pub now: f64,
    pub tuning: &'a TuningConfig,
}

/// Spawn a wave of normal enemies on a ring around `center`, never inside
/// the safe radius. Returns how many were spawned.
pub fn spawn_wave<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    assets: &AssetCatalog,
    level: u32,
    count: u32,
    center: DVec3,
    now: f64,
) -> u32 {
    for _ in 0..count {
        let mut r = rng.gen_range(ENEMY_SPAWN_MIN_RADIUS..ENEMY_SPAWN_MAX_RADIUS);
        if r < ENEMY_SAFE_RADIUS {
            r = ENEMY_SAFE_RADIUS + rng.gen_range(0.0..ENEMY_SPAWN_MAX_RADIUS - ENEMY_SAFE_RADIUS);
        }
        let angle = rng.gen_range(0.0..TAU);
        let y = ENEMY_SPAWN_HEIGHT_SPREAD * (0.5 - rng.gen::<f64>());
        let position = center + DVec3::new(angle.cos() * r, y, angle.sin() * r);
        spawn_enemy(world, assets, EnemyKind::Normal, level, position, now);
    }
    log::info!("Spawned wave of {count} enemies at level {level}");
    count
}

/// Spawn a boss at its fixed position plus any escorts the level calls for.
/// Returns the total spawned (boss + escorts).
pub fn spawn_boss<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    assets: &AssetCatalog,
    level: u32,
    now: f64,
) -> u32 {
    let boss_position = DVec3::from_array(BOSS_SPAWN_POSITION);
    spawn_enemy(world, assets, EnemyKind::Boss, level, boss_position, now);

    let escorts = get_profile(EnemyKind::Boss, level).escorts;
    let spread = DVec3::from_array(ESCORT_OFFSET_SPREAD);
    for _ in 0..escorts {
        let jitter = DVec3::new(
            rng.gen::<f64>() - 0.5,
            rng.gen::<f64>() - 0.5,
            rng.gen::<f64>() - 0.5,
        );
        spawn_enemy(
            world,
            assets,
            EnemyKind::Normal,
            level,
            boss_position + jitter * spread,
            now,
        );
    }
    log::info!("Spawned boss with {escorts} escorts at level {level}");
    1 + escorts
}

/// Spawn one enemy at the start of its grow-in.
pub fn spawn_enemy(
    world: &mut World,
    assets: &AssetCatalog,
    kind: EnemyKind,
    level: u32,
    position: DVec3,
    now: f64,
) -> Entity {
    let profile = get_profile(kind, level);
    let half = assets.enemy_half_extents(kind);

    world.spawn((
        Enemy {
            kind,
            level,
            health: profile.health,
            max_health: profile.health,
            speed: profile.speed,
            fire_rate: profile.fire_rate,
            accuracy: profile.accuracy,
            last_shot_time: 0.0,
            state: EnemyState::Attacking,
            spawn_time: Some(now),
            escorts: profile.escorts,
        },
        HitFlash {
            emissive: ENEMY_BASE_EMISSIVE,
            saved_emissive: None,
            hit_time: None,
        },
        Transform {
            position,
            rotation: DQuat::IDENTITY,
            scale: ENEMY_SPAWN_SCALE,
        },
        Collider {
            local_half_extents: half,
            bounds: Aabb::from_oriented(position, half, DQuat::IDENTITY, ENEMY_SPAWN_SCALE),
        },
    ))
}

/// Run one frame of enemy behavior: grow-in, facing, stand-off movement, firing.
pub fn advance<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    frame: &EnemyFrame,
    audio_events: &mut Vec<AudioEvent>,
) {
    let mut shots = Vec::new();

    for (_entity, (enemy, transform, collider)) in
        world.query_mut::<(&mut Enemy, &mut Transform, &mut Collider)>()
    {
        let final_scale = get_profile(enemy.kind, enemy.level).final_scale;

        if let Some(spawned_at) = enemy.spawn_time {
            let elapsed = frame.now - spawned_at;
            if elapsed < ENEMY_SPAWN_DURATION {
                let progress = (elapsed / ENEMY_SPAWN_DURATION).max(0.0);
                transform.scale = ENEMY_SPAWN_SCALE + progress * (final_scale - ENEMY_SPAWN_SCALE);
            } else {
                transform.scale = final_scale;
                enemy.spawn_time = None;
                collider.bounds = Aabb::from_oriented(
                    transform.position,
                    collider.local_half_extents,
                    transform.rotation,
                    transform.scale,
                );
            }
            continue;
        }

        let Some(player_position) = frame.player_position else {
            continue;
        };
        if enemy.state != EnemyState::Attacking {
            continue;
        }

        let update = behavior::evaluate(&EnemyContext {
            position: transform.position,
            rotation: transform.rotation,
            player_position,
            speed: enemy.speed,
            standoff: get_profile(enemy.kind, enemy.level).standoff,
            delta: frame.delta,
            env_speed_factor: frame.env_speed_factor,
            elapsed_secs: frame.now,
        });
        transform.rotation = update.new_rotation;
        transform.position = update.new_position;

        if behavior::ready_to_fire(frame.now, enemy.last_shot_time, enemy.fire_rate) {
            let direction =
                behavior::aim_direction(rng, transform.position, player_position, enemy.accuracy);
            let length = 2.0 * collider.local_half_extents.z * transform.scale;
            shots.push(projectiles::Shot {
                owner: ProjectileOwner::Enemy,
                origin: transform.position,
                direction,
                inherited_velocity: DVec3::ZERO,
                spawn_offset: length * BULLET_SPAWN_OFFSET_FACTOR,
            });
            enemy.last_shot_time = frame.now;
            audio_events.push(AudioEvent::EnemyShot { kind: enemy.kind });
        }
    }

    for shot in shots {
        projectiles::fire(world, shot, frame.tuning);
    }
}

/// Apply `damage` to an enemy and flash it. Returns true if the hit destroyed
/// it, in which case the enemy is despawned and an explosion left behind.
/// Stale handles return false.
pub fn handle_hit(
    world: &mut World,
    enemy: Entity,
    damage: f64,
    now: f64,
    audio_events: &mut Vec<AudioEvent>,
) -> bool {
    let (destroyed, position) =
        match world.query_one_mut::<(&mut Enemy, &mut HitFlash, &Transform)>(enemy) {
            Ok((stats, flash, transform)) => {
                stats.health -= damage;
                if flash.saved_emissive.is_none() {
                    flash.saved_emissive = Some(flash.emissive);
                }
                flash.emissive = ENEMY_FLASH_EMISSIVE;
                flash.hit_time = Some(now);
                log::debug!(
                    "{:?} enemy hit for {damage}: {}/{}",
                    stats.kind,
                    stats.health.max(0.0),
                    stats.max_health
                );
                (stats.health <= 0.0, transform.position)
            }
            Err(_) => return false,
        };

    if destroyed {
        let _ = world.despawn(enemy);
        effects::spawn_explosion(world, position, audio_events);
    } else {
        audio_events.push(AudioEvent::Hit { position });
    }
    destroyed
}

/// Restore the pre-flash emissive of every enemy whose flash window elapsed.
pub fn revert_hit_visuals(world: &mut World, now: f64) {
    for (_entity, (_enemy, flash)) in world.query_mut::<(&Enemy, &mut HitFlash)>() {
        let Some(hit_time) = flash.hit_time else {
            continue;
        };
        if now - hit_time > ENEMY_HIT_FLASH_SECS {
            flash.emissive = flash.saved_emissive.take().unwrap_or(ENEMY_BASE_EMISSIVE);
            flash.hit_time = None;
        }
    }
}
