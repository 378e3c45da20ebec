//! Collision detection and resolution.
//!
//! Runs once per frame after bounds refresh. Candidates are gathered up
//! front and every pass walks them back-to-front; anything despawned by an
//! earlier pass (or earlier in the same pass) is skipped. Mutations go
//! through the owning system: `enemies::handle_hit`, `asteroids::split`,
//! `projectiles::remove`, `player::apply_damage`.

use glam::DVec3;
use hecs::{Entity, World};
use rand::Rng;

use horizon_core::components::{Asteroid, Collider, Enemy, PlayerShip, Projectile, Transform};
use horizon_core::constants::*;
use horizon_core::enums::ProjectileOwner;
use horizon_core::events::AudioEvent;
use horizon_core::types::Aabb;

use crate::config::TuningConfig;

use super::{asteroids, effects, enemies, player, projectiles};

/// What the collision pass changed that the wave and game-over logic care about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Enemies confirmed destroyed this frame, one per enemy.
    pub enemies_destroyed: u32,
    /// The ship reached its hit limit this frame.
    pub player_destroyed: bool,
}

struct Candidate {
    entity: Entity,
    bounds: Aabb,
    position: DVec3,
}

struct Candidates {
    player: Option<Candidate>,
    player_bullets: Vec<Candidate>,
    enemy_bullets: Vec<Candidate>,
    enemies: Vec<Candidate>,
    asteroids: Vec<Candidate>,
}

fn gather(world: &World) -> Candidates {
    let candidate = |entity, t: &Transform, c: &Collider| Candidate {
        entity,
        bounds: c.bounds,
        position: t.position,
    };

    let player = world
        .query::<(&PlayerShip, &Transform, &Collider)>()
        .iter()
        .next()
        .map(|(e, (_, t, c))| candidate(e, t, c));

    let mut player_bullets = Vec::new();
    let mut enemy_bullets = Vec::new();
    for (e, (p, t, c)) in world.query::<(&Projectile, &Transform, &Collider)>().iter() {
        match p.owner {
            ProjectileOwner::Player => player_bullets.push(candidate(e, t, c)),
            ProjectileOwner::Enemy => enemy_bullets.push(candidate(e, t, c)),
        }
    }

    let enemies = world
        .query::<(&Enemy, &Transform, &Collider)>()
        .iter()
        .map(|(e, (_, t, c))| candidate(e, t, c))
        .collect();

    let asteroids = world
        .query::<(&Asteroid, &Transform, &Collider)>()
        .iter()
        .map(|(e, (_, t, c))| candidate(e, t, c))
        .collect();

    Candidates {
        player,
        player_bullets,
        enemy_bullets,
        enemies,
        asteroids,
    }
}

/// Run all five collision passes.
///
/// Once the ship is destroyed, the remaining player passes are skipped so
/// destruction is reported exactly once.
pub fn resolve<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    now: f64,
    tuning: &TuningConfig,
    audio_events: &mut Vec<AudioEvent>,
) -> CollisionReport {
    let candidates = gather(world);
    let mut report = CollisionReport::default();

    player_bullets_vs_enemies(world, &candidates, now, tuning, audio_events, &mut report);

    if let Some(ship) = &candidates.player {
        enemy_bullets_vs_player(world, ship, &candidates, now, audio_events, &mut report);
        if !report.player_destroyed {
            player_vs_asteroids(world, rng, ship, &candidates, now, audio_events, &mut report);
        }
        if !report.player_destroyed {
            player_vs_enemies(world, ship, &candidates, now, tuning, audio_events, &mut report);
        }
    }

    bullets_vs_asteroids(world, rng, &candidates, audio_events);

    if report.enemies_destroyed > 0 || report.player_destroyed {
        log::debug!("Collision report: {report:?}");
    }
    report
}

/// A player bullet damages at most one enemy.
fn player_bullets_vs_enemies(
    world: &mut World,
    candidates: &Candidates,
    now: f64,
    tuning: &TuningConfig,
    audio_events: &mut Vec<AudioEvent>,
    report: &mut CollisionReport,
) {
    for bullet in candidates.player_bullets.iter().rev() {
        if !world.contains(bullet.entity) {
            continue;
        }
        for enemy in candidates.enemies.iter().rev() {
            if !world.contains(enemy.entity) || !bullet.bounds.intersects(&enemy.bounds) {
                continue;
            }
            effects::spawn_explosion(world, bullet.position, audio_events);
            if enemies::handle_hit(world, enemy.entity, tuning.bullet_damage, now, audio_events) {
                report.enemies_destroyed += 1;
            }
            projectiles::remove(world, bullet.entity);
            break;
        }
    }
}

fn enemy_bullets_vs_player(
    world: &mut World,
    ship: &Candidate,
    candidates: &Candidates,
    now: f64,
    audio_events: &mut Vec<AudioEvent>,
    report: &mut CollisionReport,
) {
    for bullet in candidates.enemy_bullets.iter().rev() {
        if !world.contains(bullet.entity) || !bullet.bounds.intersects(&ship.bounds) {
            continue;
        }
        effects::spawn_explosion(world, bullet.position, audio_events);
        projectiles::remove(world, bullet.entity);
        if player::apply_damage(world, ENEMY_BULLET_HITS, now, audio_events) {
            report.player_destroyed = true;
            return;
        }
    }
}

/// Single hit per frame: the first overlapping asteroid is destroyed and the pass stops.
fn player_vs_asteroids<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    ship: &Candidate,
    candidates: &Candidates,
    now: f64,
    audio_events: &mut Vec<AudioEvent>,
    report: &mut CollisionReport,
) {
    let hit = candidates
        .asteroids
        .iter()
        .rev()
        .find(|a| world.contains(a.entity) && a.bounds.intersects(&ship.bounds));
    let Some(asteroid) = hit else {
        return;
    };

    effects::spawn_explosion(world, asteroid.position, audio_events);
    asteroids::split(world, rng, asteroid.entity, None, audio_events);
    if player::apply_damage(world, ASTEROID_COLLISION_HITS, now, audio_events) {
        report.player_destroyed = true;
    }
}

fn player_vs_enemies(
    world: &mut World,
    ship: &Candidate,
    candidates: &Candidates,
    now: f64,
    tuning: &TuningConfig,
    audio_events: &mut Vec<AudioEvent>,
    report: &mut CollisionReport,
) {
    for enemy in candidates.enemies.iter().rev() {
        if !world.contains(enemy.entity) || !enemy.bounds.intersects(&ship.bounds) {
            continue;
        }
        effects::spawn_explosion(world, ship.position, audio_events);
        effects::spawn_explosion(world, enemy.position, audio_events);

        let destroyed = player::apply_damage(world, RAM_HITS_TO_PLAYER, now, audio_events);
        if enemies::handle_hit(world, enemy.entity, tuning.ram_damage, now, audio_events) {
            report.enemies_destroyed += 1;
        }
        if destroyed {
            report.player_destroyed = true;
            return;
        }
    }
}

/// Every live bullet, player or enemy, destroys at most one asteroid.
fn bullets_vs_asteroids<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    candidates: &Candidates,
    audio_events: &mut Vec<AudioEvent>,
) {
    let bullets = candidates
        .player_bullets
        .iter()
        .chain(candidates.enemy_bullets.iter());

    for bullet in bullets.rev() {
        if !world.contains(bullet.entity) {
            continue;
        }
        for asteroid in candidates.asteroids.iter().rev() {
            if !world.contains(asteroid.entity) || !bullet.bounds.intersects(&asteroid.bounds) {
                continue;
            }
            asteroids::split(world, rng, asteroid.entity, Some(bullet.entity), audio_events);
            break;
        }
    }
}
