//! Snapshot system: reads the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only.

use hecs::World;

use horizon_core::components::*;
use horizon_core::enums::GamePhase;
use horizon_core::events::AudioEvent;
use horizon_core::state::*;
use horizon_core::types::SimTime;

use super::speed_field::SpeedFactors;
use super::waves::WaveState;

/// Frame-level state owned by the engine rather than the world.
pub struct FrameState<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub waves: &'a WaveState,
    pub speed: SpeedFactors,
    pub well: &'a WellView,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    frame: &FrameState,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *frame.time,
        phase: frame.phase,
        wave: WaveView {
            level: frame.waves.level(),
            wave_phase: frame.waves.phase(),
            enemies_remaining: frame.waves.enemies_remaining(),
        },
        speed: SpeedView {
            player_speed_factor: frame.speed.player,
            env_speed_factor: frame.speed.env,
        },
        player: build_player(world),
        enemies: build_enemies(world),
        asteroids: build_asteroids(world),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        well: *frame.well,
        audio_events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(
            &PlayerShip,
            &Transform,
            &Velocity,
            &Hull,
            &DamageVisual,
            &ShipControls,
        )>()
        .iter()
        .next()
        .map(|(_, (_, t, v, hull, visual, controls))| PlayerView {
            position: t.position,
            rotation: t.rotation,
            velocity: v.0,
            hits: hull.hits,
            max_hits: hull.max_hits,
            damaged: visual.active,
            boosting: controls.boost_remaining > 0.0,
            boost_cooldown: controls.boost_cooldown,
            constant_thrust: controls.constant_thrust,
        })
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Transform, &HitFlash)>()
        .iter()
        .map(|(_, (enemy, t, flash))| EnemyView {
            kind: enemy.kind,
            position: t.position,
            rotation: t.rotation,
            scale: t.scale,
            health: enemy.health.max(0.0),
            max_health: enemy.max_health,
            emissive: flash.emissive,
        })
        .collect()
}

fn build_asteroids(world: &World) -> Vec<AsteroidView> {
    world
        .query::<(&Asteroid, &Transform)>()
        .iter()
        .map(|(_, (asteroid, t))| AsteroidView {
            size: asteroid.size,
            position: t.position,
            rotation: t.rotation,
            radius: asteroid.radius,
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Transform, &Velocity)>()
        .iter()
        .map(|(_, (projectile, t, v))| ProjectileView {
            owner: projectile.owner,
            position: t.position,
            velocity: v.0,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Transform)>()
        .iter()
        .map(|(_, (explosion, t))| ExplosionView {
            position: t.position,
            scale: t.scale,
            opacity: explosion.opacity,
        })
        .collect()
}
