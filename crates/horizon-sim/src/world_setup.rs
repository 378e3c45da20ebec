//! World setup and teardown for runs and the menu backdrop.

use hecs::{Entity, World};
use rand::Rng;

use horizon_core::components::{Enemy, PlayerShip, Projectile};

use crate::assets::AssetCatalog;
use crate::config::TuningConfig;
use crate::systems::{asteroids, player};

/// Populate a cleared world for a new run: the ship and a full asteroid field.
pub fn setup_run<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    assets: &AssetCatalog,
    tuning: &TuningConfig,
) -> Entity {
    let ship = player::spawn(world, assets, tuning);
    asteroids::spawn_field(world, rng, tuning.asteroid_field_count);
    ship
}

/// Populate a cleared world with the lighter asteroid field shown behind the menu.
pub fn setup_menu_backdrop<R: Rng + ?Sized>(world: &mut World, rng: &mut R, tuning: &TuningConfig) {
    asteroids::spawn_field(world, rng, tuning.menu_asteroid_count);
}

/// Drop everything a finished run owns. Asteroids and explosions stay as backdrop.
pub fn release_run(world: &mut World) {
    let mut doomed: Vec<Entity> = Vec::new();
    doomed.extend(world.query::<&PlayerShip>().iter().map(|(e, _)| e));
    doomed.extend(world.query::<&Enemy>().iter().map(|(e, _)| e));
    doomed.extend(world.query::<&Projectile>().iter().map(|(e, _)| e));
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}
