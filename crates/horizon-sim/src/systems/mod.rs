//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are functions over `&mut World` (or `&World` for read-only).
//! Each entity kind is spawned and despawned by exactly one module here;
//! `collision` calls into those modules rather than despawning directly.

pub mod asteroids;
pub mod bounds;
pub mod collision;
pub mod effects;
pub mod enemies;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod speed_field;
pub mod waves;
