//! Gameplay simulation for EVENT HORIZON.
//!
//! Owns the hecs ECS world, runs systems once per frame, and produces
//! GameStateSnapshots for the renderer and audio collaborators.

pub mod assets;
pub mod config;
pub mod engine;
pub mod error;
pub mod persistence;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use horizon_core as core;
