//! EVENT HORIZON host application.
//!
//! Wires the simulation crates to a fixed-rate game-loop thread, an autopilot
//! input source for headless runs, and an optional audio-cue sink.

pub mod audio;
pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use horizon_core as core;
