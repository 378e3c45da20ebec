//! Enemy AI for EVENT HORIZON.
//!
//! Implements per-level enemy stat curves, stand-off steering and
//! aim-with-inaccuracy as pure functions over plain data.

pub mod behavior;
pub mod profiles;

pub use horizon_core as core;

#[cfg(test)]
mod tests;
