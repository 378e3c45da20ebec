//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::input::InputState;

/// All possible player and menu actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart) an arcade run from the persisted level.
    StartGame,
    /// Abandon the current run and return to the main menu.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Replace the current input flags.
    SetInput { input: InputState },
    /// Toggle hands-free forward thrust.
    ToggleConstantThrust,
}
