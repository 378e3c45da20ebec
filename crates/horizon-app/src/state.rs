//! State shared between the host thread and the game loop thread.

use std::sync::{Arc, Mutex};

use horizon_core::commands::PlayerCommand;
use horizon_core::enums::GamePhase;
use horizon_core::state::GameStateSnapshot;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot for synchronous polling, written by the game loop after each frame.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// How a game loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
    pub phase: GamePhase,
    pub level: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = new_shared_snapshot();
        assert!(shared.lock().unwrap().is_none());

        *shared.lock().unwrap() = Some(GameStateSnapshot::default());
        assert_eq!(
            shared.lock().unwrap().as_ref().map(|s| s.phase),
            Some(GamePhase::MainMenu)
        );
    }
}
