//! Logical input state produced by the host's input-capture collaborator.

use serde::{Deserialize, Serialize};

/// Flags sampled once per frame. The simulation only reads these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub thrust: bool,
    pub boost: bool,
    pub shoot: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
}

impl InputState {
    /// Net pitch, yaw and roll direction in {-1, 0, 1}.
    pub fn rotation_axes(&self) -> (f64, f64, f64) {
        fn axis(positive: bool, negative: bool) -> f64 {
            match (positive, negative) {
                (true, false) => 1.0,
                (false, true) => -1.0,
                _ => 0.0,
            }
        }
        (
            axis(self.pitch_up, self.pitch_down),
            axis(self.yaw_left, self.yaw_right),
            axis(self.roll_left, self.roll_right),
        )
    }
}
