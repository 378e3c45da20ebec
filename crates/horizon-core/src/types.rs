//! Fundamental geometric and simulation types.

use glam::{DMat3, DQuat, DVec3};
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current frame number (increments by 1 each active frame).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        self.tick += 1;
        self.elapsed_secs += delta;
    }
}

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` reaching `half_extents` along each axis.
    pub fn from_center(center: DVec3, half_extents: DVec3) -> Self {
        let half = half_extents.abs();
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// World box enclosing a local box of `half_extents` after rotation and uniform scale.
    ///
    /// Equivalent to transforming all eight corners and taking their bounds.
    pub fn from_oriented(
        center: DVec3,
        half_extents: DVec3,
        rotation: DQuat,
        scale: f64,
    ) -> Self {
        let m = DMat3::from_quat(rotation);
        let h = half_extents * scale.abs();
        let world_half = DVec3::new(
            m.x_axis.x.abs() * h.x + m.y_axis.x.abs() * h.y + m.z_axis.x.abs() * h.z,
            m.x_axis.y.abs() * h.x + m.y_axis.y.abs() * h.y + m.z_axis.y.abs() * h.z,
            m.x_axis.z.abs() * h.x + m.y_axis.z.abs() * h.y + m.z_axis.z.abs() * h.z,
        );
        Self::from_center(center, world_half)
    }

    /// Boxes touching on a face count as intersecting.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }
}

/// Local forward axis of every oriented entity (+Z).
pub fn forward(rotation: DQuat) -> DVec3 {
    rotation * DVec3::Z
}

/// Rotation whose +Z axis points along `direction`, keeping `up` as close to +Y as possible.
///
/// Returns identity for a zero direction. Falls back to +X as the reference
/// when `direction` is parallel to `up`.
pub fn look_rotation(direction: DVec3, up: DVec3) -> DQuat {
    let z = direction.normalize_or_zero();
    if z == DVec3::ZERO {
        return DQuat::IDENTITY;
    }
    let mut x = up.cross(z);
    if x.length_squared() < 1e-12 {
        x = DVec3::X.cross(z);
        if x.length_squared() < 1e-12 {
            x = DVec3::Z.cross(z);
        }
    }
    let x = x.normalize();
    let y = z.cross(x);
    DQuat::from_mat3(&DMat3::from_cols(x, y, z)).normalize()
}

/// Rotate `position` about the world up axis through the origin.
pub fn orbit_about_up(position: DVec3, angle: f64) -> DVec3 {
    DQuat::from_rotation_y(angle) * position
}

/// Convert a per-frame interpolation factor tuned at the reference rate into one
/// for a frame of `delta` seconds.
pub fn frame_independent_factor(per_frame: f64, delta: f64) -> f64 {
    let per_frame = per_frame.clamp(0.0, 1.0);
    1.0 - (1.0 - per_frame).powf(delta * crate::constants::REFERENCE_FRAME_RATE)
}

/// Convert a per-frame retention factor tuned at the reference rate into one
/// for a frame of `delta` seconds.
pub fn frame_independent_retention(per_frame: f64, delta: f64) -> f64 {
    per_frame
        .clamp(0.0, 1.0)
        .powf(delta * crate::constants::REFERENCE_FRAME_RATE)
}

/// Linear remap of `value` from `[in_min, in_max]` to `[out_min, out_max]` (unclamped).
pub fn map_linear(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}
