//! Shelf geometry: poses of bin openings relative to the robot base.
//!
//! Column `c` sits `c * bin_width` to the right of the origin bin (negative
//! `y`), row `r` sits `r * bin_height` above it. The safe pose backs off from
//! the bin opening by half a bin depth plus a security distance along `x`.

use std::fmt;
use std::ops::Add;

use crate::layout::GridPosition;

/// Cartesian pose: position in metres, orientation as roll/pitch/yaw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl Pose {
    pub const fn new(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Self {
        Self {
            x,
            y,
            z,
            roll,
            pitch,
            yaw,
        }
    }

    pub const fn from_array(a: [f64; 6]) -> Self {
        Self::new(a[0], a[1], a[2], a[3], a[4], a[5])
    }
}

impl Add for Pose {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.roll + rhs.roll,
            self.pitch + rhs.pitch,
            self.yaw + rhs.yaw,
        )
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.3}, {:.3}, {:.3}, {:.3}, {:.3}, {:.3})",
            self.x, self.y, self.z, self.roll, self.pitch, self.yaw
        )
    }
}

/// Physical dimensions of the shelf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfGeometry {
    /// Pose of the bin at row 0, column 0.
    pub origin: Pose,
    pub bin_width: f64,
    pub bin_height: f64,
    pub bin_depth: f64,
    /// Clearance kept in front of the bin opening.
    pub security_distance: f64,
}

impl Default for ShelfGeometry {
    fn default() -> Self {
        Self {
            origin: Pose::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0),
            bin_width: 0.2,
            bin_height: 0.2,
            bin_depth: 0.2,
            security_distance: 0.05,
        }
    }
}

impl ShelfGeometry {
    /// Pose of the opening of the bin at `position`.
    #[allow(clippy::cast_precision_loss)]
    pub fn bin_pose(&self, position: GridPosition) -> Pose {
        let offset = Pose::new(
            0.0,
            0.0 - position.column as f64 * self.bin_width,
            position.row as f64 * self.bin_height,
            0.0,
            0.0,
            0.0,
        );
        self.origin + offset
    }

    /// Approach pose in front of the bin at `position`.
    pub fn bin_safe_pose(&self, position: GridPosition) -> Pose {
        let back_off = Pose::new(
            -self.bin_depth / 2.0 - self.security_distance,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
        );
        self.bin_pose(position) + back_off
    }
}
