//! Fundamental coordinate types.

use serde::{Deserialize, Serialize};

use crate::constants::COORD_MAX;

/// 2D position on the field, in percent of the field image's bounding box.
/// Both components stay within [0, 100]; `new` clamps out-of-range input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Build a position, clamping each component to [0, 100].
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: x.clamp(0.0, COORD_MAX),
            y: y.clamp(0.0, COORD_MAX),
        }
    }

    /// This position with both components clamped to [0, 100].
    pub fn clamped(self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Linear interpolation toward `other` by fraction `t`.
    /// `t = 0` yields `self` exactly; `t = 1` yields `other` exactly.
    pub fn lerp(self, other: Position, t: f64) -> Position {
        Position {
            x: self.x * (1.0 - t) + other.x * t,
            y: self.y * (1.0 - t) + other.y * t,
        }
    }
}
