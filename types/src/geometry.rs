//! Screen-space geometry.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in render-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink the rectangle by `margin` on every side.
    ///
    /// Width and height each lose `2 * margin`. The result is not clamped,
    /// so a rectangle smaller than the margin comes back with a negative size.
    pub fn inset(self, margin: f32) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - margin * 2.0,
            height: self.height - margin * 2.0,
        }
    }
}
