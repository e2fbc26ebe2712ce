//! Toroidal playfield bounds

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Playfield with wrap-around edges.
///
/// A coordinate may overshoot an edge by up to `margin` (half a segment)
/// before it jumps to the opposite edge, so a segment slides fully out of
/// view before reappearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Apply the wrap rule to each axis independently.
    /// Returns the wrapped position and whether any axis jumped.
    pub fn wrap(&self, pos: Vec2) -> (Vec2, bool) {
        let (x, wrapped_x) = wrap_axis(pos.x, self.width, self.margin);
        let (y, wrapped_y) = wrap_axis(pos.y, self.height, self.margin);
        (Vec2::new(x, y), wrapped_x || wrapped_y)
    }
}

#[inline]
fn wrap_axis(value: f32, extent: f32, margin: f32) -> (f32, bool) {
    if value > extent + margin {
        (0.0, true)
    } else if value < -margin {
        (extent, true)
    } else {
        (value, false)
    }
}
