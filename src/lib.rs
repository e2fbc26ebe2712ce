//! Snake Trail - a trailing-segment path follower
//!
//! Core modules:
//! - `sim`: Deterministic tick simulation (motion, path history, followers, ribbon)
//! - `settings`: Construction-time configuration and validation
//! - `error`: Configuration errors
//!
//! Drawing, keyboard capture and window management live outside this crate.
//! Callers push turn requests in and read a [`sim::Frame`] out every tick.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{RibbonSettings, Settings, Taper};
pub use sim::{Direction, Frame, Simulation, TickInput};

use glam::Vec2;

/// Default configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1600.0;

    /// Segment diameter, which is also the arc-length spacing between segments
    pub const SEGMENT_SIZE: f32 = 60.0;
    /// Number of body segments (segment 0 sits on the head)
    pub const SEGMENT_COUNT: usize = 8;
    /// Distance the head travels per tick
    pub const STEP: f32 = 10.0;

    /// Ribbon half width at the head, as a fraction of the segment size
    pub const RIBBON_HEAD_FRACTION: f32 = 0.5;
    /// Ribbon half width at the tail, as a fraction of the segment size
    pub const RIBBON_TAIL_FRACTION: f32 = 0.05;
    /// Steepness of the arctangent taper
    pub const ATAN_TAPER_STEEPNESS: f32 = 3.0;

    /// Tolerance for arc-length comparisons
    pub const ARC_EPSILON: f32 = 1e-3;
}

/// Rotate a vector a quarter turn counter-clockwise (in y-up terms)
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Linear interpolation between two scalars
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
