//! Ribbon outline: a tapered polygon around the body
//!
//! Derived entirely from the current segments. Holds nothing between ticks.

use glam::Vec2;
use serde::Serialize;

use super::body::Segment;
use crate::lerp;
use crate::perpendicular;
use crate::settings::RibbonSettings;

/// Boundary points on both sides of the body, head to tail.
///
/// "Left" and "right" are relative to the direction of travel in screen
/// coordinates (y down).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ribbon {
    pub left: Vec<Vec2>,
    pub right: Vec<Vec2>,
}

impl Ribbon {
    /// Build the outline for `segments`, with half widths scaled by
    /// `segment_size`
    pub fn from_segments(segments: &[Segment], settings: &RibbonSettings, segment_size: f32) -> Self {
        let last = segments.len().saturating_sub(1).max(1) as f32;
        let mut left = Vec::with_capacity(segments.len());
        let mut right = Vec::with_capacity(segments.len());

        for segment in segments {
            let half = half_width(settings, segment_size, segment.index as f32 / last);
            let side = perpendicular(segment.direction.unit()) * half;
            right.push(segment.position + side);
            left.push(segment.position - side);
        }

        Self { left, right }
    }

    /// Closed outline: left side head to tail, then right side tail to head
    pub fn polygon(&self) -> Vec<Vec2> {
        self.left
            .iter()
            .chain(self.right.iter().rev())
            .copied()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Half width at normalized position `t` (0 = head, 1 = tail)
pub fn half_width(settings: &RibbonSettings, segment_size: f32, t: f32) -> f32 {
    let head = settings.head_fraction * segment_size;
    let tail = settings.tail_fraction * segment_size;
    lerp(tail, head, settings.taper.factor(t))
}
