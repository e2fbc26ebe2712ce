//! Segment follower set
//!
//! Segment `i` trails the head by exactly `i * segment_size` of arc length.
//! Positions are re-resolved from the shared history every tick; no segment
//! ever looks at its neighbours, so spacing cannot drift.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::history::PathHistory;

/// One body segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    /// Arc length behind the head (fixed at construction)
    pub arc_offset: f32,
    pub position: Vec2,
    pub direction: Direction,
}

/// Fixed, ordered list of segments: index 0 rides on the head, the last one
/// is the tail
#[derive(Debug, Clone)]
pub struct Body {
    segments: Vec<Segment>,
    spacing: f32,
}

impl Body {
    /// Lay out `count` segments `spacing` apart and resolve their positions
    pub fn new(count: usize, spacing: f32, history: &PathHistory) -> Self {
        let newest = history.newest();
        let segments = (0..count)
            .map(|index| Segment {
                index,
                arc_offset: index as f32 * spacing,
                position: newest.position,
                direction: newest.direction,
            })
            .collect();
        let mut body = Self { segments, spacing };
        body.update(history);
        body
    }

    /// Re-resolve every segment from the history. Call once per tick after
    /// the head sample has been recorded.
    pub fn update(&mut self, history: &PathHistory) {
        for segment in &mut self.segments {
            let (position, direction) = history.sample_at(segment.arc_offset);
            segment.position = position;
            segment.direction = direction;
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn tail(&self) -> Option<&Segment> {
        self.segments.last()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Arc offset of the tail
    pub fn length(&self) -> f32 {
        self.segments.last().map_or(0.0, |s| s.arc_offset)
    }
}
