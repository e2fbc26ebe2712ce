//! Compass directions and the turn rule
//!
//! Screen coordinates: x grows to the right, y grows downward, so `Up`
//! moves toward smaller y.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One of the four travel directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Direction {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit vector of travel
    #[inline]
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// A turn is legal unless it reverses the current travel direction.
    /// Continuing straight counts as a legal turn.
    #[inline]
    pub fn can_turn_to(self, next: Direction) -> bool {
        next != self.opposite()
    }

    /// Classify a displacement by its dominant axis. Ties go to the
    /// horizontal axis; a zero or non-finite vector has no direction.
    pub fn from_vector(v: Vec2) -> Option<Direction> {
        if !v.is_finite() || v == Vec2::ZERO {
            return None;
        }
        let dir = if v.x.abs() >= v.y.abs() {
            if v.x > 0.0 { Direction::Right } else { Direction::Left }
        } else if v.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(dir)
    }
}
