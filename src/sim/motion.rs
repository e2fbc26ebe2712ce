//! Motion controller: head advance, wrap, and the turn debounce
//!
//! Two states over `input_locked`:
//! - Idle: the next legal turn is latched and the controller locks.
//! - Locked: turns are dropped until the head has covered one segment size
//!   since the last accepted turn. Two turns inside one spacing quantum would
//!   put a corner between two segments that share a straight stretch.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::playfield::Playfield;

/// Result of a turn request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Direction latched, controller locked
    Accepted,
    /// Opposite of the current direction
    Reversal,
    /// Debounce still active
    Locked,
}

/// Head position, heading and debounce state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    pub head: Vec2,
    pub direction: Direction,
    pub input_locked: bool,
    /// Travel since the last accepted turn
    pub distance_since_last_turn: f32,
    step: f32,
    unlock_distance: f32,
    playfield: Playfield,
}

impl Motion {
    pub fn new(
        head: Vec2,
        direction: Direction,
        step: f32,
        unlock_distance: f32,
        playfield: Playfield,
    ) -> Self {
        Self {
            head,
            direction,
            input_locked: false,
            distance_since_last_turn: 0.0,
            step,
            unlock_distance,
            playfield,
        }
    }

    /// Try to change heading. Reversals and requests during the debounce are
    /// no-ops; the outcome says which.
    pub fn request_turn(&mut self, next: Direction) -> TurnOutcome {
        if self.input_locked {
            return TurnOutcome::Locked;
        }
        if !self.direction.can_turn_to(next) {
            return TurnOutcome::Reversal;
        }
        self.direction = next;
        self.input_locked = true;
        self.distance_since_last_turn = 0.0;
        TurnOutcome::Accepted
    }

    /// Move the head one step and wrap it. Returns the new head and whether
    /// it crossed an edge.
    pub fn advance(&mut self) -> (Vec2, bool) {
        let moved = self.head + self.direction.unit() * self.step;
        let (head, wrapped) = self.playfield.wrap(moved);
        self.head = head;
        (head, wrapped)
    }

    /// Count the step just taken and release the lock once a full segment
    /// has been covered. Call after the new sample is recorded.
    pub fn accumulate_travel(&mut self) {
        self.distance_since_last_turn += self.step;
        if self.input_locked && self.distance_since_last_turn >= self.unlock_distance {
            self.input_locked = false;
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}
