//! Path history buffer
//!
//! Every tick the head lands on a new sample exactly one step past the
//! previous one. Followers never talk to each other; each one asks this
//! buffer "where was the head `arc` units ago?".
//!
//! Samples are stored newest first, so sample `i` sits exactly `i * step`
//! behind the head in arc length. That holds across a wrap too: the raw
//! coordinate jumps, but the stretch still counts as one step.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::playfield::Playfield;
use crate::consts::ARC_EPSILON;

/// How far a point may sit off the path and still be located on it
const LOCATE_TOLERANCE: f32 = 1e-2;

/// One recorded head position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistorySample {
    pub position: Vec2,
    /// Direction of travel that produced this sample
    pub direction: Direction,
    /// The step into this sample crossed a playfield edge
    #[serde(default)]
    pub seam: bool,
}

/// Ordered log of head samples, newest first, never empty
#[derive(Debug, Clone)]
pub struct PathHistory {
    samples: VecDeque<HistorySample>,
    step: f32,
}

impl PathHistory {
    /// Build a history with synthetic straight-line samples behind `head`,
    /// deep enough to resolve `max_arc` from the first tick.
    pub fn seeded(
        step: f32,
        head: Vec2,
        direction: Direction,
        max_arc: f32,
        playfield: &Playfield,
    ) -> Self {
        let mut history = Self {
            samples: VecDeque::new(),
            step,
        };
        history.reseed(head, direction, max_arc, playfield);
        history
    }

    /// Discard everything and lay down straight history behind `head`
    pub fn reseed(&mut self, head: Vec2, direction: Direction, max_arc: f32, playfield: &Playfield) {
        let count = self.capacity_for(max_arc);
        let back = -direction.unit() * self.step;

        self.samples.clear();
        self.samples.reserve(count);
        self.samples.push_back(HistorySample {
            position: head,
            direction,
            seam: false,
        });

        let mut pos = head;
        for _ in 1..count {
            let (older, wrapped) = playfield.wrap(pos + back);
            if wrapped {
                if let Some(newer) = self.samples.back_mut() {
                    newer.seam = true;
                }
            }
            self.samples.push_back(HistorySample {
                position: older,
                direction,
                seam: false,
            });
            pos = older;
        }
    }

    /// Append the head's new location after one motion step
    pub fn record(&mut self, position: Vec2, direction: Direction, seam: bool) {
        self.samples.push_front(HistorySample {
            position,
            direction,
            seam,
        });
    }

    /// Drop samples no follower at `max_arc` or closer can reach,
    /// keeping one step of slack
    pub fn trim(&mut self, max_arc: f32) {
        let keep = self.capacity_for(max_arc);
        self.samples.truncate(keep);
    }

    /// Samples needed to resolve `max_arc`: indices `0..=ceil(max_arc / step)`
    /// plus one of slack
    pub fn capacity_for(&self, max_arc: f32) -> usize {
        let (index, remainder) = self.split(max_arc.max(0.0));
        let reach = if remainder > 0.0 { index + 1 } else { index };
        reach + 2
    }

    /// Position and travel direction `arc_back` units behind the newest sample.
    ///
    /// A query past the oldest sample clamps to it. Seeded history makes that
    /// unreachable for followers, so it is logged when it happens.
    pub fn sample_at(&self, arc_back: f32) -> (Vec2, Direction) {
        let (index, remainder) = self.split(arc_back.max(0.0));
        let last = self.samples.len() - 1;
        if index > last || (index == last && remainder > 0.0) {
            let oldest = self.samples[last];
            log::warn!(
                "history query at arc {} exceeds recorded depth {}; clamping to oldest sample",
                arc_back,
                self.depth()
            );
            return (oldest.position, oldest.direction);
        }

        let sample = self.samples[index];
        // Back off along the stretch that led into this sample
        let position = sample.position - sample.direction.unit() * remainder;
        (position, sample.direction)
    }

    /// Split an arc length into a whole sample index and the leftover distance
    fn split(&self, arc: f32) -> (usize, f32) {
        let steps = arc / self.step;
        let whole = steps.round();
        if (steps - whole).abs() < ARC_EPSILON {
            return (whole as usize, 0.0);
        }
        let index = steps.floor();
        (index as usize, (steps - index) * self.step)
    }

    /// Arc length of the stretch from sample `index + 1` into sample `index`.
    /// A seam stretch still counts as exactly one step.
    pub fn stretch_length(&self, index: usize) -> Option<f32> {
        let newer = self.samples.get(index)?;
        let older = self.samples.get(index + 1)?;
        if newer.seam {
            Some(self.step)
        } else {
            Some(newer.position.distance(older.position))
        }
    }

    /// Every non-seam stretch is one step long and heads the way its newer
    /// sample says it does
    #[doc(hidden)]
    pub fn is_consistent(&self) -> bool {
        (0..self.samples.len().saturating_sub(1)).all(|i| {
            let newer = self.samples[i];
            if newer.seam {
                return true;
            }
            let older = self.samples[i + 1];
            let delta = newer.position - older.position;
            (delta.length() - self.step).abs() < LOCATE_TOLERANCE
                && Direction::from_vector(delta) == Some(newer.direction)
        })
    }

    /// Turn corners within `max_arc` of the head, newest first.
    /// This is the sparse breakpoint view of the history.
    pub fn corners(&self, max_arc: f32) -> Vec<Vec2> {
        let end = self.split(max_arc.max(0.0)).0.min(self.samples.len() - 1);
        (1..=end)
            .filter(|&i| self.samples[i].direction != self.samples[i - 1].direction)
            .map(|i| self.samples[i].position)
            .collect()
    }

    /// Path from the head back to `max_arc` as polyline runs: head, corners,
    /// end point. A new run starts at every wrap seam; both runs overshoot
    /// the seam by one step so they reach past the playfield edge.
    pub fn polyline(&self, max_arc: f32) -> Vec<Vec<Vec2>> {
        let (tail, _) = self.sample_at(max_arc);
        let end = self.split(max_arc.max(0.0)).0.min(self.samples.len() - 1);

        let mut runs = Vec::new();
        let mut run = vec![self.samples[0].position];
        for i in 1..=end {
            let newer = self.samples[i - 1];
            let older = self.samples[i];
            if newer.seam {
                // Carry each side one step past the edge it crossed
                let stretch = newer.direction.unit() * self.step;
                push_distinct(&mut run, newer.position - stretch);
                runs.push(std::mem::replace(&mut run, vec![older.position + stretch]));
            } else if older.direction != newer.direction {
                run.push(older.position);
            }
        }
        push_distinct(&mut run, tail);
        runs.push(run);
        runs.retain(|run| run.len() >= 2);
        runs
    }

    /// Arc length at which the recorded path passes through `point`,
    /// searching from `from_arc` toward the tail
    #[doc(hidden)]
    pub fn locate(&self, point: Vec2, from_arc: f32) -> Option<f32> {
        let start = (from_arc.max(0.0) / self.step).floor() as usize;
        let last = self.samples.len() - 1;
        for k in start..=last {
            let sample = self.samples[k];
            let unit = sample.direction.unit();
            let d = sample.position - point;
            let along = d.dot(unit);
            let off_path = (d - unit * along).length();
            let reach = if k < last { self.step } else { 0.0 };
            if off_path < LOCATE_TOLERANCE
                && along >= -LOCATE_TOLERANCE
                && along <= reach + LOCATE_TOLERANCE
            {
                let arc = k as f32 * self.step + along.max(0.0);
                if arc >= from_arc - LOCATE_TOLERANCE {
                    return Some(arc);
                }
            }
        }
        None
    }

    pub fn newest(&self) -> HistorySample {
        self.samples[0]
    }

    pub fn get(&self, index: usize) -> Option<&HistorySample> {
        self.samples.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Arc length covered by the recorded samples
    pub fn depth(&self) -> f32 {
        (self.samples.len() - 1) as f32 * self.step
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

fn push_distinct(run: &mut Vec<Vec2>, point: Vec2) {
    if run.last().is_none_or(|last| last.distance(point) > LOCATE_TOLERANCE) {
        run.push(point);
    }
}
