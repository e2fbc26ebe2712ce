//! Simulation state
//!
//! One owner for everything a tick touches: motion, history, body and the
//! pending input queue. Dropping it tears the whole simulation down.

use std::collections::VecDeque;

use glam::Vec2;
use serde::Serialize;

use super::body::{Body, Segment};
use super::direction::Direction;
use super::history::PathHistory;
use super::motion::Motion;
use super::playfield::Playfield;
use super::ribbon::Ribbon;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct Simulation {
    settings: Settings,
    pub(super) playfield: Playfield,
    pub(super) motion: Motion,
    pub(super) history: PathHistory,
    pub(super) body: Body,
    /// Turn requests waiting for the next tick, oldest first
    pub(super) pending: VecDeque<Direction>,
    /// Simulation tick counter
    pub(super) time_ticks: u64,
    /// Tick on which the last turn was accepted
    pub(super) last_turn_tick: Option<u64>,
}

/// Per-tick output for a renderer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub tick: u64,
    pub head: Vec2,
    pub direction: Direction,
    pub input_locked: bool,
    pub segments: Vec<Segment>,
    /// Body centerline split at wrap seams
    pub centerline: Vec<Vec<Vec2>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ribbon: Option<Vec<Vec2>>,
}

impl Simulation {
    /// Build a simulation. Invalid settings are the only failure.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let playfield = Playfield::new(settings.width, settings.height, settings.segment_size / 2.0);
        let head = settings.head_start();
        let direction = settings.initial_direction;
        let motion = Motion::new(
            head,
            direction,
            settings.step,
            settings.segment_size,
            playfield,
        );
        let history = PathHistory::seeded(
            settings.step,
            head,
            direction,
            settings.body_length(),
            &playfield,
        );
        let body = Body::new(settings.segment_count, settings.segment_size, &history);

        log::info!(
            "Simulation ready: {}x{} playfield, {} segments of {}, step {}, head {:?} heading {:?}",
            settings.width,
            settings.height,
            settings.segment_count,
            settings.segment_size,
            settings.step,
            head,
            direction
        );

        Ok(Self {
            settings,
            playfield,
            motion,
            history,
            body,
            pending: VecDeque::new(),
            time_ticks: 0,
            last_turn_tick: None,
        })
    }

    /// Return to the initial configuration, dropping history and queued input
    pub fn reset(&mut self) {
        let head = self.settings.head_start();
        let direction = self.settings.initial_direction;
        self.motion = Motion::new(
            head,
            direction,
            self.settings.step,
            self.settings.segment_size,
            self.playfield,
        );
        self.history
            .reseed(head, direction, self.body.length(), &self.playfield);
        self.body.update(&self.history);
        self.pending.clear();
        self.time_ticks = 0;
        self.last_turn_tick = None;
        log::info!("Simulation reset");
    }

    /// Queue a turn request for the next tick
    pub fn queue_turn(&mut self, direction: Direction) {
        self.pending.push_back(direction);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    pub fn head(&self) -> Vec2 {
        self.motion.head
    }

    pub fn direction(&self) -> Direction {
        self.motion.direction
    }

    pub fn input_locked(&self) -> bool {
        self.motion.input_locked
    }

    pub fn distance_since_last_turn(&self) -> f32 {
        self.motion.distance_since_last_turn
    }

    pub fn segments(&self) -> &[Segment] {
        self.body.segments()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn history(&self) -> &PathHistory {
        &self.history
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn last_turn_tick(&self) -> Option<u64> {
        self.last_turn_tick
    }

    pub fn pending_turns(&self) -> usize {
        self.pending.len()
    }

    /// Tapered outline around the current body
    pub fn ribbon(&self) -> Ribbon {
        Ribbon::from_segments(
            self.body.segments(),
            &self.settings.ribbon,
            self.settings.segment_size,
        )
    }

    /// Body centerline from head to tail, one run per wrap-free stretch
    pub fn centerline(&self) -> Vec<Vec<Vec2>> {
        self.history.polyline(self.body.length())
    }

    /// Snapshot of everything a renderer needs this tick
    pub fn frame(&self, include_ribbon: bool) -> Frame {
        Frame {
            tick: self.time_ticks,
            head: self.motion.head,
            direction: self.motion.direction,
            input_locked: self.motion.input_locked,
            segments: self.body.segments().to_vec(),
            centerline: self.centerline(),
            ribbon: include_ribbon.then(|| self.ribbon().polygon()),
        }
    }
}
