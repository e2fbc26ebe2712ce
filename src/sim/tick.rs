//! Fixed-step simulation tick
//!
//! Order within a tick:
//! 1. drain queued turn requests through the motion controller
//! 2. advance and wrap the head
//! 3. record the new sample, trim history
//! 4. re-resolve every segment
//! 5. count the step toward releasing the turn lock

use super::direction::Direction;
use super::motion::TurnOutcome;
use super::state::Simulation;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Turn request, applied after anything already queued
    pub turn: Option<Direction>,
}

/// Advance the simulation by one step
pub fn tick(sim: &mut Simulation, input: &TickInput) {
    if let Some(turn) = input.turn {
        sim.queue_turn(turn);
    }

    let this_tick = sim.time_ticks + 1;
    while let Some(requested) = sim.pending.pop_front() {
        match sim.motion.request_turn(requested) {
            TurnOutcome::Accepted => {
                sim.last_turn_tick = Some(this_tick);
                log::debug!(
                    "tick {}: turn {:?} accepted at {:?}",
                    this_tick,
                    requested,
                    sim.motion.head
                );
            }
            outcome => {
                log::debug!(
                    "tick {}: turn {:?} dropped ({:?})",
                    this_tick,
                    requested,
                    outcome
                );
            }
        }
    }

    let (head, wrapped) = sim.motion.advance();
    sim.history.record(head, sim.motion.direction, wrapped);
    sim.history.trim(sim.body.length());
    sim.body.update(&sim.history);
    sim.motion.accumulate_travel();

    sim.time_ticks = this_tick;
}
