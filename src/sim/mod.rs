//! Deterministic simulation module
//!
//! All path-following logic lives here. This module must stay pure and
//! deterministic:
//! - One fixed step per tick, no frame-rate coupling
//! - Input only through the turn queue, drained at the start of a tick
//! - No rendering or platform dependencies

pub mod body;
pub mod direction;
pub mod history;
pub mod motion;
pub mod playfield;
pub mod ribbon;
pub mod state;
pub mod tick;

pub use body::{Body, Segment};
pub use direction::Direction;
pub use history::{HistorySample, PathHistory};
pub use motion::{Motion, TurnOutcome};
pub use playfield::Playfield;
pub use ribbon::{Ribbon, half_width};
pub use state::{Frame, Simulation};
pub use tick::{TickInput, tick};
