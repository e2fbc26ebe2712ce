//! Configuration errors
//!
//! Only construction can fail. Once a [`crate::Simulation`] exists, every
//! tick is infallible.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("initial head ({x}, {y}) lies outside the playfield and its wrap margin")]
    HeadOutsidePlayfield { x: f32, y: f32 },
    #[error("segment count must be at least 1")]
    ZeroSegments,
    #[error("ribbon half widths must satisfy 0 <= tail <= head (got head {head}, tail {tail})")]
    InvalidTaper { head: f32, tail: f32 },
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
