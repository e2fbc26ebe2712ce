//! Simulation settings
//!
//! Set once when the simulation is built and never changed afterwards.
//! Loaded from JSON; any field left out falls back to its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Direction;

/// Shape of the ribbon half width from head to tail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Taper {
    /// Half width falls off linearly with segment index
    #[default]
    Linear,
    /// Half width follows `1 - atan(k t) / atan(k)`: stays full near the head,
    /// then narrows quickly
    Arctangent,
}

impl Taper {
    pub fn as_str(&self) -> &'static str {
        match self {
            Taper::Linear => "linear",
            Taper::Arctangent => "arctangent",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Some(Taper::Linear),
            "arctangent" | "atan" => Some(Taper::Arctangent),
            _ => None,
        }
    }

    /// Taper factor in [0, 1] for normalized position `t` (0 = head, 1 = tail).
    /// Monotonically non-increasing in `t`.
    pub fn factor(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Taper::Linear => 1.0 - t,
            Taper::Arctangent => {
                let k = ATAN_TAPER_STEEPNESS;
                1.0 - (k * t).atan() / k.atan()
            }
        }
    }
}

/// Ribbon outline settings, as fractions of the segment size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RibbonSettings {
    /// Half width at the head
    pub head_fraction: f32,
    /// Half width at the tail (near zero, never negative)
    pub tail_fraction: f32,
    pub taper: Taper,
}

impl Default for RibbonSettings {
    fn default() -> Self {
        Self {
            head_fraction: RIBBON_HEAD_FRACTION,
            tail_fraction: RIBBON_TAIL_FRACTION,
            taper: Taper::Linear,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Width used for horizontal wrap
    pub width: f32,
    /// Height used for vertical wrap
    pub height: f32,

    // === Body ===
    /// Segment diameter and arc-length spacing between segments
    pub segment_size: f32,
    /// Number of segments, including the one on the head
    pub segment_count: usize,

    // === Motion ===
    /// Distance travelled per tick
    pub step: f32,
    /// Starting head position (playfield center when absent)
    pub initial_head: Option<Vec2>,
    pub initial_direction: Direction,

    // === Output ===
    pub ribbon: RibbonSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,

            segment_size: SEGMENT_SIZE,
            segment_count: SEGMENT_COUNT,

            step: STEP,
            initial_head: None,
            initial_direction: Direction::Right,

            ribbon: RibbonSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("segment_size", self.segment_size)?;
        positive("step", self.step)?;
        if self.segment_count == 0 {
            return Err(ConfigError::ZeroSegments);
        }
        if let Some(head) = self.initial_head {
            if !head.is_finite() {
                return Err(ConfigError::NonFinite {
                    field: "initial_head",
                });
            }
            // Same band the wrap rule keeps the head inside
            let margin = self.segment_size / 2.0;
            let outside = |v: f32, extent: f32| v < -margin || v > extent + margin;
            if outside(head.x, self.width) || outside(head.y, self.height) {
                return Err(ConfigError::HeadOutsidePlayfield {
                    x: head.x,
                    y: head.y,
                });
            }
        }

        let RibbonSettings {
            head_fraction,
            tail_fraction,
            ..
        } = self.ribbon;
        if !head_fraction.is_finite() || !tail_fraction.is_finite() {
            return Err(ConfigError::NonFinite { field: "ribbon" });
        }
        if tail_fraction < 0.0 || tail_fraction > head_fraction {
            return Err(ConfigError::InvalidTaper {
                head: head_fraction,
                tail: tail_fraction,
            });
        }
        Ok(())
    }

    /// Starting head position, defaulting to the playfield center
    pub fn head_start(&self) -> Vec2 {
        self.initial_head
            .unwrap_or_else(|| Vec2::new(self.width / 2.0, self.height / 2.0))
    }

    /// Arc-length offset of the last segment
    pub fn body_length(&self) -> f32 {
        self.segment_count.saturating_sub(1) as f32 * self.segment_size
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.head_start(), Vec2::new(800.0, 800.0));
        assert_eq!(settings.initial_direction, Direction::Right);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let settings = Settings {
            step: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive { field: "step", .. })
        ));

        let settings = Settings {
            segment_size: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive {
                field: "segment_size",
                ..
            })
        ));

        let settings = Settings {
            segment_count: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(ConfigError::ZeroSegments)));
    }

    #[test]
    fn test_rejects_nan() {
        let settings = Settings {
            width: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonFinite { field: "width" })
        ));
    }

    #[test]
    fn test_rejects_head_outside_playfield() {
        let settings = Settings {
            width: 800.0,
            height: 800.0,
            segment_size: 80.0,
            initial_head: Some(Vec2::new(5000.0, 400.0)),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::HeadOutsidePlayfield { x, .. }) if x == 5000.0
        ));

        let below = Settings {
            initial_head: Some(Vec2::new(400.0, -41.0)),
            ..settings.clone()
        };
        assert!(below.validate().is_err());

        // The wrap margin itself is still a legal start
        let on_margin = Settings {
            initial_head: Some(Vec2::new(840.0, -40.0)),
            ..settings
        };
        assert!(on_margin.validate().is_ok());
    }

    #[test]
    fn test_body_length_without_segments() {
        let settings = Settings {
            segment_count: 0,
            ..Default::default()
        };
        assert_eq!(settings.body_length(), 0.0);
        assert_eq!(Settings::default().body_length(), 7.0 * SEGMENT_SIZE);
    }

    #[test]
    fn test_rejects_inverted_taper() {
        let mut settings = Settings::default();
        settings.ribbon.tail_fraction = 0.9;
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidTaper { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = r#"{ "width": 800, "height": 800, "segment_size": 80, "segment_count": 5,
                        "step": 8, "initial_direction": "Up", "ribbon": { "taper": "arctangent" } }"#;
        let settings = Settings::from_json(json).expect("valid json");
        assert_eq!(settings.width, 800.0);
        assert_eq!(settings.segment_count, 5);
        assert_eq!(settings.initial_direction, Direction::Up);
        assert_eq!(settings.ribbon.taper, Taper::Arctangent);
        assert_eq!(settings.ribbon.head_fraction, RIBBON_HEAD_FRACTION);
        assert!(settings.initial_head.is_none());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(
            Settings::from_json("{ width: }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_taper_factor_is_monotonic() {
        for taper in [Taper::Linear, Taper::Arctangent] {
            assert!((taper.factor(0.0) - 1.0).abs() < 1e-6);
            assert!(taper.factor(1.0).abs() < 1e-6);
            let mut prev = taper.factor(0.0);
            for i in 1..=20 {
                let f = taper.factor(i as f32 / 20.0);
                assert!(f <= prev, "{} taper increased at step {}", taper.as_str(), i);
                prev = f;
            }
        }
        assert_eq!(Taper::from_str("ATAN"), Some(Taper::Arctangent));
        assert_eq!(Taper::from_str("cubic"), None);
    }
}
