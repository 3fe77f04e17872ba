//! Tunable constants, canvas size and dough sprite size.
//!
//! [`Tuning`] defaults give the standard game feel. A JSON
//! file may override any subset of fields:
//!
//! ```json
//! { "pull_sensitivity": 2.0, "required_cuts": 6 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Upper bound for `trail_capacity`.
pub const MAX_TRAIL_CAPACITY: usize = 1024;
/// Shortest guide dash in pixels.
pub const MIN_GUIDE_DASH: f64 = 1.0;

// ════════════════════════════════════════════════════════════════════════════
// Tuning
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Dough pixels moved per pointer pixel while pulling down.
    pub pull_sensitivity:     f64,
    pub rotate_sensitivity:   f64,
    pub rotation_speed:       f64,
    /// Dough pixels moved per pointer pixel while dragging right.
    pub move_sensitivity:     f64,

    pub max_rotation_progress: f64,
    /// Angle steps at or above this (degrees) are treated as spurious jumps.
    pub max_angle_step:       f64,
    /// Radians of sprite rotation per degree of pointer rotation.
    pub rotation_per_degree:  f64,
    /// Extra scale reached at full rotation progress (1.0 + growth).
    pub max_scale_growth:     f64,

    pub required_cuts:        usize,
    pub min_cut_distance:     f64,
    /// Minimum vertical travel between two samples to count as a cut swipe.
    pub min_cut_swipe:        f64,
    /// Visual dough radius as a fraction of half the display height.
    pub dough_radius_factor:  f64,

    pub trail_capacity:       usize,
    pub cut_flash_frames:     u32,
    pub guide_dash:           f64,
    pub guide_gap:            f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            pull_sensitivity:      1.5,
            rotate_sensitivity:    0.7,
            rotation_speed:        0.5,
            move_sensitivity:      1.5,
            max_rotation_progress: 100.0,
            max_angle_step:        30.0,
            rotation_per_degree:   0.01,
            max_scale_growth:      0.5,
            required_cuts:         8,
            min_cut_distance:      20.0,
            min_cut_swipe:         30.0,
            dough_radius_factor:   0.8,
            trail_capacity:        20,
            cut_flash_frames:      12,
            guide_dash:            5.0,
            guide_gap:             5.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document. Missing fields keep defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(s)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rotation progress gained per degree of valid pointer rotation.
    pub fn progress_per_degree(&self) -> f64 {
        self.rotation_speed * self.rotate_sensitivity
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("pull_sensitivity",      self.pull_sensitivity),
            ("rotate_sensitivity",    self.rotate_sensitivity),
            ("rotation_speed",        self.rotation_speed),
            ("move_sensitivity",      self.move_sensitivity),
            ("max_rotation_progress", self.max_rotation_progress),
            ("min_cut_swipe",         self.min_cut_swipe),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(field, format!("must be a positive number, got {}", value)));
            }
        }

        let non_negative = [
            ("rotation_per_degree", self.rotation_per_degree),
            ("max_scale_growth",    self.max_scale_growth),
            ("min_cut_distance",    self.min_cut_distance),
            ("guide_gap",           self.guide_gap),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(field, format!("must be zero or positive, got {}", value)));
            }
        }

        if !(self.max_angle_step > 0.0 && self.max_angle_step <= 180.0) {
            return Err(invalid(
                "max_angle_step",
                format!("must be in (0, 180], got {}", self.max_angle_step),
            ));
        }
        if !(self.dough_radius_factor > 0.0 && self.dough_radius_factor <= 1.0) {
            return Err(invalid(
                "dough_radius_factor",
                format!("must be in (0, 1], got {}", self.dough_radius_factor),
            ));
        }
        if self.required_cuts == 0 {
            return Err(invalid("required_cuts", "must be at least 1".to_string()));
        }
        if !(1..=MAX_TRAIL_CAPACITY).contains(&self.trail_capacity) {
            return Err(invalid(
                "trail_capacity",
                format!("must be in 1..={}, got {}", MAX_TRAIL_CAPACITY, self.trail_capacity),
            ));
        }
        if !(self.guide_dash.is_finite() && self.guide_dash >= MIN_GUIDE_DASH) {
            return Err(invalid(
                "guide_dash",
                format!("must be at least {} px, got {}", MIN_GUIDE_DASH, self.guide_dash),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

// ════════════════════════════════════════════════════════════════════════════
// Viewport / DoughSize
// ════════════════════════════════════════════════════════════════════════════

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width:  f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { width: 640.0, height: 960.0 }
    }
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn center(&self) -> crate::geometry::Point {
        crate::geometry::Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Unscaled dough sprite size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoughSize {
    pub width:  f64,
    pub height: f64,
}

impl Default for DoughSize {
    fn default() -> Self {
        DoughSize { width: 200.0, height: 200.0 }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
