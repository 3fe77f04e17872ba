//! Error types.
//!
//! Gesture handling never fails; noisy input is dropped. The only errors are
//! a bad tuning file and a broken state-machine invariant.

use std::path::PathBuf;

use thiserror::Error;

use crate::phase::Phase;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read tuning file {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field:  &'static str,
        reason: String,
    },
}

/// A state the guarded handlers should never be able to reach.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("{made} cuts made but only {required} are required")]
    TooManyCuts { made: usize, required: usize },
    #[error("cut counter says {counted} but {stored} cut lines are stored")]
    CutCountMismatch { counted: usize, stored: usize },
    #[error("rotation progress {progress} outside 0..={max}")]
    RotationOutOfRange { progress: f64, max: f64 },
    #[error("dough y {y} outside pull range {start}..={center}")]
    DoughOutsidePullRange { y: f64, start: f64, center: f64 },
    #[error("dough scale {scale} below 1")]
    ScaleBelowOne { scale: f64 },
    #[error("gesture trail holds {len} points, capacity is {capacity}")]
    TrailOverCapacity { len: usize, capacity: usize },
    #[error("{count} cut lines present while {phase}")]
    StrayCuts { count: usize, phase: Phase },
}
