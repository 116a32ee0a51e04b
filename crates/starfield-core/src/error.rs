//! Error types for engine configuration.
//!
//! Runtime faults (missing surface, malformed events, stalled transitions) are
//! absorbed where they happen; only invalid configuration is reported.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle field needs at least one star")]
    EmptyField,
    #[error("speed bounds must satisfy 0 <= min <= max (got min={min}, max={max})")]
    SpeedBounds { min: f32, max: f32 },
    #[error("max depth must be positive (got {0})")]
    MaxDepth(f32),
    #[error("spread must be positive (got {0})")]
    Spread(f32),
    #[error("smoothing factor must be in (0, 1] (got {0})")]
    Smoothing(f32),
    #[error("palette must contain at least one colour")]
    EmptyPalette,
    #[error("invalid transition setting: {0}")]
    Transition(&'static str),
    #[error("trail capacity must be at least 2 (got {0})")]
    TrailCapacity(usize),
    #[error("invalid wave setting: {0}")]
    Waves(&'static str),
    #[error("unknown scroll policy {0:?} (expected \"scroll\" or \"decay\")")]
    UnknownPolicy(String),
}
