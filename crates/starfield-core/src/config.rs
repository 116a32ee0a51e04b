//! Configuration for the consolidated particle core.
//!
//! One `FieldConfig` drives both the ambient background and the warp
//! transition; the presets below cover the two modes the site uses.

use crate::constants::*;
use crate::error::ConfigError;
use crate::surface::Color;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Ambient,
    Warp,
}

/// How the ambient background reacts to scrolling. The two policies are
/// alternatives; an instance uses exactly one for its whole life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AmbientPolicy {
    /// Target speed falls linearly from max to min over `settle_distance` px of scroll position.
    ScrollMapped { settle_distance: f32 },
    /// Cruises toward the maximum until `threshold` px of absolute scroll
    /// movement accumulate, then decays toward the minimum as
    /// `min + (from - min) * e^(-lambda * t)`, `from` being the speed at the switch.
    DecayAfterScroll { threshold: f32, lambda: f32 },
}

impl Default for AmbientPolicy {
    fn default() -> Self {
        AmbientPolicy::ScrollMapped {
            settle_distance: SCROLL_SETTLE_DISTANCE,
        }
    }
}

impl AmbientPolicy {
    pub fn decay() -> Self {
        AmbientPolicy::DecayAfterScroll {
            threshold: SCROLL_DECAY_THRESHOLD,
            lambda: SCROLL_DECAY_LAMBDA,
        }
    }

    /// Preset by name as passed from JS: `"scroll"` (also empty) or `"decay"`.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.trim() {
            "" | "scroll" => Ok(Self::default()),
            "decay" => Ok(Self::decay()),
            other => Err(ConfigError::UnknownPolicy(other.to_owned())),
        }
    }

    /// Whether the policy reads accumulated scroll travel rather than position.
    pub fn uses_travel(&self) -> bool {
        matches!(self, AmbientPolicy::DecayAfterScroll { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedBounds {
    pub min: f32,
    pub max: f32,
}

impl SpeedBounds {
    pub fn clamp(&self, speed: f32) -> f32 {
        speed.clamp(self.min, self.max)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub mode: Mode,
    pub palette: Vec<Color>,
    pub background: Color,
    pub speed_bounds: SpeedBounds,
    pub star_count: usize,
    pub max_depth: f32,
    pub spread: f32,
    pub smoothing: f32,
    pub max_tail: f32,
    pub focal_length: f32,
    pub safe_radius: f32,
    pub fade_range: f32,
    pub slow_threshold: f32,
    /// Darken the area under the pointer.
    pub vignette: bool,
}

impl FieldConfig {
    /// Slow drifting background shown behind page content.
    pub fn ambient() -> Self {
        Self {
            mode: Mode::Ambient,
            palette: vec![
                Color::rgb(255, 255, 255),
                Color::rgb(0, 206, 209),  // #00CED1
                Color::rgb(64, 224, 208), // #40E0D0
            ],
            background: Color::rgb(5, 8, 14),
            speed_bounds: SpeedBounds {
                min: AMBIENT_SPEED_MIN,
                max: AMBIENT_SPEED_MAX,
            },
            star_count: AMBIENT_STAR_COUNT,
            max_depth: MAX_DEPTH,
            spread: AMBIENT_SPREAD,
            smoothing: SPEED_SMOOTHING,
            max_tail: AMBIENT_MAX_TAIL,
            focal_length: FOCAL_LENGTH,
            safe_radius: SAFE_RADIUS,
            fade_range: FADE_RANGE,
            slow_threshold: SLOW_THRESHOLD,
            vignette: true,
        }
    }

    /// Accelerating field used behind navigation transitions.
    pub fn warp() -> Self {
        Self {
            mode: Mode::Warp,
            palette: vec![Color::rgb(255, 255, 255), Color::rgb(32, 178, 170)],
            speed_bounds: SpeedBounds {
                min: WARP_START_SPEED,
                max: WARP_MAX_SPEED,
            },
            star_count: WARP_STAR_COUNT,
            spread: WARP_SPREAD,
            max_tail: WARP_MAX_TAIL,
            safe_radius: 0.0,
            vignette: false,
            ..Self::ambient()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 {
            return Err(ConfigError::EmptyField);
        }
        let SpeedBounds { min, max } = self.speed_bounds;
        if !(min >= 0.0 && min <= max && max > 0.0) {
            return Err(ConfigError::SpeedBounds { min, max });
        }
        if !(self.max_depth > 0.0) {
            return Err(ConfigError::MaxDepth(self.max_depth));
        }
        if !(self.spread > 0.0) {
            return Err(ConfigError::Spread(self.spread));
        }
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(self.smoothing));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::ambient()
    }
}

/// Thresholds and rates for the accelerate → warp → fade cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    pub start_speed: f32,
    pub ceiling: f32,
    pub accel_rate: f32,
    pub fast_threshold: f32,
    pub max_speed: f32,
    pub peak_rate: f32,
    pub fade_in_step: f32,
    pub fade_out_step: f32,
    /// Seconds after activation at which completion is forced.
    pub fallback_secs: f32,
    pub overlay_color: Color,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            start_speed: WARP_START_SPEED,
            ceiling: WARP_CEILING,
            accel_rate: WARP_ACCEL_RATE,
            fast_threshold: WARP_FAST_THRESHOLD,
            max_speed: WARP_MAX_SPEED,
            peak_rate: WARP_PEAK_RATE,
            fade_in_step: OVERLAY_FADE_IN_STEP,
            fade_out_step: OVERLAY_FADE_OUT_STEP,
            fallback_secs: TRANSITION_FALLBACK_SECS,
            overlay_color: Color::rgb(0, 206, 209),
        }
    }
}

impl TransitionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.accel_rate > 0.0 && self.accel_rate <= 1.0)
            || !(self.peak_rate > 0.0 && self.peak_rate <= 1.0)
        {
            return Err(ConfigError::Transition("easing rates must be in (0, 1]"));
        }
        if !(self.fade_in_step > 0.0) || !(self.fade_out_step > 0.0) {
            return Err(ConfigError::Transition("overlay steps must be positive"));
        }
        if !(self.fallback_secs > 0.0) {
            return Err(ConfigError::Transition("fallback must be positive"));
        }
        if self.max_speed < self.start_speed {
            return Err(ConfigError::Transition("max speed below start speed"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub capacity: usize,
    pub width: f32,
    pub opacity: f32,
    pub glow: f32,
    pub color: Color,
    /// Keep points pinned to page content while scrolling.
    pub attach_to_scroll: bool,
    pub ripple_lifetime: f32,
    pub ripple_max_radius: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: TRAIL_CAPACITY,
            width: TRAIL_WIDTH,
            opacity: TRAIL_OPACITY,
            glow: TRAIL_GLOW,
            color: Color::rgb(0, 206, 209),
            attach_to_scroll: false,
            ripple_lifetime: RIPPLE_LIFETIME,
            ripple_max_radius: RIPPLE_MAX_RADIUS,
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < 2 {
            return Err(ConfigError::TrailCapacity(self.capacity));
        }
        Ok(())
    }
}
