//! Maps scroll/mode signals to the speed and tail length of the ambient field.

use crate::config::{AmbientPolicy, SpeedBounds};
use crate::input::InputState;

/// Speed and tail the field should use for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpeedSample {
    pub speed: f32,
    pub tail: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpeedFlags {
    /// Pin the target to the minimum speed.
    pub force_slow: bool,
    /// Start at the maximum speed instead of the minimum.
    pub start_fast: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DecayState {
    Waiting,
    /// `from` is the speed at the moment the threshold was crossed.
    Decaying { since: f32, from: f32 },
}

#[derive(Clone, Debug)]
pub struct SpeedController {
    bounds: SpeedBounds,
    policy: AmbientPolicy,
    flags: SpeedFlags,
    smoothing: f32,
    max_tail: f32,
    initial: f32,
    speed: f32,
    target: f32,
    decay: DecayState,
    travel_origin: Option<f32>,
}

impl SpeedController {
    pub fn new(
        bounds: SpeedBounds,
        policy: AmbientPolicy,
        flags: SpeedFlags,
        smoothing: f32,
        max_tail: f32,
    ) -> Self {
        let initial = if flags.start_fast {
            bounds.max
        } else {
            bounds.min
        };
        Self {
            bounds,
            policy,
            flags,
            smoothing,
            max_tail,
            initial,
            speed: initial,
            target: initial,
            decay: DecayState::Waiting,
            travel_origin: None,
        }
    }

    pub fn set_force_slow(&mut self, force_slow: bool) {
        self.flags.force_slow = force_slow;
    }

    /// Return to the initial condition (used when an instance is re-activated).
    pub fn reset(&mut self) {
        self.speed = self.initial;
        self.target = self.initial;
        self.decay = DecayState::Waiting;
        self.travel_origin = None;
    }

    /// Advance one frame at simulation time `now` (seconds) and return the new sample.
    pub fn update(&mut self, input: &InputState, now: f32) -> SpeedSample {
        match self.policy {
            AmbientPolicy::ScrollMapped { settle_distance } => {
                self.target = if self.flags.force_slow {
                    self.bounds.min
                } else {
                    target_for_scroll(self.bounds, input.scroll_position(), settle_distance)
                };
                self.speed = smooth_toward(self.speed, self.target, self.smoothing);
            }
            AmbientPolicy::DecayAfterScroll { threshold, lambda } => {
                let origin = *self.travel_origin.get_or_insert(input.scroll_travel());
                if self.decay == DecayState::Waiting && input.scroll_travel() - origin >= threshold
                {
                    log::debug!("[speed] scroll threshold crossed at t={:.2}s", now);
                    self.decay = DecayState::Decaying {
                        since: now,
                        from: self.speed,
                    };
                }
                self.target = if self.flags.force_slow {
                    self.bounds.min
                } else {
                    match self.decay {
                        DecayState::Waiting => self.bounds.max,
                        DecayState::Decaying { .. } => self.bounds.min,
                    }
                };
                match self.decay {
                    DecayState::Decaying { since, from } if !self.flags.force_slow => {
                        // Never climbs back above the current speed.
                        let decayed = decayed_speed(self.bounds.min, from, lambda, now - since);
                        self.speed = decayed.min(self.speed);
                    }
                    _ => {
                        self.speed = smooth_toward(self.speed, self.target, self.smoothing);
                    }
                }
            }
        }
        self.speed = self.bounds.clamp(self.speed);
        self.sample()
    }

    pub fn sample(&self) -> SpeedSample {
        SpeedSample {
            speed: self.speed,
            tail: tail_length(self.max_tail, self.speed, self.bounds.max),
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_decaying(&self) -> bool {
        matches!(self.decay, DecayState::Decaying { .. })
    }
}

/// One exponential smoothing step: cover `factor` of the remaining distance.
#[inline]
pub fn smooth_toward(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Inverse linear map from scroll position to target speed.
#[inline]
pub fn target_for_scroll(bounds: SpeedBounds, scroll: f32, settle_distance: f32) -> f32 {
    let t = if settle_distance > 0.0 {
        (scroll.max(0.0) / settle_distance).min(1.0)
    } else {
        1.0
    };
    bounds.clamp(bounds.max - (bounds.max - bounds.min) * t)
}

#[inline]
pub fn decayed_speed(floor: f32, from: f32, lambda: f32, t: f32) -> f32 {
    floor + (from - floor) * (-lambda * t.max(0.0)).exp()
}

/// `round(max_tail * speed / speed_max)`, never negative.
#[inline]
pub fn tail_length(max_tail: f32, speed: f32, speed_max: f32) -> f32 {
    if speed_max <= 0.0 {
        return 0.0;
    }
    (max_tail * speed / speed_max).round().max(0.0)
}
