//! Per-instance simulation clock.

use crate::constants::{DEFAULT_FRAME_DT, MAX_FRAME_DT};
use std::time::Duration;

/// Time values handed to every simulation for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous frame (clamped).
    pub dt: f32,
    /// Seconds since the clock was (re)started.
    pub elapsed: f32,
    /// Frames since the clock was (re)started, starting at 0.
    pub frame: u64,
}

#[derive(Debug, Default)]
pub struct SimClock {
    elapsed: f32,
    frames: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by the wall-clock gap since the previous frame.
    ///
    /// A zero gap (first frame, or a host that cannot measure) counts as one
    /// nominal frame; gaps longer than `MAX_FRAME_DT` are clamped.
    pub fn tick(&mut self, dt: Duration) -> FrameTime {
        let raw = dt.as_secs_f32();
        let dt = if raw <= 0.0 {
            DEFAULT_FRAME_DT
        } else {
            raw.min(MAX_FRAME_DT)
        };
        let time = FrameTime {
            dt,
            elapsed: self.elapsed + dt,
            frame: self.frames,
        };
        self.elapsed += dt;
        self.frames += 1;
        time
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.frames = 0;
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_zero_gap_counts_as_nominal_frame() {
        let mut clock = SimClock::new();
        let t = clock.tick(Duration::ZERO);
        assert!((t.dt - DEFAULT_FRAME_DT).abs() < 1e-6);
        assert_eq!(t.frame, 0);
    }

    #[test]
    fn long_gaps_are_clamped() {
        let mut clock = SimClock::new();
        let t = clock.tick(Duration::from_secs(5));
        assert!((t.dt - MAX_FRAME_DT).abs() < 1e-6);
        assert!((clock.elapsed() - MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn reset_restarts_elapsed_and_frames() {
        let mut clock = SimClock::new();
        for _ in 0..10 {
            clock.tick(Duration::from_millis(16));
        }
        assert_eq!(clock.frames(), 10);
        clock.reset();
        assert_eq!(clock.frames(), 0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
