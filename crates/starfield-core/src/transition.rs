//! Accelerate → warp → fade state machine driving navigation transitions.
//!
//! The host page hands over a completion callback on activation. It runs
//! exactly once, at the `Warping → Fading` boundary (or when the fallback
//! bound is hit first), which is when the overlay fully hides the page and
//! the host can swap content.

use crate::config::TransitionConfig;
use crate::speed::smooth_toward;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Idle,
    Accelerating,
    Warping,
    Fading,
}

impl Phase {
    pub fn name(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Accelerating => "accelerating",
            Phase::Warping => "warping",
            Phase::Fading => "fading",
        }
    }

    /// Whether `self → next` is a legal step: forward only, plus `Fading → Idle`.
    pub fn can_advance_to(self, next: Phase) -> bool {
        match (self, next) {
            (Phase::Idle, Phase::Accelerating) => true,
            (Phase::Fading, Phase::Idle) => true,
            (Phase::Accelerating | Phase::Warping, Phase::Idle) => true, // teardown
            (a, b) => b > a && a != Phase::Idle,
        }
    }
}

/// Single-shot completion: the callback is moved out on first fire.
pub struct Completion {
    callback: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Runs the callback if it has not run yet; returns whether it ran now.
    pub fn fire(&mut self) -> bool {
        match self.callback.take() {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }

    /// Drop the callback without running it.
    pub fn disarm(&mut self) {
        self.callback = None;
    }

    pub fn is_pending(&self) -> bool {
        self.callback.is_some()
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.is_pending())
            .finish()
    }
}

/// What one sequencer step produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionFrame {
    pub phase: Phase,
    pub speed: f32,
    pub overlay: f32,
    /// Completion fired during this step.
    pub completed: bool,
    /// The cycle ended during this step (phase returned to idle).
    pub finished: bool,
}

#[derive(Debug)]
pub struct TransitionSequencer {
    config: TransitionConfig,
    phase: Phase,
    speed: f32,
    overlay: f32,
    active_for: f32,
    completion: Option<Completion>,
}

impl TransitionSequencer {
    pub fn new(config: TransitionConfig) -> Self {
        let speed = config.start_speed;
        Self {
            config,
            phase: Phase::Idle,
            speed,
            overlay: 0.0,
            active_for: 0.0,
            completion: None,
        }
    }

    /// Start a cycle. Only accepted from `Idle`; returns whether it started.
    pub fn activate(&mut self, on_complete: impl FnOnce() + 'static) -> bool {
        if self.phase != Phase::Idle {
            log::debug!("[transition] activate ignored in {:?}", self.phase);
            return false;
        }
        self.speed = self.config.start_speed;
        self.overlay = 0.0;
        self.active_for = 0.0;
        self.completion = Some(Completion::new(on_complete));
        self.set_phase(Phase::Accelerating);
        true
    }

    /// Tear down mid-cycle; a pending completion is dropped without firing.
    pub fn deactivate(&mut self) {
        if let Some(c) = self.completion.as_mut() {
            c.disarm();
        }
        self.completion = None;
        self.overlay = 0.0;
        self.speed = self.config.start_speed;
        if self.phase != Phase::Idle {
            self.set_phase(Phase::Idle);
        }
    }

    /// Fire completion now if it has not fired, jumping forward to `Fading`.
    ///
    /// Used by the fallback bound and by host timers when frames stop arriving.
    pub fn force_complete(&mut self) -> bool {
        if !matches!(self.phase, Phase::Accelerating | Phase::Warping) {
            return false;
        }
        log::warn!(
            "[transition] forcing completion from {:?} after {:.2}s",
            self.phase,
            self.active_for
        );
        self.overlay = self.overlay.max(1.0);
        self.complete()
    }

    /// Advance one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) -> TransitionFrame {
        let mut completed = false;
        let mut finished = false;
        if self.phase != Phase::Idle {
            self.active_for += dt;
        }
        match self.phase {
            Phase::Idle => {}
            Phase::Accelerating => {
                self.speed = smooth_toward(self.speed, self.config.ceiling, self.config.accel_rate);
                if self.speed > self.config.fast_threshold {
                    self.set_phase(Phase::Warping);
                }
            }
            Phase::Warping => {
                self.speed = smooth_toward(self.speed, self.config.max_speed, self.config.peak_rate);
                self.overlay = (self.overlay + self.config.fade_in_step).min(1.0);
                if self.overlay >= 1.0 {
                    completed = self.complete();
                }
            }
            Phase::Fading => {
                self.speed = smooth_toward(self.speed, self.config.max_speed, self.config.peak_rate);
                self.overlay = (self.overlay - self.config.fade_out_step).max(0.0);
                if self.overlay <= 0.0 {
                    self.completion = None;
                    self.set_phase(Phase::Idle);
                    finished = true;
                }
            }
        }
        if !completed
            && matches!(self.phase, Phase::Accelerating | Phase::Warping)
            && self.active_for >= self.config.fallback_secs
        {
            completed = self.force_complete();
        }
        self.speed = self.speed.min(self.config.max_speed);
        TransitionFrame {
            phase: self.phase,
            speed: self.speed,
            overlay: self.overlay,
            completed,
            finished,
        }
    }

    fn complete(&mut self) -> bool {
        let fired = self.completion.as_mut().map(Completion::fire).unwrap_or(false);
        self.set_phase(Phase::Fading);
        fired
    }

    fn set_phase(&mut self, next: Phase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal transition {:?} -> {:?}",
            self.phase,
            next
        );
        log::debug!("[transition] {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn overlay(&self) -> f32 {
        self.overlay
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }
}
