//! The two particle effects built on the shared core: the ambient starfield
//! background and the warp transition.

use crate::clock::FrameTime;
use crate::config::{AmbientPolicy, FieldConfig, Mode, TransitionConfig};
use crate::error::ConfigError;
use crate::field::ParticleField;
use crate::input::InputState;
use crate::project::Projector;
use crate::scheduler::{Animation, LoopControl};
use crate::speed::{tail_length, SpeedController, SpeedFlags, SpeedSample};
use crate::surface::{Surface, Viewport};
use crate::transition::{Phase, TransitionFrame, TransitionSequencer};

/// Slow drifting background reacting to scroll.
pub struct Starfield {
    config: FieldConfig,
    field: ParticleField,
    speed: SpeedController,
    projector: Projector,
    generation: u32,
    last: SpeedSample,
}

impl Starfield {
    pub fn new(
        config: FieldConfig,
        policy: AmbientPolicy,
        flags: SpeedFlags,
        input: &InputState,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = ParticleField::new(
            config.star_count,
            input.viewport(),
            config.max_depth,
            config.spread,
            config.palette.len(),
            seed,
        );
        let speed = SpeedController::new(
            config.speed_bounds,
            policy,
            flags,
            config.smoothing,
            config.max_tail,
        );
        let projector = Projector::from_config(&config);
        let last = speed.sample();
        Ok(Self {
            config,
            field,
            speed,
            projector,
            generation: input.viewport_generation(),
            last,
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn speed(&self) -> &SpeedController {
        &self.speed
    }

    pub fn set_force_slow(&mut self, force_slow: bool) {
        self.speed.set_force_slow(force_slow);
    }

    pub fn last_sample(&self) -> SpeedSample {
        self.last
    }
}

impl Animation for Starfield {
    fn frame(
        &mut self,
        time: FrameTime,
        input: &mut InputState,
        surface: &mut dyn Surface,
    ) -> LoopControl {
        if input.viewport_generation() != self.generation {
            self.generation = input.viewport_generation();
            self.field.resize(input.viewport());
        }
        let sample = self.speed.update(input, time.elapsed);
        self.field.advance(sample.speed);
        let pointer = if self.config.vignette {
            input.pointer()
        } else {
            None
        };
        self.projector.draw(
            &self.field,
            &self.config.palette,
            Some(self.config.background),
            sample.speed,
            sample.tail,
            time.elapsed,
            pointer,
            surface,
        );
        self.last = sample;
        LoopControl::Continue
    }

    fn deactivate(&mut self) {
        self.speed.reset();
    }
}

/// Ease-out quartic, close to the `cubic-bezier(0.25, 1, 0.5, 1)` curve of the site's iris.
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// Accelerating field plus covering overlay used for page transitions.
///
/// The particle pool only exists between `start` and the end of the cycle.
pub struct WarpEffect {
    config: FieldConfig,
    sequencer: TransitionSequencer,
    field: Option<ParticleField>,
    projector: Projector,
    seed: u64,
    generation: u32,
    last: Option<TransitionFrame>,
}

impl WarpEffect {
    pub fn new(
        config: FieldConfig,
        transition: TransitionConfig,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        transition.validate()?;
        if config.mode != Mode::Warp {
            log::debug!("[warp] using {:?} field config for a warp effect", config.mode);
        }
        let projector = Projector::from_config(&config);
        Ok(Self {
            config,
            sequencer: TransitionSequencer::new(transition),
            field: None,
            projector,
            seed,
            generation: 0,
            last: None,
        })
    }

    /// Begin a cycle; `on_complete` runs once when the overlay fully covers the page.
    pub fn start(&mut self, input: &InputState, on_complete: impl FnOnce() + 'static) -> bool {
        if !self.sequencer.activate(on_complete) {
            return false;
        }
        self.seed = self.seed.wrapping_add(1);
        self.generation = input.viewport_generation();
        self.field = Some(ParticleField::new(
            self.config.star_count,
            input.viewport(),
            self.config.max_depth,
            self.config.spread,
            self.config.palette.len(),
            self.seed,
        ));
        true
    }

    /// Fire completion immediately (host fallback timer).
    pub fn force_complete(&mut self) -> bool {
        self.sequencer.force_complete()
    }

    pub fn phase(&self) -> Phase {
        self.sequencer.phase()
    }

    pub fn sequencer(&self) -> &TransitionSequencer {
        &self.sequencer
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn last_frame(&self) -> Option<TransitionFrame> {
        self.last
    }

    fn draw_overlay(&self, overlay: f32, phase: Phase, viewport: Viewport, surface: &mut dyn Surface) {
        if overlay <= 0.0 {
            return;
        }
        // Iris grows while warping, then stays full-size while it fades out.
        let reach = viewport.diagonal() * 0.5;
        let radius = match phase {
            Phase::Fading | Phase::Idle => reach,
            _ => reach * ease_out(overlay),
        };
        let color = self.sequencer.config().overlay_color;
        surface.fill_circle(viewport.center(), radius, color, overlay);
    }
}

impl Animation for WarpEffect {
    fn frame(
        &mut self,
        time: FrameTime,
        input: &mut InputState,
        surface: &mut dyn Surface,
    ) -> LoopControl {
        if !self.sequencer.is_active() {
            return LoopControl::Stop;
        }
        if input.viewport_generation() != self.generation {
            self.generation = input.viewport_generation();
            if let Some(field) = self.field.as_mut() {
                field.resize(input.viewport());
            }
        }
        let step = self.sequencer.step(time.dt);
        self.last = Some(step);
        if step.finished {
            self.field = None;
            surface.clear();
            return LoopControl::Stop;
        }

        let max_speed = self.sequencer.config().max_speed;
        let tail = tail_length(self.config.max_tail, step.speed, max_speed);
        let fast = self.sequencer.config().fast_threshold.max(f32::EPSILON);
        let backdrop = (step.speed / fast).clamp(0.0, 1.0);

        surface.clear();
        if let Some(field) = self.field.as_mut() {
            field.advance(step.speed);
            surface.fill_background(self.config.background, backdrop);
            self.projector.draw(
                field,
                &self.config.palette,
                None,
                step.speed,
                tail,
                time.elapsed,
                None,
                surface,
            );
        }
        self.draw_overlay(step.overlay, step.phase, surface.size(), surface);
        LoopControl::Continue
    }

    fn deactivate(&mut self) {
        self.sequencer.deactivate();
        self.field = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_out_endpoints() {
        assert_eq!(ease_out(0.0), 0.0);
        assert_eq!(ease_out(1.0), 1.0);
        assert!(ease_out(0.5) > 0.5);
    }
}
