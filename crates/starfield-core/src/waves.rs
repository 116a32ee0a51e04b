//! Liquid background: sine waves across the viewport whose centre line
//! follows the pointer and which bulge under it.

use crate::clock::FrameTime;
use crate::constants::*;
use crate::error::ConfigError;
use crate::input::InputState;
use crate::scheduler::{Animation, LoopControl};
use crate::speed::smooth_toward;
use crate::surface::{Color, Surface};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub amplitude: f32,
    /// Radians per pixel.
    pub frequency: f32,
    /// Radians per frame.
    pub speed: f32,
    pub offset: f32,
    pub color: Color,
    pub alpha: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaveConfig {
    pub waves: Vec<Wave>,
    pub line_width: f32,
    pub sample_step: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            waves: vec![
                Wave {
                    amplitude: 50.0,
                    frequency: 0.002,
                    speed: 0.01,
                    offset: 0.0,
                    color: Color::rgb(0, 206, 209),
                    alpha: 0.15,
                },
                Wave {
                    amplitude: 70.0,
                    frequency: 0.0015,
                    speed: 0.008,
                    offset: 2.0,
                    color: Color::rgb(64, 224, 208),
                    alpha: 0.15,
                },
                Wave {
                    amplitude: 30.0,
                    frequency: 0.003,
                    speed: 0.015,
                    offset: 4.0,
                    color: Color::rgb(32, 178, 170),
                    alpha: 0.15,
                },
            ],
            line_width: WAVE_LINE_WIDTH,
            sample_step: WAVE_SAMPLE_STEP,
        }
    }
}

impl WaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.waves.is_empty() {
            return Err(ConfigError::Waves("at least one wave is required"));
        }
        if !(self.sample_step >= 1.0) {
            return Err(ConfigError::Waves("sample step must be at least one pixel"));
        }
        if self.waves.iter().any(|w| !(0.0..=1.0).contains(&w.alpha)) {
            return Err(ConfigError::Waves("wave alpha must be in [0, 1]"));
        }
        Ok(())
    }
}

/// Vertical bump a pointer at `pointer` adds to a wave at horizontal position `x`.
#[inline]
pub fn pointer_bump(x: f32, pointer: Vec2) -> f32 {
    let dx = x - pointer.x;
    if dx.abs() >= WAVE_INTERACTION_RADIUS {
        return 0.0;
    }
    WAVE_BUMP_HEIGHT * (-(dx * dx) / (2.0 * WAVE_BUMP_SIGMA * WAVE_BUMP_SIGMA)).exp()
}

pub struct LiquidWaves {
    config: WaveConfig,
    center_y: Option<f32>,
    ticks: f32,
    samples: Vec<Vec2>,
}

impl LiquidWaves {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            config,
            center_y: None,
            ticks: 0.0,
            samples: Vec::new(),
        }
    }

    pub fn center_y(&self) -> Option<f32> {
        self.center_y
    }

    /// Move the centre line one smoothing step toward its pointer-driven target.
    pub fn follow(&mut self, height: f32, pointer: Vec2) -> f32 {
        let mid = height * 0.5;
        let target = if pointer.y > WAVE_POINTER_ACTIVE_Y {
            mid + (pointer.y - mid) * WAVE_FOLLOW_STRENGTH
        } else {
            mid
        };
        let current = self.center_y.unwrap_or(mid);
        let next = smooth_toward(current, target, WAVE_CENTER_SMOOTHING);
        self.center_y = Some(next);
        next
    }

    fn sample_wave(&mut self, wave: &Wave, width: f32, center_y: f32, pointer: Vec2) {
        self.samples.clear();
        let step = self.config.sample_step.max(1.0);
        let mut x = 0.0;
        loop {
            let phase = x * wave.frequency + self.ticks * wave.speed + wave.offset;
            let base = phase.sin() * wave.amplitude;
            self.samples.push(Vec2::new(x, center_y + base + pointer_bump(x, pointer)));
            if x >= width {
                break;
            }
            x = (x + step).min(width);
        }
    }
}

impl Animation for LiquidWaves {
    fn frame(
        &mut self,
        _time: FrameTime,
        input: &mut InputState,
        surface: &mut dyn Surface,
    ) -> LoopControl {
        let viewport = surface.size();
        surface.clear();
        if viewport.is_empty() {
            return LoopControl::Continue;
        }
        self.ticks += 1.0;
        let pointer = input.raw_pointer();
        let center_y = self.follow(viewport.height, pointer);
        for i in 0..self.config.waves.len() {
            let wave = self.config.waves[i];
            self.sample_wave(&wave, viewport.width, center_y, pointer);
            surface.stroke_polyline(&self.samples, self.config.line_width, wave.color, wave.alpha);
        }
        LoopControl::Continue
    }

    fn deactivate(&mut self) {
        self.center_y = None;
        self.ticks = 0.0;
    }
}
