// Shared tuning constants for the particle engine.
//
// Per-frame rates assume the host delivers roughly 60 frames per second.

// Clock
pub const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0; // dt reported for the first frame
pub const MAX_FRAME_DT: f32 = 0.1; // clamp for resumed/backgrounded tabs

// Particle field
pub const AMBIENT_STAR_COUNT: usize = 600;
pub const WARP_STAR_COUNT: usize = 900;
pub const MAX_DEPTH: f32 = 1000.0;
pub const AMBIENT_SPREAD: f32 = 2.5; // multiple of the half viewport
pub const WARP_SPREAD: f32 = 3.0;

// Speed controller
pub const AMBIENT_SPEED_MIN: f32 = 0.1;
pub const AMBIENT_SPEED_MAX: f32 = 2.0;
pub const SPEED_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame
pub const AMBIENT_MAX_TAIL: f32 = 60.0; // depth units
pub const SCROLL_SETTLE_DISTANCE: f32 = 1200.0; // px of scroll from max to min speed
pub const SCROLL_DECAY_THRESHOLD: f32 = 400.0; // px of accumulated |delta|
pub const SCROLL_DECAY_LAMBDA: f32 = 1.5; // per second

// Projector
pub const FOCAL_LENGTH: f32 = 320.0;
pub const SAFE_RADIUS: f32 = 60.0; // px kept clear around the centre
pub const FADE_RANGE: f32 = 140.0; // px over which stars fade in beyond the safe radius
pub const SLOW_THRESHOLD: f32 = 0.5; // below this speed stars are drawn as dots
pub const TWINKLE_DEPTH_FREQ: f32 = 0.02;
pub const TWINKLE_TIME_FREQ: f32 = 3.0;
pub const STAR_RADIUS_MIN: f32 = 0.4;
pub const STAR_RADIUS_SPAN: f32 = 1.6;
pub const STREAK_WIDTH: f32 = 1.2;

// Pointer vignette
pub const VIGNETTE_DIAGONAL_FRACTION: f32 = 0.18;
pub const VIGNETTE_RADIUS_MIN: f32 = 120.0;
pub const VIGNETTE_RADIUS_MAX: f32 = 420.0;
pub const VIGNETTE_STRENGTH: f32 = 0.55;

// Pointer sentinel used while the pointer is outside the canvas
pub const OFF_CANVAS: [f32; 2] = [-10000.0, -10000.0];

// Trail
pub const TRAIL_CAPACITY: usize = 20;
pub const TRAIL_WIDTH: f32 = 4.0;
pub const TRAIL_OPACITY: f32 = 0.8;
pub const TRAIL_GLOW: f32 = 2.0; // blur radius of the glow pass
pub const RIPPLE_LIFETIME: f32 = 1.0; // seconds
pub const RIPPLE_MAX_RADIUS: f32 = 48.0;
pub const RIPPLE_WIDTH: f32 = 2.0;

// Transition sequencer
pub const WARP_START_SPEED: f32 = 2.0;
pub const WARP_CEILING: f32 = 60.0; // easing target while accelerating
pub const WARP_ACCEL_RATE: f32 = 0.05;
pub const WARP_FAST_THRESHOLD: f32 = 30.0;
pub const WARP_MAX_SPEED: f32 = 100.0;
pub const WARP_PEAK_RATE: f32 = 0.08;
pub const WARP_MAX_TAIL: f32 = 400.0;
pub const OVERLAY_FADE_IN_STEP: f32 = 0.04; // opacity per frame while warping
pub const OVERLAY_FADE_OUT_STEP: f32 = 0.05; // opacity per frame while fading
pub const TRANSITION_FALLBACK_SECS: f32 = 2.5;

// Liquid waves
pub const WAVE_FOLLOW_STRENGTH: f32 = 0.2; // share of pointer offset the centre follows
pub const WAVE_CENTER_SMOOTHING: f32 = 0.05;
pub const WAVE_POINTER_ACTIVE_Y: f32 = -100.0; // pointer y above this counts as present
pub const WAVE_INTERACTION_RADIUS: f32 = 200.0;
pub const WAVE_BUMP_HEIGHT: f32 = 50.0;
pub const WAVE_BUMP_SIGMA: f32 = 60.0;
pub const WAVE_SAMPLE_STEP: f32 = 2.0; // px between polyline samples
pub const WAVE_LINE_WIDTH: f32 = 2.0;
