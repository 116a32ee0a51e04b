// Browser-side tuning and DOM names.
//
// Simulation numbers live in `starfield_core::constants`; these only cover
// what the canvas host itself decides.

// Smooth-scroll libraries re-dispatch their position under this event name
// with the value in `detail.scroll`.
pub const LENIS_SCROLL_EVENT: &str = "lenis-scroll";
pub const LENIS_SCROLL_FIELD: &str = "scroll";

// Device pixel ratio clamp for the canvas backing store
pub const MIN_DPR: f64 = 1.0;
pub const MAX_DPR: f64 = 2.0;

// Class toggled on the warp canvas while it is hidden
pub const HIDDEN_CLASS: &str = "hidden";

// WheelEvent deltas reported in lines or pages, converted to pixels
pub const WHEEL_LINE_HEIGHT_PX: f32 = 16.0;
pub const WHEEL_PAGE_HEIGHT_PX: f32 = 800.0;

// Glow colour alpha for the trail's shadow blur
pub const GLOW_ALPHA: f32 = 0.8;
