// Coordinator and animator tuning constants.
// Pixel values are CSS pixels; scene values are world units of the
// decoration scene. Per-frame factors are blend weights in (0, 1].

// Visible band: a section must reach above 80% and below 20% of the viewport
pub const VISIBLE_BAND_TOP_FRAC: f32 = 0.8;
pub const VISIBLE_BAND_BOTTOM_FRAC: f32 = 0.2;

// Normalized [-1, 1] coordinates are multiplied by these to get scene units
pub const SCENE_SPAN_X: f32 = 5.0;
pub const SCENE_SPAN_Y: f32 = 3.0;

// Small-viewport adjustment
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const MOBILE_OFFSET_X_FACTOR: f32 = 0.5;
pub const MOBILE_OFFSET_Y_FACTOR: f32 = 0.7;
pub const MOBILE_SCALE_FACTOR: f32 = 0.6;

// Exponential smoothing: current += (target - current) * factor
pub const LERP_STEADY: f32 = 0.08;
pub const LERP_CATCH_UP: f32 = 0.2;
pub const CATCH_UP_WINDOW_SEC: f32 = 0.6;

// Idle spin used when a placement has no authored rotation (radians/sec)
pub const IDLE_SPIN_Y_PER_SEC: f32 = 0.5;
pub const IDLE_WOBBLE_AMP: f32 = 0.15;
pub const IDLE_WOBBLE_HZ: f32 = 0.25;
