// Shared DOM and rendering constants used by the web frontend.

// DOM hooks
pub const DEFAULT_CANVAS_ID: &str = "deco-canvas";
pub const SECTION_ATTR: &str = "data-deco-section"; // marks a section root; value is its id
pub const TARGETS_ATTR: &str = "data-deco-targets"; // optional JSON placements for that section

// Canvas configuration attributes
pub const MODEL_BASE_ATTR: &str = "data-model-base";
pub const BREAKPOINT_ATTR: &str = "data-mobile-breakpoint";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";

pub const DEFAULT_MODEL_BASE: &str = "/models";

// Camera: fixed perspective looking down -Z at the scene origin
pub const CAMERA_Z: f32 = 8.0;
pub const CAMERA_FOVY_RAD: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;

// Base model size in scene units at `scale == 1`
pub const MODEL_BASE_SIZE: f32 = 0.5;

// Directional light, pointing from the upper left toward the scene
pub const LIGHT_DIR: [f32; 3] = [-0.4, -0.7, -0.6];

// Palette for the three decorations (linear RGB)
pub const DEFAULT_OBJECT_COLORS: [[f32; 3]; 3] = [
    [0.98, 0.76, 0.18], // pencil yellow
    [0.95, 0.45, 0.55], // eraser pink
    [0.35, 0.55, 0.90], // sharpener blue
];
