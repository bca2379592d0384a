// Shared pose-binding constants used by every front-end.

// Pattern image layout (pixels)
pub const PATTERN_IMAGE_SIZE: [f64; 2] = [375.0, 375.0];
pub const TRACK_POINT: [f64; 2] = [185.0, 140.0]; // anchor that drives the model's screen position

// Model sizing
pub const INIT_SCALE: f64 = 0.29; // base scale for the authored glTF size

// Orthographic camera depth range
pub const CAMERA_NEAR: f64 = -1000.0;
pub const CAMERA_FAR: f64 = 1000.0;

// Lighting
pub const AMBIENT_LIGHT_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_LIGHT_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_LIGHT_INTENSITY: f64 = 1.0;
pub const DIRECTIONAL_LIGHT_POSITION: [f64; 3] = [0.0, 0.0, 1000.0];

// Homogeneous weights at or below this magnitude are treated as degenerate
pub const DEGENERATE_EPSILON: f64 = 1e-12;

// Host feedback
pub const LOADING_TITLE: &str = "Loading Model...";
pub const LOAD_FAILED_TITLE: &str = "Loading model failed.";
pub const TOAST_DURATION_MS: u32 = 3000;
