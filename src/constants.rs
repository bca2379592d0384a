// DOM hooks and renderer options used by the web front-end.

// Optional elements the host page provides for feedback
pub const LOADING_OVERLAY_ID: &str = "tracker-loading";
pub const TOAST_ID: &str = "tracker-toast";

// Overlay visibility
pub const HIDDEN_CLASS: &str = "hidden";
pub const HIDDEN_STYLE: &str = "display:none"; // fallback for pages without the CSS class

// WebGLRenderer options
pub const RENDERER_ANTIALIAS: bool = true;
pub const RENDERER_ALPHA: bool = true; // transparent canvas over the camera feed

// Used when the window reports no usable device pixel ratio
pub const DEFAULT_PIXEL_RATIO: f64 = 1.0;
