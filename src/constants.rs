// Web host settings. Simulation tuning lives in `sphere_core::constants`.

// DOM
pub const CANVAS_ID: &str = "gl-canvas";

// Seconds between frame-rate log lines
pub const FPS_LOG_INTERVAL_SEC: f32 = 5.0;
