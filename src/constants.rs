// Front-end wiring constants.
//
// Ripple layout and timing live in `core::constants`; these only describe
// how the effect attaches to the page.

// Canvas element the effect renders into
pub const CANVAS_ID: &str = "eggs";

// Shown via `alert` when no GPU context can be acquired
pub const GPU_UNAVAILABLE_MESSAGE: &str = "WebGPU/WebGL is not supported by your browser.";

// Log a frame-rate line every this many frames (debug level)
pub const FRAME_LOG_INTERVAL: u64 = 600;
