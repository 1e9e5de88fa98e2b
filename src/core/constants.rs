// Ripple buffer and texture layout shared by the encoder and the shader.
// Must stay in sync with `shaders/eggs.wgsl`.

// Ring buffer
pub const CLICK_CAPACITY: usize = 15; // ripples kept alive at once
pub const CLICK_TEXTURE_WIDTH: u32 = 10;
pub const CLICK_TEXTURE_HEIGHT: u32 = 2;
pub const CLICK_TEXEL_BYTES: usize = 4; // RGBA8: x, y, distance, radius

// Animation timing (seconds)
pub const CLICK_DISTANCE_DURATION_SEC: f32 = 2.0;
pub const RADIUS_RISE_DURATION_SEC: f32 = 0.7;
pub const RADIUS_DECAY_DURATION_SEC: f32 = 1.0;

// Horizontal jitter added to every click, in normalized units
pub const CLICK_JITTER_X: f32 = 0.03;
pub const CLICK_JITTER_SEED: u64 = 0x5EED_E665;

// Viewport
pub const DEVICE_PIXEL_RATIO_MAX: f64 = 2.0;
pub const TIME_OFFSET_SEC: f32 = 10.0; // shader noise looks flat near t = 0
