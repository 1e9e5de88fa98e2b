pub mod clock;
pub mod constants;
pub mod gpu_error;
pub mod params;
pub mod ripples;
pub mod tween;
pub mod viewport;

pub use clock::*;
pub use constants::*;
pub use gpu_error::*;
pub use params::*;
pub use ripples::*;
pub use tween::*;
pub use viewport::*;

// Shaders bundled as string constants
pub static EGGS_WGSL: &str = include_str!("../../shaders/eggs.wgsl");
