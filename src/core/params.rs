use super::constants::*;
use thiserror::Error;

/// Tunable ripple behaviour. `Default` mirrors the shader's compiled-in layout.
#[derive(Clone, Debug, PartialEq)]
pub struct RippleParams {
    pub capacity: usize,
    pub texture_width: u32,
    pub texture_height: u32,
    pub distance_duration_sec: f32,
    pub radius_rise_sec: f32,
    pub radius_decay_sec: f32,
    pub jitter_x: f32,
}

impl Default for RippleParams {
    fn default() -> Self {
        Self {
            capacity: CLICK_CAPACITY,
            texture_width: CLICK_TEXTURE_WIDTH,
            texture_height: CLICK_TEXTURE_HEIGHT,
            distance_duration_sec: CLICK_DISTANCE_DURATION_SEC,
            radius_rise_sec: RADIUS_RISE_DURATION_SEC,
            radius_decay_sec: RADIUS_DECAY_DURATION_SEC,
            jitter_x: CLICK_JITTER_X,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ParamsError {
    #[error("ripple capacity must be at least 1")]
    EmptyRing,
    #[error("ripple capacity {capacity} does not fit a {width}x{height} texture")]
    TextureTooSmall {
        capacity: usize,
        width: u32,
        height: u32,
    },
    #[error("{name} must be positive, got {value}")]
    NonPositiveDuration { name: &'static str, value: f32 },
    #[error("jitter must be within [0, 1), got {0}")]
    JitterOutOfRange(f32),
}

impl RippleParams {
    #[inline]
    pub fn texel_count(&self) -> usize {
        self.texture_width as usize * self.texture_height as usize
    }

    #[inline]
    pub fn texture_bytes(&self) -> usize {
        self.texel_count() * CLICK_TEXEL_BYTES
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.capacity == 0 {
            return Err(ParamsError::EmptyRing);
        }
        if self.capacity > self.texel_count() {
            return Err(ParamsError::TextureTooSmall {
                capacity: self.capacity,
                width: self.texture_width,
                height: self.texture_height,
            });
        }
        for (name, value) in [
            ("distance_duration_sec", self.distance_duration_sec),
            ("radius_rise_sec", self.radius_rise_sec),
            ("radius_decay_sec", self.radius_decay_sec),
        ] {
            if !(value > 0.0) {
                return Err(ParamsError::NonPositiveDuration { name, value });
            }
        }
        if !(0.0..1.0).contains(&self.jitter_x) {
            return Err(ParamsError::JitterOutOfRange(self.jitter_x));
        }
        Ok(())
    }
}
