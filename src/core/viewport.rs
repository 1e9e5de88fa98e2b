use super::constants::DEVICE_PIXEL_RATIO_MAX;

/// Canvas backing-store size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.min(DEVICE_PIXEL_RATIO_MAX)
    } else {
        1.0
    }
}

impl Viewport {
    /// Size for a CSS box of `css_w` x `css_h` on a display with the given
    /// pixel ratio. Never returns a zero dimension.
    pub fn from_css(css_w: f64, css_h: f64, device_pixel_ratio: f64) -> Self {
        let dpr = capped_pixel_ratio(device_pixel_ratio);
        Self {
            width: ((css_w * dpr) as u32).max(1),
            height: ((css_h * dpr) as u32).max(1),
        }
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Extra scale for portrait canvases so the effect keeps its size on the
    /// short axis; 1 for landscape.
    #[inline]
    pub fn resolution_scale(&self) -> f32 {
        if self.width > self.height {
            1.0
        } else {
            self.height as f32 / self.width.max(1) as f32
        }
    }
}
