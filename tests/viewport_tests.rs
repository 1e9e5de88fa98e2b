// Host-side tests for canvas sizing and the aspect uniforms.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod eggs_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod viewport {
        include!("../src/core/viewport.rs");
    }
}

use eggs_core::viewport::*;

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(capped_pixel_ratio(1.0), 1.0);
    assert_eq!(capped_pixel_ratio(1.5), 1.5);
    assert_eq!(capped_pixel_ratio(3.0), 2.0);
    assert_eq!(capped_pixel_ratio(0.0), 1.0);
    assert_eq!(capped_pixel_ratio(f64::NAN), 1.0);
}

#[test]
fn backing_size_scales_css_size() {
    let vp = Viewport::from_css(800.0, 600.0, 3.0);
    assert_eq!(vp, Viewport { width: 1600, height: 1200 });
    let vp = Viewport::from_css(1280.0, 720.0, 1.25);
    assert_eq!(vp, Viewport { width: 1600, height: 900 });
}

#[test]
fn backing_size_never_zero() {
    let vp = Viewport::from_css(0.0, 0.0, 2.0);
    assert_eq!(vp, Viewport { width: 1, height: 1 });
}

#[test]
fn landscape_keeps_unit_scale() {
    let vp = Viewport { width: 1920, height: 1080 };
    assert!((vp.ratio() - 1920.0 / 1080.0).abs() < 1e-6);
    assert_eq!(vp.resolution_scale(), 1.0);
}

#[test]
fn portrait_and_square_scale_up() {
    let tall = Viewport { width: 1080, height: 1920 };
    assert!((tall.ratio() - 0.5625).abs() < 1e-6);
    assert!((tall.resolution_scale() - 1920.0 / 1080.0).abs() < 1e-6);

    let square = Viewport { width: 500, height: 500 };
    assert_eq!(square.ratio(), 1.0);
    assert_eq!(square.resolution_scale(), 1.0);
}
