// Host-side checks on the bundled WGSL source and the GPU init error kinds.

#![allow(dead_code)]
mod eggs_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod gpu_error {
        include!("../src/core/gpu_error.rs");
    }
}

use eggs_core::constants::*;
use eggs_core::gpu_error::GpuInitError;

const EGGS_WGSL: &str = include_str!("../shaders/eggs.wgsl");

fn code_lines() -> impl Iterator<Item = &'static str> {
    EGGS_WGSL
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with("//"))
}

#[test]
fn shader_has_expected_entry_points_and_bindings() {
    assert!(EGGS_WGSL.contains("fn vs_fullscreen("));
    assert!(EGGS_WGSL.contains("fn fs_eggs("));
    assert!(EGGS_WGSL.contains("@group(0) @binding(0) var<uniform> U: EggsUniforms;"));
    assert!(EGGS_WGSL.contains("@group(0) @binding(1) var click_data: texture_2d<f32>;"));
    assert!(EGGS_WGSL.contains("@group(0) @binding(2) var click_sampler: sampler;"));
}

#[test]
fn shader_layout_matches_ring_constants() {
    assert!(EGGS_WGSL.contains(&format!("const CLICKS: u32 = {}u;", CLICK_CAPACITY)));
    assert!(EGGS_WGSL.contains(&format!("const DATA_W: u32 = {}u;", CLICK_TEXTURE_WIDTH)));
    assert!(EGGS_WGSL.contains(&format!("const DATA_H: u32 = {}u;", CLICK_TEXTURE_HEIGHT)));
}

#[test]
fn ripple_falloff_squares_without_pow() {
    // pixels inside the ripple front have dist < front, so the offset is
    // negative and pow() would be undefined there
    assert!(code_lines().all(|l| !l.contains("pow(")));
    assert!(code_lines().any(|l| l == "let k = (dist - front) * 14.0;"));
    assert!(code_lines().any(|l| l.contains("exp(-k * k)")));
}

#[test]
fn only_missing_gpu_context_alerts() {
    let unavailable = GpuInitError::Unavailable("no GPU adapter".into());
    let pipeline = GpuInitError::Pipeline("entry point fs_eggs not found".into());
    assert!(unavailable.alerts_user());
    assert!(!pipeline.alerts_user());
    assert_eq!(
        unavailable.to_string(),
        "no GPU context available: no GPU adapter"
    );
    assert_eq!(
        pipeline.to_string(),
        "eggs pipeline is invalid: entry point fs_eggs not found"
    );
}
