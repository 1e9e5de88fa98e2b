// Host-side tests for scalar tweening.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod tween {
    include!("../src/core/tween.rs");
}

use tween::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

#[test]
fn linear_interpolation_hits_endpoints_and_midpoint() {
    assert!(close(interpolate(0.0, 1.0, 0.0, 2.0, Ease::Linear), 0.0));
    assert!(close(interpolate(0.0, 1.0, 1.0, 2.0, Ease::Linear), 0.5));
    assert!(close(interpolate(0.0, 1.0, 2.0, 2.0, Ease::Linear), 1.0));
    assert!(close(interpolate(1.0, 0.0, 0.5, 1.0, Ease::Linear), 0.5));
}

#[test]
fn progress_is_clamped() {
    assert!(close(interpolate(0.2, 0.8, -3.0, 1.0, Ease::Linear), 0.2));
    assert!(close(interpolate(0.2, 0.8, 30.0, 1.0, Ease::PowerOut), 0.8));
}

#[test]
fn zero_duration_jumps_to_end() {
    assert_eq!(interpolate(0.0, 1.0, 0.0, 0.0, Ease::Linear), 1.0);
    assert_eq!(interpolate(0.3, 0.0, -1.0, -2.0, Ease::PowerOut), 0.0);
}

#[test]
fn power_out_leads_linear() {
    for i in 1..10 {
        let p = i as f32 / 10.0;
        let eased = Ease::PowerOut.apply(p);
        assert!(eased > p, "ease-out should lead at p={p}");
        assert!(eased < 1.0);
    }
    assert!(close(Ease::PowerOut.apply(0.5), 0.75));
    assert_eq!(Ease::default(), Ease::PowerOut);
}

#[test]
fn eases_are_monotonic() {
    for ease in [Ease::Linear, Ease::PowerOut] {
        let mut prev = ease.apply(0.0);
        for i in 1..=100 {
            let v = ease.apply(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        assert!(close(prev, 1.0));
    }
}

#[test]
fn tween_samples_relative_to_start() {
    let t = Tween::new(0.0, 1.0, 10.0, 0.7, Ease::Linear);
    assert_eq!(t.value_at(5.0), 0.0);
    assert!(close(t.value_at(10.35), 0.5));
    assert!(close(t.value_at(10.7), 1.0));
    assert!(!t.is_finished(10.5));
    assert!(t.is_finished(11.0));
}

#[test]
fn animated_rests_until_started() {
    let a = Animated::at_rest(0.4);
    assert_eq!(a.value_at(0.0), 0.4);
    assert_eq!(a.value_at(1e6), 0.4);
    assert!(a.tween().is_none());
    assert_eq!(Animated::default().value_at(3.0), 0.0);
}

#[test]
fn retarget_starts_from_current_value_and_wins() {
    let mut a = Animated::default();
    a.start(Tween::new(0.0, 1.0, 0.0, 1.0, Ease::Linear));
    assert!(close(a.value_at(0.25), 0.25));

    a.retarget(0.0, 0.25, 1.0, Ease::Linear);
    assert!(close(a.value_at(0.25), 0.25));
    assert!(close(a.value_at(0.75), 0.125));
    assert!(close(a.value_at(1.25), 0.0));
    assert!(close(a.value_at(5.0), 0.0));
}

#[test]
fn settle_keeps_final_value() {
    let mut a = Animated::default();
    a.start(Tween::new(0.0, 1.0, 0.0, 2.0, Ease::PowerOut));
    a.settle(1.0);
    assert!(a.tween().is_some());
    a.settle(2.0);
    assert!(a.tween().is_none());
    assert_eq!(a.value_at(2.0), 1.0);
}
