// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn client_to_uv_maps_corners() {
    assert_eq!(client_to_uv(0.0, 0.0, 1920.0, 1080.0), [0.0, 0.0]);
    assert_eq!(client_to_uv(1920.0, 1080.0, 1920.0, 1080.0), [1.0, 1.0]);
    assert_eq!(client_to_uv(960.0, 540.0, 1920.0, 1080.0), [0.5, 0.5]);
}

#[test]
fn client_to_uv_clamps_outside_viewport() {
    let [u, v] = client_to_uv(-100.0, 2000.0, 1920.0, 1080.0);
    assert_eq!(u, 0.0);
    assert_eq!(v, 1.0);
}

#[test]
fn client_to_uv_degenerate_viewport_is_center() {
    assert_eq!(client_to_uv(100.0, 100.0, 0.0, 1080.0), [0.5, 0.5]);
    assert_eq!(client_to_uv(100.0, 100.0, 1920.0, 0.0), [0.5, 0.5]);
}

#[test]
fn trail_jitter_ranges() {
    let (s0, r0) = trail_jitter(0.0, 0.0);
    assert_eq!(s0, 0.5);
    assert_eq!(r0, 0.0);

    let (s1, r1) = trail_jitter(1.0, 1.0);
    assert_eq!(s1, 1.0);
    assert_eq!(r1, 360.0);

    let (s, r) = trail_jitter(0.5, 0.25);
    assert_eq!(s, 0.75);
    assert_eq!(r, 90.0);
}

#[test]
fn pointer_speed_is_clamped() {
    // A full-viewport jump in one millisecond would report an absurd speed.
    let speed = pointer_speed([0.0, 0.0], [1.0, 1.0], 0.001);
    assert_eq!(speed, 10.0);
}

#[test]
fn pointer_speed_zero_when_still() {
    let speed = pointer_speed([0.3, 0.7], [0.3, 0.7], 1.0 / 60.0);
    assert_eq!(speed, 0.0);
}
