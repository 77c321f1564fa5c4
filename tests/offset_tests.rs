// Host-side tests for the pointer offset store.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod offset {
    include!("../src/core/offset.rs");
}

use glam::Vec2;
use offset::*;

#[test]
fn normalized_offset_stays_in_bounds() {
    let (w, h) = (640.0, 480.0);
    let mut x = -100.0;
    while x <= w + 100.0 {
        let mut y = -100.0;
        while y <= h + 100.0 {
            let o = normalized_offset(x, y, w, h);
            assert!(o.x >= -0.5 && o.x <= 0.5, "x out of range: {}", o.x);
            assert!(o.y >= -0.5 && o.y <= 0.5, "y out of range: {}", o.y);
            y += 37.0;
        }
        x += 37.0;
    }
}

#[test]
fn normalized_offset_center_and_corners() {
    let o = normalized_offset(320.0, 240.0, 640.0, 480.0);
    assert!(o.length() < 1e-6);
    assert_eq!(normalized_offset(0.0, 0.0, 640.0, 480.0), Vec2::new(-0.5, -0.5));
    assert_eq!(normalized_offset(640.0, 480.0, 640.0, 480.0), Vec2::new(0.5, 0.5));
}

#[test]
fn degenerate_container_maps_to_center() {
    assert_eq!(normalized_offset(10.0, 10.0, 0.0, 480.0), Vec2::ZERO);
    assert_eq!(normalized_offset(10.0, 10.0, 640.0, -1.0), Vec2::ZERO);
}

#[test]
fn wrong_producer_write_is_rejected() {
    let mut store = OffsetStore::new();
    assert_eq!(store.producer(), Producer::User);

    assert!(!store.write(Producer::Autopilot, Vec2::new(0.3, 0.3)));
    assert_eq!(store.target(), Vec2::ZERO);

    assert!(store.write(Producer::User, Vec2::new(0.2, -0.1)));
    assert_eq!(store.target(), Vec2::new(0.2, -0.1));
}

#[test]
fn producer_switch_is_the_only_handover_point() {
    let mut store = OffsetStore::new();
    store.set_producer(Producer::Autopilot);

    // User writes are dead while the autopilot owns the store.
    assert!(!store.write(Producer::User, Vec2::new(0.5, 0.5)));
    assert!(store.write(Producer::Autopilot, Vec2::new(0.1, 0.0)));

    // After handback the very next accepted write is the user's.
    store.set_producer(Producer::User);
    assert!(!store.write(Producer::Autopilot, Vec2::new(0.4, 0.4)));
    assert!(store.write(Producer::User, Vec2::new(-0.2, 0.2)));
    assert_eq!(store.target(), Vec2::new(-0.2, 0.2));
}

#[test]
fn write_clamps_into_offset_range() {
    let mut store = OffsetStore::new();
    assert!(store.write(Producer::User, Vec2::new(3.0, -7.0)));
    assert_eq!(store.target(), Vec2::new(0.5, -0.5));
}

#[test]
fn spring_converges_to_target() {
    let mut store = OffsetStore::new();
    store.write(Producer::User, Vec2::new(0.3, -0.2));
    for _ in 0..600 {
        store.step(1.0 / 120.0);
    }
    assert!((store.value() - Vec2::new(0.3, -0.2)).length() < 1e-2);
}

#[test]
fn tilt_maps_offset_extremes_to_fifteen_degrees() {
    let mut store = OffsetStore::new();
    store.write(Producer::User, Vec2::new(0.5, 0.5));
    for _ in 0..1200 {
        store.step(1.0 / 120.0);
    }
    let tilt = store.tilt_degrees();
    // Bottom-right corner: lean away vertically, toward horizontally.
    assert!((tilt.x + MAX_TILT_DEG).abs() < 0.5, "rotateX {}", tilt.x);
    assert!((tilt.y - MAX_TILT_DEG).abs() < 0.5, "rotateY {}", tilt.y);
}
