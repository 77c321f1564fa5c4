// Host-side tests for the particle field simulation.

#![allow(dead_code)]
mod field {
    include!("../src/core/field.rs");
}

use field::*;
use glam::Vec2;

fn test_field() -> Field {
    Field::new(FieldConfig::default(), 400.0, 400.0, 1)
}

#[test]
fn initializes_with_configured_count() {
    let f = test_field();
    assert_eq!(f.particles().len(), f.config().count);
    for p in f.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 400.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 400.0);
        assert!(p.size >= f.config().size_min && p.size <= f.config().size_max);
        assert!((p.color as usize) < PALETTE.len());
    }
}

#[test]
fn particles_stay_inside_bounds() {
    let mut f = test_field();
    for _ in 0..2000 {
        f.step(1.0 / 60.0);
    }
    for p in f.particles() {
        assert!(p.pos.x >= -1.0 && p.pos.x <= 401.0, "x escaped: {}", p.pos.x);
        assert!(p.pos.y >= -1.0 && p.pos.y <= 401.0, "y escaped: {}", p.pos.y);
    }
}

#[test]
fn attract_pulls_nearby_particles_toward_the_pointer() {
    let mut f = test_field();
    let target = Vec2::new(200.0, 200.0);
    // Watch particles well inside the attract radius but far enough not to
    // overshoot the pointer within a few frames.
    let near: Vec<usize> = f
        .particles()
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            let d = p.pos.distance(target);
            d > 60.0 && d < f.config().attract_distance * 0.75
        })
        .map(|(i, _)| i)
        .collect();
    assert!(!near.is_empty(), "seed produced no particles near center");
    let before: f32 = near
        .iter()
        .map(|&i| f.particles()[i].pos.distance(target))
        .sum();

    f.set_pointer(Some(target), true);
    for _ in 0..4 {
        f.step(1.0 / 60.0);
    }
    let after: f32 = near
        .iter()
        .map(|&i| f.particles()[i].pos.distance(target))
        .sum();
    assert!(after < before, "mean distance should shrink: {after} vs {before}");

    // Velocity clamp holds under sustained attraction.
    for _ in 0..120 {
        f.step(1.0 / 60.0);
    }
    for p in f.particles() {
        assert!(p.vel.length() <= f.config().attract_max_speed + 1e-3);
    }
}

#[test]
fn pointer_updates_never_regenerate_the_set() {
    let mut f = test_field();
    let snapshot: Vec<Vec2> = f.particles().iter().map(|p| p.pos).collect();
    f.set_pointer(Some(Vec2::new(10.0, 10.0)), true);
    f.set_pointer(None, false);
    let unchanged: Vec<Vec2> = f.particles().iter().map(|p| p.pos).collect();
    assert_eq!(snapshot, unchanged);
}

#[test]
fn click_burst_injects_push_quantity() {
    let mut f = test_field();
    let n = f.particles().len();
    let at = Vec2::new(120.0, 80.0);
    f.push_burst(at);
    assert_eq!(f.particles().len(), n + f.config().push_quantity);
    for p in &f.particles()[n..] {
        assert_eq!(p.pos, at);
    }
}

#[test]
fn burst_growth_is_capped_at_twice_the_count() {
    let mut f = test_field();
    let cap = f.config().count * 2;
    let at = Vec2::new(50.0, 50.0);
    for _ in 0..40 {
        f.push_burst(at);
    }
    assert_eq!(f.particles().len(), cap);
    // A burst at the cap is a clean no-op.
    f.push_burst(at);
    assert_eq!(f.particles().len(), cap);
}

#[test]
fn interacting_requires_a_pointer() {
    let mut f = test_field();
    f.set_pointer(None, true);
    assert!(!f.is_interacting());
    f.set_pointer(Some(Vec2::new(1.0, 1.0)), true);
    assert!(f.is_interacting());
}

#[test]
fn resize_scales_positions_into_new_bounds() {
    let mut f = test_field();
    f.resize(800.0, 200.0);
    assert_eq!(f.bounds(), Vec2::new(800.0, 200.0));
    for p in f.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
        assert!(p.pos.y >= 0.0 && p.pos.y <= 200.0);
    }
}

#[test]
fn regenerate_applies_a_new_configuration() {
    let mut f = test_field();
    let cfg = FieldConfig {
        count: 25,
        ..FieldConfig::default()
    };
    f.regenerate(cfg);
    assert_eq!(f.particles().len(), 25);
}
