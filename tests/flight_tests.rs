// Host-side tests for drone path geometry and the jet/drone loop timing.

#![allow(dead_code)]
mod flight {
    include!("../src/core/flight.rs");
}

use flight::*;
use glam::Vec2;

#[test]
fn desktop_widths_get_the_fixed_path() {
    assert_eq!(compute_drone_path(1024.0, 768.0), desktop_drone_path());
    assert_eq!(compute_drone_path(1920.0, 1080.0), desktop_drone_path());
    assert_eq!(compute_drone_path(MOBILE_BREAKPOINT_PX, 500.0), desktop_drone_path());
}

#[test]
fn mobile_path_derives_from_viewport() {
    let p = compute_drone_path(500.0, 700.0);
    assert_ne!(p, desktop_drone_path());
    // p0.x = -0.2 * width, p0.y = 0.3 * height
    assert!(p.starts_with("M -100.0 210.0"), "path was {p}");
    // A different mobile viewport yields a different string.
    assert_ne!(p, compute_drone_path(400.0, 700.0));
    assert_ne!(p, compute_drone_path(500.0, 600.0));
}

#[test]
fn path_updates_across_the_breakpoint_without_remount() {
    // Same pure function, called again with a new width: no state involved.
    let narrow = compute_drone_path(500.0, 700.0);
    let wide = compute_drone_path(1024.0, 700.0);
    assert_ne!(narrow, wide);
    assert_eq!(wide, desktop_drone_path());
}

#[test]
fn cubic_endpoints_and_tangent() {
    let path = CubicPath::for_viewport(1920.0, 1080.0);
    assert!((path.point(0.0) - path.p0).length() < 1e-3);
    assert!((path.point(1.0) - path.p3).length() < 1e-3);

    // Tangent at the start points along p1 - p0.
    let t0 = path.tangent(0.0).normalize();
    let chord = (path.p1 - path.p0).normalize();
    assert!((t0 - chord).length() < 1e-4);

    // Tangent angle matches a finite difference of positions.
    let u = 0.37;
    let eps = 1e-3;
    let d = (path.point(u + eps) - path.point(u - eps)).normalize();
    let ang = d.y.atan2(d.x).to_degrees();
    assert!((ang - path.tangent_angle_deg(u)).abs() < 0.5);
}

#[test]
fn jet_fades_in_travels_left_and_fades_out() {
    let start = jet_pose(0.0);
    assert!(start.visible);
    assert!(start.opacity < 1e-3);
    assert_eq!(start.x_vw, JET_START_X_VW);

    let mid = jet_pose(JET_TRAVEL_SECS * 0.5);
    assert_eq!(mid.opacity, 1.0);
    assert!(mid.x_vw < start.x_vw, "jet flies right to left");

    let end = jet_pose(JET_TRAVEL_SECS * 0.999);
    assert!(end.opacity < 0.05);
    assert!((end.x_vw - JET_END_X_VW).abs() < 1.0);
}

#[test]
fn jet_is_hidden_during_the_pause_and_cycles() {
    let parked = jet_pose(JET_TRAVEL_SECS + 1.0);
    assert!(!parked.visible);
    assert_eq!(parked.opacity, 0.0);

    let cycle = JET_TRAVEL_SECS + JET_PAUSE_SECS;
    let a = jet_pose(1.25);
    let b = jet_pose(1.25 + cycle * 3.0);
    assert!((a.x_vw - b.x_vw).abs() < 1e-3);
    assert!((a.opacity - b.opacity).abs() < 1e-3);
}

#[test]
fn jet_opacity_always_in_unit_range() {
    let mut t = 0.0;
    while t < 2.0 * (JET_TRAVEL_SECS + JET_PAUSE_SECS) {
        let p = jet_pose(t);
        assert!(p.opacity >= 0.0 && p.opacity <= 1.0, "opacity {} at {}", p.opacity, t);
        t += 0.01;
    }
}

#[test]
fn drone_waits_out_its_start_delay() {
    let path = CubicPath::DESKTOP;
    assert!(!drone_pose(&path, 0.0).visible);
    assert!(!drone_pose(&path, DRONE_START_DELAY_SECS - 0.01).visible);
    let first = drone_pose(&path, DRONE_START_DELAY_SECS);
    assert!(first.visible);
    assert!((first.position - path.p0).length() < 1e-2);
}

#[test]
fn drone_orientation_stays_tangent() {
    let path = CubicPath::DESKTOP;
    let mut t = DRONE_START_DELAY_SECS + 0.1;
    while t < DRONE_START_DELAY_SECS + DRONE_PERIOD_SECS {
        let pose = drone_pose(&path, t);
        let u = ((t - DRONE_START_DELAY_SECS) / DRONE_PERIOD_SECS).fract();
        assert!((pose.angle_deg - path.tangent_angle_deg(u)).abs() < 1e-3);
        t += 0.5;
    }
}

#[test]
fn path_swap_keeps_the_clock() {
    // Mid-flight resize: same elapsed time, new geometry, no restart.
    let elapsed = DRONE_START_DELAY_SECS + 3.0;
    let desktop = drone_pose(&CubicPath::DESKTOP, elapsed);
    let mobile_path = CubicPath::for_viewport(500.0, 700.0);
    let mobile = drone_pose(&mobile_path, elapsed);
    assert!(desktop.visible && mobile.visible);
    assert!((desktop.position - mobile.position).length() > 1.0);

    // The loop parameter u is unchanged by the swap.
    let u = ((elapsed - DRONE_START_DELAY_SECS) / DRONE_PERIOD_SECS).fract();
    assert!((mobile.position - mobile_path.point(u)).length() < 1e-3);
}

#[test]
fn drone_loops_after_a_full_period() {
    let path = CubicPath::DESKTOP;
    let a = drone_pose(&path, DRONE_START_DELAY_SECS + 1.0);
    let b = drone_pose(&path, DRONE_START_DELAY_SECS + 1.0 + DRONE_PERIOD_SECS);
    assert!((a.position - b.position).length() < 1e-2);
}
