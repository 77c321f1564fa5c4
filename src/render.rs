//! Frame-path drawing: the particle field and explosion layers on the 2D
//! canvas, and style application for the DOM-hosted sprites and logo.

use crate::core::explosion::{self, Sequencer};
use crate::core::field::{Field, LINK_COLOR, PALETTE};
use crate::core::flight::{DronePose, JetPose};
use crate::core::glitch::GlitchSample;
use crate::core::logo::GlowSample;
use glam::Vec2;
use web_sys as web;

/// Clear the canvas and draw every particle plus the link lines between
/// near neighbors. All coordinates are CSS pixels; the context is scaled by
/// the device pixel ratio around the whole pass.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, field: &Field, dpr: f64) {
    let bounds = field.bounds();
    ctx.save();
    let _ = ctx.scale(dpr, dpr);
    ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);

    let cfg = field.config();
    let particles = field.particles();

    ctx.set_stroke_style_str(LINK_COLOR);
    ctx.set_line_width(1.0);
    let link_d2 = cfg.link_distance * cfg.link_distance;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d2 = a.pos.distance_squared(b.pos);
            if d2 < link_d2 {
                let fade = 1.0 - d2 / link_d2;
                ctx.set_global_alpha((cfg.link_opacity * fade) as f64);
                ctx.begin_path();
                ctx.move_to(a.pos.x as f64, a.pos.y as f64);
                ctx.line_to(b.pos.x as f64, b.pos.y as f64);
                ctx.stroke();
            }
        }
    }

    for p in particles {
        ctx.set_global_alpha(cfg.opacity as f64);
        ctx.set_fill_style_str(PALETTE[p.color as usize % PALETTE.len()]);
        ctx.begin_path();
        let _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            p.size as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
    }
    ctx.restore();
}

/// Draw every live explosion, back to front, additively blended over the
/// particle pass.
pub fn draw_explosions(
    ctx: &web::CanvasRenderingContext2d,
    seq: &Sequencer,
    now_ms: f64,
    center: Vec2,
    dpr: f64,
) {
    if seq.live().is_empty() {
        return;
    }
    ctx.save();
    let _ = ctx.scale(dpr, dpr);
    let _ = ctx.set_global_composite_operation("lighter");
    for e in seq.live() {
        let t = ((now_ms - e.started_ms) / 1000.0) as f32;
        draw_burst_layers(ctx, t, center);
        for d in &e.debris {
            if let Some(s) = explosion::debris_sample(d, t) {
                let dir = Vec2::from_angle(d.angle_deg.to_radians());
                let pos = center + dir * s.travel;
                ctx.save();
                ctx.set_global_alpha(s.opacity as f64);
                ctx.set_fill_style_str("#67e8f9");
                let _ = ctx.translate(pos.x as f64, pos.y as f64);
                let _ = ctx.rotate(s.rotation_deg.to_radians() as f64);
                let half = (d.size * 0.5) as f64;
                ctx.fill_rect(-half, -half, d.size as f64, d.size as f64);
                ctx.restore();
            }
        }
        for sp in &e.sparks {
            if let Some(s) = explosion::spark_sample(sp, t) {
                let dir = Vec2::from_angle(sp.angle_deg.to_radians());
                let pos = center + dir * s.travel;
                ctx.set_global_alpha(s.opacity as f64);
                ctx.set_fill_style_str("#ffffff");
                ctx.begin_path();
                let _ = ctx.arc(pos.x as f64, pos.y as f64, 1.5, 0.0, std::f64::consts::TAU);
                ctx.fill();
            }
        }
    }
    ctx.restore();
}

fn draw_burst_layers(ctx: &web::CanvasRenderingContext2d, t: f32, center: Vec2) {
    let cx = center.x as f64;
    let cy = center.y as f64;

    if let Some(s) = explosion::cloud_slow(t) {
        fill_circle(ctx, cx, cy, 30.0 * s.scale as f64, "#0ea5e9", s.opacity * 0.25);
    }
    if let Some(s) = explosion::cloud_fast(t) {
        fill_circle(ctx, cx, cy, 30.0 * s.scale as f64, "#22d3ee", s.opacity * 0.3);
    }
    if let Some(s) = explosion::distortion_ring(t) {
        stroke_circle(ctx, cx, cy, 20.0 * s.scale as f64, 2.0, "#22d3ee", s.opacity);
    }
    if let Some(s) = explosion::plasma_ring(t) {
        stroke_circle(ctx, cx, cy, 20.0 * s.scale as f64, 4.0, "#67e8f9", s.opacity);
    }
    if let Some(s) = explosion::lens_streak(t) {
        ctx.set_global_alpha(s.opacity as f64);
        ctx.set_fill_style_str("#ffffff");
        let half_w = (10.0 * s.scale) as f64;
        ctx.fill_rect(cx - half_w, cy - 1.0, half_w * 2.0, 2.0);
    }
    if let Some(s) = explosion::core_flash(t) {
        fill_circle(ctx, cx, cy, 8.0 * s.scale as f64, "#ffffff", s.opacity);
    }
}

fn fill_circle(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    r: f64,
    color: &str,
    alpha: f32,
) {
    if r <= 0.0 {
        return;
    }
    ctx.set_global_alpha(alpha as f64);
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.fill();
}

fn stroke_circle(
    ctx: &web::CanvasRenderingContext2d,
    x: f64,
    y: f64,
    r: f64,
    width: f64,
    color: &str,
    alpha: f32,
) {
    if r <= 0.0 {
        return;
    }
    ctx.set_global_alpha(alpha as f64);
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(width);
    ctx.begin_path();
    let _ = ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
    ctx.stroke();
}

// ---------------- DOM appliers ----------------

/// 3D tilt plus the floating bob on the logo container.
pub fn apply_tilt(el: &web::HtmlElement, tilt_deg: Vec2, float_y_px: f32) {
    let transform = format!(
        "perspective(1000px) translateY({float_y_px:.2}px) rotateX({:.2}deg) rotateY({:.2}deg)",
        tilt_deg.x, tilt_deg.y
    );
    crate::dom::set_style(el, "transform", &transform);
}

pub fn place_jet(el: &web::HtmlElement, pose: &JetPose) {
    if !pose.visible {
        crate::dom::set_style(el, "opacity", "0");
        return;
    }
    crate::dom::set_style(el, "opacity", &format!("{:.3}", pose.opacity));
    crate::dom::set_style(
        el,
        "transform",
        &format!("translate({:.2}vw, {:.2}vh)", pose.x_vw, pose.y_vh),
    );
}

pub fn place_drone(el: &web::HtmlElement, pose: &DronePose) {
    if !pose.visible {
        crate::dom::set_style(el, "opacity", "0");
        return;
    }
    crate::dom::set_style(el, "opacity", "1");
    crate::dom::set_style(
        el,
        "transform",
        &format!(
            "translate({:.1}px, {:.1}px) rotate({:.2}deg)",
            pose.position.x, pose.position.y, pose.angle_deg
        ),
    );
}

/// Breathing glow blob behind the logo.
pub fn apply_glow(el: &web::HtmlElement, s: &GlowSample) {
    crate::dom::set_style(el, "opacity", &format!("{:.3}", s.opacity));
    crate::dom::set_style(el, "transform", &format!("scale({:.3})", s.scale));
}

/// Scanline sweep position inside the logo box.
pub fn place_scanline(el: &web::HtmlElement, top_pct: f32) {
    crate::dom::set_style(el, "top", &format!("{top_pct:.1}%"));
}

/// Apply (or clear) the glitch distortion on one overlay layer.
pub fn apply_glitch(el: &web::HtmlElement, sample: Option<GlitchSample>) {
    match sample {
        Some(s) => {
            crate::dom::set_style(el, "opacity", &format!("{:.3}", s.opacity));
            crate::dom::set_style(
                el,
                "transform",
                &format!("translate({:.1}px, {:.1}px)", s.x, s.y),
            );
            crate::dom::set_style(el, "filter", &format!("hue-rotate({:.0}deg)", s.hue_deg));
        }
        None => {
            crate::dom::set_style(el, "opacity", "0");
        }
    }
}
