// Logo motion timelines: idle float bob, click dip, glow-blob breathing
// pulse and the scanline sweep. Pure functions of elapsed time; the frame
// restyle path samples them and applies styles.

/// Idle float bob: `[0, -10, 0]` px over 4 s, ease-in-out.
pub const FLOAT_PERIOD_SECS: f32 = 4.0;
pub const FLOAT_DEPTH_PX: f32 = 10.0;

/// Click dip: `[0, -20, 0]` px over 0.3 s, replacing the bob while the
/// click state is held.
pub const DIP_DEPTH_PX: f32 = 20.0;
pub const DIP_SECS: f32 = 0.3;

/// Glow blob breathing loop: 5 s, ease-in-out.
pub const GLOW_PERIOD_SECS: f32 = 5.0;
pub const GLOW_OPACITY_MIN: f32 = 0.3;
pub const GLOW_OPACITY_MAX: f32 = 0.7;
pub const GLOW_SCALE_MIN: f32 = 0.95;
pub const GLOW_SCALE_MAX: f32 = 1.1;

// Boosted glow while the click state is held.
pub const GLOW_CLICK_OPACITY: f32 = 0.9;
pub const GLOW_CLICK_SCALE: f32 = 1.3;

/// Scanline sweep: `top` runs -10% to 110% of the logo box over 3 s,
/// linear, looping.
pub const SCANLINE_PERIOD_SECS: f32 = 3.0;
pub const SCANLINE_START_PCT: f32 = -10.0;
pub const SCANLINE_END_PCT: f32 = 110.0;

// 0 -> 1 -> 0 over one period, cosine-eased at both ends.
#[inline]
fn ease_wave(elapsed_secs: f32, period: f32) -> f32 {
    let phase = (elapsed_secs / period) * std::f32::consts::TAU;
    0.5 * (1.0 - phase.cos())
}

/// Vertical float offset in px, negative is up.
#[inline]
pub fn float_offset_px(elapsed_secs: f32) -> f32 {
    -FLOAT_DEPTH_PX * ease_wave(elapsed_secs, FLOAT_PERIOD_SECS)
}

/// Vertical dip offset for a click at progress `u` in `[0, 1]`.
#[inline]
pub fn dip_offset_px(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    -DIP_DEPTH_PX * (std::f32::consts::PI * u).sin()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowSample {
    pub opacity: f32,
    pub scale: f32,
}

/// Glow blob state at `elapsed_secs`. The click boost overrides the idle
/// breathing pulse for as long as the click state is held.
pub fn glow_sample(elapsed_secs: f32, clicking: bool) -> GlowSample {
    if clicking {
        return GlowSample {
            opacity: GLOW_CLICK_OPACITY,
            scale: GLOW_CLICK_SCALE,
        };
    }
    let w = ease_wave(elapsed_secs, GLOW_PERIOD_SECS);
    GlowSample {
        opacity: GLOW_OPACITY_MIN + (GLOW_OPACITY_MAX - GLOW_OPACITY_MIN) * w,
        scale: GLOW_SCALE_MIN + (GLOW_SCALE_MAX - GLOW_SCALE_MIN) * w,
    }
}

/// Scanline `top` offset as a percentage of the logo box.
#[inline]
pub fn scanline_top_pct(elapsed_secs: f32) -> f32 {
    let u = (elapsed_secs / SCANLINE_PERIOD_SECS).rem_euclid(1.0);
    SCANLINE_START_PCT + (SCANLINE_END_PCT - SCANLINE_START_PCT) * u
}
