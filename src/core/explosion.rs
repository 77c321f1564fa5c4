// Layered burst effect: trigger bookkeeping, randomized debris/spark
// batches, and the fixed per-layer envelopes the renderer samples.
//
// Retriggering is fire-and-forget: each firing gets a fresh monotone key
// and its own batch, and an older firing still in flight keeps animating
// until its own clock runs out. Nothing is hard-cancelled.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Period between automatic triggers, milliseconds.
pub const RETRIGGER_PERIOD_MS: f64 = 5000.0;

pub const DEBRIS_COUNT: usize = 30;
pub const SPARK_COUNT: usize = 40;

// Debris randomization ranges.
pub const DEBRIS_DISTANCE_MIN: f32 = 100.0;
pub const DEBRIS_DISTANCE_MAX: f32 = 400.0;
pub const DEBRIS_SIZE_MIN: f32 = 4.0;
pub const DEBRIS_SIZE_MAX: f32 = 14.0;
pub const DEBRIS_STAGGER_MAX_SECS: f32 = 0.1;
pub const DEBRIS_DURATION_MIN_SECS: f32 = 1.0;
pub const DEBRIS_DURATION_MAX_SECS: f32 = 2.0;

pub const SPARK_DISTANCE_MIN: f32 = 150.0;
pub const SPARK_DISTANCE_MAX: f32 = 450.0;
pub const SPARK_DURATION_SECS: f32 = 0.5;
pub const SPARK_STAGGER_MAX_SECS: f32 = 0.15;

/// Longest layer (the big cloud bloom) plus the debris stagger headroom.
pub const TOTAL_DURATION_SECS: f32 = 2.6;

/// One debris piece. `corner_radii` is the irregular rounded-shape
/// descriptor: four corner radius fractions for a lumpy rectangle.
#[derive(Clone, Copy, Debug)]
pub struct Debris {
    pub angle_deg: f32,
    pub distance: f32,
    pub size: f32,
    pub rotation_deg: f32,
    pub stagger_secs: f32,
    pub duration_secs: f32,
    pub corner_radii: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
pub struct Spark {
    pub angle_deg: f32,
    pub distance: f32,
    pub stagger_secs: f32,
}

/// Generate the debris for one trigger. Deterministic given the seed, so a
/// trigger key maps to exactly one batch shape.
pub fn debris_batch(seed: u64) -> Vec<Debris> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..DEBRIS_COUNT)
        .map(|_| Debris {
            angle_deg: rng.gen_range(0.0..360.0),
            distance: rng.gen_range(DEBRIS_DISTANCE_MIN..DEBRIS_DISTANCE_MAX),
            size: rng.gen_range(DEBRIS_SIZE_MIN..DEBRIS_SIZE_MAX),
            rotation_deg: rng.gen_range(-360.0..360.0),
            stagger_secs: rng.gen_range(0.0..DEBRIS_STAGGER_MAX_SECS),
            duration_secs: rng.gen_range(DEBRIS_DURATION_MIN_SECS..DEBRIS_DURATION_MAX_SECS),
            corner_radii: [
                rng.gen_range(0.2..0.8),
                rng.gen_range(0.2..0.8),
                rng.gen_range(0.2..0.8),
                rng.gen_range(0.2..0.8),
            ],
        })
        .collect()
}

pub fn spark_batch(seed: u64) -> Vec<Spark> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SPARK_COUNT)
        .map(|_| Spark {
            angle_deg: rng.gen_range(0.0..360.0),
            distance: rng.gen_range(SPARK_DISTANCE_MIN..SPARK_DISTANCE_MAX),
            stagger_secs: rng.gen_range(0.0..SPARK_STAGGER_MAX_SECS),
        })
        .collect()
}

/// One in-flight firing.
pub struct Explosion {
    pub key: u32,
    pub started_ms: f64,
    pub debris: Vec<Debris>,
    pub sparks: Vec<Spark>,
}

/// Owns the monotone trigger key and the set of live firings.
pub struct Sequencer {
    next_key: u32,
    live: Vec<Explosion>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self {
            next_key: 0,
            live: Vec::new(),
        }
    }

    /// Fire a new explosion at `now_ms`. The batch is seeded by the trigger
    /// key, mixed with the start time so successive mounts differ.
    pub fn trigger(&mut self, now_ms: f64) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        let seed = (key as u64) ^ (now_ms as u64).wrapping_mul(0x9e3779b97f4a7c15);
        self.live.push(Explosion {
            key,
            started_ms: now_ms,
            debris: debris_batch(seed),
            sparks: spark_batch(seed ^ 0x5bd1e995),
        });
        key
    }

    /// Drop firings whose every layer has finished.
    pub fn retire_finished(&mut self, now_ms: f64) {
        self.live
            .retain(|e| now_ms - e.started_ms < (TOTAL_DURATION_SECS as f64) * 1000.0);
    }

    pub fn live(&self) -> &[Explosion] {
        &self.live
    }

    pub fn next_key(&self) -> u32 {
        self.next_key
    }
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------- Fixed layer envelopes ----------------

/// Opacity/scale sample for one additive layer. `None` means the layer is
/// not visible at that time (before its delay or after its end).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSample {
    pub opacity: f32,
    pub scale: f32,
}

fn keyframes(
    t: f32,
    delay: f32,
    duration: f32,
    times: &[f32],
    o: &[f32],
    s: &[f32],
) -> Option<LayerSample> {
    let local = t - delay;
    if local < 0.0 || local > duration {
        return None;
    }
    let u = local / duration;
    Some(LayerSample {
        opacity: interp(times, o, u),
        scale: interp(times, s, u),
    })
}

/// Piecewise-linear keyframe interpolation; `times` ascending in `[0, 1]`.
pub fn interp(times: &[f32], values: &[f32], u: f32) -> f32 {
    debug_assert_eq!(times.len(), values.len());
    if u <= times[0] {
        return values[0];
    }
    for w in times.windows(2).zip(values.windows(2)) {
        let (ts, vs) = w;
        if u <= ts[1] {
            let span = ts[1] - ts[0];
            let f = if span > 0.0 { (u - ts[0]) / span } else { 1.0 };
            return vs[0] + (vs[1] - vs[0]) * f;
        }
    }
    *values.last().unwrap_or(&0.0)
}

/// Core flash: 1.2 s, opacity 1 -> 1 -> 0, scale 0 -> 1.5 -> 40.
pub fn core_flash(t: f32) -> Option<LayerSample> {
    keyframes(t, 0.0, 1.2, &[0.0, 0.25, 1.0], &[1.0, 1.0, 0.0], &[0.0, 1.5, 40.0])
}

/// Inner plasma shockwave ring: 0.8 s.
pub fn plasma_ring(t: f32) -> Option<LayerSample> {
    keyframes(t, 0.0, 0.8, &[0.0, 1.0], &[1.0, 0.0], &[0.0, 8.0])
}

/// Outer distortion ring: 1.0 s, delayed 0.1 s.
pub fn distortion_ring(t: f32) -> Option<LayerSample> {
    keyframes(t, 0.1, 1.0, &[0.0, 1.0], &[0.8, 0.0], &[0.0, 12.0])
}

/// Thin horizontal lens-flare streak: 0.4 s, delayed 0.05 s. `scale` is the
/// horizontal stretch.
pub fn lens_streak(t: f32) -> Option<LayerSample> {
    keyframes(t, 0.05, 0.4, &[0.0, 1.0], &[1.0, 0.0], &[0.0, 30.0])
}

/// Soft volumetric cloud blooms: a slow large one and a quicker small one.
pub fn cloud_slow(t: f32) -> Option<LayerSample> {
    keyframes(t, 0.0, 2.5, &[0.0, 1.0], &[0.9, 0.0], &[0.5, 6.0])
}

pub fn cloud_fast(t: f32) -> Option<LayerSample> {
    keyframes(t, 0.0, 1.5, &[0.0, 1.0], &[0.7, 0.0], &[0.3, 4.0])
}

/// Radial progress sample for one debris piece at `t` seconds after its
/// explosion started. Ease-out travel, fading through the back half.
#[derive(Clone, Copy, Debug)]
pub struct RadialSample {
    pub travel: f32,
    pub opacity: f32,
    pub rotation_deg: f32,
}

pub fn debris_sample(d: &Debris, t: f32) -> Option<RadialSample> {
    let local = t - d.stagger_secs;
    if local < 0.0 || local > d.duration_secs {
        return None;
    }
    let u = local / d.duration_secs;
    let ease = 1.0 - (1.0 - u).powi(3);
    Some(RadialSample {
        travel: d.distance * ease,
        opacity: (1.0 - u).clamp(0.0, 1.0),
        rotation_deg: d.rotation_deg * u,
    })
}

pub fn spark_sample(s: &Spark, t: f32) -> Option<RadialSample> {
    let local = t - s.stagger_secs;
    if local < 0.0 || local > SPARK_DURATION_SECS {
        return None;
    }
    let u = local / SPARK_DURATION_SECS;
    let ease = 1.0 - (1.0 - u).powi(2);
    Some(RadialSample {
        travel: s.distance * ease,
        opacity: (1.0 - u).clamp(0.0, 1.0),
        rotation_deg: 0.0,
    })
}
