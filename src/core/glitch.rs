// Short-lived hue-shift glitch applied to the overlay logo layers.
//
// Keyframes reproduce the original distortion: a few pixels of positional
// jitter, a flicker of screen-blended opacity, and a hue sweep to 90 deg
// and back. Runs overlap freely; each firing gets its own key and clock.

#[derive(Clone, Debug)]
pub struct GlitchConfig {
    /// Period of the automatic draw, milliseconds.
    pub interval_ms: f64,
    /// Chance per draw that a glitch fires. The source material used both
    /// 0.15 and 0.40; treat as tunable.
    pub probability: f32,
    pub duration_secs: f32,
    /// The second overlay layer trails the first by this much.
    pub layer_lag_secs: f32,
    /// How long the "clicking" visual state is held after a click.
    pub click_hold_ms: f64,
}

impl Default for GlitchConfig {
    fn default() -> Self {
        Self {
            interval_ms: 2000.0,
            probability: 0.15,
            duration_secs: 0.2,
            layer_lag_secs: 0.05,
            click_hold_ms: 300.0,
        }
    }
}

// Keyframe tracks, each paired with its own time stops.
pub const GLITCH_X: [f32; 6] = [0.0, -5.0, 5.0, -2.0, 2.0, 0.0];
pub const GLITCH_X_TIMES: [f32; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];
pub const GLITCH_Y: [f32; 4] = [0.0, 2.0, -2.0, 0.0];
pub const GLITCH_Y_TIMES: [f32; 4] = [0.0, 0.33, 0.66, 1.0];
pub const GLITCH_OPACITY: [f32; 5] = [0.0, 0.8, 0.0, 0.5, 0.0];
pub const GLITCH_OPACITY_TIMES: [f32; 5] = [0.0, 0.2, 0.4, 0.6, 1.0];
pub const GLITCH_HUE_DEG: [f32; 3] = [0.0, 90.0, 0.0];
pub const GLITCH_HUE_TIMES: [f32; 3] = [0.0, 0.5, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlitchSample {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub hue_deg: f32,
}

fn track(times: &[f32], values: &[f32], u: f32) -> f32 {
    if u <= times[0] {
        return values[0];
    }
    for (ts, vs) in times.windows(2).zip(values.windows(2)) {
        if u <= ts[1] {
            let span = ts[1] - ts[0];
            let f = if span > 0.0 { (u - ts[0]) / span } else { 1.0 };
            return vs[0] + (vs[1] - vs[0]) * f;
        }
    }
    *values.last().unwrap_or(&0.0)
}

/// Sample the distortion at `progress` in `[0, 1]`.
pub fn glitch_sample(progress: f32) -> GlitchSample {
    let u = progress.clamp(0.0, 1.0);
    GlitchSample {
        x: track(&GLITCH_X_TIMES, &GLITCH_X, u),
        y: track(&GLITCH_Y_TIMES, &GLITCH_Y, u),
        opacity: track(&GLITCH_OPACITY_TIMES, &GLITCH_OPACITY, u),
        hue_deg: track(&GLITCH_HUE_TIMES, &GLITCH_HUE_DEG, u),
    }
}

/// One in-flight glitch run.
#[derive(Clone, Copy, Debug)]
pub struct GlitchRun {
    pub key: u32,
    pub started_ms: f64,
}

pub struct GlitchState {
    cfg: GlitchConfig,
    next_key: u32,
    live: Vec<GlitchRun>,
    clicking_until_ms: f64,
}

impl GlitchState {
    pub fn new(cfg: GlitchConfig) -> Self {
        Self {
            cfg,
            next_key: 0,
            live: Vec::new(),
            clicking_until_ms: f64::NEG_INFINITY,
        }
    }

    pub fn config(&self) -> &GlitchConfig {
        &self.cfg
    }

    /// Automatic draw: fire when `draw` (uniform in `[0, 1)`) lands under
    /// the configured probability.
    pub fn roll(&mut self, draw: f32, now_ms: f64) -> bool {
        if draw < self.cfg.probability {
            self.trigger(now_ms);
            return true;
        }
        false
    }

    /// Start a glitch run. Overlapping runs are allowed; no exclusion.
    pub fn trigger(&mut self, now_ms: f64) -> u32 {
        let key = self.next_key;
        self.next_key += 1;
        self.live.push(GlitchRun {
            key,
            started_ms: now_ms,
        });
        key
    }

    /// A direct click both glitches and holds the clicking state.
    pub fn note_click(&mut self, now_ms: f64) -> u32 {
        self.clicking_until_ms = now_ms + self.cfg.click_hold_ms;
        self.trigger(now_ms)
    }

    pub fn is_clicking(&self, now_ms: f64) -> bool {
        now_ms < self.clicking_until_ms
    }

    /// Progress of the held click state in `[0, 1)`, `None` once released.
    /// Drives the dip motion on the logo container.
    pub fn click_progress(&self, now_ms: f64) -> Option<f32> {
        if now_ms >= self.clicking_until_ms {
            return None;
        }
        let u = 1.0 - (self.clicking_until_ms - now_ms) / self.cfg.click_hold_ms;
        Some(u as f32)
    }

    /// Sample a run for the given overlay layer (layer 1 lags layer 0).
    /// `None` once the run (including lag) has finished or not yet reached
    /// this layer.
    pub fn sample(&self, run: &GlitchRun, layer: usize, now_ms: f64) -> Option<GlitchSample> {
        let lag = self.cfg.layer_lag_secs * layer as f32;
        let local = (now_ms - run.started_ms) as f32 / 1000.0 - lag;
        if local < 0.0 || local > self.cfg.duration_secs {
            return None;
        }
        Some(glitch_sample(local / self.cfg.duration_secs))
    }

    pub fn retire_finished(&mut self, now_ms: f64) {
        let full = (self.cfg.duration_secs + self.cfg.layer_lag_secs) as f64 * 1000.0;
        self.live.retain(|r| now_ms - r.started_ms <= full);
    }

    pub fn live(&self) -> &[GlitchRun] {
        &self.live
    }
}
