// Idle detection and the synthetic "auto-pilot" pointer.
//
// When the user goes quiet the scene keeps breathing: after the idle
// timeout a circular pointer path takes over the particle field and drifts
// the tilt. Any real pointer move hands control back before the next
// synthetic write can land.

use glam::Vec2;

/// Continuous pointer silence required before the autopilot engages.
pub const IDLE_TIMEOUT_MS: f64 = 3000.0;

/// Radius of the synthetic orbit around the viewport center, CSS pixels.
pub const ORBIT_RADIUS_PX: f32 = 160.0;

/// Angle accumulator increment per animation frame, radians.
pub const ORBIT_STEP_RAD: f32 = 0.02;

/// How much of the full offset range the drift uses. Keeps the synthetic
/// tilt gentler than a real pointer at the container edge.
pub const ORBIT_OFFSET_SCALE: f32 = 0.25;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    UserControl,
    AutoPilot,
}

/// One synthetic pointer sample: a viewport-space position for the particle
/// field override and a scaled-down offset for the tilt store.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticPointer {
    pub position: Vec2,
    pub offset: Vec2,
}

pub struct Autopilot {
    mode: ControlMode,
    last_move_ms: f64,
    angle: f32,
}

impl Autopilot {
    pub fn new(now_ms: f64) -> Self {
        Self {
            mode: ControlMode::UserControl,
            last_move_ms: now_ms,
            angle: 0.0,
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    /// Record a real pointer move. Returns true when this preempted an
    /// active autopilot (the caller must switch the offset producer back
    /// before the user's write).
    pub fn note_user_move(&mut self, now_ms: f64) -> bool {
        self.last_move_ms = now_ms;
        let was_auto = self.mode == ControlMode::AutoPilot;
        self.mode = ControlMode::UserControl;
        was_auto
    }

    /// The idle deadline for the scheduler: one timeout past the last real
    /// pointer move.
    pub fn idle_deadline_ms(&self) -> f64 {
        self.last_move_ms + IDLE_TIMEOUT_MS
    }

    /// True once the pointer has been silent for the full timeout.
    pub fn should_engage(&self, now_ms: f64) -> bool {
        self.mode == ControlMode::UserControl && now_ms - self.last_move_ms >= IDLE_TIMEOUT_MS
    }

    pub fn engage(&mut self) {
        self.mode = ControlMode::AutoPilot;
    }

    /// Advance the orbit by one frame and produce the next synthetic sample.
    /// Returns `None` while the user is in control, so a stale caller
    /// no-ops instead of writing.
    pub fn step(&mut self, viewport_w: f32, viewport_h: f32) -> Option<SyntheticPointer> {
        if self.mode != ControlMode::AutoPilot {
            return None;
        }
        self.angle += ORBIT_STEP_RAD;
        let dir = Vec2::new(self.angle.cos(), self.angle.sin());
        let center = Vec2::new(viewport_w * 0.5, viewport_h * 0.5);
        Some(SyntheticPointer {
            position: center + dir * ORBIT_RADIUS_PX,
            offset: dir * (0.5 * ORBIT_OFFSET_SCALE),
        })
    }
}
