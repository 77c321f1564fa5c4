use glam::Vec2;

/// Spring constants for the smoothed offset (matches the tilt feel of the
/// original scene: stiff spring, heavy damping, no visible overshoot ring).
pub const SPRING_STIFFNESS: f32 = 150.0;
pub const SPRING_DAMPING: f32 = 15.0;

// Maximum tilt in either axis, degrees.
pub const MAX_TILT_DEG: f32 = 15.0;

/// Who is allowed to write the pointer offset right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Producer {
    User,
    Autopilot,
}

/// Single-owner store for the normalized pointer offset.
///
/// The raw target lives in `[-0.5, 0.5]` per axis relative to the logo
/// container center. `set_producer` is the only writer-switch point; a write
/// tagged with the wrong producer is rejected rather than racing. `step`
/// advances the spring-damped smoothed value consumed by the tilt.
pub struct OffsetStore {
    producer: Producer,
    target: Vec2,
    value: Vec2,
    velocity: Vec2,
}

impl OffsetStore {
    pub fn new() -> Self {
        Self {
            producer: Producer::User,
            target: Vec2::ZERO,
            value: Vec2::ZERO,
            velocity: Vec2::ZERO,
        }
    }

    pub fn producer(&self) -> Producer {
        self.producer
    }

    /// Switch the active producer. Exclusivity is an invariant of this API:
    /// after the switch, writes from the previous producer no-op.
    pub fn set_producer(&mut self, producer: Producer) {
        self.producer = producer;
    }

    /// Write a new raw offset. Returns false (and leaves the store untouched)
    /// when `from` is not the active producer.
    pub fn write(&mut self, from: Producer, offset: Vec2) -> bool {
        if from != self.producer {
            return false;
        }
        self.target = offset.clamp(Vec2::splat(-0.5), Vec2::splat(0.5));
        true
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn value(&self) -> Vec2 {
        self.value
    }

    /// Advance the spring toward the target (semi-implicit Euler).
    pub fn step(&mut self, dt_sec: f32) {
        let accel = (self.target - self.value) * SPRING_STIFFNESS - self.velocity * SPRING_DAMPING;
        self.velocity += accel * dt_sec;
        self.value += self.velocity * dt_sec;
    }

    /// Tilt angles derived from the smoothed offset: `x` is rotation about
    /// the X axis (driven by vertical offset, inverted so the logo leans
    /// toward the pointer), `y` about the Y axis.
    pub fn tilt_degrees(&self) -> Vec2 {
        Vec2::new(
            -self.value.y * 2.0 * MAX_TILT_DEG,
            self.value.x * 2.0 * MAX_TILT_DEG,
        )
    }
}

impl Default for OffsetStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize a pointer position inside a container to `[-0.5, 0.5]` per axis.
/// Degenerate container sizes map to the center.
#[inline]
pub fn normalized_offset(px: f32, py: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (px / width - 0.5).clamp(-0.5, 0.5),
        (py / height - 0.5).clamp(-0.5, 0.5),
    )
}
