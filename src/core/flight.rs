// Flight geometry and loop timing for the two sprite animators.
//
// The jet is a straight horizontal sweep expressed in viewport units; the
// drone rides a cubic Bezier with its rotation kept tangent to the path.
// Path geometry is a pure function of viewport size so the resize wiring
// stays trivial: swap the path, never touch the clock.

use glam::Vec2;

/// Viewport width at which the drone switches from the viewport-derived
/// mobile curve to the fixed desktop path.
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;

// ---------------- Drone path ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicPath {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicPath {
    /// Fixed wide-viewport flight: enters stage left below the fold, dips
    /// through the middle and exits high stage right.
    pub const DESKTOP: CubicPath = CubicPath {
        p0: Vec2::new(-200.0, 220.0),
        p1: Vec2::new(520.0, 40.0),
        p2: Vec2::new(1180.0, 560.0),
        p3: Vec2::new(2120.0, 240.0),
    };

    /// Path for the current viewport. Desktop widths get the fixed constant;
    /// below the breakpoint the curve is derived from width and height so the
    /// drone stays on screen.
    pub fn for_viewport(width: f32, height: f32) -> CubicPath {
        if width >= MOBILE_BREAKPOINT_PX {
            return Self::DESKTOP;
        }
        CubicPath {
            p0: Vec2::new(-0.2 * width, 0.30 * height),
            p1: Vec2::new(0.3 * width, 0.05 * height),
            p2: Vec2::new(0.7 * width, 0.80 * height),
            p3: Vec2::new(1.2 * width, 0.25 * height),
        }
    }

    /// Point on the curve at `t` in `[0, 1]`.
    pub fn point(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.p0 * (u * u * u)
            + self.p1 * (3.0 * u * u * t)
            + self.p2 * (3.0 * u * t * t)
            + self.p3 * (t * t * t)
    }

    /// First derivative at `t`; direction of travel.
    pub fn tangent(&self, t: f32) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * u * u)
            + (self.p2 - self.p1) * (6.0 * u * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    /// Heading along the path in degrees, screen convention (y down).
    pub fn tangent_angle_deg(&self, t: f32) -> f32 {
        let d = self.tangent(t);
        d.y.atan2(d.x).to_degrees()
    }

    /// SVG path-data rendering of the curve.
    pub fn to_svg(&self) -> String {
        format!(
            "M {:.1} {:.1} C {:.1} {:.1}, {:.1} {:.1}, {:.1} {:.1}",
            self.p0.x, self.p0.y, self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.p3.x, self.p3.y
        )
    }
}

/// The desktop path as path-data, for consumers that want the string form.
pub fn desktop_drone_path() -> String {
    CubicPath::DESKTOP.to_svg()
}

/// Drone path for a viewport as an SVG path string.
pub fn compute_drone_path(width: f32, height: f32) -> String {
    CubicPath::for_viewport(width, height).to_svg()
}

// ---------------- Jet timeline ----------------

/// Travel time across the viewport plus the off-screen pause; the full cycle
/// is their sum (9 s).
pub const JET_TRAVEL_SECS: f32 = 5.0;
pub const JET_PAUSE_SECS: f32 = 4.0;

// Fraction of travel spent fading in / starting the fade out.
pub const JET_FADE_IN_END: f32 = 0.06;
pub const JET_FADE_OUT_START: f32 = 0.80;

// Sweep geometry, viewport units: off-screen right to off-screen left near
// the top of the stage.
pub const JET_START_X_VW: f32 = 110.0;
pub const JET_END_X_VW: f32 = -30.0;
pub const JET_Y_VH: f32 = 12.0;

#[derive(Clone, Copy, Debug)]
pub struct JetPose {
    pub x_vw: f32,
    pub y_vh: f32,
    pub opacity: f32,
    pub visible: bool,
}

/// Jet pose at `elapsed_secs` since the scene became interactive. The loop
/// repeats indefinitely; during the pause the sprite is hidden.
pub fn jet_pose(elapsed_secs: f32) -> JetPose {
    let cycle = JET_TRAVEL_SECS + JET_PAUSE_SECS;
    let t = elapsed_secs.rem_euclid(cycle);
    if t >= JET_TRAVEL_SECS {
        return JetPose {
            x_vw: JET_START_X_VW,
            y_vh: JET_Y_VH,
            opacity: 0.0,
            visible: false,
        };
    }
    let u = t / JET_TRAVEL_SECS;
    let opacity = if u < JET_FADE_IN_END {
        u / JET_FADE_IN_END
    } else if u > JET_FADE_OUT_START {
        1.0 - (u - JET_FADE_OUT_START) / (1.0 - JET_FADE_OUT_START)
    } else {
        1.0
    };
    JetPose {
        x_vw: JET_START_X_VW + (JET_END_X_VW - JET_START_X_VW) * u,
        y_vh: JET_Y_VH,
        opacity: opacity.clamp(0.0, 1.0),
        visible: true,
    }
}

// ---------------- Drone timeline ----------------

pub const DRONE_PERIOD_SECS: f32 = 14.0;
pub const DRONE_START_DELAY_SECS: f32 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct DronePose {
    pub position: Vec2,
    pub angle_deg: f32,
    pub visible: bool,
}

/// Drone pose at `elapsed_secs`, riding `path`. The path argument is read
/// fresh every frame, so a resize-driven swap takes effect without restarting
/// the loop clock.
pub fn drone_pose(path: &CubicPath, elapsed_secs: f32) -> DronePose {
    if elapsed_secs < DRONE_START_DELAY_SECS {
        return DronePose {
            position: path.p0,
            angle_deg: 0.0,
            visible: false,
        };
    }
    let u = ((elapsed_secs - DRONE_START_DELAY_SECS) / DRONE_PERIOD_SECS).fract();
    DronePose {
        position: path.point(u),
        angle_deg: path.tangent_angle_deg(u),
        visible: true,
    }
}
