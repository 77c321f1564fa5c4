/// Cross-fade duration used by both the intro layer (out) and the main
/// scene (in). Seconds.
pub const SCENE_FADE_SECS: f32 = 1.5;

/// Which visual layer owns the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneState {
    Intro,
    Main,
}

/// One-directional gate between the intro video and the interactive scene.
///
/// Completion is idempotent: video-end and the skip control both funnel into
/// `complete`, and only the first call transitions. There is no path back to
/// `Intro` for the lifetime of a mount.
pub struct SceneGate {
    state: SceneState,
}

impl SceneGate {
    pub fn new() -> Self {
        Self {
            state: SceneState::Intro,
        }
    }

    pub fn state(&self) -> SceneState {
        self.state
    }

    pub fn is_main(&self) -> bool {
        self.state == SceneState::Main
    }

    /// Transition to `Main`. Returns true only on the call that actually
    /// transitioned; repeat calls are no-ops.
    pub fn complete(&mut self) -> bool {
        if self.state == SceneState::Main {
            return false;
        }
        self.state = SceneState::Main;
        true
    }
}

impl Default for SceneGate {
    fn default() -> Self {
        Self::new()
    }
}
