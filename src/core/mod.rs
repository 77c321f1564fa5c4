//! Platform-agnostic scene logic.
//!
//! Nothing in here touches `web_sys`; the host-side integration tests in
//! `tests/` include these files directly.

pub mod autopilot;
pub mod explosion;
pub mod field;
pub mod flight;
pub mod glitch;
pub mod logo;
pub mod loop_cell;
pub mod offset;
pub mod scene;
pub mod scheduler;

pub use autopilot::{Autopilot, ControlMode, SyntheticPointer};
pub use explosion::Sequencer;
pub use field::{Field, FieldConfig};
pub use flight::CubicPath;
pub use glitch::{GlitchConfig, GlitchState};
pub use loop_cell::LoopCell;
pub use offset::{OffsetStore, Producer};
pub use scene::{SceneGate, SceneState};
pub use scheduler::{Scheduler, TaskId};
