//! Scene wiring constants: the DOM contract with the hosting page and a few
//! frame-path tuning values. Behavioral tuning (spring constants, timings,
//! randomization ranges) lives next to the logic in `core`.

// Element ids the hosting page provides. Asset URLs (logo, video, sprites)
// are set on these elements by the page; the scene never validates them.
pub const ID_HERO_ROOT: &str = "hero-root";
pub const ID_MAIN_SCENE: &str = "main-scene";
pub const ID_INTRO_OVERLAY: &str = "intro-overlay";
pub const ID_INTRO_VIDEO: &str = "intro-video";
pub const ID_INTRO_SKIP: &str = "intro-skip";
pub const ID_LOGO_TILT: &str = "logo-tilt";
pub const ID_LOGO_GLOW: &str = "logo-glow";
pub const ID_LOGO_SCANLINE: &str = "logo-scanline";
pub const ID_LOGO_GLITCH_A: &str = "logo-glitch-a";
pub const ID_LOGO_GLITCH_B: &str = "logo-glitch-b";
pub const ID_JET_SPRITE: &str = "jet-sprite";
pub const ID_DRONE_SPRITE: &str = "drone-sprite";
pub const ID_FIELD_CANVAS: &str = "field-canvas";

// Seed for the ambient particle placement. The field is decorative; a fixed
// seed keeps the opening frame reproducible across reloads.
pub const FIELD_SEED: u64 = 0xC0FFEE;

// Class toggled on the tilt container while the click state is held.
pub const CLICKING_CLASS: &str = "clicking";
