#![cfg(target_arch = "wasm32")]
//! Interactive hero scene for the marketing page: an intro video gate, a
//! 3D-tilting logo over an ambient particle field, an idle autopilot
//! pointer, looping jet/drone flybys, periodic explosions, and a glitch
//! effect on the logo. Everything time-driven shares one rAF tick.

use crate::core::autopilot::Autopilot;
use crate::core::explosion::{Sequencer, RETRIGGER_PERIOD_MS};
use crate::core::flight::CubicPath;
use crate::core::glitch::{GlitchConfig, GlitchState};
use crate::core::offset::OffsetStore;
use crate::core::scene::SceneGate;
use crate::core::scheduler::Scheduler;
use crate::core::{Field, FieldConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::*;

/// Live handles for one mounted scene; dropping these (via `unmount_scene`)
/// must silence every loop, task and listener the scene owns.
struct SceneHandle {
    running: Rc<Cell<bool>>,
    listeners: events::Listeners,
    scheduler: Rc<RefCell<Scheduler>>,
}

impl SceneHandle {
    fn teardown(mut self) {
        self.running.set(false);
        self.scheduler.borrow_mut().clear();
        self.listeners.clear();
        log::info!("[scene] unmounted; loops and timers cancelled");
    }
}

thread_local! {
    static SCENE: RefCell<Option<SceneHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Remove the scene from the page's timeline: stop the frame loop, clear
/// the scheduler and detach every listener. Safe to call twice.
#[wasm_bindgen]
pub fn unmount_scene() {
    SCENE.with(|s| {
        if let Some(handle) = s.borrow_mut().take() {
            handle.teardown();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let hero_root = dom::element_by_id(&document, ID_HERO_ROOT)?;
    let logo_tilt = dom::element_by_id(&document, ID_LOGO_TILT)?;
    let glow = dom::element_by_id(&document, ID_LOGO_GLOW)?;
    let scanline = dom::element_by_id(&document, ID_LOGO_SCANLINE)?;
    let glitch_a = dom::element_by_id(&document, ID_LOGO_GLITCH_A)?;
    let glitch_b = dom::element_by_id(&document, ID_LOGO_GLITCH_B)?;
    let jet = dom::element_by_id(&document, ID_JET_SPRITE)?;
    let drone = dom::element_by_id(&document, ID_DRONE_SPRITE)?;
    let skip = dom::element_by_id(&document, ID_INTRO_SKIP)?;

    let video: web::HtmlVideoElement = document
        .get_element_by_id(ID_INTRO_VIDEO)
        .ok_or_else(|| anyhow::anyhow!("missing #{ID_INTRO_VIDEO}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("#{ID_INTRO_VIDEO} is not a video element: {e:?}"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(ID_FIELD_CANVAS)
        .ok_or_else(|| anyhow::anyhow!("missing #{ID_FIELD_CANVAS}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("#{ID_FIELD_CANVAS} is not a canvas: {e:?}"))?;
    dom::sync_canvas_backing_size(&canvas);
    let ctx2d: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("context cast: {e:?}"))?;

    let clock = events::Clock::new();
    let now_ms = clock.now_ms();
    let (vw, vh) = dom::viewport_size();
    let (cw, ch) = dom::element_size(&hero_root);

    let gate = Rc::new(RefCell::new(SceneGate::new()));
    let offsets = Rc::new(RefCell::new(OffsetStore::new()));
    let autopilot = Rc::new(RefCell::new(Autopilot::new(now_ms)));
    let field = Rc::new(RefCell::new(Some(Field::new(
        FieldConfig::default(),
        cw,
        ch,
        FIELD_SEED,
    ))));
    let sequencer = Rc::new(RefCell::new(Sequencer::new()));
    let glitch = Rc::new(RefCell::new(GlitchState::new(GlitchConfig::default())));
    let drone_path = Rc::new(RefCell::new(CubicPath::for_viewport(vw, vh)));
    let main_entered_ms = Rc::new(Cell::new(None));

    // Tasks exist from the start but only get real deadlines once the
    // intro completes; an infinite deadline never fires.
    let scheduler = Rc::new(RefCell::new(Scheduler::new()));
    let tasks = {
        let mut sched = scheduler.borrow_mut();
        events::Tasks {
            idle: sched.once(f64::INFINITY),
            explosion: sched.every(RETRIGGER_PERIOD_MS, f64::INFINITY),
            glitch: sched.every(
                glitch.borrow().config().interval_ms,
                f64::INFINITY,
            ),
        }
    };

    let wiring = events::SceneWiring {
        clock: clock.clone(),
        gate: gate.clone(),
        offsets: offsets.clone(),
        autopilot: autopilot.clone(),
        field: field.clone(),
        glitch: glitch.clone(),
        scheduler: scheduler.clone(),
        tasks,
        drone_path: drone_path.clone(),
        main_entered_ms: main_entered_ms.clone(),
        hero_root: hero_root.clone(),
        logo_tilt: logo_tilt.clone(),
        canvas: canvas.clone(),
        video: video.clone(),
        skip: skip.clone(),
    };
    let mut listeners = events::Listeners::new();
    events::wire_scene(&wiring, &mut listeners);

    overlay::start_video(&video);

    let running = Rc::new(Cell::new(true));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        clock,
        gate,
        offsets,
        autopilot,
        field,
        sequencer,
        glitch,
        scheduler: scheduler.clone(),
        tasks,
        drone_path,
        main_entered_ms,
        logo_tilt,
        glow,
        scanline,
        glitch_a,
        glitch_b,
        jet,
        drone,
        hero_root,
        canvas,
        ctx2d,
        last_instant: Instant::now(),
        draw_accum: 0.0,
        due: Vec::new(),
    }));
    frame::start_loop(frame_ctx, running.clone());

    SCENE.with(|s| {
        *s.borrow_mut() = Some(SceneHandle {
            running,
            listeners,
            scheduler,
        })
    });
    log::info!("[scene] mounted in intro state");
    Ok(())
}
