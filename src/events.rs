//! Event wiring for the scene.
//!
//! Listeners are retained in a registry (not leaked with `forget`) so
//! unmount can actually remove them; a dangling handler outliving the scene
//! is treated as a defect.

use crate::constants::*;
use crate::core::autopilot::{Autopilot, IDLE_TIMEOUT_MS};
use crate::core::flight::CubicPath;
use crate::core::glitch::GlitchState;
use crate::core::offset::{normalized_offset, OffsetStore, Producer};
use crate::core::scene::SceneGate;
use crate::core::scheduler::{Scheduler, TaskId};
use crate::core::Field;
use crate::dom;
use crate::overlay;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared monotonic clock; frame loop and event handlers must agree on
/// "now" so scheduler deadlines line up.
#[derive(Clone)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

struct ListenerEntry {
    target: web::EventTarget,
    kind: &'static str,
    func: js_sys::Function,
    // Keeps the closure allocation alive until removal.
    _closure: Box<dyn std::any::Any>,
}

/// Registry of live event listeners. `clear` removes them from their
/// targets and drops the closures.
pub struct Listeners {
    entries: Vec<ListenerEntry>,
}

impl Listeners {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if target.add_event_listener_with_callback(kind, &func).is_ok() {
            self.entries.push(ListenerEntry {
                target: target.clone(),
                kind,
                func,
                _closure: Box::new(closure),
            });
        }
    }

    pub fn add_pointer(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::PointerEvent) + 'static,
    ) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::PointerEvent)>);
        let func: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if target.add_event_listener_with_callback(kind, &func).is_ok() {
            self.entries.push(ListenerEntry {
                target: target.clone(),
                kind,
                func,
                _closure: Box::new(closure),
            });
        }
    }

    pub fn clear(&mut self) {
        for e in self.entries.drain(..) {
            let _ = e
                .target
                .remove_event_listener_with_callback(e.kind, &e.func);
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Scheduler task ids for the three recurring concerns. Tasks are created
/// at init with an infinite deadline and armed when the main scene starts.
#[derive(Clone, Copy)]
pub struct Tasks {
    pub idle: TaskId,
    pub explosion: TaskId,
    pub glitch: TaskId,
}

/// Everything the handlers need; cloned wholesale into each closure.
#[derive(Clone)]
pub struct SceneWiring {
    pub clock: Clock,
    pub gate: Rc<RefCell<SceneGate>>,
    pub offsets: Rc<RefCell<OffsetStore>>,
    pub autopilot: Rc<RefCell<Autopilot>>,
    pub field: Rc<RefCell<Option<Field>>>,
    pub glitch: Rc<RefCell<GlitchState>>,
    pub scheduler: Rc<RefCell<Scheduler>>,
    pub tasks: Tasks,
    pub drone_path: Rc<RefCell<CubicPath>>,
    pub main_entered_ms: Rc<Cell<Option<f64>>>,
    pub hero_root: web::HtmlElement,
    pub logo_tilt: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub video: web::HtmlVideoElement,
    pub skip: web::HtmlElement,
}

pub fn wire_scene(w: &SceneWiring, listeners: &mut Listeners) {
    wire_pointer_move(w, listeners);
    wire_pointer_leave(w, listeners);
    wire_logo_click(w, listeners);
    wire_resize(w, listeners);
    wire_completion(w, listeners);
}

fn wire_pointer_move(w: &SceneWiring, listeners: &mut Listeners) {
    let w = w.clone();
    if let Some(wnd) = web::window() {
        listeners.add_pointer(wnd.as_ref(), "pointermove", move |ev: web::PointerEvent| {
            let now_ms = w.clock.now_ms();
            // Handback must land before this write: cancel the autopilot's
            // producer role synchronously, then write as the user.
            if w.autopilot.borrow_mut().note_user_move(now_ms) {
                w.offsets.borrow_mut().set_producer(Producer::User);
                log::info!("[autopilot] handback to user pointer");
            }
            w.scheduler
                .borrow_mut()
                .rearm(w.tasks.idle, w.autopilot.borrow().idle_deadline_ms());

            let (px, py) = dom::pointer_element_px(&ev, &w.hero_root);
            let (cw, ch) = dom::element_size(&w.hero_root);
            let offset = normalized_offset(px, py, cw, ch);
            let _ = w.offsets.borrow_mut().write(Producer::User, offset);
            if let Some(f) = w.field.borrow_mut().as_mut() {
                f.set_pointer(Some(Vec2::new(px, py)), true);
            }
        });
    }
}

fn wire_pointer_leave(w: &SceneWiring, listeners: &mut Listeners) {
    let w = w.clone();
    listeners.add_pointer(
        w.hero_root.clone().as_ref(),
        "pointerleave",
        move |_ev: web::PointerEvent| {
            // Recenter the tilt; leave idle timing untouched so the
            // autopilot can take over on schedule.
            let _ = w.offsets.borrow_mut().write(Producer::User, Vec2::ZERO);
            if let Some(f) = w.field.borrow_mut().as_mut() {
                f.set_pointer(None, false);
            }
        },
    );
}

fn wire_logo_click(w: &SceneWiring, listeners: &mut Listeners) {
    let w = w.clone();
    listeners.add_pointer(
        w.logo_tilt.clone().as_ref(),
        "pointerdown",
        move |ev: web::PointerEvent| {
            let now_ms = w.clock.now_ms();
            let key = w.glitch.borrow_mut().note_click(now_ms);
            log::debug!("[glitch] click trigger #{key}");
            let (px, py) = dom::pointer_element_px(&ev, &w.hero_root);
            if let Some(f) = w.field.borrow_mut().as_mut() {
                f.push_burst(Vec2::new(px, py));
            }
            ev.prevent_default();
        },
    );
}

fn wire_resize(w: &SceneWiring, listeners: &mut Listeners) {
    let w = w.clone();
    if let Some(wnd) = web::window() {
        listeners.add(wnd.as_ref(), "resize", move |_ev: web::Event| {
            dom::sync_canvas_backing_size(&w.canvas);
            let (vw, vh) = dom::viewport_size();
            // Path swap only; the in-flight drone loop keeps its clock.
            *w.drone_path.borrow_mut() = CubicPath::for_viewport(vw, vh);
            let (cw, ch) = dom::element_size(&w.hero_root);
            if let Some(f) = w.field.borrow_mut().as_mut() {
                f.resize(cw, ch);
            }
            log::debug!("[resize] viewport {vw:.0}x{vh:.0}");
        });
    }
}

fn wire_completion(w: &SceneWiring, listeners: &mut Listeners) {
    // Video-end and the skip control funnel into the same idempotent
    // completion path.
    let w_ended = w.clone();
    listeners.add(w.video.clone().as_ref(), "ended", move |_ev: web::Event| {
        complete_scene(&w_ended);
    });
    let w_skip = w.clone();
    listeners.add(w.skip.clone().as_ref(), "click", move |_ev: web::Event| {
        complete_scene(&w_skip);
    });
}

/// Transition Intro -> Main. Safe to call any number of times; only the
/// first call fades the layers and arms the recurring effect tasks.
pub fn complete_scene(w: &SceneWiring) {
    if !w.gate.borrow_mut().complete() {
        log::debug!("[scene] completion ignored; already in main");
        return;
    }
    let now_ms = w.clock.now_ms();
    log::info!("[scene] intro complete; entering main at {now_ms:.0}ms");
    w.main_entered_ms.set(Some(now_ms));

    if let Some(doc) = dom::window_document() {
        overlay::pause_video(&doc);
        overlay::fade_to_main(&doc);
    }

    let mut sched = w.scheduler.borrow_mut();
    sched.rearm(w.tasks.idle, now_ms + IDLE_TIMEOUT_MS);
    sched.rearm(w.tasks.explosion, now_ms);
    let glitch_interval = w.glitch.borrow().config().interval_ms;
    sched.rearm(w.tasks.glitch, now_ms + glitch_interval);
}
