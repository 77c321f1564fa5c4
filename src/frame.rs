//! The single requestAnimationFrame loop every effect shares.
//!
//! One tick: poll the scheduler, advance the autopilot and spring, step and
//! draw the particle field and explosions, and restyle the DOM sprites.
//! The loop re-arms only while the scene's alive flag holds, so unmount
//! stops it at the next tick boundary.

use crate::constants::*;
use crate::core::autopilot::Autopilot;
use crate::core::explosion::Sequencer;
use crate::core::flight::{self, CubicPath};
use crate::core::glitch::GlitchState;
use crate::core::logo;
use crate::core::loop_cell::LoopCell;
use crate::core::offset::{OffsetStore, Producer};
use crate::core::scene::SceneGate;
use crate::core::scheduler::{Scheduler, TaskId};
use crate::core::Field;
use crate::dom;
use crate::events::{Clock, Tasks};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub clock: Clock,
    pub gate: Rc<RefCell<SceneGate>>,
    pub offsets: Rc<RefCell<OffsetStore>>,
    pub autopilot: Rc<RefCell<Autopilot>>,
    pub field: Rc<RefCell<Option<Field>>>,
    pub sequencer: Rc<RefCell<Sequencer>>,
    pub glitch: Rc<RefCell<GlitchState>>,
    pub scheduler: Rc<RefCell<Scheduler>>,
    pub tasks: Tasks,
    pub drone_path: Rc<RefCell<CubicPath>>,
    pub main_entered_ms: Rc<Cell<Option<f64>>>,

    pub logo_tilt: web::HtmlElement,
    pub glow: web::HtmlElement,
    pub scanline: web::HtmlElement,
    pub glitch_a: web::HtmlElement,
    pub glitch_b: web::HtmlElement,
    pub jet: web::HtmlElement,
    pub drone: web::HtmlElement,
    pub hero_root: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub ctx2d: web::CanvasRenderingContext2d,

    pub last_instant: Instant,
    pub draw_accum: f32,
    pub due: Vec<TaskId>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // Clamp the step so a backgrounded tab doesn't slingshot the spring.
        let dt_sec = (now - self.last_instant).as_secs_f32().min(0.1);
        self.last_instant = now;
        let now_ms = self.clock.now_ms();

        if !self.gate.borrow().is_main() {
            return;
        }
        let scene_secs = self
            .main_entered_ms
            .get()
            .map(|t0| ((now_ms - t0) / 1000.0) as f32)
            .unwrap_or(0.0);

        self.run_due_tasks(now_ms);
        self.step_autopilot();
        self.offsets.borrow_mut().step(dt_sec);

        self.sequencer.borrow_mut().retire_finished(now_ms);
        self.glitch.borrow_mut().retire_finished(now_ms);

        self.draw(dt_sec, now_ms);
        self.style_logo(now_ms, scene_secs);
        self.style_sprites(scene_secs);
    }

    fn run_due_tasks(&mut self, now_ms: f64) {
        self.due.clear();
        self.scheduler.borrow_mut().poll(now_ms, &mut self.due);
        for i in 0..self.due.len() {
            let id = self.due[i];
            if id == self.tasks.idle {
                let mut ap = self.autopilot.borrow_mut();
                if ap.should_engage(now_ms) {
                    ap.engage();
                    self.offsets.borrow_mut().set_producer(Producer::Autopilot);
                    log::info!("[autopilot] engaged after idle timeout");
                }
            } else if id == self.tasks.explosion {
                let key = self.sequencer.borrow_mut().trigger(now_ms);
                log::debug!("[explosion] trigger #{key}");
            } else if id == self.tasks.glitch {
                let draw = js_sys::Math::random() as f32;
                if self.glitch.borrow_mut().roll(draw, now_ms) {
                    log::debug!("[glitch] auto trigger");
                }
            }
        }
    }

    fn step_autopilot(&mut self) {
        let (vw, vh) = dom::viewport_size();
        let Some(sp) = self.autopilot.borrow_mut().step(vw, vh) else {
            return;
        };
        // The field handle may bind after the autopilot engages; a missing
        // handle is a no-op this frame, retried on the next.
        if let Some(f) = self.field.borrow_mut().as_mut() {
            f.set_pointer(Some(sp.position), true);
        }
        let _ = self
            .offsets
            .borrow_mut()
            .write(Producer::Autopilot, sp.offset);
    }

    fn draw(&mut self, dt_sec: f32, now_ms: f64) {
        self.draw_accum += dt_sec;
        let mut field = self.field.borrow_mut();
        let Some(field) = field.as_mut() else {
            return;
        };
        if self.draw_accum < 1.0 / field.config().fps_limit {
            return;
        }
        field.step(self.draw_accum);
        self.draw_accum = 0.0;

        let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        render::draw_field(&self.ctx2d, field, dpr);
        let center = field.bounds() * 0.5;
        render::draw_explosions(&self.ctx2d, &self.sequencer.borrow(), now_ms, center, dpr);
    }

    fn style_logo(&mut self, now_ms: f64, scene_secs: f32) {
        let glitch = self.glitch.borrow();
        // A held click swaps the idle bob for the sharper dip.
        let y_px = match glitch.click_progress(now_ms) {
            Some(u) => logo::dip_offset_px(u),
            None => logo::float_offset_px(scene_secs),
        };
        render::apply_tilt(&self.logo_tilt, self.offsets.borrow().tilt_degrees(), y_px);

        let clicking = glitch.is_clicking(now_ms);
        if clicking {
            let _ = self.logo_tilt.class_list().add_1(CLICKING_CLASS);
        } else {
            let _ = self.logo_tilt.class_list().remove_1(CLICKING_CLASS);
        }
        render::apply_glow(&self.glow, &logo::glow_sample(scene_secs, clicking));
        render::place_scanline(&self.scanline, logo::scanline_top_pct(scene_secs));
        // Overlapping runs are allowed; the most recent run that is visible
        // on a layer wins.
        for (layer, el) in [(0usize, &self.glitch_a), (1usize, &self.glitch_b)] {
            let sample = glitch
                .live()
                .iter()
                .rev()
                .find_map(|run| glitch.sample(run, layer, now_ms));
            render::apply_glitch(el, sample);
        }
    }

    fn style_sprites(&mut self, scene_secs: f32) {
        render::place_jet(&self.jet, &flight::jet_pose(scene_secs));
        let path = self.drone_path.borrow();
        render::place_drone(&self.drone, &flight::drone_pose(&path, scene_secs));
    }
}

/// Start the requestAnimationFrame loop. The closure re-arms itself only
/// while `running` holds. On the stopping tick it takes itself out of its
/// own cell, which breaks the cell/closure reference cycle and releases
/// the whole `FrameContext`; wasm-bindgen defers the actual deallocation
/// until the in-flight invocation returns.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: LoopCell<Closure<dyn FnMut()>> = LoopCell::new();
    let tick_inner = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let running_tick = running.clone();
    tick.set(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            drop(tick_inner.take());
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if !running_tick.get() {
            drop(tick_inner.take());
            return;
        }
        if let Some(w) = web::window() {
            tick_inner.with(|c| {
                let _ = w.request_animation_frame(c.as_ref().unchecked_ref());
            });
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        tick.with(|c| {
            let _ = w.request_animation_frame(c.as_ref().unchecked_ref());
        });
    }
}
