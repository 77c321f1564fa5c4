// Ambient particle field simulation.
//
// Pure state: positions, velocities and the effective pointer override.
// Drawing (canvas 2D, link lines, palette lookup) lives in the render
// module; this file only integrates motion so it stays host-testable.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fill colors, indexed by `Particle::color`. Varying shades of cyan.
pub const PALETTE: [&str; 3] = ["#22d3ee", "#67e8f9", "#0ea5e9"];

/// Color of the link lines between nearby particles.
pub const LINK_COLOR: &str = "#22d3ee";

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub count: usize,
    pub fps_limit: f32,
    /// Ambient drift speed in px per 60 Hz frame (so 1.0 is slow).
    pub speed: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub opacity: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub attract_distance: f32,
    pub attract_factor: f32,
    pub attract_max_speed: f32,
    pub push_quantity: usize,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 100,
            fps_limit: 120.0,
            speed: 1.0,
            size_min: 1.0,
            size_max: 3.0,
            opacity: 0.5,
            link_distance: 150.0,
            link_opacity: 0.2,
            attract_distance: 200.0,
            attract_factor: 5.0,
            attract_max_speed: 50.0,
            push_quantity: 10,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u8,
}

pub struct Field {
    cfg: FieldConfig,
    particles: Vec<Particle>,
    bounds: Vec2,
    rng: StdRng,
    pointer: Option<Vec2>,
    interacting: bool,
}

impl Field {
    pub fn new(cfg: FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut field = Self {
            cfg,
            particles: Vec::new(),
            bounds: Vec2::new(width.max(1.0), height.max(1.0)),
            rng: StdRng::seed_from_u64(seed),
            pointer: None,
            interacting: false,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        self.particles.clear();
        for _ in 0..self.cfg.count {
            let p = self.spawn_anywhere();
            self.particles.push(p);
        }
    }

    fn spawn_anywhere(&mut self) -> Particle {
        let pos = Vec2::new(
            self.rng.gen::<f32>() * self.bounds.x,
            self.rng.gen::<f32>() * self.bounds.y,
        );
        self.spawn_at(pos)
    }

    fn spawn_at(&mut self, pos: Vec2) -> Particle {
        let angle = self.rng.gen::<f32>() * std::f32::consts::TAU;
        let speed = self.cfg.speed * (0.5 + self.rng.gen::<f32>());
        Particle {
            pos,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            size: self.rng.gen_range(self.cfg.size_min..=self.cfg.size_max),
            color: self.rng.gen_range(0..PALETTE.len() as u8),
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn is_interacting(&self) -> bool {
        self.interacting
    }

    /// Live-handle write: the effective pointer position (real or synthetic)
    /// and whether attraction should act on it.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>, interacting: bool) {
        self.pointer = pointer;
        self.interacting = interacting && pointer.is_some();
    }

    /// Click burst: inject up to `push_quantity` fresh particles at `at`.
    /// The set is capped at twice the configured count so rapid clicking
    /// cannot grow it without bound (link drawing is quadratic).
    pub fn push_burst(&mut self, at: Vec2) {
        let cap = self.cfg.count * 2;
        for _ in 0..self.cfg.push_quantity {
            if self.particles.len() >= cap {
                break;
            }
            let p = self.spawn_at(at);
            self.particles.push(p);
        }
    }

    /// Rebuild the whole set. Only configuration changes regenerate; pointer
    /// mode switches never touch the particle records.
    pub fn regenerate(&mut self, cfg: FieldConfig) {
        self.cfg = cfg;
        self.populate();
    }

    /// Scale particle positions into the new bounds so a resize does not
    /// bunch everything in one corner.
    pub fn resize(&mut self, width: f32, height: f32) {
        let new = Vec2::new(width.max(1.0), height.max(1.0));
        let scale = new / self.bounds;
        for p in &mut self.particles {
            p.pos *= scale;
        }
        self.bounds = new;
    }

    /// Advance the simulation by `dt_sec`: ambient drift with edge bounce,
    /// plus attraction toward the active pointer within the attract radius.
    pub fn step(&mut self, dt_sec: f32) {
        let frames = dt_sec * 60.0;
        let attract = self.interacting.then_some(self.pointer).flatten();
        for p in &mut self.particles {
            if let Some(target) = attract {
                let delta = target - p.pos;
                let dist = delta.length();
                if dist > 1.0 && dist < self.cfg.attract_distance {
                    let pull = delta / dist * self.cfg.attract_factor;
                    p.vel += pull * frames;
                    let speed = p.vel.length();
                    if speed > self.cfg.attract_max_speed {
                        p.vel *= self.cfg.attract_max_speed / speed;
                    }
                }
            } else {
                // bleed off attraction energy back toward ambient drift
                let speed = p.vel.length();
                let ambient = self.cfg.speed * 1.5;
                if speed > ambient {
                    p.vel *= 1.0 - (0.05 * frames).min(0.5);
                }
            }
            p.pos += p.vel * frames;
            if p.pos.x < 0.0 {
                p.pos.x = -p.pos.x;
                p.vel.x = p.vel.x.abs();
            } else if p.pos.x > self.bounds.x {
                p.pos.x = 2.0 * self.bounds.x - p.pos.x;
                p.vel.x = -p.vel.x.abs();
            }
            if p.pos.y < 0.0 {
                p.pos.y = -p.pos.y;
                p.vel.y = p.vel.y.abs();
            } else if p.pos.y > self.bounds.y {
                p.pos.y = 2.0 * self.bounds.y - p.pos.y;
                p.vel.y = -p.vel.y.abs();
            }
        }
    }
}
