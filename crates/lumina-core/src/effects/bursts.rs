//! Radial particle bursts triggered by the `burst` command.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::prelude::*;

use crate::frame::{Effect, FrameCx};
use crate::palette::hsv_to_rgba;
use crate::surface::{BlendMode, DrawList};

#[derive(Debug, Clone)]
pub struct BurstParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Starts at 255, decays additively; the particle dies at 0.
    pub life: f32,
    pub size: f32,
    /// HSB hue, neon cyan or magenta/purple band.
    pub hue: f32,
}

pub struct BurstSystem {
    particles: Vec<BurstParticle>,
    rng: StdRng,
}

impl BurstSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Enqueue a burst at a pixel position. Count scales linearly with
    /// intensity; negative intensity clamps to zero and emits nothing.
    pub fn emit_burst(&mut self, pos: Vec2, intensity: f32) {
        let intensity = intensity.max(0.0);
        let count = (intensity * 10.0).floor() as usize;
        for _ in 0..count {
            let angle = self.rng.gen::<f32>() * TAU;
            let speed = self.rng.gen::<f32>() * intensity * 4.0;
            let hue = if self.rng.gen::<f32>() > 0.5 {
                self.rng.gen_range(170.0..200.0)
            } else {
                self.rng.gen_range(260.0..320.0)
            };
            self.particles.push(BurstParticle {
                pos,
                vel: Vec2::from_angle(angle) * speed,
                life: 255.0,
                size: self.rng.gen_range(2.0..6.0),
                hue,
            });
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[BurstParticle] {
        &self.particles
    }
}

impl Effect for BurstSystem {
    fn advance(&mut self, _cx: &FrameCx) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += 0.05; // low gravity for a floating feel
            p.vel.x *= 0.96; // drag
            p.life -= 3.0;
            p.size *= 0.97;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    fn render(&self, _cx: &FrameCx, out: &mut DrawList) {
        for p in &self.particles {
            let t = (p.life / 255.0).max(0.0);
            // wide faint glow
            out.circle(
                p.pos,
                p.size * 2.0,
                hsv_to_rgba(p.hue, 80.0, 100.0, t * 0.5),
                BlendMode::Additive,
            );
            // near-white core
            out.circle(
                p.pos,
                p.size * 0.5,
                hsv_to_rgba(p.hue, 20.0, 100.0, t),
                BlendMode::Additive,
            );
        }
    }
}
