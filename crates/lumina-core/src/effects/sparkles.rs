//! Short-lived sparkles that trail the hands and garnish bursts.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::prelude::*;

use crate::frame::{Effect, FrameCx};
use crate::palette::hsv_to_rgba;
use crate::surface::{BlendMode, DrawList};

#[derive(Debug, Clone)]
pub struct Sparkle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub size: f32,
    pub hue: f32,
}

pub struct SparkleSystem {
    sparkles: Vec<Sparkle>,
    rng: StdRng,
}

impl SparkleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            sparkles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn emit(&mut self, pos: Vec2, count: usize) {
        for _ in 0..count {
            let angle = self.rng.gen::<f32>() * TAU;
            let speed = self.rng.gen::<f32>() * 2.0 + 1.0;
            self.sparkles.push(Sparkle {
                pos,
                vel: Vec2::from_angle(angle) * speed,
                life: 255.0,
                size: self.rng.gen_range(2.0..6.0),
                hue: self.rng.gen_range(180.0..280.0),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }
}

impl Effect for SparkleSystem {
    fn advance(&mut self, _cx: &FrameCx) {
        for s in &mut self.sparkles {
            s.pos += s.vel;
            // stronger damping than bursts, on both axes
            s.vel *= 0.95;
            s.life -= 8.0;
            s.size *= 0.96;
        }
        self.sparkles.retain(|s| s.life > 0.0);
    }

    fn render(&self, _cx: &FrameCx, out: &mut DrawList) {
        for s in &self.sparkles {
            let t = (s.life / 255.0).max(0.0);
            out.circle(
                s.pos,
                s.size * 1.5,
                hsv_to_rgba(s.hue, 80.0, 100.0, t * 0.3),
                BlendMode::Additive,
            );
            out.circle(
                s.pos,
                s.size * 0.5,
                hsv_to_rgba(s.hue, 20.0, 100.0, t),
                BlendMode::Additive,
            );
        }
    }
}
