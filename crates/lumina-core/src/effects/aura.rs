//! Body aura: a violet glow that follows the torso and breathes, with
//! rising motes and a boost state driven by the `aura_boost` command.

use glam::{Vec2, Vec4};
use rand::prelude::*;

use crate::constants::{AURA_BASE_SIZE, AURA_FOLLOW};
use crate::frame::{Effect, FrameCx};
use crate::palette::rgba8;
use crate::surface::{BlendMode, DrawList};

#[derive(Debug, Clone)]
struct AuraMote {
    pos: Vec2,
    vel: Vec2,
    life: f32,
    size: f32,
}

pub struct AuraEffect {
    target: Vec2,
    pos: Vec2,
    tracking: bool,
    boosted: bool,
    pulse: f32,
    motes: Vec<AuraMote>,
    rng: StdRng,
}

impl AuraEffect {
    pub fn new(seed: u64) -> Self {
        Self {
            target: Vec2::ZERO,
            pos: Vec2::ZERO,
            tracking: false,
            boosted: false,
            pulse: 0.0,
            motes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// New pixel target for the smoothed tracker. The first target snaps the
    /// glow into place instead of easing in from the origin.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
        if !self.tracking {
            self.pos = target;
            self.tracking = true;
        }
    }

    pub fn set_boost(&mut self, active: bool) {
        self.boosted = active;
    }

    pub fn is_boosted(&self) -> bool {
        self.boosted
    }

    /// Smoothed glow position; meaningful once a target has been seen.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn mote_count(&self) -> usize {
        self.motes.len()
    }
}

impl Effect for AuraEffect {
    fn advance(&mut self, _cx: &FrameCx) {
        self.pulse += 0.05;

        if self.tracking {
            self.pos += (self.target - self.pos) * AURA_FOLLOW;

            let spawn = if self.boosted { 3 } else { 1 };
            for _ in 0..spawn {
                let offset = Vec2::new(
                    (self.rng.gen::<f32>() - 0.5) * AURA_BASE_SIZE,
                    (self.rng.gen::<f32>() - 0.5) * AURA_BASE_SIZE * 0.5,
                );
                let size = if self.boosted {
                    self.rng.gen_range(3.0..7.0)
                } else {
                    self.rng.gen_range(2.0..4.0)
                };
                self.motes.push(AuraMote {
                    pos: self.pos + offset,
                    vel: Vec2::new(
                        (self.rng.gen::<f32>() - 0.5) * 0.4,
                        -self.rng.gen_range(0.3..1.2),
                    ),
                    life: 255.0,
                    size,
                });
            }
        }

        for m in &mut self.motes {
            m.pos += m.vel;
            m.vel.x *= 0.98;
            m.life -= 6.0;
            m.size *= 0.98;
        }
        self.motes.retain(|m| m.life > 0.0);
    }

    fn render(&self, _cx: &FrameCx, out: &mut DrawList) {
        if !self.tracking {
            return;
        }

        let size = AURA_BASE_SIZE + self.pulse.sin() * 20.0;
        let alpha = if self.boosted { 100.0 } else { 30.0 } / 255.0;

        out.circle(
            self.pos,
            size,
            Vec4::new(150.0 / 255.0, 0.0, 1.0, alpha),
            BlendMode::Additive,
        );
        out.circle(
            self.pos,
            size * 0.75,
            Vec4::new(100.0 / 255.0, 0.0, 200.0 / 255.0, alpha + 20.0 / 255.0),
            BlendMode::Additive,
        );
        // pulsing core
        out.circle(
            self.pos,
            size * 0.35,
            Vec4::new(200.0 / 255.0, 150.0 / 255.0, 1.0, alpha + 40.0 / 255.0),
            BlendMode::Additive,
        );

        for m in &self.motes {
            let t = (m.life / 255.0).max(0.0);
            out.circle(
                m.pos,
                m.size * 0.5,
                rgba8(170, 80, 255, 255) * Vec4::new(1.0, 1.0, 1.0, t * 0.6),
                BlendMode::Additive,
            );
        }
    }
}
