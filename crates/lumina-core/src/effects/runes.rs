//! Spawned glyphs that scale in, rotate and fade out.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

use crate::constants::RUNE_STROKE;
use crate::frame::{Effect, FrameCx};
use crate::palette::rgba8;
use crate::surface::{BlendMode, DrawList};

/// The three glyph variants, chosen uniformly at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuneGlyph {
    CircleCross,
    Hexagram,
    TriangleCircle,
}

#[derive(Debug, Clone)]
pub struct Rune {
    pub pos: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub life: f32,
    pub glyph: RuneGlyph,
}

pub struct RuneEffect {
    runes: Vec<Rune>,
    rng: StdRng,
}

impl RuneEffect {
    pub fn new(seed: u64) -> Self {
        Self {
            runes: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn spawn(&mut self, pos: Vec2) {
        let glyph = match self.rng.gen_range(0..3) {
            0 => RuneGlyph::CircleCross,
            1 => RuneGlyph::Hexagram,
            _ => RuneGlyph::TriangleCircle,
        };
        self.runes.push(Rune {
            pos,
            rotation: 0.0,
            scale: 0.0,
            life: 255.0,
            glyph,
        });
    }

    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    pub fn runes(&self) -> &[Rune] {
        &self.runes
    }
}

impl Effect for RuneEffect {
    fn advance(&mut self, _cx: &FrameCx) {
        for r in &mut self.runes {
            r.rotation += 0.02;
            r.scale = (r.scale + 0.05).min(1.0);
            r.life -= 2.0;
        }
        self.runes.retain(|r| r.life > 0.0);
    }

    fn render(&self, _cx: &FrameCx, out: &mut DrawList) {
        for r in &self.runes {
            let color = rgba8(100, 200, 255, 255)
                * glam::Vec4::new(1.0, 1.0, 1.0, (r.life / 255.0).max(0.0));
            let rot = Vec2::from_angle(r.rotation);
            let place = |local: Vec2| r.pos + rot.rotate(local * r.scale);

            match r.glyph {
                RuneGlyph::CircleCross => {
                    out.ring(r.pos, 40.0 * r.scale, RUNE_STROKE, color, BlendMode::Alpha);
                    out.line(
                        place(Vec2::new(-30.0, 0.0)),
                        place(Vec2::new(30.0, 0.0)),
                        RUNE_STROKE,
                        color,
                        BlendMode::Alpha,
                    );
                    out.line(
                        place(Vec2::new(0.0, -30.0)),
                        place(Vec2::new(0.0, 30.0)),
                        RUNE_STROKE,
                        color,
                        BlendMode::Alpha,
                    );
                    out.ring(r.pos, 20.0 * r.scale, RUNE_STROKE, color, BlendMode::Alpha);
                }
                RuneGlyph::Hexagram => {
                    let hex: SmallVec<[Vec2; 6]> = (0..6)
                        .map(|i| {
                            let angle = std::f32::consts::TAU / 6.0 * i as f32;
                            place(Vec2::from_angle(angle) * 40.0)
                        })
                        .collect();
                    out.polyline(hex.to_vec(), RUNE_STROKE, color, true, BlendMode::Alpha);

                    let star: SmallVec<[Vec2; 6]> = (0..6)
                        .map(|i| {
                            let angle = std::f32::consts::TAU / 6.0 * i as f32
                                + std::f32::consts::PI / 6.0;
                            place(Vec2::from_angle(angle) * 20.0)
                        })
                        .collect();
                    out.polyline(star.to_vec(), RUNE_STROKE, color, true, BlendMode::Alpha);
                }
                RuneGlyph::TriangleCircle => {
                    let tri: SmallVec<[Vec2; 3]> = [
                        Vec2::new(-35.0, 30.0),
                        Vec2::new(35.0, 30.0),
                        Vec2::new(0.0, -40.0),
                    ]
                    .iter()
                    .map(|&p| place(p))
                    .collect();
                    out.polyline(tri.to_vec(), RUNE_STROKE, color, true, BlendMode::Alpha);
                    out.ring(r.pos, 15.0 * r.scale, RUNE_STROKE, color, BlendMode::Alpha);
                }
            }
        }
    }
}
