//! Glow ribbons: point lists that grow behind the hand and fade out.

use std::collections::VecDeque;

use glam::Vec2;
use rand::prelude::*;

use crate::constants::RIBBON_MAX_POINTS;
use crate::frame::{Effect, FrameCx};
use crate::palette::hsv_to_rgba;
use crate::surface::{BlendMode, DrawList};

#[derive(Debug, Clone)]
pub struct Ribbon {
    points: VecDeque<Vec2>,
    hue: f32,
    life: f32,
    width: f32,
}

impl Ribbon {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn life(&self) -> f32 {
        self.life
    }
}

pub struct RibbonEffect {
    ribbons: Vec<Ribbon>,
    rng: StdRng,
}

impl RibbonEffect {
    pub fn new(seed: u64) -> Self {
        Self {
            ribbons: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Start a new ribbon at a pixel position.
    pub fn add_ribbon(&mut self, pos: Vec2) {
        let mut points = VecDeque::with_capacity(RIBBON_MAX_POINTS);
        points.push_back(pos);
        self.ribbons.push(Ribbon {
            points,
            hue: self.rng.gen_range(0.0..360.0),
            life: 100.0,
            width: self.rng.gen_range(3.0..8.0),
        });
    }

    /// Append the current position to every active ribbon and decay lives.
    pub fn update(&mut self, pos: Vec2) {
        for ribbon in &mut self.ribbons {
            if ribbon.points.len() >= RIBBON_MAX_POINTS {
                ribbon.points.pop_front();
            }
            ribbon.points.push_back(pos);
            ribbon.life -= 0.5;
        }
        self.ribbons.retain(|r| r.life > 0.0);
    }

    pub fn len(&self) -> usize {
        self.ribbons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ribbons.is_empty()
    }

    pub fn ribbons(&self) -> &[Ribbon] {
        &self.ribbons
    }
}

impl Effect for RibbonEffect {
    fn advance(&mut self, _cx: &FrameCx) {
        // Growth and decay are driven by update(): a ribbon only evolves
        // while the hand that feeds it is tracked.
    }

    fn render(&self, _cx: &FrameCx, out: &mut DrawList) {
        for ribbon in &self.ribbons {
            let points: Vec<Vec2> = ribbon.points.iter().copied().collect();
            if points.len() < 2 {
                continue;
            }
            // three concentric layers, wider and fainter outward
            for layer in 0..3u32 {
                let alpha = (ribbon.life / 100.0).max(0.0) / (layer + 1) as f32;
                out.polyline(
                    points.clone(),
                    ribbon.width + layer as f32 * 2.0,
                    hsv_to_rgba(ribbon.hue, 80.0, 100.0, alpha),
                    false,
                    BlendMode::Alpha,
                );
            }
        }
    }
}
