//! Per-hand motion trail rendered as eight concentric variable-width
//! ribbon strips, recolored by the active gesture.
//!
//! The gesture label affects new samples only; old samples keep the palette
//! they were captured with, so a gesture change travels visibly along the
//! trail as history ages out.

use std::collections::VecDeque;

use glam::Vec2;

use crate::constants::{
    TRAIL_MAX_POINTS, TRAIL_NOISE_SCALE, TRAIL_PHASE_STEP, TRAIL_SMOOTHING, TRAIL_TIER_WIDTHS,
    TRAIL_TIME_SCALE, TRAIL_VELOCITY_CEIL,
};
use crate::events::Gesture;
use crate::frame::{Effect, FrameCx};
use crate::noise::ValueNoise;
use crate::palette::{trail_palette, HandTemperature, TierPalette};
use crate::surface::{BlendMode, DrawList, StripVertex};

/// One recorded trail point, newest-first in the history.
#[derive(Debug, Clone)]
pub struct TrailSample {
    /// Smoothed position, drifted a little more each frame.
    pub pos: Vec2,
    /// Frames since capture; drives fade, flare and eviction.
    pub age: u32,
    /// Raw (pre-smoothing) target at capture, the stable per-sample noise
    /// seed.
    pub seed_pos: Vec2,
    /// Euclidean distance from the previous newest sample at capture.
    pub velocity: f32,
    /// Palette active when this sample was captured. Never rewritten.
    pub palette: TierPalette,
}

pub struct TrailEffect {
    temperature: HandTemperature,
    gesture: Gesture,
    history: VecDeque<TrailSample>,
    noise: ValueNoise,
    phase: f32,
}

impl TrailEffect {
    pub fn new(temperature: HandTemperature, seed: u64) -> Self {
        Self {
            temperature,
            gesture: Gesture::None,
            history: VecDeque::with_capacity(TRAIL_MAX_POINTS + 1),
            noise: ValueNoise::new(seed),
            phase: 0.0,
        }
    }

    /// Update the label used for new samples. History is never recolored.
    pub fn set_gesture(&mut self, gesture: Gesture) {
        self.gesture = gesture;
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Samples newest-first.
    pub fn samples(&self) -> impl Iterator<Item = &TrailSample> {
        self.history.iter()
    }

    /// Record a new target position in pixels.
    ///
    /// Ages and drifts the retained samples, then inserts the smoothed new
    /// point at age 0 with a snapshot of the current palette. Drift is a
    /// pure function of (seed position, age, phase): a history that stops
    /// receiving targets renders the same picture every frame.
    pub fn update_target(&mut self, raw: Vec2) {
        let (smoothed, velocity) = match self.history.front() {
            Some(last) => (last.pos.lerp(raw, TRAIL_SMOOTHING), raw.distance(last.pos)),
            None => (raw, 0.0),
        };

        for pt in &mut self.history {
            pt.age += 1;
            let drift = 0.2 + pt.age as f32 * 0.015;
            let nx = self.noise.sample3(
                pt.seed_pos.x * TRAIL_NOISE_SCALE,
                pt.age as f32 * TRAIL_TIME_SCALE,
                self.phase,
            );
            let ny = self.noise.sample3(
                pt.seed_pos.y * TRAIL_NOISE_SCALE,
                pt.age as f32 * TRAIL_TIME_SCALE,
                self.phase + 100.0,
            );
            pt.pos.x += (nx - 0.5) * drift;
            pt.pos.y += (ny - 0.5) * drift - 0.2;
        }

        self.history.push_front(TrailSample {
            pos: smoothed,
            age: 0,
            seed_pos: raw,
            velocity,
            palette: trail_palette(self.temperature, self.gesture),
        });
        if self.history.len() > TRAIL_MAX_POINTS {
            self.history.pop_back();
        }

        self.phase += TRAIL_PHASE_STEP;
    }
}

impl Effect for TrailEffect {
    fn advance(&mut self, _cx: &FrameCx) {
        // Aging happens in update_target: with the transport silent the
        // trail holds still instead of decaying away.
    }

    fn render(&self, _cx: &FrameCx, out: &mut DrawList) {
        if self.history.len() < 4 {
            return;
        }

        // Widest, faintest tier first so the bright core lands on top.
        for (tier, &base_width) in TRAIL_TIER_WIDTHS.iter().enumerate() {
            let mut verts: Vec<StripVertex> = Vec::with_capacity(self.history.len() * 2);

            for (p1, p2) in self.history.iter().zip(self.history.iter().skip(1)) {
                let dir = p2.pos - p1.pos;
                let len = dir.length();
                if len == 0.0 {
                    continue;
                }
                let normal = Vec2::new(-dir.y, dir.x) / len;

                let age_ratio = p1.age as f32 / TRAIL_MAX_POINTS as f32;
                let expansion = 1.0 + age_ratio * 1.2;
                // Slow motion thickens the ribbon, fast motion thins it:
                // whips stay sharp, slow passes pool into glowing masses.
                let v = p1.velocity.clamp(0.0, TRAIL_VELOCITY_CEIL);
                let velocity_factor = 1.3 - 0.7 * (v / TRAIL_VELOCITY_CEIL);
                let wobble = self
                    .noise
                    .sample3(p1.pos.x * 0.01, p1.pos.y * 0.01, self.phase);
                let half_width =
                    base_width * expansion * velocity_factor * (0.85 + wobble * 0.3);

                let mut color = p1.palette[tier];
                let next = p2.palette[tier];
                // A gesture boundary between adjacent samples would hard-cut;
                // blend the two tier colors 50/50 across that segment.
                if color.truncate() != next.truncate() {
                    color = color.lerp(next, 0.5);
                }
                color.w *= 1.0 - age_ratio;

                let a = p1.pos + normal * half_width;
                let b = p1.pos - normal * half_width;
                verts.push(StripVertex {
                    pos: a.to_array(),
                    color: color.to_array(),
                });
                verts.push(StripVertex {
                    pos: b.to_array(),
                    color: color.to_array(),
                });
            }

            if verts.len() >= 4 {
                out.strip(verts, BlendMode::Additive);
            }
        }
    }
}
