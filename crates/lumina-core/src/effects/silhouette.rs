//! Electric skeleton overlay drawn from the live pose: a wide glow pass, a
//! thin vibrating core pass and pulsing joint dots. Bones with a missing
//! endpoint are skipped, never an error.

use glam::Vec2;

use crate::events::{Joint, SKELETON_BONES};
use crate::frame::{Effect, FrameCx};
use crate::noise::ValueNoise;
use crate::palette::rgba8;
use crate::surface::{BlendMode, DrawList};

const CORE_WEIGHT: f32 = 1.5;

pub struct BodySilhouette {
    noise: ValueNoise,
}

impl BodySilhouette {
    pub fn new(seed: u64) -> Self {
        Self {
            noise: ValueNoise::new(seed),
        }
    }

    fn vibrate(&self, p: Vec2, time: f32) -> Vec2 {
        // subtle electrical wobble, ±2 px, keyed to position and time
        Vec2::new(
            p.x + self.noise.sample2(p.x * 0.01, time) * 4.0 - 2.0,
            p.y + self.noise.sample2(p.y * 0.01, time) * 4.0 - 2.0,
        )
    }
}

impl Effect for BodySilhouette {
    fn advance(&mut self, _cx: &FrameCx) {}

    fn render(&self, cx: &FrameCx, out: &mut DrawList) {
        let Some(pose) = cx.pose else {
            return;
        };
        let vp = cx.viewport;
        let time = cx.frame as f32 * 0.2;

        // glow pass: thick, translucent
        let glow = rgba8(140, 0, 255, 60);
        for &(a, b) in SKELETON_BONES.iter() {
            let (Some(pa), Some(pb)) = (pose.get(a), pose.get(b)) else {
                continue;
            };
            out.line(
                vp.to_px(pa),
                vp.to_px(pb),
                CORE_WEIGHT * 5.0,
                glow,
                BlendMode::Additive,
            );
        }

        // core pass: thin, vibrant, vibrating
        let core = rgba8(180, 50, 255, 180);
        for &(a, b) in SKELETON_BONES.iter() {
            let (Some(pa), Some(pb)) = (pose.get(a), pose.get(b)) else {
                continue;
            };
            out.line(
                self.vibrate(vp.to_px(pa), time),
                self.vibrate(vp.to_px(pb), time),
                CORE_WEIGHT,
                core,
                BlendMode::Additive,
            );
        }

        // joints as small pulsing energy points
        let pulse = time.sin() * 1.5;
        let dot = rgba8(200, 150, 255, 200);
        for joint in Joint::ALL {
            let Some(p) = pose.get(joint) else {
                continue;
            };
            out.circle(
                vp.to_px(p),
                (3.0 + pulse).max(0.5) * 0.5,
                dot,
                BlendMode::Additive,
            );
        }
    }
}
