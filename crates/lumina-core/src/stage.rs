//! Frame compositor: owns every visual component, fans incoming events out
//! to them, and drives the fixed advance/render order once per display tick.

use glam::Vec2;

use crate::audio::{AudioLevelController, AudioParams, AudioSink};
use crate::constants::{SPARKLES_PER_BURST, SPARKLES_PER_HAND, SPARKLE_INTERVAL_MS};
use crate::effects::{
    ArtLayer, AuraEffect, BodySilhouette, BurstSystem, NightSky, RibbonEffect, RuneEffect,
    SparkleSystem, TrailEffect,
};
use crate::error::Result;
use crate::events::{Command, Gesture, Hand, Joint, PoseFrame};
use crate::frame::{Effect, FrameCx};
use crate::palette::HandTemperature;
use crate::surface::{DrawList, TextureInfo, Viewport};

#[derive(Debug, Clone, Default)]
pub struct StageParams {
    pub audio: AudioParams,
}

/// Derive an independent RNG seed per subsystem from the session seed.
fn subseed(seed: u64, index: u64) -> u64 {
    seed ^ index.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

pub struct Stage {
    sky: NightSky,
    art: ArtLayer,
    silhouette: BodySilhouette,
    aura: AuraEffect,
    runes: RuneEffect,
    ribbons: RibbonEffect,
    trail_left: TrailEffect,
    trail_right: TrailEffect,
    bursts: BurstSystem,
    sparkles: SparkleSystem,
    audio: AudioLevelController,

    pose: Option<PoseFrame>,
    body_center_px: Option<Vec2>,
    viewport: Viewport,
    frame: u64,
    last_dt: f32,
    last_now_ms: f64,
    last_sparkle_ms: f64,
}

impl Stage {
    pub fn new(seed: u64, viewport: Viewport, params: StageParams) -> Result<Self> {
        Ok(Self {
            sky: NightSky::new(subseed(seed, 0), viewport),
            art: ArtLayer::new(),
            silhouette: BodySilhouette::new(subseed(seed, 1)),
            aura: AuraEffect::new(subseed(seed, 2)),
            runes: RuneEffect::new(subseed(seed, 3)),
            ribbons: RibbonEffect::new(subseed(seed, 4)),
            trail_left: TrailEffect::new(HandTemperature::Cold, subseed(seed, 5)),
            trail_right: TrailEffect::new(HandTemperature::Warm, subseed(seed, 6)),
            bursts: BurstSystem::new(subseed(seed, 7)),
            sparkles: SparkleSystem::new(subseed(seed, 8)),
            audio: AudioLevelController::new(params.audio)?,
            pose: None,
            body_center_px: None,
            viewport,
            frame: 0,
            last_dt: 0.0,
            last_now_ms: 0.0,
            last_sparkle_ms: 0.0,
        })
    }

    /// A fresh pose snapshot from the transport. Missing joints skip the
    /// consumers that wanted them; nothing here is fatal.
    pub fn handle_pose(&mut self, pose: PoseFrame, now_ms: f64) {
        let vp = self.viewport;

        if let Some(p) = pose.get(Joint::LeftIndex) {
            self.trail_left.update_target(vp.to_px(p));
        }
        if let Some(p) = pose.get(Joint::RightIndex) {
            let px = vp.to_px(p);
            self.trail_right.update_target(px);
            self.ribbons.update(px);
        }
        if let Some(center) = pose.body_center() {
            let px = vp.to_px(center);
            self.aura.set_target(px);
            self.body_center_px = Some(px);
        }

        if now_ms - self.last_sparkle_ms > SPARKLE_INTERVAL_MS {
            let mut emitted = false;
            for joint in [Joint::LeftIndex, Joint::RightIndex] {
                if let Some(p) = pose.get(joint) {
                    self.sparkles.emit(vp.to_px(p), SPARKLES_PER_HAND);
                    emitted = true;
                }
            }
            if emitted {
                self.last_sparkle_ms = now_ms;
            }
        }

        self.pose = Some(pose);
    }

    /// Per-hand gesture classification; recolors that hand's trail from the
    /// next sample on.
    pub fn handle_gesture(&mut self, hand: Hand, gesture: Gesture) {
        match hand {
            Hand::Left => self.trail_left.set_gesture(gesture),
            Hand::Right => self.trail_right.set_gesture(gesture),
        }
    }

    /// Discrete commands, consumed exactly once each.
    pub fn handle_command(&mut self, command: Command) {
        let vp = self.viewport;
        match command {
            Command::Burst { x, y, intensity } => {
                let px = vp.to_px(Vec2::new(x, y));
                self.bursts.emit_burst(px, intensity);
                self.sparkles.emit(px, SPARKLES_PER_BURST);
            }
            Command::AuraBoost { active } => {
                self.aura.set_boost(active);
                if active {
                    if let Some(center) = self.body_center_px {
                        self.runes.spawn(center);
                    }
                }
            }
            Command::GenerateTexture { x, y } => {
                self.ribbons.add_ribbon(vp.to_px(Vec2::new(x, y)));
            }
            Command::TextureReady { url } => {
                self.art.request(&url);
            }
        }
    }

    /// Callback for the external asset loader once a texture is decoded.
    /// May arrive any number of frames after the announcement.
    pub fn submit_texture(&mut self, texture: TextureInfo) {
        self.art.submit(texture);
    }

    /// Step every layer one frame, then run the audio controller against
    /// the sink with the last known body center.
    pub fn advance(&mut self, dt: f32, now_ms: f64, viewport: Viewport, sink: &mut dyn AudioSink) {
        self.viewport = viewport;
        self.frame += 1;
        self.last_dt = dt;
        self.last_now_ms = now_ms;

        let pose = self.pose.take();
        {
            let cx = FrameCx {
                frame: self.frame,
                dt,
                now_ms,
                viewport,
                pose: pose.as_ref(),
            };
            let layers: [&mut dyn Effect; 10] = [
                &mut self.sky,
                &mut self.art,
                &mut self.silhouette,
                &mut self.aura,
                &mut self.runes,
                &mut self.ribbons,
                &mut self.trail_left,
                &mut self.trail_right,
                &mut self.bursts,
                &mut self.sparkles,
            ];
            for layer in layers {
                layer.advance(&cx);
            }
        }
        self.pose = pose;

        if let Some(center) = self.body_center_px {
            self.audio.update(center, now_ms, sink);
        }
    }

    /// Composite every layer into one draw list: background, backdrop art,
    /// silhouette, overlays, trails, then particles on top.
    pub fn render(&self) -> DrawList {
        let cx = FrameCx {
            frame: self.frame,
            dt: self.last_dt,
            now_ms: self.last_now_ms,
            viewport: self.viewport,
            pose: self.pose.as_ref(),
        };
        let layers: [&dyn Effect; 10] = [
            &self.sky,
            &self.art,
            &self.silhouette,
            &self.aura,
            &self.runes,
            &self.ribbons,
            &self.trail_left,
            &self.trail_right,
            &self.bursts,
            &self.sparkles,
        ];
        let mut out = DrawList::new();
        for layer in layers {
            layer.render(&cx, &mut out);
        }
        out
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn sky(&self) -> &NightSky {
        &self.sky
    }

    pub fn art(&self) -> &ArtLayer {
        &self.art
    }

    pub fn aura(&self) -> &AuraEffect {
        &self.aura
    }

    pub fn runes(&self) -> &RuneEffect {
        &self.runes
    }

    pub fn ribbons(&self) -> &RibbonEffect {
        &self.ribbons
    }

    pub fn trail(&self, hand: Hand) -> &TrailEffect {
        match hand {
            Hand::Left => &self.trail_left,
            Hand::Right => &self.trail_right,
        }
    }

    pub fn bursts(&self) -> &BurstSystem {
        &self.bursts
    }

    pub fn sparkles(&self) -> &SparkleSystem {
        &self.sparkles
    }

    pub fn audio(&self) -> &AudioLevelController {
        &self.audio
    }
}
