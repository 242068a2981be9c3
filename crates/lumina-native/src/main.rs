//! Headless native driver for the lumina engine.
//!
//! Stands in for the excluded transport and GPU front-ends during
//! development: synthesizes a scripted pose/gesture/command stream, steps
//! the stage at a fixed 60 Hz cadence and logs draw-list statistics. A real
//! installation replaces this with the websocket transport and a renderer
//! that walks the draw list.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use glam::Vec2;
use rand::prelude::*;
use lumina_core::{
    AudioSink, Command, Gesture, Hand, Joint, PoseFrame, SessionClock, Stage, StageParams,
    TextureInfo, Viewport, TARGET_FPS,
};

const RUN_FRAMES: u64 = 1800; // 30 seconds at the target cadence

/// Stand-in for the ambient playback primitive: always "playing", starts at
/// the fixed resume level the real player uses.
struct NullAudioSink {
    volume: f32,
}

impl AudioSink for NullAudioSink {
    fn is_playing(&self) -> bool {
        true
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }
}

/// Scripted body: shoulders sway, index fingertips sweep figure-eights so
/// trails, sparkles, the aura and the audio controller all light up.
fn scripted_pose(t: f32) -> PoseFrame {
    let sway = (t * 0.4).sin() * 0.04;
    let mut pose = PoseFrame::new();

    pose.set(Joint::Nose, Vec2::new(0.5 + sway, 0.28));
    pose.set(Joint::LeftShoulder, Vec2::new(0.42 + sway, 0.42));
    pose.set(Joint::RightShoulder, Vec2::new(0.58 + sway, 0.42));
    pose.set(Joint::LeftHip, Vec2::new(0.45 + sway, 0.65));
    pose.set(Joint::RightHip, Vec2::new(0.55 + sway, 0.65));
    pose.set(Joint::LeftKnee, Vec2::new(0.45 + sway, 0.80));
    pose.set(Joint::RightKnee, Vec2::new(0.55 + sway, 0.80));
    pose.set(Joint::LeftAnkle, Vec2::new(0.45 + sway, 0.95));
    pose.set(Joint::RightAnkle, Vec2::new(0.55 + sway, 0.95));

    let left = Vec2::new(0.32 + 0.12 * (t * 1.1).sin(), 0.52 + 0.10 * (t * 2.2).sin());
    let right = Vec2::new(0.68 + 0.12 * (t * 1.3).cos(), 0.50 + 0.11 * (t * 2.6).sin());
    pose.set(Joint::LeftElbow, Vec2::new(0.38 + sway, 0.52));
    pose.set(Joint::RightElbow, Vec2::new(0.62 + sway, 0.52));
    pose.set(Joint::LeftWrist, left + Vec2::new(0.02, 0.02));
    pose.set(Joint::RightWrist, right + Vec2::new(-0.02, 0.02));
    pose.set(Joint::LeftIndex, left);
    pose.set(Joint::RightIndex, right);

    pose
}

const GESTURE_CYCLE: [Gesture; 5] = [
    Gesture::None,
    Gesture::Fist,
    Gesture::Pointing,
    Gesture::OpenPalm,
    Gesture::Bunny,
];

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let viewport = Viewport::new(1920.0, 1080.0);
    let mut stage = Stage::new(42, viewport, StageParams::default())?;
    let mut sink = NullAudioSink { volume: 0.7 };
    let mut rng = StdRng::seed_from_u64(7);
    let clock = SessionClock::start();

    log::info!(
        "lumina headless driver: {} frames at {} fps, viewport {}x{}",
        RUN_FRAMES,
        TARGET_FPS,
        viewport.width,
        viewport.height
    );

    let dt = 1.0 / TARGET_FPS;
    let tick = Duration::from_secs_f32(dt);
    let mut pending_texture: Option<(u64, TextureInfo)> = None;

    for frame in 0..RUN_FRAMES {
        let t = frame as f32 * dt;
        let now_ms = clock.now_ms();

        stage.handle_pose(scripted_pose(t), now_ms);

        if frame % 150 == 0 {
            let g = GESTURE_CYCLE[(frame / 150) as usize % GESTURE_CYCLE.len()];
            stage.handle_gesture(Hand::Left, g);
            stage.handle_gesture(Hand::Right, g);
        }
        if frame % 240 == 120 {
            stage.handle_command(Command::Burst {
                x: 0.68,
                y: 0.50,
                intensity: rng.gen_range(2.0..5.0),
            });
        }
        if frame % 600 == 300 {
            stage.handle_command(Command::AuraBoost { active: true });
        }
        if frame % 600 == 420 {
            stage.handle_command(Command::AuraBoost { active: false });
        }
        if frame == 600 {
            stage.handle_command(Command::GenerateTexture { x: 0.5, y: 0.5 });
            stage.handle_command(Command::TextureReady {
                url: "art/texture_0001.png".to_string(),
            });
            // simulate the loader decoding for a second and a half
            pending_texture = Some((
                frame + 90,
                TextureInfo {
                    id: 1,
                    width: 1024.0,
                    height: 1024.0,
                },
            ));
        }
        if let Some((due, texture)) = pending_texture {
            if frame >= due {
                stage.submit_texture(texture);
                pending_texture = None;
            }
        }

        stage.advance(dt, now_ms, viewport, &mut sink);
        let draw = stage.render();

        if frame % 60 == 0 {
            log::info!(
                "frame {:4}: {:4} prims, trails L/R {}/{}, bursts {}, sparkles {}, volume {:.2}",
                frame,
                draw.len(),
                stage.trail(Hand::Left).len(),
                stage.trail(Hand::Right).len(),
                stage.bursts().len(),
                stage.sparkles().len(),
                sink.volume
            );
        }

        thread::sleep(tick);
    }

    log::info!("done after {} frames", stage.frame_count());
    Ok(())
}
