// Integration tests for event routing and the frame loop.

use glam::Vec2;
use lumina_core::surface::{Prim, TextureInfo, Viewport};
use lumina_core::{
    AudioSink, Command, Gesture, Hand, Joint, PoseFrame, Stage, StageParams,
};

struct FakeSink {
    playing: bool,
    volume: f32,
}

impl AudioSink for FakeSink {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
    }
}

const DT: f32 = 1.0 / 60.0;
const FRAME_MS: f64 = 1000.0 / 60.0;

fn make_stage() -> Stage {
    Stage::new(42, Viewport::new(1000.0, 1000.0), StageParams::default()).unwrap()
}

fn full_pose() -> PoseFrame {
    let mut pose = PoseFrame::new();
    pose.set(Joint::Nose, Vec2::new(0.5, 0.3));
    pose.set(Joint::LeftShoulder, Vec2::new(0.4, 0.4));
    pose.set(Joint::RightShoulder, Vec2::new(0.6, 0.4));
    pose.set(Joint::LeftIndex, Vec2::new(0.3, 0.5));
    pose.set(Joint::RightIndex, Vec2::new(0.7, 0.5));
    pose
}

#[test]
fn invalid_audio_params_fail_stage_construction() {
    let mut params = StageParams::default();
    params.audio.fade_step = 0.0;
    assert!(Stage::new(1, Viewport::new(100.0, 100.0), params).is_err());
}

#[test]
fn burst_command_feeds_both_particle_systems() {
    let mut stage = make_stage();
    stage.handle_command(Command::Burst {
        x: 0.5,
        y: 0.5,
        intensity: 5.0,
    });
    assert_eq!(stage.bursts().len(), 50);
    assert_eq!(stage.sparkles().len(), 10);
}

#[test]
fn gesture_routes_to_the_matching_hand_only() {
    let mut stage = make_stage();
    stage.handle_gesture(Hand::Left, Gesture::Fist);
    assert_eq!(stage.trail(Hand::Left).gesture(), Gesture::Fist);
    assert_eq!(stage.trail(Hand::Right).gesture(), Gesture::None);
}

#[test]
fn pose_with_one_hand_updates_only_that_trail() {
    let mut stage = make_stage();
    let mut pose = PoseFrame::new();
    pose.set(Joint::RightIndex, Vec2::new(0.7, 0.5));

    stage.handle_pose(pose, 0.0);
    assert_eq!(stage.trail(Hand::Left).len(), 0);
    assert_eq!(stage.trail(Hand::Right).len(), 1);
}

#[test]
fn empty_pose_is_harmless() {
    let mut stage = make_stage();
    stage.handle_pose(PoseFrame::new(), 0.0);

    let mut sink = FakeSink {
        playing: true,
        volume: 0.7,
    };
    stage.advance(DT, FRAME_MS, Viewport::new(1000.0, 1000.0), &mut sink);
    assert!(!stage.render().is_empty());
}

#[test]
fn aura_boost_spawns_a_rune_only_with_a_known_body_center() {
    let mut stage = make_stage();

    stage.handle_command(Command::AuraBoost { active: true });
    assert_eq!(stage.runes().len(), 0, "no body center known yet");

    stage.handle_pose(full_pose(), 0.0);
    stage.handle_command(Command::AuraBoost { active: true });
    assert_eq!(stage.runes().len(), 1);
    assert!(stage.aura().is_boosted());

    stage.handle_command(Command::AuraBoost { active: false });
    assert_eq!(stage.runes().len(), 1, "deactivation never spawns");
    assert!(!stage.aura().is_boosted());
}

#[test]
fn generate_texture_starts_a_ribbon() {
    let mut stage = make_stage();
    stage.handle_command(Command::GenerateTexture { x: 0.2, y: 0.8 });
    assert_eq!(stage.ribbons().len(), 1);
}

#[test]
fn texture_crossfade_promotes_exactly_once() {
    let mut stage = make_stage();
    let mut sink = FakeSink {
        playing: false,
        volume: 0.0,
    };
    let vp = Viewport::new(1000.0, 1000.0);

    stage.handle_command(Command::TextureReady {
        url: "art/a.png".to_string(),
    });
    assert_eq!(stage.art().pending_url(), Some("art/a.png"));

    let first = TextureInfo {
        id: 1,
        width: 512.0,
        height: 512.0,
    };
    stage.submit_texture(first);
    assert_eq!(stage.art().current(), Some(first));
    assert!(stage.art().pending_url().is_none());
    assert!(!stage.art().is_crossfading());

    let second = TextureInfo {
        id: 2,
        width: 512.0,
        height: 512.0,
    };
    stage.submit_texture(second);
    assert!(stage.art().is_crossfading());

    let mut now = 0.0;
    let mut fades: Vec<f32> = Vec::new();
    for _ in 0..60 {
        stage.advance(DT, now, vp, &mut sink);
        if stage.art().is_crossfading() {
            fades.push(stage.art().fade());
        }
        now += FRAME_MS;
    }
    assert_eq!(stage.art().current(), Some(second), "incoming image promoted");
    assert!(!stage.art().is_crossfading());
    for pair in fades.windows(2) {
        assert!(pair[1] >= pair[0], "fade is monotone while crossfading");
    }
}

#[test]
fn sparkles_follow_the_hands_on_a_cadence() {
    let mut stage = make_stage();

    // first pose lands before the cadence window opens
    stage.handle_pose(full_pose(), 0.0);
    assert_eq!(stage.sparkles().len(), 0);

    stage.handle_pose(full_pose(), 150.0);
    assert_eq!(stage.sparkles().len(), 6, "3 sparkles per tracked hand");

    // immediately after, the window is closed again
    stage.handle_pose(full_pose(), 160.0);
    assert_eq!(stage.sparkles().len(), 6);
}

#[test]
fn frame_loop_runs_and_composites_in_order() {
    let mut stage = make_stage();
    let mut sink = FakeSink {
        playing: true,
        volume: 0.7,
    };
    let vp = Viewport::new(1000.0, 1000.0);

    let mut now = 0.0;
    for frame in 0..30 {
        let mut pose = full_pose();
        // wave the right hand so trails accumulate
        pose.set(
            Joint::RightIndex,
            Vec2::new(0.5 + 0.2 * (frame as f32 * 0.3).sin(), 0.5),
        );
        stage.handle_pose(pose, now);
        stage.advance(DT, now, vp, &mut sink);
        now += FRAME_MS;
    }

    let draw = stage.render();
    assert!(!draw.is_empty());
    assert!(
        matches!(draw.items()[0].0, Prim::VGradient { .. }),
        "the sky gradient is always the back layer"
    );
    assert_eq!(stage.frame_count(), 30);
    assert!(stage.trail(Hand::Right).len() >= 30);
}

#[test]
fn resize_takes_effect_on_the_next_frame() {
    let mut stage = make_stage();
    let mut sink = FakeSink {
        playing: false,
        volume: 0.0,
    };
    stage.advance(DT, 0.0, Viewport::new(640.0, 480.0), &mut sink);
    assert_eq!(stage.viewport(), Viewport::new(640.0, 480.0));
}
