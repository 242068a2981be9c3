//! Message types delivered by the (external) pose/gesture transport.
//!
//! The transport parses the wire format; the engine only ever sees these
//! already-structured values. All enums are closed so command routing is an
//! exhaustive match rather than string comparison.

use fnv::FnvHashMap;
use glam::Vec2;

/// Named joints a pose frame may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftIndex,
    RightIndex,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Joint {
    pub const ALL: [Joint; 15] = [
        Joint::Nose,
        Joint::LeftShoulder,
        Joint::RightShoulder,
        Joint::LeftElbow,
        Joint::RightElbow,
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftIndex,
        Joint::RightIndex,
        Joint::LeftHip,
        Joint::RightHip,
        Joint::LeftKnee,
        Joint::RightKnee,
        Joint::LeftAnkle,
        Joint::RightAnkle,
    ];
}

/// Bone list for the skeleton overlay. Head links are intentionally absent.
pub const SKELETON_BONES: [(Joint, Joint); 11] = [
    // torso
    (Joint::LeftShoulder, Joint::RightShoulder),
    (Joint::LeftShoulder, Joint::LeftHip),
    (Joint::RightShoulder, Joint::RightHip),
    // arms
    (Joint::LeftShoulder, Joint::LeftElbow),
    (Joint::LeftElbow, Joint::LeftWrist),
    (Joint::RightShoulder, Joint::RightElbow),
    (Joint::RightElbow, Joint::RightWrist),
    // legs
    (Joint::LeftHip, Joint::LeftKnee),
    (Joint::LeftKnee, Joint::LeftAnkle),
    (Joint::RightHip, Joint::RightKnee),
    (Joint::RightKnee, Joint::RightAnkle),
];

/// One snapshot of normalized [0,1]² joint positions for a tracked body.
///
/// Replaced wholesale on every pose message; consumers that need history
/// build their own. Missing joints are simply absent from the map.
#[derive(Debug, Clone, Default)]
pub struct PoseFrame {
    joints: FnvHashMap<Joint, Vec2>,
}

impl PoseFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, joint: Joint, position: Vec2) {
        self.joints.insert(joint, position);
    }

    pub fn get(&self, joint: Joint) -> Option<Vec2> {
        self.joints.get(&joint).copied()
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Midpoint of the two shoulders, the motion anchor for audio control.
    /// Deliberately not a hand: hands gesture at rest, torsos do not.
    pub fn body_center(&self) -> Option<Vec2> {
        let left = self.get(Joint::LeftShoulder)?;
        let right = self.get(Joint::RightShoulder)?;
        Some((left + right) * 0.5)
    }
}

/// Which tracked hand a gesture classification refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

/// Discrete hand-shape classification from the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    Fist,
    Pointing,
    OpenPalm,
    Bunny,
    #[default]
    None,
}

/// Fire-and-forget control events. Positions are normalized; the compositor
/// denormalizes against the live viewport at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Burst { x: f32, y: f32, intensity: f32 },
    AuraBoost { active: bool },
    GenerateTexture { x: f32, y: f32 },
    TextureReady { url: String },
}
