//! Core engine for lumina: pose-driven, audio-reactive visual effects.
//!
//! Everything here is plain in-memory state advanced once per display tick;
//! the transport that produces events, the renderer that consumes draw
//! lists and the audio playback primitive all live behind small boundaries
//! (`events`, `surface::DrawList`, `audio::AudioSink`) so the crate runs
//! identically on native and wasm targets.

pub mod audio;
pub mod clock;
pub mod constants;
pub mod effects;
pub mod error;
pub mod events;
pub mod frame;
pub mod noise;
pub mod palette;
pub mod stage;
pub mod surface;

pub use audio::{AudioLevelController, AudioParams, AudioSink};
pub use clock::SessionClock;
pub use constants::{TARGET_FPS, TRAIL_MAX_POINTS, TRAIL_TIER_WIDTHS};
pub use effects::{
    ArtLayer, AuraEffect, BodySilhouette, BurstSystem, NightSky, RibbonEffect, RuneEffect,
    SparkleSystem, TrailEffect,
};
pub use error::{EngineError, Result};
pub use events::{Command, Gesture, Hand, Joint, PoseFrame, SKELETON_BONES};
pub use frame::{Effect, FrameCx};
pub use noise::ValueNoise;
pub use palette::{hsv_to_rgba, rgba8, trail_palette, HandTemperature, TierPalette};
pub use stage::{Stage, StageParams};
pub use surface::{BlendMode, DrawList, Prim, StripVertex, TextureInfo, Viewport};
