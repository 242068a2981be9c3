//! Stateful visual layers composited by the stage, back to front.

pub mod art;
pub mod aura;
pub mod bursts;
pub mod ribbons;
pub mod runes;
pub mod silhouette;
pub mod sky;
pub mod sparkles;
pub mod trails;

pub use art::ArtLayer;
pub use aura::AuraEffect;
pub use bursts::{BurstParticle, BurstSystem};
pub use ribbons::{Ribbon, RibbonEffect};
pub use runes::{Rune, RuneEffect, RuneGlyph};
pub use silhouette::BodySilhouette;
pub use sky::NightSky;
pub use sparkles::{Sparkle, SparkleSystem};
pub use trails::{TrailEffect, TrailSample};
