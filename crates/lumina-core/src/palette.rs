//! Gesture trail color tables and color conversion helpers.
//!
//! Colors are `Vec4` RGBA with components in [0, 1]. Each trail tier palette
//! runs from a very faint wide outer hue (tier 0) to an opaque white core
//! (tier 7). The table is a fixed 2×5 lookup keyed by hand temperature and
//! gesture, not computed.

use glam::Vec4;

use crate::events::{Gesture, Hand};

/// Eight concentric width/opacity layers composing a gradient trail.
pub type TierPalette = [Vec4; 8];

/// Cold (left hand, blue/cyan/purple family) vs warm (right hand,
/// red/orange/yellow family) palette identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandTemperature {
    Cold,
    Warm,
}

impl Hand {
    pub fn temperature(self) -> HandTemperature {
        match self {
            Hand::Left => HandTemperature::Cold,
            Hand::Right => HandTemperature::Warm,
        }
    }
}

fn c(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    Vec4::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    )
}

/// The 8-tier gradient for a hand temperature and gesture. Unrecognized
/// gestures land on the default row for that temperature.
pub fn trail_palette(temperature: HandTemperature, gesture: Gesture) -> TierPalette {
    use Gesture::*;
    use HandTemperature::*;
    match (temperature, gesture) {
        // cold fist: deep blue/purple
        (Cold, Fist) => [
            c(0, 0, 150, 3),
            c(20, 0, 180, 5),
            c(40, 0, 200, 8),
            c(60, 50, 220, 12),
            c(80, 100, 240, 20),
            c(120, 150, 255, 40),
            c(180, 200, 255, 100),
            c(255, 255, 255, 255),
        ],
        // warm fist: red/orange
        (Warm, Fist) => [
            c(150, 0, 0, 3),
            c(200, 30, 0, 5),
            c(255, 60, 0, 8),
            c(255, 100, 0, 12),
            c(255, 150, 0, 20),
            c(255, 200, 50, 40),
            c(255, 230, 150, 100),
            c(255, 255, 255, 255),
        ],
        // cold pointing: cyan/turquoise
        (Cold, Pointing) => [
            c(0, 100, 120, 3),
            c(0, 130, 150, 5),
            c(0, 160, 180, 8),
            c(0, 200, 220, 12),
            c(50, 230, 255, 20),
            c(100, 240, 255, 40),
            c(180, 250, 255, 100),
            c(255, 255, 255, 255),
        ],
        // warm pointing: yellow/gold
        (Warm, Pointing) => [
            c(150, 120, 0, 3),
            c(180, 150, 0, 5),
            c(210, 180, 0, 8),
            c(240, 210, 0, 12),
            c(255, 240, 50, 20),
            c(255, 250, 120, 40),
            c(255, 255, 200, 100),
            c(255, 255, 255, 255),
        ],
        // cold palm: green/emerald
        (Cold, OpenPalm) => [
            c(0, 100, 80, 3),
            c(0, 130, 100, 5),
            c(0, 160, 120, 8),
            c(20, 200, 150, 12),
            c(50, 230, 180, 20),
            c(100, 250, 200, 40),
            c(180, 255, 230, 100),
            c(255, 255, 255, 255),
        ],
        // warm palm: orange/coral
        (Warm, OpenPalm) => [
            c(180, 80, 0, 3),
            c(220, 100, 20, 5),
            c(255, 120, 40, 8),
            c(255, 150, 80, 12),
            c(255, 180, 120, 20),
            c(255, 210, 160, 40),
            c(255, 235, 200, 100),
            c(255, 255, 255, 255),
        ],
        // cold bunny: purple/violet
        (Cold, Bunny) => [
            c(100, 0, 150, 3),
            c(130, 20, 180, 5),
            c(160, 50, 210, 8),
            c(180, 80, 240, 12),
            c(200, 120, 255, 20),
            c(220, 160, 255, 40),
            c(240, 200, 255, 100),
            c(255, 255, 255, 255),
        ],
        // warm bunny: pink/magenta
        (Warm, Bunny) => [
            c(180, 0, 100, 3),
            c(220, 20, 130, 5),
            c(255, 50, 160, 8),
            c(255, 100, 180, 12),
            c(255, 140, 200, 20),
            c(255, 180, 220, 40),
            c(255, 220, 240, 100),
            c(255, 255, 255, 255),
        ],
        // cold default: cyan/blue
        (Cold, None) => [
            c(0, 50, 150, 3),
            c(0, 80, 180, 5),
            c(0, 120, 210, 8),
            c(0, 160, 240, 12),
            c(50, 200, 255, 20),
            c(120, 220, 255, 40),
            c(180, 240, 255, 100),
            c(255, 255, 255, 255),
        ],
        // warm default: magenta/red
        (Warm, None) => [
            c(150, 0, 80, 3),
            c(180, 0, 100, 5),
            c(210, 0, 120, 8),
            c(240, 50, 150, 12),
            c(255, 100, 180, 20),
            c(255, 150, 210, 40),
            c(255, 200, 235, 100),
            c(255, 255, 255, 255),
        ],
    }
}

/// RGBA from 0-255 channels.
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    c(r, g, b, a)
}

/// HSB color (h in degrees [0, 360), s and v in [0, 100]) to RGBA.
/// The particle emitters and ribbons specify their palettes in HSB.
pub fn hsv_to_rgba(h: f32, s: f32, v: f32, a: f32) -> Vec4 {
    let h = h.rem_euclid(360.0) / 60.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let v = (v / 100.0).clamp(0.0, 1.0);
    let i = h.floor();
    let f = h - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match i as i32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Vec4::new(r, g, b, a)
}
