//! Generated-backdrop layer with bounded crossfade.
//!
//! `generate_texture` results arrive from the external loader an arbitrary
//! number of frames after the request; an arrival fades in over the current
//! image rather than swapping instantaneously. A failed load simply never
//! arrives and the previous image stays up.

use glam::{Vec2, Vec4};

use crate::constants::ART_FADE_STEP;
use crate::frame::{Effect, FrameCx};
use crate::surface::{BlendMode, DrawList, TextureInfo};

pub struct ArtLayer {
    current: Option<TextureInfo>,
    next: Option<TextureInfo>,
    fade: f32,
    pending_url: Option<String>,
}

impl ArtLayer {
    pub fn new() -> Self {
        Self {
            current: None,
            next: None,
            fade: 0.0,
            pending_url: None,
        }
    }

    /// Record that a texture has been announced; decoding is the loader's
    /// job and may take any number of frames (or fail silently).
    pub fn request(&mut self, url: &str) {
        log::info!("art layer: texture announced at {url}");
        self.pending_url = Some(url.to_string());
    }

    /// The decoded texture has arrived.
    pub fn submit(&mut self, texture: TextureInfo) {
        self.pending_url = None;
        if self.current.is_none() {
            self.current = Some(texture);
        } else {
            self.next = Some(texture);
            self.fade = 0.0;
        }
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.pending_url.as_deref()
    }

    pub fn current(&self) -> Option<TextureInfo> {
        self.current
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn is_crossfading(&self) -> bool {
        self.next.is_some()
    }

    /// Cover-scale a texture to fill the viewport.
    fn cover_size(texture: TextureInfo, vw: f32, vh: f32) -> Vec2 {
        let scale = (vw / texture.width).max(vh / texture.height);
        Vec2::new(texture.width * scale, texture.height * scale)
    }
}

impl Default for ArtLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Effect for ArtLayer {
    fn advance(&mut self, _cx: &FrameCx) {
        if self.next.is_some() {
            self.fade = (self.fade + ART_FADE_STEP).min(1.0);
            if self.fade >= 1.0 {
                self.current = self.next.take();
                self.fade = 0.0;
            }
        }
    }

    fn render(&self, cx: &FrameCx, out: &mut DrawList) {
        let Some(current) = self.current else {
            return;
        };
        let vp = cx.viewport;
        let center = vp.center();

        out.image(
            current,
            center,
            Self::cover_size(current, vp.width, vp.height),
            Vec4::ONE,
            BlendMode::Alpha,
        );

        if let Some(next) = self.next {
            out.image(
                next,
                center,
                Self::cover_size(next, vp.width, vp.height),
                Vec4::new(1.0, 1.0, 1.0, self.fade),
                BlendMode::Alpha,
            );
        }

        // slow breathing dim so the backdrop never reads as a still
        let breath = (50.0 + (cx.frame as f32 * 0.02).sin() * 20.0) / 255.0;
        out.polygon(
            vec![
                Vec2::ZERO,
                Vec2::new(vp.width, 0.0),
                Vec2::new(vp.width, vp.height),
                Vec2::new(0.0, vp.height),
            ],
            Vec4::new(0.0, 0.0, 0.0, breath),
            BlendMode::Alpha,
        );
    }
}
