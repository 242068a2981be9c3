//! Backend-agnostic draw list.
//!
//! Effects append primitives in compositing order; the (external) renderer
//! walks the list once per frame and is free to batch by blend mode as long
//! as order within the list is preserved. Strip vertices are `Pod` so the
//! renderer can upload them without copying.

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Pixel dimensions of the drawable region, sampled live every frame so a
/// window resize takes effect on the next tick. Nothing caches these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Normalized [0,1]² coordinates to pixels.
    pub fn to_px(&self, normalized: Vec2) -> Vec2 {
        Vec2::new(normalized.x * self.width, normalized.y * self.height)
    }
}

/// Compositing mode for one primitive. Everything past the sky gradient
/// draws additively or with alpha; opaque occlusion is reserved for the
/// gradient itself and the horizon foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    #[default]
    Alpha,
    Additive,
}

/// One triangle-strip vertex with its own color, laid out for direct upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct StripVertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

/// Descriptor of a decoded texture owned by the external asset loader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureInfo {
    pub id: u64,
    pub width: f32,
    pub height: f32,
}

/// Closed set of primitives the renderer understands.
#[derive(Debug, Clone)]
pub enum Prim {
    Circle {
        center: Vec2,
        radius: f32,
        color: Vec4,
    },
    Ring {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Vec4,
    },
    Line {
        a: Vec2,
        b: Vec2,
        width: f32,
        color: Vec4,
    },
    Polyline {
        points: Vec<Vec2>,
        width: f32,
        color: Vec4,
        closed: bool,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Vec4,
    },
    Strip {
        verts: Vec<StripVertex>,
    },
    /// Full-viewport vertical gradient; stops are (t, color) with t in [0,1]
    /// top to bottom.
    VGradient {
        stops: Vec<(f32, Vec4)>,
    },
    Image {
        texture: TextureInfo,
        center: Vec2,
        size: Vec2,
        tint: Vec4,
    },
}

/// Ordered primitive list for one frame. Order in the list IS draw order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    items: Vec<(Prim, BlendMode)>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[(Prim, BlendMode)] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, prim: Prim, blend: BlendMode) {
        self.items.push((prim, blend));
    }

    /// Replay a prebuilt fragment (e.g. the horizon silhouette).
    pub fn extend_from(&mut self, other: &DrawList) {
        self.items.extend(other.items.iter().cloned());
    }

    pub fn circle(&mut self, center: Vec2, radius: f32, color: Vec4, blend: BlendMode) {
        self.push(Prim::Circle { center, radius, color }, blend);
    }

    pub fn ring(&mut self, center: Vec2, radius: f32, width: f32, color: Vec4, blend: BlendMode) {
        self.push(Prim::Ring { center, radius, width, color }, blend);
    }

    pub fn line(&mut self, a: Vec2, b: Vec2, width: f32, color: Vec4, blend: BlendMode) {
        self.push(Prim::Line { a, b, width, color }, blend);
    }

    pub fn polyline(
        &mut self,
        points: Vec<Vec2>,
        width: f32,
        color: Vec4,
        closed: bool,
        blend: BlendMode,
    ) {
        self.push(Prim::Polyline { points, width, color, closed }, blend);
    }

    pub fn polygon(&mut self, points: Vec<Vec2>, color: Vec4, blend: BlendMode) {
        self.push(Prim::Polygon { points, color }, blend);
    }

    pub fn strip(&mut self, verts: Vec<StripVertex>, blend: BlendMode) {
        self.push(Prim::Strip { verts }, blend);
    }

    pub fn gradient(&mut self, stops: Vec<(f32, Vec4)>) {
        self.push(Prim::VGradient { stops }, BlendMode::Alpha);
    }

    pub fn image(
        &mut self,
        texture: TextureInfo,
        center: Vec2,
        size: Vec2,
        tint: Vec4,
        blend: BlendMode,
    ) {
        self.push(Prim::Image { texture, center, size, tint }, blend);
    }
}
