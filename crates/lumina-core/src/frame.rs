//! Per-frame context and the capability interface every effect implements.

use crate::events::PoseFrame;
use crate::surface::{DrawList, Viewport};

/// Everything a component may read during one tick. Constructed by the
/// compositor each frame and threaded through rather than held in globals.
#[derive(Debug, Clone, Copy)]
pub struct FrameCx<'a> {
    /// Monotonic frame counter since the stage was created.
    pub frame: u64,
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Session wall clock, milliseconds.
    pub now_ms: f64,
    /// Live pixel dimensions of the render surface.
    pub viewport: Viewport,
    /// Most recent pose, if any has ever arrived. Stale poses are kept so
    /// effects keep animating through transport dropouts.
    pub pose: Option<&'a PoseFrame>,
}

/// Minimal capability interface for a composited visual layer.
///
/// `advance` integrates one frame of state; `render` appends primitives and
/// must not mutate. The compositor invokes both in a fixed layer order.
pub trait Effect {
    fn advance(&mut self, cx: &FrameCx);
    fn render(&self, cx: &FrameCx, out: &mut DrawList);
}
