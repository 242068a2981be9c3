//! Movement-driven volume control for the ambient track.
//!
//! The controller never starts, stops or seeks playback; it only eases the
//! live volume of an already-playing sink toward a target derived from how
//! much the body center has been moving lately.

use std::collections::VecDeque;

use glam::Vec2;

use crate::error::{EngineError, Result};

/// The slice of the playback primitive the controller is allowed to touch.
/// Looping and the fixed resume offset live behind this boundary.
pub trait AudioSink {
    fn is_playing(&self) -> bool;
    fn volume(&self) -> f32;
    fn set_volume(&mut self, volume: f32);
}

#[derive(Debug, Clone)]
pub struct AudioParams {
    /// Target level while movement is detected.
    pub max_volume: f32,
    /// Mean windowed displacement (px) above which movement counts.
    pub movement_threshold: f32,
    /// Quiet time before the target drops to zero.
    pub silence_delay_ms: f64,
    /// Linear volume change per update; never overshoots the target.
    pub fade_step: f32,
    /// Displacement samples kept in the rolling window.
    pub window: usize,
}

impl Default for AudioParams {
    fn default() -> Self {
        Self {
            max_volume: 0.7,
            movement_threshold: 15.0,
            silence_delay_ms: 500.0,
            fade_step: 0.03,
            window: 10,
        }
    }
}

impl AudioParams {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_volume) {
            return Err(EngineError::config("max_volume must be within [0, 1]"));
        }
        if self.fade_step <= 0.0 {
            return Err(EngineError::config("fade_step must be positive"));
        }
        if self.window == 0 {
            return Err(EngineError::config("window must hold at least one sample"));
        }
        Ok(())
    }
}

pub struct AudioLevelController {
    params: AudioParams,
    last_pos: Option<Vec2>,
    window: VecDeque<f32>,
    last_movement_ms: f64,
    current: f32,
    target: f32,
    started: bool,
}

impl AudioLevelController {
    pub fn new(params: AudioParams) -> Result<Self> {
        params.validate()?;
        let window_cap = params.window;
        Ok(Self {
            params,
            last_pos: None,
            window: VecDeque::with_capacity(window_cap),
            last_movement_ms: 0.0,
            current: 0.0,
            target: 0.0,
            started: false,
        })
    }

    pub fn current_volume(&self) -> f32 {
        self.current
    }

    pub fn target_volume(&self) -> f32 {
        self.target
    }

    /// Feed one body-center sample (pixels) and ease the sink volume.
    /// A paused sink is left completely alone.
    pub fn update(&mut self, body_center: Vec2, now_ms: f64, sink: &mut dyn AudioSink) {
        if !sink.is_playing() {
            return;
        }

        if !self.started && sink.volume() > 0.0 {
            // adopt whatever level playback began at, then aim for max
            self.current = sink.volume();
            self.target = self.params.max_volume;
            self.last_movement_ms = now_ms;
            self.started = true;
        }

        let dist = self
            .last_pos
            .map_or(0.0, |prev| body_center.distance(prev));
        self.last_pos = Some(body_center);

        self.window.push_back(dist);
        if self.window.len() > self.params.window {
            self.window.pop_front();
        }
        let mean = self.window.iter().sum::<f32>() / self.window.len() as f32;

        if mean > self.params.movement_threshold {
            self.last_movement_ms = now_ms;
            self.target = self.params.max_volume;
        } else if now_ms - self.last_movement_ms > self.params.silence_delay_ms {
            self.target = 0.0;
        }

        // constant step, clamped at the target: linear fade, no ringing
        let step = self.params.fade_step;
        if self.current < self.target {
            self.current = (self.current + step).min(self.target);
        } else if self.current > self.target {
            self.current = (self.current - step).max(self.target);
        }

        sink.set_volume(self.current);
    }
}
