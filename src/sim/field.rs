//! Scrolling field layers
//!
//! Two independently-looping horizontal layers: a distant backdrop and the
//! foreground floor strip. Raw offsets decrease without bound while the
//! match is active; the draw-facing accessors wrap them into
//! `[0, field_width)` and hand back the two copy positions that keep the
//! loop seamless.

use crate::config::GameConfig;
use crate::wrap_offset;

#[derive(Debug, Clone)]
pub struct ScrollField {
    pub backdrop_x: f32,
    pub floor_x: f32,
    backdrop_speed: f32,
    floor_speed: f32,
    layer_width: f32,
}

impl ScrollField {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            backdrop_x: 0.0,
            floor_x: 0.0,
            backdrop_speed: cfg.backdrop_speed,
            floor_speed: cfg.floor_speed,
            layer_width: cfg.field_width,
        }
    }

    /// Advance both layers while the match is active; frozen otherwise.
    pub fn update(&mut self, dt: f32, active: bool) {
        if active {
            self.backdrop_x -= self.backdrop_speed * dt;
            self.floor_x -= self.floor_speed * dt;
        }
    }

    pub fn backdrop_offset(&self) -> f32 {
        wrap_offset(self.backdrop_x, self.layer_width)
    }

    pub fn floor_offset(&self) -> f32 {
        wrap_offset(self.floor_x, self.layer_width)
    }

    /// The two x positions a layer is drawn at: one copy at the wrapped
    /// offset, the next already flush against its left edge.
    pub fn copy_positions(&self, offset: f32) -> [f32; 2] {
        [offset, offset - self.layer_width + 1.0]
    }

    pub fn reset(&mut self) {
        self.backdrop_x = 0.0;
        self.floor_x = 0.0;
    }
}
