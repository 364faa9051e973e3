//! Pointer velocity over a trailing window
//!
//! Throw velocity comes from the displacement across the whole window
//! divided by its time span - an average, deliberately not the last sample
//! pair, which is far too noisy to throw with.

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::POINTER_WINDOW;

#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    samples: VecDeque<(Vec2, f64)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample and evict everything older than the window.
    pub fn push(&mut self, pos: Vec2, now: f64) {
        self.samples.push_back((pos, now));
        let horizon = now - POINTER_WINDOW;
        while self.samples.front().is_some_and(|&(_, t)| t < horizon) {
            self.samples.pop_front();
        }
    }

    /// Latest raw pointer position.
    pub fn position(&self) -> Option<Vec2> {
        self.samples.back().map(|&(p, _)| p)
    }

    /// Average velocity across the window; zero without a usable span.
    pub fn window_velocity(&self) -> Vec2 {
        let (Some(&(first, t0)), Some(&(last, t1))) =
            (self.samples.front(), self.samples.back())
        else {
            return Vec2::ZERO;
        };
        let span = (t1 - t0) as f32;
        if span <= 1e-4 {
            return Vec2::ZERO;
        }
        (last - first) / span
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
