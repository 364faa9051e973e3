//! Paired top/bottom barrier with a gap
//!
//! Spawns just past the right field edge, marches left at constant speed,
//! and is tested against the actor as two axis-aligned boxes (top and
//! bottom segments) so a fast-falling body cannot slip between tests.

use rand::Rng;
use rand_pcg::Pcg32;

use super::geom::Aabb;
use crate::config::{GameConfig, ScoreEdge};

/// One obstacle column. Gap geometry and speed are fixed at construction;
/// only `x` and the passed flag ever change.
#[derive(Debug, Clone)]
pub struct Obstacle {
    /// Left edge; decreases monotonically while the match is active
    pub x: f32,
    /// Top of the open gap
    pub gap_top: f32,
    pub gap_height: f32,
    pub width: f32,
    speed: f32,
    floor_y: f32,
    passed: bool,
}

impl Obstacle {
    /// Construct with a gap placed uniformly at random within the margins.
    ///
    /// Cannot fail: `GameConfig::validate` guarantees the draw range is
    /// non-empty before any match exists.
    pub fn new(cfg: &GameConfig, rng: &mut Pcg32) -> Self {
        let lo = cfg.gap_margin;
        let hi = cfg.floor_y() - cfg.gap_margin - cfg.gap_height;
        Self {
            x: cfg.field_width,
            gap_top: rng.random_range(lo..=hi),
            gap_height: cfg.gap_height,
            width: cfg.obstacle_width,
            speed: cfg.obstacle_speed,
            floor_y: cfg.floor_y(),
            passed: false,
        }
    }

    /// Advance leftward. Only called while the match is active.
    pub fn update(&mut self, dt: f32) {
        self.x -= self.speed * dt;
    }

    /// The solid box above the gap.
    pub fn top_segment(&self) -> Aabb {
        Aabb::from_rect(self.x, 0.0, self.width, self.gap_top)
    }

    /// The solid box below the gap, down to the floor line.
    pub fn bottom_segment(&self) -> Aabb {
        let top = self.gap_top + self.gap_height;
        Aabb::from_rect(self.x, top, self.width, self.floor_y - top)
    }

    /// Hit iff the body overlaps the column horizontally while any part of
    /// it sits outside the open gap.
    pub fn check_collision(&self, body: &Aabb) -> bool {
        body.overlaps(&self.top_segment()) || body.overlaps(&self.bottom_segment())
    }

    /// Fully past the left field edge; safe to reclaim.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.width < 0.0
    }

    /// The x coordinate that must cross the actor's x to score.
    pub fn reference_edge(&self, edge: ScoreEdge) -> f32 {
        match edge {
            ScoreEdge::Leading => self.x,
            ScoreEdge::Trailing => self.x + self.width,
        }
    }

    /// One-shot: set the first tick the reference edge crosses the actor.
    pub fn mark_passed(&mut self) {
        self.passed = true;
    }

    pub fn has_passed(&self) -> bool {
        self.passed
    }
}
