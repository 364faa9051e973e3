//! The controllable body
//!
//! Gravity integration, discrete jump impulses, tilt, and the flap
//! animation. Tuning is copied in at construction so an actor is
//! self-contained for its whole lifetime.

use super::geom::Aabb;
use crate::config::GameConfig;
use crate::consts::FLAP_FRAMES;

/// Actor sub-state within a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorState {
    /// Waiting for the first input; integration is a no-op
    Idle,
    /// Under gravity, accepting jumps
    Active,
    /// Fatal collision registered; falls to the floor and stays there
    Dead,
}

/// The player-controlled body. `x` is the fixed left edge, `y` the mutable
/// top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity (px/s, positive is downward)
    pub vel: f32,
    pub width: f32,
    pub height: f32,
    pub state: ActorState,
    /// Current tilt angle (radians, negative is nose-up)
    pub tilt: f32,
    /// Current flap animation frame
    pub frame: usize,
    frame_clock: f32,
    fall_time: f32,
    gravity: f32,
    jump_impulse: f32,
    jump_tilt: f32,
    max_dive_tilt: f32,
    tilt_rate: f32,
    frame_time: f32,
    floor_y: f32,
}

impl Actor {
    /// A fresh actor: vertically centered in the play area, idle, nose-up.
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.actor_x(),
            y: cfg.floor_y() / 2.0,
            vel: 0.0,
            width: cfg.actor_width,
            height: cfg.actor_height,
            state: ActorState::Idle,
            tilt: cfg.jump_tilt,
            frame: 0,
            frame_clock: 0.0,
            fall_time: 0.0,
            gravity: cfg.gravity,
            jump_impulse: cfg.jump_impulse,
            jump_tilt: cfg.jump_tilt,
            max_dive_tilt: cfg.max_dive_tilt,
            tilt_rate: cfg.tilt_rate,
            frame_time: cfg.frame_time,
            floor_y: cfg.floor_y(),
        }
    }

    /// Apply the jump impulse. Exits Idle on the first call; ignored once Dead.
    pub fn jump(&mut self) {
        if self.state == ActorState::Dead {
            return;
        }
        self.state = ActorState::Active;
        self.vel = self.jump_impulse;
        self.tilt = self.jump_tilt;
        self.fall_time = 0.0;
    }

    /// Integrate one tick. No-op while Idle.
    pub fn update(&mut self, dt: f32) {
        if self.state == ActorState::Idle {
            return;
        }

        self.vel += self.gravity * dt;
        self.y += self.vel * dt;

        // A dead body keeps falling until it rests on the floor line
        if self.state == ActorState::Dead && self.y + self.height >= self.floor_y {
            self.y = self.floor_y - self.height;
            self.vel = 0.0;
        }

        if self.vel < 0.0 {
            // Rising: hold the nose-up pose
            self.fall_time = 0.0;
            self.tilt = self.jump_tilt;
        } else {
            self.fall_time += dt;
            self.tilt = (self.jump_tilt + self.fall_time * self.tilt_rate).min(self.max_dive_tilt);
        }

        // Flap animation freezes once dead and resting
        if !(self.state == ActorState::Dead && self.on_floor()) {
            self.frame_clock += dt;
            while self.frame_clock >= self.frame_time {
                self.frame_clock -= self.frame_time;
                self.frame = (self.frame + 1) % FLAP_FRAMES;
            }
        }
    }

    /// True if the box touches the field top or the floor line.
    pub fn check_boundary_collision(&self) -> bool {
        self.y <= 0.0 || self.y + self.height >= self.floor_y
    }

    /// Idempotent transition to Dead. Integration continues; callers stop
    /// routing jump input.
    pub fn set_dead(&mut self) {
        self.state = ActorState::Dead;
    }

    /// Back to the initial centered, idle pose.
    pub fn reset(&mut self) {
        self.y = self.floor_y / 2.0;
        self.vel = 0.0;
        self.state = ActorState::Idle;
        self.tilt = self.jump_tilt;
        self.frame = 0;
        self.frame_clock = 0.0;
        self.fall_time = 0.0;
    }

    #[inline]
    pub fn on_floor(&self) -> bool {
        self.y + self.height >= self.floor_y
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_rect(self.x, self.y, self.width, self.height)
    }
}
