//! Game and particle tuning
//!
//! Every knob the simulations expose lives here as a plain number, serde
//! round-trippable for data-driven tuning. Inconsistent configurations
//! (e.g. a gap taller than the space it must fit in) are programming
//! errors and are rejected at construction time, never clamped.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which obstacle edge must cross the actor's x position to score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoreEdge {
    /// Leading (left) edge of the obstacle column
    #[default]
    Leading,
    /// Trailing edge (left edge + width)
    Trailing,
}

/// Configuration rejected at construction.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("field dimensions must be positive (got {width}x{height})")]
    BadFieldSize { width: f32, height: f32 },
    #[error("floor height {floor} must leave a positive play area in a {height} tall field")]
    BadFloorHeight { floor: f32, height: f32 },
    #[error("no legal gap range: margin {margin} * 2 + gap {gap} exceeds play height {play}")]
    NoLegalGapRange { margin: f32, gap: f32, play: f32 },
    #[error("actor box {width}x{height} must be positive and fit through the gap {gap}")]
    BadActorBox { width: f32, height: f32, gap: f32 },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
}

/// All tuning for the auto-runner. Units are pixels, seconds, radians.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Field dimensions
    pub field_width: f32,
    pub field_height: f32,
    /// Height of the floor strip; the floor line sits at `field_height - floor_height`
    pub floor_height: f32,

    /// Actor bounding box
    pub actor_width: f32,
    pub actor_height: f32,
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Velocity set on a flap (px/s, negative = upward)
    pub jump_impulse: f32,
    /// Tilt snapped to on a fresh jump (radians, negative = nose up)
    pub jump_tilt: f32,
    /// Tilt clamp while diving (radians)
    pub max_dive_tilt: f32,
    /// Tilt ramp while falling (radians/s)
    pub tilt_rate: f32,
    /// Seconds per flap animation frame
    pub frame_time: f32,

    /// Obstacle column width
    pub obstacle_width: f32,
    /// Vertical opening the actor must pass through
    pub gap_height: f32,
    /// Minimum distance between a gap edge and the field top / floor line
    pub gap_margin: f32,
    /// Leftward obstacle speed (px/s)
    pub obstacle_speed: f32,
    /// Seconds between spawns once spawning has started
    pub spawn_interval: f64,
    /// Grace period between the first input and the first possible spawn
    pub spawn_delay: f64,
    /// Which obstacle edge scores when it crosses the actor's x
    pub score_edge: ScoreEdge,

    /// Backdrop layer scroll speed (px/s)
    pub backdrop_speed: f32,
    /// Floor layer scroll speed (px/s); matches obstacle speed by default
    pub floor_speed: f32,

    /// Seconds after death before a flap is accepted as a restart
    pub restart_cooldown: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 432.0,
            field_height: 768.0,
            floor_height: 168.0,

            actor_width: 34.0,
            actor_height: 24.0,
            gravity: 1800.0,
            jump_impulse: -540.0,
            jump_tilt: -0.44,
            max_dive_tilt: std::f32::consts::FRAC_PI_2,
            tilt_rate: 3.5,
            frame_time: 0.09,

            obstacle_width: 80.0,
            gap_height: 200.0,
            gap_margin: 100.0,
            obstacle_speed: 150.0,
            spawn_interval: 2.5,
            spawn_delay: 1.0,
            score_edge: ScoreEdge::Leading,

            backdrop_speed: 30.0,
            floor_speed: 150.0,

            restart_cooldown: 0.5,
        }
    }
}

impl GameConfig {
    /// Y coordinate of the floor line (bottom of the playable area).
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.field_height - self.floor_height
    }

    /// Fixed actor x position (left edge), a quarter of the way in.
    #[inline]
    pub fn actor_x(&self) -> f32 {
        self.field_width / 4.0
    }

    /// Check internal consistency. Called by `Match::new`; an error here is
    /// a defect in the configuration, not a runtime condition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0.0 || self.field_height <= 0.0 {
            return Err(ConfigError::BadFieldSize {
                width: self.field_width,
                height: self.field_height,
            });
        }
        if self.floor_height < 0.0 || self.floor_height >= self.field_height {
            return Err(ConfigError::BadFloorHeight {
                floor: self.floor_height,
                height: self.field_height,
            });
        }
        let play = self.floor_y();
        if self.gap_margin * 2.0 + self.gap_height > play {
            return Err(ConfigError::NoLegalGapRange {
                margin: self.gap_margin,
                gap: self.gap_height,
                play,
            });
        }
        if self.actor_width <= 0.0
            || self.actor_height <= 0.0
            || self.actor_height >= self.gap_height
        {
            return Err(ConfigError::BadActorBox {
                width: self.actor_width,
                height: self.actor_height,
                gap: self.gap_height,
            });
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("obstacle_speed", self.obstacle_speed),
            ("frame_time", self.frame_time),
            ("spawn_interval", self.spawn_interval as f32),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        for (name, value) in [
            ("gap_margin", self.gap_margin),
            ("backdrop_speed", self.backdrop_speed),
            ("floor_speed", self.floor_speed),
            ("spawn_delay", self.spawn_delay as f32),
            ("restart_cooldown", self.restart_cooldown as f32),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        Ok(())
    }
}

/// Tuning for the bouncing-icon particle engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleConfig {
    /// Downward acceleration (px/s²); the toy defaults to none
    pub gravity: f32,
    /// Fraction of perpendicular velocity kept on a wall bounce
    pub restitution: f32,
    /// Per-60Hz-frame velocity retention; applied as `friction^(dt/NOMINAL_DT)`
    pub friction: f32,
    /// Scale applied to the pointer window velocity on release
    pub throw_scale: f32,
    /// How quickly a grabbed body converges on the pointer (1/s)
    pub grab_stiffness: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            gravity: 0.0,
            restitution: 0.85,
            friction: 0.995,
            throw_scale: 1.0,
            grab_stiffness: 30.0,
        }
    }
}
