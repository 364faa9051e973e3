//! Time-gated obstacle factory
//!
//! Spawn cadence is wall-clock based, so frame-rate jitter can never pack
//! two obstacles closer together than the configured interval. Nothing
//! spawns until the player's first input plus a grace delay.

use crate::config::GameConfig;

#[derive(Debug, Clone)]
pub struct Spawner {
    interval: f64,
    start_delay: f64,
    last_spawn: f64,
}

impl Spawner {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            interval: cfg.spawn_interval,
            start_delay: cfg.spawn_delay,
            last_spawn: 0.0,
        }
    }

    /// Re-arm at match start: the first obstacle appears one full interval
    /// after the first input.
    pub fn arm(&mut self, now: f64) {
        self.last_spawn = now;
    }

    /// True iff a new obstacle is due this tick. Callers gate on the match
    /// being active; this gates on timing.
    pub fn should_spawn(&mut self, now: f64, started_at: Option<f64>) -> bool {
        let Some(start) = started_at else {
            return false;
        };
        if now - start <= self.start_delay {
            return false;
        }
        if now - self.last_spawn <= self.interval {
            return false;
        }
        self.last_spawn = now;
        true
    }
}
