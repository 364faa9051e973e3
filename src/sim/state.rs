//! Match state
//!
//! One playthrough instance: the actor, the live obstacle set, score and
//! timers, and the phase tag. All timers are named fields and only the
//! tick's transition code mutates them - no call site keeps its own copy
//! of score or phase.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::field::ScrollField;
use super::obstacle::Obstacle;
use super::spawner::Spawner;
use crate::config::{ConfigError, GameConfig};

/// Lifecycle phase of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Waiting for the first input
    Idle,
    /// Simulation advancing, collisions armed
    Active,
    /// Terminal for this run; restart gated by the cooldown
    Dead,
}

/// What happened during a tick. The shell maps these onto sound cues and
/// persistence writes; the simulation itself touches neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    /// First input accepted; the run is live
    Started,
    /// Jump impulse applied
    Flapped,
    /// An obstacle's reference edge crossed the actor
    Scored { total: u32 },
    /// Fatal collision this tick
    Died { score: u32 },
    /// This run beat the stored best
    NewHighScore { score: u32 },
    /// A post-cooldown input rebuilt the run
    Restarted,
}

/// Aggregate for one playthrough.
#[derive(Debug, Clone)]
pub struct Match {
    pub config: GameConfig,
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub actor: Actor,
    /// Insertion order is spawn order; never reordered
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    pub field: ScrollField,
    /// Monotonic within a run; +1 per obstacle, exactly once each
    pub score: u32,
    /// Best across runs; persisted by the shell on NewHighScore
    pub high_score: u32,
    pub phase: MatchPhase,
    /// Timestamp of the first input of this run
    pub started_at: Option<f64>,
    /// Timestamp of the fatal collision
    pub death_time: Option<f64>,
}

impl Match {
    /// Validates the configuration up front; an inconsistent config is a
    /// construction error, not something to clamp at runtime.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            actor: Actor::new(&config),
            obstacles: Vec::new(),
            spawner: Spawner::new(&config),
            field: ScrollField::new(&config),
            score: 0,
            high_score: 0,
            phase: MatchPhase::Idle,
            started_at: None,
            death_time: None,
            config,
        })
    }

    /// Tear the old run down and stand a fresh one up: new actor, empty
    /// obstacle set, zero score, layers and timers re-armed. The stored
    /// best survives; the RNG keeps its stream.
    pub(crate) fn reset_run(&mut self) {
        self.actor = Actor::new(&self.config);
        self.obstacles.clear();
        self.field.reset();
        self.score = 0;
        self.phase = MatchPhase::Idle;
        self.started_at = None;
        self.death_time = None;
    }
}
