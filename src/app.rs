//! Loop glue
//!
//! Owns one match, its clock, and the injected services. The host calls
//! `frame` once per animation tick with its own timestamp; after
//! `shutdown` every further call is a guaranteed no-op, however late the
//! host delivers it - the liveness flag decides, not callback-cancel
//! timing.

use crate::audio::{SoundEvent, SoundPlayer};
use crate::clock::DeltaClock;
use crate::config::{ConfigError, GameConfig};
use crate::persistence::ScoreStore;
use crate::sim::{Match, MatchEvent, MatchPhase, TickInput, tick};

pub struct GameApp<S: SoundPlayer, P: ScoreStore> {
    pub game: Match,
    clock: DeltaClock,
    sounds: S,
    scores: P,
    alive: bool,
}

impl<S: SoundPlayer, P: ScoreStore> GameApp<S, P> {
    /// Build a match and prime it with the stored best score.
    pub fn new(config: GameConfig, seed: u64, sounds: S, scores: P) -> Result<Self, ConfigError> {
        let mut game = Match::new(config, seed)?;
        game.high_score = scores.read_high_score();
        log::info!("match ready (seed {}, best {})", seed, game.high_score);
        Ok(Self {
            game,
            clock: DeltaClock::default(),
            sounds,
            scores,
            alive: true,
        })
    }

    /// Advance one animation tick; returns the phase afterwards.
    pub fn frame(&mut self, now: f64, input: &TickInput) -> MatchPhase {
        if !self.alive {
            return self.game.phase;
        }
        let dt = self.clock.delta(now);
        let events = tick(&mut self.game, input, now, dt);
        for event in &events {
            match event {
                MatchEvent::Flapped => self.sounds.play(SoundEvent::Flap),
                MatchEvent::Scored { .. } => self.sounds.play(SoundEvent::Score),
                MatchEvent::Died { .. } => self.sounds.play(SoundEvent::Hit),
                MatchEvent::NewHighScore { score } => self.scores.write_high_score(*score),
                MatchEvent::Started | MatchEvent::Restarted => {}
            }
        }
        self.game.phase
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Detach from the host loop. Idempotent.
    pub fn shutdown(&mut self) {
        if self.alive {
            log::info!("loop shut down at score {}", self.game.score);
        }
        self.alive = false;
    }
}
