//! Skygap entry point
//!
//! Headless demo: the autopilot plays the runner for a stretch of
//! simulated time, then the particle toy gets a shake. Doubles as a smoke
//! run and as an example of driving the core from a host loop.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use skygap::GameApp;
use skygap::audio::NullSounds;
use skygap::config::{GameConfig, ParticleConfig};
use skygap::persistence::MemoryScores;
use skygap::physics::ParticleEngine;
use skygap::sim::TickInput;

fn main() {
    env_logger::init();
    log::info!("skygap demo starting");
    run_autopilot_demo();
    run_particle_demo();
}

/// 60 simulated seconds of the runner at 120 Hz, autopilot at the stick.
fn run_autopilot_demo() {
    let mut app = GameApp::new(GameConfig::default(), 0xF1AB, NullSounds, MemoryScores::default())
        .expect("default config is valid");

    let input = TickInput {
        flap: false,
        autopilot: true,
    };
    let dt = 1.0 / 120.0;
    let mut now = 0.0;
    for _ in 0..(60 * 120) {
        now += dt;
        app.frame(now, &input);
    }
    log::info!(
        "autopilot run: score {}, best {}, {} live obstacles",
        app.game.score,
        app.game.high_score,
        app.game.obstacles.len()
    );
    app.shutdown();
}

/// Eight bodies, ten seconds, default friction: most should settle.
fn run_particle_demo() {
    let mut engine = ParticleEngine::new(Vec2::new(1280.0, 720.0), ParticleConfig::default());
    let mut rng = Pcg32::seed_from_u64(42);
    for _ in 0..8 {
        let pos = Vec2::new(
            rng.random_range(64.0..1216.0),
            rng.random_range(64.0..656.0),
        );
        let vel = Vec2::new(
            rng.random_range(-240.0..240.0),
            rng.random_range(-240.0..240.0),
        );
        engine.spawn(pos, vel, 32.0);
    }
    for _ in 0..(10 * 120) {
        engine.step(1.0 / 120.0);
    }
    let moving = engine
        .particles()
        .iter()
        .filter(|p| p.vel.length() > 1.0)
        .count();
    log::info!(
        "particle toy: {} bodies, {} still moving after 10s",
        engine.particles().len(),
        moving
    );
}
