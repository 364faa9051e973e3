//! Per-tick evaluation
//!
//! One call advances a match by one clamped delta. Within a tick everything
//! runs to completion in a fixed order: input, spawn, obstacle advance and
//! pass-scoring, reclaim, actor integration, field scroll, death check.
//! Scoring runs before the death check on purpose - an obstacle passed in
//! the same tick as a fatal collision still counts.

use super::obstacle::Obstacle;
use super::state::{Match, MatchEvent, MatchPhase};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// The one discrete command: flap (keyboard key or pointer tap)
    pub flap: bool,
    /// Demo mode: derive the flap from the sim state instead
    pub autopilot: bool,
}

/// Advance the match by one tick. `now` is the host timestamp in seconds,
/// `dt` the already-clamped delta since the previous tick.
pub fn tick(m: &mut Match, input: &TickInput, now: f64, dt: f32) -> Vec<MatchEvent> {
    let mut events = Vec::new();

    let mut flap = input.flap;
    if input.autopilot {
        flap |= autopilot_wants_flap(m, now);
    }

    if flap {
        handle_flap(m, now, &mut events);
    }

    let active = m.phase == MatchPhase::Active;

    if active {
        if m.spawner.should_spawn(now, m.started_at) {
            let obstacle = Obstacle::new(&m.config, &mut m.rng);
            m.obstacles.push(obstacle);
        }

        let actor_x = m.actor.x;
        let edge = m.config.score_edge;
        for obstacle in &mut m.obstacles {
            obstacle.update(dt);
            if !obstacle.has_passed() && obstacle.reference_edge(edge) < actor_x {
                obstacle.mark_passed();
                m.score += 1;
                events.push(MatchEvent::Scored { total: m.score });
            }
        }
        m.obstacles.retain(|o| !o.is_off_screen());
    }

    m.actor.update(dt);
    m.field.update(dt, active);

    // Death check last: this tick's scoring stands even if the same tick kills
    if active {
        let body = m.actor.bounding_box();
        let hit = m.actor.check_boundary_collision()
            || m.obstacles.iter().any(|o| o.check_collision(&body));
        if hit {
            m.phase = MatchPhase::Dead;
            m.actor.set_dead();
            m.death_time = Some(now);
            if m.score > m.high_score {
                m.high_score = m.score;
                events.push(MatchEvent::NewHighScore { score: m.score });
            }
            events.push(MatchEvent::Died { score: m.score });
            log::debug!("match over at t={:.3}s, score {}", now, m.score);
        }
    }

    events
}

fn handle_flap(m: &mut Match, now: f64, events: &mut Vec<MatchEvent>) {
    match m.phase {
        MatchPhase::Idle => {
            m.phase = MatchPhase::Active;
            m.started_at = Some(now);
            m.spawner.arm(now);
            m.actor.jump();
            events.push(MatchEvent::Started);
            events.push(MatchEvent::Flapped);
        }
        MatchPhase::Active => {
            m.actor.jump();
            events.push(MatchEvent::Flapped);
        }
        MatchPhase::Dead => {
            // The input that caused death must not instantly restart the run
            let cooled = m
                .death_time
                .is_some_and(|t| now - t >= m.config.restart_cooldown);
            if cooled {
                m.reset_run();
                m.phase = MatchPhase::Active;
                m.started_at = Some(now);
                m.spawner.arm(now);
                m.actor.jump();
                events.push(MatchEvent::Restarted);
                events.push(MatchEvent::Flapped);
            }
        }
    }
}

/// Demo AI: start the run, flap whenever the body sinks below the next
/// gap's aim line while falling, and restart once the cooldown allows.
fn autopilot_wants_flap(m: &Match, now: f64) -> bool {
    match m.phase {
        MatchPhase::Idle => true,
        MatchPhase::Dead => m
            .death_time
            .is_some_and(|t| now - t >= m.config.restart_cooldown),
        MatchPhase::Active => {
            let aim = m
                .obstacles
                .iter()
                .filter(|o| o.x + o.width >= m.actor.x)
                .min_by(|a, b| a.x.total_cmp(&b.x))
                .map(|o| o.gap_top + o.gap_height * 0.6)
                .unwrap_or(m.config.floor_y() / 2.0);
            m.actor.vel > 0.0 && m.actor.y + m.actor.height > aim
        }
    }
}
