//! Particle engine for the bouncing-icon toy
//!
//! N circular bodies under optional gravity, wall reflection with
//! restitution, pairwise elastic exchange with de-penetration, friction
//! decay, and pointer grab/throw. None of these operations can fail; an
//! over-sized body degrades to persistent boundary contact, not a crash.

use glam::Vec2;

use super::particle::{Particle, ParticleId};
use super::pointer::PointerTracker;
use crate::config::ParticleConfig;
use crate::consts::NOMINAL_DT;

#[derive(Debug)]
pub struct ParticleEngine {
    pub config: ParticleConfig,
    /// Play bounds; bodies live in `[0, bounds.x] x [0, bounds.y]`
    pub bounds: Vec2,
    particles: Vec<Particle>,
    grabbed: Option<ParticleId>,
    pointer: PointerTracker,
    next_id: ParticleId,
}

impl ParticleEngine {
    pub fn new(bounds: Vec2, config: ParticleConfig) -> Self {
        Self {
            config,
            bounds,
            particles: Vec::new(),
            grabbed: None,
            pointer: PointerTracker::new(),
            next_id: 1,
        }
    }

    pub fn spawn(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> ParticleId {
        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle::new(id, pos, vel, radius));
        id
    }

    pub fn despawn(&mut self, id: ParticleId) {
        if self.grabbed == Some(id) {
            self.grabbed = None;
        }
        self.particles.retain(|p| p.id != id);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }

    pub fn grabbed(&self) -> Option<ParticleId> {
        self.grabbed
    }

    /// Advance the toy by one clamped delta.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        let friction = self.config.friction.powf(dt / NOMINAL_DT);
        let grabbed = self.grabbed;

        for p in &mut self.particles {
            if Some(p.id) == grabbed {
                continue;
            }
            p.vel.y += self.config.gravity * dt;
            p.pos += p.vel * dt;
            p.vel *= friction;
        }

        // The held body tracks the smoothed pointer and carries no velocity
        // of its own until release
        if let Some(id) = grabbed {
            if let Some(target) = self.pointer.position() {
                if let Some(p) = self.particles.iter_mut().find(|p| p.id == id) {
                    let blend = 1.0 - (-self.config.grab_stiffness * dt).exp();
                    p.pos = p.pos.lerp(target, blend);
                    p.vel = Vec2::ZERO;
                }
            }
        }

        self.resolve_pairs();

        // Safety despawn before wall clamping: a body already outside the
        // bounds by more than its own diameter is gone, not rescued
        let bounds = self.bounds;
        self.particles.retain(|p| {
            if Some(p.id) == grabbed {
                return true;
            }
            let d = 2.0 * p.radius;
            let keep =
                p.pos.x > -d && p.pos.y > -d && p.pos.x < bounds.x + d && p.pos.y < bounds.y + d;
            if !keep {
                log::debug!("particle {} escaped the bounds, despawning", p.id);
            }
            keep
        });

        self.resolve_walls();
    }

    /// Begin a grab if the pointer is over a body; the topmost (most
    /// recently spawned) wins. Returns the grabbed id, if any.
    pub fn pointer_down(&mut self, pos: Vec2, now: f64) -> Option<ParticleId> {
        self.pointer.clear();
        self.pointer.push(pos, now);
        self.grabbed = self.particles.iter().rev().find(|p| p.contains(pos)).map(|p| p.id);
        self.grabbed
    }

    pub fn pointer_move(&mut self, pos: Vec2, now: f64) {
        self.pointer.push(pos, now);
    }

    /// Release: the held body is thrown with the window-average pointer
    /// velocity, scaled by the throw constant.
    pub fn pointer_up(&mut self) {
        if let Some(id) = self.grabbed.take() {
            let vel = self.pointer.window_velocity() * self.config.throw_scale;
            if let Some(p) = self.particles.iter_mut().find(|p| p.id == id) {
                p.vel = vel;
            }
        }
        self.pointer.clear();
    }

    /// One check per unordered pair: swap velocities and push both bodies
    /// apart by half the overlap along the center axis.
    fn resolve_pairs(&mut self) {
        let grabbed = self.grabbed;
        let n = self.particles.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.particles.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if Some(a.id) == grabbed || Some(b.id) == grabbed {
                    continue;
                }
                let delta = b.pos - a.pos;
                let min_dist = a.radius + b.radius;
                let dist = delta.length();
                if dist >= min_dist {
                    continue;
                }
                std::mem::swap(&mut a.vel, &mut b.vel);
                // Coincident centers get an arbitrary but deterministic axis
                let axis = if dist > 1e-4 { delta / dist } else { Vec2::X };
                let push = (min_dist - dist) / 2.0;
                a.pos -= axis * push;
                b.pos += axis * push;
            }
        }
    }

    fn resolve_walls(&mut self) {
        let restitution = self.config.restitution;
        let grabbed = self.grabbed;
        for p in &mut self.particles {
            if Some(p.id) == grabbed {
                continue;
            }
            if p.pos.x - p.radius < 0.0 {
                p.pos.x = p.radius;
                p.vel.x = -p.vel.x * restitution;
            } else if p.pos.x + p.radius > self.bounds.x {
                p.pos.x = self.bounds.x - p.radius;
                p.vel.x = -p.vel.x * restitution;
            }
            if p.pos.y - p.radius < 0.0 {
                p.pos.y = p.radius;
                p.vel.y = -p.vel.y * restitution;
            } else if p.pos.y + p.radius > self.bounds.y {
                p.pos.y = self.bounds.y - p.radius;
                p.vel.y = -p.vel.y * restitution;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn engine() -> ParticleEngine {
        ParticleEngine::new(Vec2::new(800.0, 600.0), ParticleConfig::default())
    }

    /// No friction, no gravity, perfect bounce: for isolating one mechanism.
    fn ideal_engine() -> ParticleEngine {
        ParticleEngine::new(
            Vec2::new(800.0, 600.0),
            ParticleConfig {
                gravity: 0.0,
                restitution: 1.0,
                friction: 1.0,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_wall_reflection_loses_energy() {
        let mut e = engine();
        e.spawn(Vec2::new(10.0, 300.0), Vec2::new(-600.0, 0.0), 16.0);
        e.step(DT);
        let p = &e.particles()[0];
        assert!(p.vel.x > 0.0, "must reflect off the left wall");
        assert!(
            p.vel.x < 600.0,
            "restitution must shed speed, kept {}",
            p.vel.x
        );
        assert!(p.pos.x >= p.radius, "clamped inside the bounds");
    }

    #[test]
    fn test_pair_collision_swaps_velocities() {
        let mut e = ideal_engine();
        let a = e.spawn(Vec2::new(100.0, 100.0), Vec2::new(50.0, 0.0), 20.0);
        let b = e.spawn(Vec2::new(130.0, 100.0), Vec2::new(-50.0, 0.0), 20.0);
        e.step(DT);
        let pa = e.particle(a).unwrap();
        let pb = e.particle(b).unwrap();
        assert!(pa.vel.x < 0.0, "left body now moves left");
        assert!(pb.vel.x > 0.0, "right body now moves right");
        // Pure exchange: the velocity magnitudes survive intact
        assert!((pa.vel.x.abs() - 50.0).abs() < 1e-3);
        assert!((pb.vel.x.abs() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn test_pair_collision_separates_bodies() {
        let mut e = ideal_engine();
        let a = e.spawn(Vec2::new(100.0, 100.0), Vec2::ZERO, 20.0);
        let b = e.spawn(Vec2::new(110.0, 100.0), Vec2::ZERO, 20.0);
        e.step(DT);
        let pa = e.particle(a).unwrap();
        let pb = e.particle(b).unwrap();
        let dist = pa.pos.distance(pb.pos);
        assert!(
            dist >= 40.0 - 1e-3,
            "still interpenetrating after de-penetration: {}",
            dist
        );
    }

    #[test]
    fn test_friction_brings_a_body_to_rest() {
        let mut e = ParticleEngine::new(
            Vec2::new(800.0, 600.0),
            ParticleConfig {
                friction: 0.9,
                ..Default::default()
            },
        );
        e.spawn(Vec2::new(400.0, 300.0), Vec2::new(120.0, -90.0), 16.0);
        for _ in 0..600 {
            e.step(DT);
        }
        let p = &e.particles()[0];
        assert!(p.vel.length() < 0.01, "speed {} never decayed", p.vel.length());
    }

    #[test]
    fn test_friction_decay_is_dt_invariant() {
        let mut coarse = engine();
        let mut fine = engine();
        coarse.spawn(Vec2::new(400.0, 300.0), Vec2::new(200.0, 0.0), 16.0);
        fine.spawn(Vec2::new(400.0, 300.0), Vec2::new(200.0, 0.0), 16.0);
        for _ in 0..60 {
            coarse.step(1.0 / 60.0);
        }
        for _ in 0..240 {
            fine.step(1.0 / 240.0);
        }
        let vc = coarse.particles()[0].vel.length();
        let vf = fine.particles()[0].vel.length();
        assert!(
            (vc - vf).abs() < 1.0,
            "decay diverged across tick rates: {} vs {}",
            vc,
            vf
        );
    }

    #[test]
    fn test_grab_pins_and_excludes_from_physics() {
        let mut e = engine();
        e.config.gravity = 900.0;
        let id = e.spawn(Vec2::new(400.0, 300.0), Vec2::new(100.0, 100.0), 16.0);
        assert_eq!(e.pointer_down(Vec2::new(400.0, 300.0), 0.0), Some(id));

        e.pointer_move(Vec2::new(200.0, 150.0), 0.05);
        for i in 0..120 {
            e.step(DT);
            e.pointer_move(Vec2::new(200.0, 150.0), 0.05 + (i + 1) as f64 * DT as f64);
        }
        let p = e.particle(id).unwrap();
        // Converged on the pointer instead of falling under gravity
        assert!(p.pos.distance(Vec2::new(200.0, 150.0)) < 1.0);
        assert_eq!(p.vel, Vec2::ZERO);
    }

    #[test]
    fn test_grabbed_body_skips_pair_collisions() {
        let mut e = ideal_engine();
        let held = e.spawn(Vec2::new(100.0, 100.0), Vec2::ZERO, 20.0);
        let free = e.spawn(Vec2::new(135.0, 100.0), Vec2::new(5.0, 0.0), 20.0);
        // Pointer over the held body only (the free one is 45px away)
        e.pointer_down(Vec2::new(90.0, 100.0), 0.0);
        assert_eq!(e.grabbed(), Some(held));
        e.step(DT);
        // No swap happened: the free body keeps its velocity
        assert!((e.particle(free).unwrap().vel.x - 5.0).abs() < 1e-3);
    }

    #[test]
    fn test_throw_uses_window_velocity() {
        let mut e = engine();
        let id = e.spawn(Vec2::new(100.0, 100.0), Vec2::ZERO, 30.0);
        e.pointer_down(Vec2::new(100.0, 100.0), 0.0);
        // Steady 1000 px/s drag to the right for 100ms
        for i in 1..=5 {
            let t = i as f64 * 0.02;
            e.pointer_move(Vec2::new(100.0 + (t * 1000.0) as f32, 100.0), t);
            e.step(0.02);
        }
        e.pointer_up();
        let p = e.particle(id).unwrap();
        assert!(e.grabbed().is_none());
        assert!(
            (p.vel.x - 1000.0).abs() < 50.0,
            "thrown at {} px/s, wanted ~1000",
            p.vel.x
        );
        assert!(p.vel.y.abs() < 1.0);
    }

    #[test]
    fn test_safety_despawn_outside_bounds() {
        let mut e = engine();
        let gone = e.spawn(Vec2::new(-100.0, 300.0), Vec2::ZERO, 16.0);
        let kept = e.spawn(Vec2::new(400.0, 300.0), Vec2::ZERO, 16.0);
        // Walls clamp escapees back in, so plant this one far out with no
        // velocity: only the retain pass can touch it
        e.step(DT);
        assert!(e.particle(gone).is_none());
        assert!(e.particle(kept).is_some());
    }

    #[test]
    fn test_oversized_body_degrades_to_boundary_contact() {
        let mut e = engine();
        // Radius wider than the field: impossible to fit, must not crash
        let id = e.spawn(Vec2::new(400.0, 300.0), Vec2::new(250.0, -130.0), 900.0);
        for _ in 0..300 {
            e.step(DT);
        }
        let p = e.particle(id).expect("oversized body must not be despawned");
        assert!(p.pos.x.is_finite() && p.pos.y.is_finite());
    }

    #[test]
    fn test_despawn_releases_grab() {
        let mut e = engine();
        let id = e.spawn(Vec2::new(100.0, 100.0), Vec2::ZERO, 16.0);
        e.pointer_down(Vec2::new(100.0, 100.0), 0.0);
        e.despawn(id);
        assert!(e.grabbed().is_none());
        assert!(e.particles().is_empty());
    }
}
