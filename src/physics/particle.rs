//! Circular bodies for the bouncing-icon toy

use glam::Vec2;

/// Stable for the body's lifetime
pub type ParticleId = u32;

/// A circular body: center position, vector velocity, fixed radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    pub fn new(id: ParticleId, pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
        }
    }

    /// Point-in-circle test for pointer picking.
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance_squared(point) <= self.radius * self.radius
    }

    /// Circle overlap test.
    #[inline]
    pub fn overlaps(&self, other: &Particle) -> bool {
        let min_dist = self.radius + other.radius;
        self.pos.distance_squared(other.pos) < min_dist * min_dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let p = Particle::new(1, Vec2::new(10.0, 10.0), Vec2::ZERO, 5.0);
        assert!(p.contains(Vec2::new(12.0, 12.0)));
        assert!(p.contains(Vec2::new(15.0, 10.0)));
        assert!(!p.contains(Vec2::new(16.0, 10.0)));
    }

    #[test]
    fn test_overlaps() {
        let a = Particle::new(1, Vec2::ZERO, Vec2::ZERO, 5.0);
        let b = Particle::new(2, Vec2::new(9.0, 0.0), Vec2::ZERO, 5.0);
        let c = Particle::new(3, Vec2::new(10.5, 0.0), Vec2::ZERO, 5.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }
}
