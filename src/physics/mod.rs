//! Bouncing-icon particle toy
//!
//! A parallel simulation core to `sim`: the same per-frame clamped delta
//! contract, driven by pointer gestures instead of a keyboard, with no
//! shared entities.

pub mod engine;
pub mod particle;
pub mod pointer;

pub use engine::ParticleEngine;
pub use particle::{Particle, ParticleId};
pub use pointer::PointerTracker;
