//! Deterministic game simulation
//!
//! All runner gameplay lives here. This module must stay pure:
//! - Variable timestep, clamped by the caller's clock
//! - Seeded RNG only
//! - No rendering, input listeners, or storage
//!
//! `tick` is the single entry point; everything else is the state it
//! advances.

pub mod actor;
pub mod field;
pub mod geom;
pub mod obstacle;
pub mod spawner;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorState};
pub use field::ScrollField;
pub use geom::Aabb;
pub use obstacle::Obstacle;
pub use spawner::Spawner;
pub use state::{Match, MatchEvent, MatchPhase};
pub use tick::{TickInput, tick};
