//! Skygap - a gated-obstacle auto-runner core with a bouncing-icon toy
//!
//! Core modules:
//! - `sim`: Deterministic game simulation (actor, obstacles, scoring, match state)
//! - `physics`: Particle engine for the bouncing-icon toy (grab/throw, elastic pairs)
//! - `clock`: Variable-timestep loop driver with delta clamping
//! - `assets` / `audio` / `persistence`: Injected collaborator services
//! - `app`: Loop glue tying one match to a clock and its services
//!
//! Everything in `sim` and `physics` is pure of platform concerns: no
//! rendering, no input listeners, no storage. The host calls `tick`/`step`
//! with monotonically increasing timestamps and does whatever it wants with
//! the results.

pub mod app;
pub mod assets;
pub mod audio;
pub mod clock;
pub mod config;
pub mod persistence;
pub mod physics;
pub mod sim;

pub use app::GameApp;
pub use config::{GameConfig, ParticleConfig, ScoreEdge};

/// Shared numeric constants
pub mod consts {
    /// Nominal delta for the first tick after a loop (re)start (one 60 Hz frame)
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
    /// Maximum delta fed into integration (two 60 Hz frames); larger host
    /// stalls are clamped here to keep thin obstacles tunnel-proof
    pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

    /// Number of flap animation frames (up / mid / down)
    pub const FLAP_FRAMES: usize = 3;

    /// Trailing window over pointer samples used for throw velocity (seconds)
    pub const POINTER_WINDOW: f64 = 0.12;
}

/// Wrap a raw scroll offset into `[0, width)` for seamless layer tiling.
///
/// Floored modulo: negative raw offsets land in range too, so a layer that
/// has scrolled left for an hour still tiles without a seam.
#[inline]
pub fn wrap_offset(raw: f32, width: f32) -> f32 {
    // The trailing % catches the rounding case where a tiny negative raw
    // lands exactly on `width` after the euclidean fixup.
    raw.rem_euclid(width) % width
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_offset_basic() {
        assert_eq!(wrap_offset(0.0, 432.0), 0.0);
        assert_eq!(wrap_offset(432.0, 432.0), 0.0);
        assert_eq!(wrap_offset(-1.0, 432.0), 431.0);
        assert_eq!(wrap_offset(-433.0, 432.0), 431.0);
        assert_eq!(wrap_offset(1000.0, 432.0), 136.0);
        // Rounding edge: a tiny negative raw must not wrap to exactly `width`
        assert!(wrap_offset(-1.0e-7, 432.0) < 432.0);
    }

    proptest! {
        #[test]
        fn prop_wrap_offset_in_range(raw in -1.0e6f32..1.0e6, width in 1.0f32..5000.0) {
            let wrapped = wrap_offset(raw, width);
            prop_assert!(wrapped >= 0.0, "wrapped {} below zero", wrapped);
            prop_assert!(wrapped < width, "wrapped {} not below width {}", wrapped, width);
        }
    }
}
