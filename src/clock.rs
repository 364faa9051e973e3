//! Loop driver timing
//!
//! The host scheduler (render callback, timer, test harness) hands us a
//! monotonically increasing timestamp once per tick; we derive a clamped
//! delta from it. The first tick after a (re)start has no previous
//! timestamp and substitutes a nominal 60 Hz delta.

use crate::consts::{MAX_FRAME_DT, NOMINAL_DT};

/// Derives a clamped delta-time from per-tick timestamps.
#[derive(Debug, Clone)]
pub struct DeltaClock {
    last: Option<f64>,
    max_dt: f32,
    nominal_dt: f32,
}

impl Default for DeltaClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT, NOMINAL_DT)
    }
}

impl DeltaClock {
    pub fn new(max_dt: f32, nominal_dt: f32) -> Self {
        Self {
            last: None,
            max_dt,
            nominal_dt,
        }
    }

    /// Delta since the previous call, in seconds, clamped to `[0, max_dt]`.
    ///
    /// `now` is an absolute timestamp in seconds. A stalled host (huge gap)
    /// is clamped rather than surfaced; a regressing timestamp yields zero.
    pub fn delta(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            None => self.nominal_dt,
            Some(prev) => ((now - prev) as f32).clamp(0.0, self.max_dt),
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous timestamp; the next `delta` returns the nominal value.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
