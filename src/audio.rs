//! Injected sound service
//!
//! Fire-and-forget: the shell maps match events onto cues and a backend
//! plays them if it can. A backend that cannot play logs and moves on;
//! nothing here ever feeds back into simulation control flow.

/// Game moments with an associated sound cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEvent {
    Flap,
    Score,
    Hit,
}

impl SoundEvent {
    /// Stable cue name for asset-backed players.
    pub fn cue(self) -> &'static str {
        match self {
            SoundEvent::Flap => "wing",
            SoundEvent::Score => "point",
            SoundEvent::Hit => "hit",
        }
    }
}

pub trait SoundPlayer {
    fn play(&mut self, event: SoundEvent);
}

/// Backend for hosts without audio.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSounds;

impl SoundPlayer for NullSounds {
    fn play(&mut self, event: SoundEvent) {
        log::trace!("sound cue '{}' dropped (no audio backend)", event.cue());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_names() {
        assert_eq!(SoundEvent::Flap.cue(), "wing");
        assert_eq!(SoundEvent::Score.cue(), "point");
        assert_eq!(SoundEvent::Hit.cue(), "hit");
    }
}
