//! Sound effect dispatch
//!
//! The simulation only queues events; playback belongs to whatever sink the
//! host plugs in.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Wave cleared
    Win,
    /// Hit an obstacle
    Lose,
}

impl SoundEffect {
    /// Effect for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::Win => Some(SoundEffect::Win),
            GameEvent::Lose => Some(SoundEffect::Lose),
            GameEvent::NewHighScore(_) => None,
        }
    }

    /// Asset path relative to the game directory
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "audio/jump.wav",
            SoundEffect::Win => "audio/win.wav",
            SoundEffect::Lose => "audio/lose.wav",
        }
    }
}

/// Fire-and-forget sound playback
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Collects effects in order
impl AudioSink for Vec<SoundEffect> {
    fn play(&mut self, effect: SoundEffect) {
        self.push(effect);
    }
}

/// Headless sink that logs instead of playing
#[derive(Debug, Default)]
pub struct LogAudio {
    muted: bool,
}

impl LogAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        log::debug!("Play {:?} ({})", effect, effect.asset_path());
    }
}
