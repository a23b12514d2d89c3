//! Host-side game loop
//!
//! Wires the simulation to its collaborators: latches raw input, runs one
//! tick, hands high scores to storage and sounds to the audio sink, and
//! returns the frame's snapshot for rendering.

use crate::audio::{AudioSink, SoundEffect};
use crate::consts::MAX_FRAME_DT;
use crate::highscores::HighScoreStore;
use crate::platform::{HeldButtons, InputLatches};
use crate::settings::Tuning;
use crate::sim::{GameEvent, GameState, Snapshot, Viewport, tick};

/// Game instance holding all state
pub struct Game<S: HighScoreStore, A: AudioSink> {
    pub state: GameState,
    store: S,
    audio: A,
    latches: InputLatches,
}

impl<S: HighScoreStore, A: AudioSink> Game<S, A> {
    /// Start a session, reading the stored high score
    pub fn new(tuning: Tuning, seed: u64, mut store: S, audio: A) -> Self {
        let high_score = store.load();
        log::info!("Game initialized with seed: {}", seed);
        Self {
            state: GameState::new(tuning, seed, high_score),
            store,
            audio,
            latches: InputLatches::default(),
        }
    }

    /// Run one frame. `dt` is clamped so a stalled host cannot fling the player.
    pub fn frame(&mut self, held: &HeldButtons, viewport: Option<Viewport>, dt: f64) -> Snapshot {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        let input = self.latches.sample(held, viewport);
        tick(&mut self.state, &input, dt);

        for event in self.state.drain_events() {
            match event {
                GameEvent::NewHighScore(score) => self.store.save(score),
                other => {
                    if let Some(effect) = SoundEffect::for_event(&other) {
                        self.audio.play(effect);
                    }
                }
            }
        }

        self.state.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
