//! Game state and core simulation types
//!
//! Everything one session mutates lives here. The high score is the only value
//! that survives a retry.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::BOSS_LEVEL;
use crate::settings::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Player hit an obstacle without a shield; waiting for retry
    GameOver,
    /// Wave finished this frame; the next frame spawns the next level
    LevelComplete,
}

/// Discrete events for the host (audio, persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    Win,
    Lose,
    /// Score beat the stored high score; carries the new value
    NewHighScore(u32),
}

/// Display colour modifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tint {
    #[default]
    Neutral,
    /// Boss level obstacles
    Hazard,
    /// Shield flash on the player
    Shielded,
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `margin` on every side
    pub fn inset(&self, margin: f64) -> Self {
        Self {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - 2.0 * margin,
            height: self.height - 2.0 * margin,
        }
    }

    /// Strict overlap test (touching edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

/// An animated sprite instance (player or obstacle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Source crop in the sprite sheet
    pub frame_rect: Rect,
    /// World-space top-left
    pub pos: DVec2,
    pub frame_index: u32,
    /// Seconds per animation frame
    pub frame_interval: f64,
    /// Seconds since the last frame advance
    pub frame_elapsed: f64,
    pub tint: Tint,
}

impl Entity {
    pub fn new(width: f64, height: f64, pos: DVec2, frame_interval: f64) -> Self {
        Self {
            frame_rect: Rect::new(0.0, 0.0, width, height),
            pos,
            frame_index: 0,
            frame_interval,
            frame_elapsed: 0.0,
            tint: Tint::Neutral,
        }
    }

    /// World-space bounding box
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x,
            self.pos.y,
            self.frame_rect.width,
            self.frame_rect.height,
        )
    }
}

/// Temporary invulnerability
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Shield {
    pub active: bool,
    /// Seconds since activation
    pub elapsed: f64,
}

impl Shield {
    /// Raise (or refresh) the shield
    pub fn activate(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
    }

    /// Age the shield; drops once `elapsed` passes `duration`
    pub fn update(&mut self, dt: f64, duration: f64) {
        if !self.active {
            return;
        }
        self.elapsed += dt;
        if self.elapsed > duration {
            self.active = false;
        }
    }

    /// Seconds left, if active
    pub fn remaining(&self, duration: f64) -> Option<f64> {
        self.active.then(|| (duration - self.elapsed).max(0.0))
    }

    /// Flash toggle for rendering: on during even flash intervals
    pub fn flash_on(&self, interval: f64) -> bool {
        if !self.active || interval <= 0.0 {
            return false;
        }
        ((self.elapsed / interval).floor() as u64) % 2 == 0
    }
}

/// The runner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub entity: Entity,
    /// Positive is downward
    pub velocity: f64,
    pub airborne: bool,
    pub shield: Shield,
}

impl Player {
    /// Player standing on the ground, centred horizontally
    pub fn new(tuning: &Tuning, viewport: Viewport) -> Self {
        let (width, height) = tuning.player_frame_size();
        let pos = DVec2::new(viewport.width / 2.0 - width / 2.0, viewport.height - height);
        Self {
            entity: Entity::new(width, height, pos, tuning.player_frame_interval),
            velocity: 0.0,
            airborne: false,
            shield: Shield::default(),
        }
    }

    /// Y coordinate at which the player stands on the ground
    pub fn ground_y(&self, viewport: Viewport) -> f64 {
        viewport.height - self.entity.frame_rect.height
    }

    pub fn is_grounded(&self, ground_y: f64) -> bool {
        self.entity.pos.y + self.entity.frame_rect.y >= ground_y
    }
}

/// Obstacles spawned together for one level attempt
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wave {
    pub obstacles: Vec<Entity>,
    /// Completion threshold; tracks the last obstacle's x
    pub finish_line: f64,
}

impl Wave {
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
        self.finish_line = 0.0;
    }
}

/// Outcome of one scoring step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTick {
    Idle,
    Scored,
    NewHighScore,
}

/// Level, score and phase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    pub level: u32,
    pub score: u32,
    pub high_score: u32,
    /// Seconds since the last point
    pub score_timer: f64,
    pub phase: GamePhase,
}

impl Progression {
    pub fn new(high_score: u32) -> Self {
        Self {
            level: 1,
            score: 0,
            high_score,
            score_timer: 0.0,
            phase: GamePhase::Playing,
        }
    }

    pub fn is_boss_level(&self) -> bool {
        self.level == BOSS_LEVEL
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Accumulate survival time; one point per `interval`
    pub fn accrue(&mut self, dt: f64, interval: f64) -> ScoreTick {
        self.score_timer += dt;
        if self.score_timer < interval {
            return ScoreTick::Idle;
        }
        self.score_timer = 0.0;
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            ScoreTick::NewHighScore
        } else {
            ScoreTick::Scored
        }
    }
}

/// Scrolling background layer offsets (far, mid, near)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Parallax {
    pub offsets: [f64; 3],
}

impl Parallax {
    /// Scroll every layer left, wrapping after one viewport width
    pub fn scroll(&mut self, dt: f64, speeds: &[f64; 3], viewport_width: f64) {
        for (offset, speed) in self.offsets.iter_mut().zip(speeds) {
            *offset -= speed * dt;
            if *offset < -viewport_width {
                *offset = 0.0;
            }
        }
    }
}

/// Current viewport size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            width: tuning.viewport_width,
            height: tuning.viewport_height,
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn spacing source
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub player: Player,
    pub wave: Wave,
    pub progress: Progression,
    pub parallax: Parallax,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given seed and stored high score
    pub fn new(tuning: Tuning, seed: u64, high_score: u32) -> Self {
        let viewport = Viewport::from_tuning(&tuning);
        Self {
            player: Player::new(&tuning, viewport),
            tuning,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            wave: Wave::default(),
            progress: Progression::new(high_score),
            parallax: Parallax::default(),
            events: Vec::new(),
        }
    }

    /// Return to level 1 with a grounded player and no wave, keeping the high score
    pub fn reset_session(&mut self) {
        self.player = Player::new(&self.tuning, self.viewport);
        self.wave.clear();
        self.progress = Progression::new(self.progress.high_score);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
