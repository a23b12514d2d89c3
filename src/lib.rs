//! Dapper Dasher - A side-scrolling runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle waves, collisions, progression)
//! - `game`: Host loop gluing the simulation to storage, audio and input
//! - `platform`: Input edge detection
//! - `highscores`: Single-value high score persistence
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod game;
pub mod highscores;
pub mod platform;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::{FileHighScore, HighScoreStore, MemoryHighScore};
pub use settings::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f64 = 800.0;
    pub const VIEWPORT_HEIGHT: f64 = 460.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f64 = 1200.0;
    /// Upward velocity applied on jump (pixels/s)
    pub const JUMP_IMPULSE: f64 = 600.0;

    /// Player sprite sheet: one row of walk frames
    pub const PLAYER_SHEET_WIDTH: f64 = 768.0;
    pub const PLAYER_SHEET_HEIGHT: f64 = 128.0;
    pub const PLAYER_FRAMES: u32 = 6;
    pub const PLAYER_FRAME_INTERVAL: f64 = 1.0 / 12.0;
    /// Frame shown while airborne
    pub const JUMP_POSE_FRAME: u32 = 1;

    /// Obstacle sprite sheet: square grid of frames
    pub const OBSTACLE_SHEET_WIDTH: f64 = 800.0;
    pub const OBSTACLE_SHEET_HEIGHT: f64 = 800.0;
    pub const OBSTACLE_GRID: u32 = 8;
    pub const OBSTACLE_FRAME_INTERVAL: f64 = 1.0 / 16.0;

    /// Leftward scroll speed at level 0 (pixels/s)
    pub const BASE_OBSTACLE_SPEED: f64 = 300.0;
    /// Extra speed per level up to the boss level
    pub const SPEED_STEP: f64 = 10.0;
    /// Extra speed past the boss level
    pub const OVERDRIVE_PENALTY: f64 = 200.0;

    /// Wave sizing
    pub const BASE_WAVE_SIZE: usize = 5;
    pub const WAVE_GROWTH: usize = 3;
    pub const BOSS_WAVE_SIZE: usize = 20;
    pub const BOSS_LEVEL: u32 = 10;

    /// Obstacle spacing: gap + uniform(0..=jitter)
    pub const SPAWN_GAP: f64 = 300.0;
    pub const SPAWN_JITTER: u32 = 100;

    /// Inset applied to each side of an obstacle before hit-testing
    pub const HAZARD_MARGIN: f64 = 50.0;

    /// Shield lifetime (seconds)
    pub const SHIELD_DURATION: f64 = 10.0;
    /// Shield flash toggles every interval (seconds)
    pub const SHIELD_FLASH_INTERVAL: f64 = 0.1;

    /// One point per interval of survival (seconds)
    pub const SCORE_INTERVAL: f64 = 0.5;

    /// Background layer speeds, far to near (pixels/s)
    pub const PARALLAX_SPEEDS: [f64; 3] = [20.0, 40.0, 80.0];

    /// Host-side clamp on frame time (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;
}
