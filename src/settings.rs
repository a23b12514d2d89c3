//! Game tuning
//!
//! Every gameplay constant in one serializable struct. Persisted as JSON next
//! to the binary; missing keys fall back to the defaults in [`crate::consts`].

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Viewport ===
    pub viewport_width: f64,
    pub viewport_height: f64,

    // === Player physics ===
    pub gravity: f64,
    pub jump_impulse: f64,

    // === Sprites ===
    pub player_sheet_width: f64,
    pub player_sheet_height: f64,
    pub player_frames: u32,
    pub player_frame_interval: f64,
    pub obstacle_sheet_width: f64,
    pub obstacle_sheet_height: f64,
    pub obstacle_grid: u32,
    pub obstacle_frame_interval: f64,

    // === Obstacles ===
    pub base_speed: f64,
    pub speed_step: f64,
    pub overdrive_penalty: f64,
    pub spawn_gap: f64,
    pub spawn_jitter: u32,
    /// Inset per side of the obstacle hit box
    pub hazard_margin: f64,

    // === Shield ===
    pub shield_duration: f64,
    pub shield_flash_interval: f64,

    // === Scoring ===
    pub score_interval: f64,

    // === Background ===
    pub parallax_speeds: [f64; 3],
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            player_sheet_width: PLAYER_SHEET_WIDTH,
            player_sheet_height: PLAYER_SHEET_HEIGHT,
            player_frames: PLAYER_FRAMES,
            player_frame_interval: PLAYER_FRAME_INTERVAL,
            obstacle_sheet_width: OBSTACLE_SHEET_WIDTH,
            obstacle_sheet_height: OBSTACLE_SHEET_HEIGHT,
            obstacle_grid: OBSTACLE_GRID,
            obstacle_frame_interval: OBSTACLE_FRAME_INTERVAL,

            base_speed: BASE_OBSTACLE_SPEED,
            speed_step: SPEED_STEP,
            overdrive_penalty: OVERDRIVE_PENALTY,
            spawn_gap: SPAWN_GAP,
            spawn_jitter: SPAWN_JITTER,
            hazard_margin: HAZARD_MARGIN,

            shield_duration: SHIELD_DURATION,
            shield_flash_interval: SHIELD_FLASH_INTERVAL,

            score_interval: SCORE_INTERVAL,

            parallax_speeds: PARALLAX_SPEEDS,
        }
    }
}

impl Tuning {
    /// Size of one player animation frame
    pub fn player_frame_size(&self) -> (f64, f64) {
        (
            self.player_sheet_width / self.player_frames.max(1) as f64,
            self.player_sheet_height,
        )
    }

    /// Size of one obstacle animation frame
    pub fn obstacle_frame_size(&self) -> (f64, f64) {
        let grid = self.obstacle_grid.max(1) as f64;
        (
            self.obstacle_sheet_width / grid,
            self.obstacle_sheet_height / grid,
        )
    }

    /// Last walk-cycle frame index
    pub fn player_max_frame(&self) -> u32 {
        self.player_frames.saturating_sub(1)
    }

    /// Last obstacle frame index (the animation walks the first row)
    pub fn obstacle_max_frame(&self) -> u32 {
        self.obstacle_grid.saturating_sub(1)
    }

    /// Parse tuning from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Malformed tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default tuning");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save tuning as pretty-printed JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Tuning saved to {}", path.display()),
                Err(e) => log::warn!("Could not write tuning file {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize tuning: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_sizes() {
        let tuning = Tuning::default();
        assert_eq!(tuning.player_frame_size(), (128.0, 128.0));
        assert_eq!(tuning.obstacle_frame_size(), (100.0, 100.0));
        assert_eq!(tuning.player_max_frame(), 5);
        assert_eq!(tuning.obstacle_max_frame(), 7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "hazard_margin": 30.0, "gravity": 900.0 }"#).unwrap();
        assert_eq!(tuning.hazard_margin, 30.0);
        assert_eq!(tuning.gravity, 900.0);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
        assert_eq!(tuning.parallax_speeds, PARALLAX_SPEEDS);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("dapper_dasher_no_such_tuning.json");
        let _ = fs::remove_file(&path);
        assert_eq!(Tuning::load(&path), Tuning::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "dapper_dasher_tuning_{}.json",
            std::process::id()
        ));
        let tuning = Tuning {
            shield_duration: 4.0,
            ..Default::default()
        };
        tuning.save(&path);
        assert_eq!(Tuning::load(&path), tuning);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let path = std::env::temp_dir().join(format!(
            "dapper_dasher_bad_tuning_{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Tuning::load(&path), Tuning::default());
        let _ = fs::remove_file(&path);
    }
}
