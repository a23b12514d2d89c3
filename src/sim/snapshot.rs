//! Read-only view of the state for rendering
//!
//! Built once per frame after `tick`; the renderer never writes back.

use glam::DVec2;
use serde::Serialize;

use super::state::{Entity, GamePhase, GameState, Rect, Tint};

/// One sprite to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    /// Source crop in the sprite sheet
    pub frame: Rect,
    pub pos: DVec2,
    pub tint: Tint,
}

impl From<&Entity> for SpriteView {
    fn from(entity: &Entity) -> Self {
        Self {
            frame: entity.frame_rect,
            pos: entity.pos,
            tint: entity.tint,
        }
    }
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hud {
    pub score: u32,
    pub high_score: u32,
    pub level: u32,
    pub boss_level: bool,
    pub game_over: bool,
    pub level_complete: bool,
    /// Seconds left on the shield, while it is up
    pub shield_remaining: Option<f64>,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub player: SpriteView,
    pub obstacles: Vec<SpriteView>,
    pub hud: Hud,
    /// Background layer offsets, far to near
    pub parallax: [f64; 3],
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let tuning = &self.tuning;
        let shield = &self.player.shield;

        let mut player = SpriteView::from(&self.player.entity);
        if shield.flash_on(tuning.shield_flash_interval) {
            player.tint = Tint::Shielded;
        }

        Snapshot {
            player,
            obstacles: self.wave.obstacles.iter().map(SpriteView::from).collect(),
            hud: Hud {
                score: self.progress.score,
                high_score: self.progress.high_score,
                level: self.progress.level,
                boss_level: self.progress.is_boss_level(),
                game_over: self.progress.is_game_over(),
                level_complete: self.progress.phase == GamePhase::LevelComplete,
                shield_remaining: shield.remaining(tuning.shield_duration),
            },
            parallax: self.parallax.offsets,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::settings::Tuning;
    use crate::sim::state::{GameState, Tint};
    use crate::sim::tick::{FrameInput, tick};

    #[test]
    fn test_snapshot_of_fresh_state() {
        let state = GameState::new(Tuning::default(), 5, 17);
        let snap = state.snapshot();
        assert!(snap.obstacles.is_empty());
        assert_eq!(snap.hud.level, 1);
        assert_eq!(snap.hud.high_score, 17);
        assert_eq!(snap.hud.shield_remaining, None);
        assert_eq!(snap.player.tint, Tint::Neutral);
        assert!(!snap.hud.game_over);
    }

    #[test]
    fn test_snapshot_shield_flash_and_remaining() {
        let mut state = GameState::new(Tuning::default(), 5, 0);
        let input = FrameInput {
            shield: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.05);
        let snap = state.snapshot();
        assert_eq!(snap.player.tint, Tint::Shielded);
        assert_eq!(snap.hud.shield_remaining, Some(9.95));
        assert_eq!(snap.obstacles.len(), 5);

        tick(&mut state, &FrameInput::default(), 0.1);
        // 0.15s in: odd flash interval
        assert_eq!(state.snapshot().player.tint, Tint::Neutral);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = GameState::new(Tuning::default(), 5, 0);
        tick(&mut state, &FrameInput::default(), 1.0 / 60.0);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"obstacles\""));
        assert!(json.contains("\"high_score\":0"));
    }

    #[test]
    fn test_boss_hud_flag() {
        let mut state = GameState::new(Tuning::default(), 5, 0);
        state.progress.level = 10;
        tick(&mut state, &FrameInput::default(), 1.0 / 60.0);
        let snap = state.snapshot();
        assert!(snap.hud.boss_level);
        assert!(snap.obstacles.iter().all(|o| o.tint == Tint::Hazard));
    }
}
