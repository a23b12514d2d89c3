//! Player vs obstacle hazard checks
//!
//! Detection and consequence are two steps: [`check_collision`] reports raw
//! overlap, [`resolve_hazard`] decides what that overlap costs given the
//! shield.

use super::state::{Entity, Rect, Wave};

/// What an overlap means this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardOutcome {
    /// No overlap
    Clear,
    /// Overlap soaked up by the shield
    Absorbed,
    /// Overlap without a shield: run over
    Fatal,
}

/// Hit box of an obstacle: its frame rectangle shrunk by `margin` per side
pub fn hazard_rect(obstacle: &Entity, margin: f64) -> Rect {
    obstacle.bounds().inset(margin)
}

/// True if any obstacle's hit box overlaps the player's full bounds
pub fn check_collision(player: &Entity, wave: &Wave, margin: f64) -> bool {
    let player_rect = player.bounds();
    wave.obstacles
        .iter()
        .any(|o| hazard_rect(o, margin).overlaps(&player_rect))
}

pub fn resolve_hazard(overlap: bool, shielded: bool) -> HazardOutcome {
    match (overlap, shielded) {
        (false, _) => HazardOutcome::Clear,
        (true, true) => HazardOutcome::Absorbed,
        (true, false) => HazardOutcome::Fatal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn player_at(x: f64, y: f64) -> Entity {
        Entity::new(128.0, 128.0, DVec2::new(x, y), 1.0 / 12.0)
    }

    fn wave_with(xs: &[f64]) -> Wave {
        Wave {
            obstacles: xs
                .iter()
                .map(|&x| Entity::new(100.0, 100.0, DVec2::new(x, 360.0), 1.0 / 16.0))
                .collect(),
            finish_line: xs.last().copied().unwrap_or(0.0),
        }
    }

    #[test]
    fn test_hazard_rect_inset() {
        let o = Entity::new(100.0, 100.0, DVec2::new(400.0, 360.0), 1.0);
        assert_eq!(hazard_rect(&o, 20.0), Rect::new(420.0, 380.0, 60.0, 60.0));
    }

    #[test]
    fn test_overlap_on_ground() {
        let player = player_at(336.0, 332.0);
        assert!(check_collision(&player, &wave_with(&[1200.0, 380.0]), 20.0));
        assert!(!check_collision(&player, &wave_with(&[800.0, 1200.0]), 20.0));
    }

    #[test]
    fn test_margin_forgives_near_miss() {
        let player = player_at(336.0, 332.0);
        // Obstacle box starts 10px inside the player's right edge
        let wave = wave_with(&[454.0]);
        assert!(check_collision(&player, &wave, 0.0));
        assert!(!check_collision(&player, &wave, 20.0));
    }

    #[test]
    fn test_jumping_clears_obstacle() {
        // Player feet at 250, hit box top at 380
        let player = player_at(336.0, 122.0);
        assert!(!check_collision(&player, &wave_with(&[380.0]), 20.0));
    }

    #[test]
    fn test_resolve_hazard() {
        assert_eq!(resolve_hazard(false, false), HazardOutcome::Clear);
        assert_eq!(resolve_hazard(false, true), HazardOutcome::Clear);
        assert_eq!(resolve_hazard(true, true), HazardOutcome::Absorbed);
        assert_eq!(resolve_hazard(true, false), HazardOutcome::Fatal);
    }
}
