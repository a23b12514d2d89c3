//! Obstacle waves
//!
//! A wave is spawned in one go at level start: a row of obstacles lined up to
//! the right of the viewport with randomized spacing. The whole row scrolls
//! left until its finish line passes the player.

use glam::DVec2;
use rand::Rng;

use super::anim;
use super::state::{Entity, Tint, Viewport, Wave};
use crate::consts::*;
use crate::settings::Tuning;

/// Number of obstacles for a level
pub fn wave_size(level: u32) -> usize {
    if level < BOSS_LEVEL {
        BASE_WAVE_SIZE + (level.saturating_sub(1) as usize) * WAVE_GROWTH
    } else {
        BOSS_WAVE_SIZE
    }
}

/// Signed horizontal obstacle speed for a level (negative = leftward)
pub fn scroll_speed(level: u32, tuning: &Tuning) -> f64 {
    let extra = if level > BOSS_LEVEL {
        tuning.overdrive_penalty
    } else {
        level as f64 * tuning.speed_step
    };
    -(tuning.base_speed + extra)
}

/// X position of the obstacle after one at `previous_x`
pub fn next_spawn_x<R: Rng>(previous_x: f64, tuning: &Tuning, rng: &mut R) -> f64 {
    previous_x + tuning.spawn_gap + rng.random_range(0..=tuning.spawn_jitter) as f64
}

/// Build the wave for `level`
pub fn spawn_wave<R: Rng>(
    level: u32,
    viewport: Viewport,
    tuning: &Tuning,
    rng: &mut R,
) -> Wave {
    let (width, height) = tuning.obstacle_frame_size();
    let tint = if level == BOSS_LEVEL {
        Tint::Hazard
    } else {
        Tint::Neutral
    };
    let count = wave_size(level);

    let mut obstacles = Vec::with_capacity(count);
    let mut x = viewport.width;
    for i in 0..count {
        if i > 0 {
            x = next_spawn_x(x, tuning, rng);
        }
        let mut obstacle = Entity::new(
            width,
            height,
            DVec2::new(x, viewport.height - height),
            tuning.obstacle_frame_interval,
        );
        obstacle.tint = tint;
        obstacles.push(obstacle);
    }

    let finish_line = obstacles.last().map(|o| o.pos.x).unwrap_or(viewport.width);
    log::debug!(
        "Spawned {} obstacles for level {}, finish line at {:.0}",
        count,
        level,
        finish_line
    );

    Wave {
        obstacles,
        finish_line,
    }
}

impl Wave {
    /// Animate and scroll every obstacle, dragging the finish line along
    pub fn advance(&mut self, dt: f64, speed: f64, max_frame: u32) {
        for obstacle in &mut self.obstacles {
            anim::advance(obstacle, dt, max_frame);
            obstacle.pos.x += speed * dt;
        }
        self.finish_line += speed * dt;
    }

    /// True once the finish line has scrolled behind `player_x`
    pub fn is_cleared_by(&self, player_x: f64) -> bool {
        !self.is_empty() && self.finish_line < player_x
    }
}
