//! Per-frame simulation step
//!
//! Core game loop that advances the session by one variable-length frame.
//! Order within a frame: background, shield, phase gate, wave spawn, scoring,
//! player physics, obstacle scroll, hazard check, progression.

use super::collision::{HazardOutcome, check_collision, resolve_hazard};
use super::physics::step_player;
use super::state::{GameEvent, GamePhase, GameState, ScoreTick, Viewport};
use super::wave::{scroll_speed, spawn_wave};

/// Edge-triggered input for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Jump button went down this frame
    pub jump: bool,
    /// Shield button went down this frame
    pub shield: bool,
    /// Retry button went down this frame
    pub retry: bool,
    /// New viewport size, if the window changed
    pub viewport: Option<Viewport>,
}

/// Advance the game state by `dt` seconds
pub fn tick(state: &mut GameState, input: &FrameInput, dt: f64) {
    if let Some(viewport) = input.viewport {
        state.viewport = viewport;
    }

    // Background keeps scrolling in every phase
    state
        .parallax
        .scroll(dt, &state.tuning.parallax_speeds, state.viewport.width);

    // Shield works regardless of phase
    if input.shield {
        state.player.shield.activate();
        log::debug!("Shield up");
    }
    state
        .player
        .shield
        .update(dt, state.tuning.shield_duration);

    if state.progress.phase == GamePhase::GameOver {
        if input.retry {
            state.reset_session();
            log::info!("Retry: back to level 1");
        }
        return;
    }

    if state.wave.is_empty() {
        start_level(state);
    }

    match state.progress.accrue(dt, state.tuning.score_interval) {
        ScoreTick::Idle | ScoreTick::Scored => {}
        ScoreTick::NewHighScore => {
            state
                .events
                .push(GameEvent::NewHighScore(state.progress.high_score));
        }
    }

    let ground_y = state.player.ground_y(state.viewport);
    if step_player(&mut state.player, &state.tuning, ground_y, input.jump, dt) {
        state.events.push(GameEvent::Jump);
    }

    let speed = scroll_speed(state.progress.level, &state.tuning);
    let max_frame = state.tuning.obstacle_max_frame();
    state.wave.advance(dt, speed, max_frame);

    let overlap = check_collision(
        &state.player.entity,
        &state.wave,
        state.tuning.hazard_margin,
    );
    match resolve_hazard(overlap, state.player.shield.active) {
        HazardOutcome::Fatal => {
            state.progress.phase = GamePhase::GameOver;
            state.events.push(GameEvent::Lose);
            log::info!(
                "Game over on level {} with score {}",
                state.progress.level,
                state.progress.score
            );
        }
        HazardOutcome::Clear | HazardOutcome::Absorbed => {
            if state.wave.is_cleared_by(state.player.entity.pos.x) {
                complete_level(state);
            }
        }
    }
}

/// Spawn the wave for the current level and resume play
fn start_level(state: &mut GameState) {
    let level = state.progress.level;
    state.wave = spawn_wave(level, state.viewport, &state.tuning, &mut state.rng);
    state.progress.phase = GamePhase::Playing;
    if state.progress.is_boss_level() {
        log::info!("Level {} (boss): {} obstacles", level, state.wave.len());
    } else {
        log::info!("Level {}: {} obstacles", level, state.wave.len());
    }
}

fn complete_level(state: &mut GameState) {
    state.events.push(GameEvent::Win);
    state.wave.clear();
    state.progress.level += 1;
    state.progress.phase = GamePhase::LevelComplete;
    log::info!("Wave cleared, advancing to level {}", state.progress.level);
}
