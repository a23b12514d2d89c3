//! Dapper Dasher entry point
//!
//! Native headless runner: loads tuning and the stored high score, then lets a
//! simple autopilot play a fixed-rate session and logs how it went.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use dapper_dasher::audio::LogAudio;
use dapper_dasher::platform::HeldButtons;
use dapper_dasher::sim::{GameState, hazard_rect, scroll_speed};
use dapper_dasher::{FileHighScore, Game, Tuning};

/// Host frame rate
const FRAME_DT: f64 = 1.0 / 60.0;
/// Length of the headless session
const SESSION_FRAMES: u32 = 60 * 120;
/// How far ahead (in seconds of scroll) the autopilot starts a jump
const JUMP_LEAD_SECS: f64 = 0.25;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dapper Dasher (headless) starting...");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut game = Game::new(tuning, seed, FileHighScore::default(), LogAudio::new());
    let mut held = HeldButtons::default();
    let mut best_level = 1;
    let mut deaths = 0;

    for _ in 0..SESSION_FRAMES {
        held = autopilot(&game.state, held);
        let snap = game.frame(&held, None, FRAME_DT);
        if snap.hud.game_over && !held.retry {
            deaths += 1;
        }
        best_level = best_level.max(snap.hud.level);
    }

    let progress = &game.state.progress;
    log::info!(
        "Session over: level {}, score {}, best level {}, {} crashes, high score {}",
        progress.level,
        progress.score,
        best_level,
        deaths,
        progress.high_score
    );
}

/// Decide which buttons to hold this frame.
///
/// Buttons are released on the frame after a press so the next press registers.
fn autopilot(state: &GameState, previous: HeldButtons) -> HeldButtons {
    let mut held = HeldButtons::default();

    if state.progress.is_game_over() {
        held.retry = !previous.retry;
        return held;
    }

    if state.progress.is_boss_level() && !state.player.shield.active {
        held.shield = !previous.shield;
    }

    let player = &state.player;
    let ground_y = player.ground_y(state.viewport);
    if player.airborne || !player.is_grounded(ground_y) {
        return held;
    }

    let lead = scroll_speed(state.progress.level, &state.tuning).abs() * JUMP_LEAD_SECS;
    let player_right = player.entity.pos.x + player.entity.frame_rect.width;
    let threat = state.wave.obstacles.iter().any(|o| {
        let hit = hazard_rect(o, state.tuning.hazard_margin);
        let ahead = hit.x - player_right;
        (0.0..=lead).contains(&ahead)
    });
    held.jump = threat && !previous.jump;
    held
}
