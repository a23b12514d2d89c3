//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the `dt` passed in
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod anim;
pub mod collision;
pub mod physics;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wave;

pub use anim::advance;
pub use collision::{HazardOutcome, check_collision, hazard_rect, resolve_hazard};
pub use physics::step_player;
pub use snapshot::{Hud, Snapshot, SpriteView};
pub use state::{
    Entity, GameEvent, GamePhase, GameState, Parallax, Player, Progression, Rect, ScoreTick,
    Shield, Tint, Viewport, Wave,
};
pub use tick::{FrameInput, tick};
pub use wave::{next_spawn_x, scroll_speed, spawn_wave, wave_size};
