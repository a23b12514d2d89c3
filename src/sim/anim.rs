//! Sprite-sheet frame stepping

use super::state::Entity;

/// Accumulate `dt` and step to the next frame once `frame_interval` has passed.
///
/// The crop moves to the current frame before the index advances, so the
/// crop always trails the index by one frame. `frame_index` wraps within
/// `[0, max_frame]`.
pub fn advance(entity: &mut Entity, dt: f64, max_frame: u32) {
    entity.frame_elapsed += dt;
    if entity.frame_elapsed >= entity.frame_interval {
        entity.frame_elapsed = 0.0;
        entity.frame_rect.x = entity.frame_index as f64 * entity.frame_rect.width;
        entity.frame_index = (entity.frame_index + 1) % (max_frame + 1);
    }
}
