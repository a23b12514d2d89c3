//! Player gravity, jumping and ground contact
//!
//! One explicit Euler step per frame. There is no sub-stepping: a long frame
//! can carry the player past the ground line, and the next frame's ground test
//! simply sees the player as grounded.

use super::anim;
use super::state::{Entity, Player};
use crate::consts::JUMP_POSE_FRAME;
use crate::settings::Tuning;

/// Advance the player by `dt`. Returns true if a jump started this frame.
///
/// `jump` must be edge-triggered (true only on the frame the button goes down).
pub fn step_player(player: &mut Player, tuning: &Tuning, ground_y: f64, jump: bool, dt: f64) -> bool {
    if player.is_grounded(ground_y) {
        player.velocity = 0.0;
        player.airborne = false;
    } else {
        player.velocity += tuning.gravity * dt;
    }

    let jumped = jump && !player.airborne;
    if jumped {
        player.velocity -= tuning.jump_impulse;
        player.airborne = true;
        log::debug!("Jump at y={:.1}", player.entity.pos.y);
    }

    integrate_unclamped(player, dt);

    if player.airborne {
        pin_jump_pose(&mut player.entity);
    } else {
        anim::advance(&mut player.entity, dt, tuning.player_max_frame());
    }

    jumped
}

/// Move by velocity without clamping to the ground
fn integrate_unclamped(player: &mut Player, dt: f64) {
    player.entity.pos.y += player.velocity * dt;
}

/// Hold the jump frame instead of cycling the walk animation
fn pin_jump_pose(entity: &mut Entity) {
    entity.frame_index = JUMP_POSE_FRAME;
    entity.frame_rect.x = JUMP_POSE_FRAME as f64 * entity.frame_rect.width;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use proptest::prelude::*;

    fn setup() -> (Tuning, Player, f64) {
        let tuning = Tuning::default();
        let viewport = Viewport::from_tuning(&tuning);
        let player = Player::new(&tuning, viewport);
        let ground = player.ground_y(viewport);
        (tuning, player, ground)
    }

    #[test]
    fn test_jump_leaves_ground() {
        let (tuning, mut player, ground) = setup();
        let dt = 1.0 / 60.0;
        assert!(step_player(&mut player, &tuning, ground, true, dt));
        assert!(player.airborne);
        assert_eq!(player.velocity, -600.0);
        assert!(player.entity.pos.y < ground);
        assert_eq!(player.entity.frame_index, JUMP_POSE_FRAME);
    }

    #[test]
    fn test_no_double_jump() {
        let (tuning, mut player, ground) = setup();
        let dt = 1.0 / 60.0;
        step_player(&mut player, &tuning, ground, true, dt);
        assert!(!step_player(&mut player, &tuning, ground, true, dt));
        // Only gravity applied on the second frame
        assert!((player.velocity - (-600.0 + 1200.0 * dt)).abs() < 1e-9);
    }

    #[test]
    fn test_jump_lands_again() {
        let (tuning, mut player, ground) = setup();
        let dt = 1.0 / 60.0;
        step_player(&mut player, &tuning, ground, true, dt);
        let mut frames = 1;
        while player.airborne && frames < 600 {
            step_player(&mut player, &tuning, ground, false, dt);
            frames += 1;
        }
        assert!(!player.airborne);
        assert_eq!(player.velocity, 0.0);
        // Roughly one second of air time
        assert!((55..=65).contains(&frames), "air time was {frames} frames");
    }

    #[test]
    fn test_large_dt_overshoots_ground() {
        let (tuning, mut player, ground) = setup();
        player.entity.pos.y = ground - 10.0;
        player.velocity = 100.0;
        step_player(&mut player, &tuning, ground, false, 1.0);
        // No sub-stepping: the player ends below the ground line
        assert!(player.entity.pos.y > ground);
        step_player(&mut player, &tuning, ground, false, 1.0 / 60.0);
        assert_eq!(player.velocity, 0.0);
    }

    #[test]
    fn test_walk_cycle_while_grounded() {
        let (tuning, mut player, ground) = setup();
        let interval = tuning.player_frame_interval;
        step_player(&mut player, &tuning, ground, false, interval);
        assert_eq!(player.entity.frame_index, 1);
        step_player(&mut player, &tuning, ground, false, interval);
        assert_eq!(player.entity.frame_index, 2);
    }

    proptest! {
        #[test]
        fn grounded_player_has_zero_velocity(dt in 0.0f64..1.0, start_vel in -1000.0f64..1000.0) {
            let (tuning, mut player, ground) = setup();
            player.velocity = start_vel;
            step_player(&mut player, &tuning, ground, false, dt);
            prop_assert_eq!(player.velocity, 0.0);
            prop_assert!(!player.airborne);
        }

        #[test]
        fn airborne_velocity_increases(dt in 0.001f64..0.05, height in 100.0f64..300.0) {
            let (tuning, mut player, ground) = setup();
            player.entity.pos.y = ground - height;
            player.airborne = true;
            let mut last = player.velocity;
            while !player.is_grounded(ground) {
                step_player(&mut player, &tuning, ground, false, dt);
                prop_assert!(player.velocity > last);
                last = player.velocity;
            }
        }
    }
}
