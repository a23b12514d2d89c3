//! Platform input handling
//!
//! Hosts report which buttons are held; the simulation wants presses. The
//! latches here turn level signals into one-frame edges.

use crate::sim::{FrameInput, Viewport};

/// Detects the up-to-down transition of a single button
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonLatch {
    held: bool,
}

impl ButtonLatch {
    /// Feed the current level; true only on the frame it goes down
    pub fn update(&mut self, down: bool) -> bool {
        let pressed = down && !self.held;
        self.held = down;
        pressed
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Buttons currently held down
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldButtons {
    pub jump: bool,
    pub shield: bool,
    pub retry: bool,
}

/// One latch per game button
#[derive(Debug, Clone, Default)]
pub struct InputLatches {
    jump: ButtonLatch,
    shield: ButtonLatch,
    retry: ButtonLatch,
}

impl InputLatches {
    /// Sample held buttons into this frame's input
    pub fn sample(&mut self, held: &HeldButtons, viewport: Option<Viewport>) -> FrameInput {
        FrameInput {
            jump: self.jump.update(held.jump),
            shield: self.shield.update(held.shield),
            retry: self.retry.update(held.retry),
            viewport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_fires_once_per_press() {
        let mut latch = ButtonLatch::default();
        assert!(!latch.update(false));
        assert!(latch.update(true));
        assert!(!latch.update(true));
        assert!(latch.is_held());
        assert!(!latch.update(false));
        assert!(latch.update(true));
    }

    #[test]
    fn test_latches_are_independent() {
        let mut latches = InputLatches::default();
        let held = HeldButtons {
            jump: true,
            ..Default::default()
        };
        let first = latches.sample(&held, None);
        assert!(first.jump && !first.shield && !first.retry);

        let held = HeldButtons {
            jump: true,
            shield: true,
            retry: false,
        };
        let second = latches.sample(&held, None);
        assert!(!second.jump);
        assert!(second.shield);
    }
}
