//! Sprint toggle and per-frame speed selection.

use crate::config::ControllerConfig;

/// Edge-driven sprint toggle gated by forward movement.
///
/// Pressing the sprint button flips the toggle. Forward input that is not
/// strictly positive forces the toggle off, so sprinting never survives a
/// stop or a backpedal; re-engaging requires another press.
#[derive(Clone, Copy, Debug, Default)]
pub struct SprintToggle {
    can_sprint: bool,
}

impl SprintToggle {
    /// Advance one frame.
    ///
    /// Returns whether the body sprints this frame: toggle on AND forward
    /// input strictly positive. Purely combinational plus this one bit of
    /// memory; there is no error path.
    pub fn update(&mut self, pressed_this_frame: bool, forward_input: f32) -> bool {
        if pressed_this_frame {
            self.can_sprint = !self.can_sprint;
        }
        if forward_input <= 0.0 {
            self.can_sprint = false;
        }
        self.can_sprint && forward_input > 0.0
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.can_sprint
    }
}

/// Pure mode-flags → scalar speed. First match wins: sprint, then crouch,
/// then walk; sprint and crouch are never simultaneously selectable because
/// the sprint check precedes the crouch check.
#[inline]
pub fn select_speed(is_sprinting: bool, is_crouching: bool, config: &ControllerConfig) -> f32 {
    if is_sprinting {
        config.sprint_speed
    } else if is_crouching {
        config.crouch_speed
    } else {
        config.walk_speed
    }
}
