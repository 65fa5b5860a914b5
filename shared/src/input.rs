//! One frame of collaborator input.
//!
//! The host (a Bevy system in the demo client, a plain loop in tests) samples
//! its input source once per frame and hands the controller this snapshot.
//! Button fields are one-shot "pressed this frame" edges, not held state.

use crate::collision::Vec2;

/// Input snapshot consumed by a single controller tick.
#[derive(Clone, Copy, Debug)]
pub struct TickInput {
    /// Directional input: x = strafe (right positive), y = forward positive.
    /// Expected in [-1, 1] per axis.
    pub move_axis: Vec2,
    /// Look delta: x = yaw delta, y = pitch delta (raw device units).
    pub look_delta: Vec2,
    /// Sprint toggle was pressed this frame.
    pub sprint_pressed: bool,
    /// Jump was pressed this frame.
    pub jump_pressed: bool,
    /// Crouch/stand was pressed this frame.
    pub crouch_pressed: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            move_axis: Vec2::zeros(),
            look_delta: Vec2::zeros(),
            sprint_pressed: false,
            jump_pressed: false,
            crouch_pressed: false,
        }
    }
}

impl TickInput {
    /// Snapshot with a movement direction and no button edges.
    pub fn moving(x: f32, y: f32) -> Self {
        Self {
            move_axis: Vec2::new(x, y),
            ..Self::default()
        }
    }
}
