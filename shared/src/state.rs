//! Shared mutable frame state of the locomotion controller.

use crate::collision::Vec3;

/// The one record every sub-behavior reads and writes during a tick.
///
/// Owned exclusively by the controller and recreated once per controller
/// lifetime. `move_dir` carries its vertical component across frames as a
/// velocity-like accumulator for gravity, jump and slide; the horizontal
/// components are rebuilt from input every tick.
#[derive(Clone, Copy, Debug)]
pub struct MotionState {
    /// Global gate: when false no sub-behavior runs and the body receives no
    /// new impulses.
    pub can_move: bool,
    /// Refreshed once per frame from the body; read-only to sub-behaviors.
    pub is_grounded: bool,
    /// Forward input was strictly positive this frame.
    pub is_moving_forward: bool,
    /// Sprint toggle on AND moving forward, re-derived every frame.
    pub is_sprinting: bool,
    /// Settled crouch posture (not the in-flight transition).
    pub is_crouching: bool,
    /// A crouch/stand transition is in flight; guards re-entry.
    pub during_crouch_anim: bool,
    /// Standing on a surface steeper than the body's slope limit.
    pub is_sliding: bool,
    /// Speed selected for this frame; recomputed, never carried over.
    pub current_speed: f32,
    /// Movement vector: x/z rebuilt from input each frame, y accumulated.
    pub move_dir: Vec3,
    /// Headbob phase accumulator (radians). Never reset while inactive.
    pub headbob_timer: f32,
    /// Camera pitch in degrees; positive looks down.
    pub rot_x: f32,
    /// Surface normal recorded by the last successful slope probe. Stale
    /// between hits; only meaningful while `is_sliding` is true.
    pub hit_point_normal: Vec3,
}

impl MotionState {
    pub fn new() -> Self {
        Self {
            can_move: true,
            is_grounded: false,
            is_moving_forward: false,
            is_sprinting: false,
            is_crouching: false,
            during_crouch_anim: false,
            is_sliding: false,
            current_speed: 0.0,
            move_dir: Vec3::zeros(),
            headbob_timer: 0.0,
            rot_x: 0.0,
            hit_point_normal: Vec3::zeros(),
        }
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::new()
    }
}
