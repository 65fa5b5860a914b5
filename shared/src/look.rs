//! Look handling: clamped camera pitch plus incremental body yaw.

use crate::{
    body::{CameraRig, PhysicsBody},
    collision::Vec2,
    config::ControllerConfig,
    settings::LOOK_DELTA_DIVISOR,
    state::MotionState,
};

/// Apply one frame of look input.
///
/// Pitch accumulates into `state.rot_x` (degrees, positive looks down), is
/// clamped to ±`upper_look_limit`, and lands on the camera as a pitch-only
/// local rotation. Yaw is compounded onto the body's orientation about world
/// up, never recomputed from absolute state, so repeated small deltas
/// reproduce a single large one up to floating-point accumulation.
pub fn apply_look(
    state: &mut MotionState,
    config: &ControllerConfig,
    look_delta: Vec2,
    body: &mut dyn PhysicsBody,
    camera: &mut CameraRig,
) {
    state.rot_x -= look_delta.y / LOOK_DELTA_DIVISOR * config.look_speed_y;
    state.rot_x = state
        .rot_x
        .clamp(-config.upper_look_limit, config.upper_look_limit);
    camera.pitch_deg = state.rot_x;

    // Mouse-right (positive x) turns the body clockwise viewed from above,
    // which is a negative rotation about world +Y.
    let yaw_deg = look_delta.x / LOOK_DELTA_DIVISOR * config.look_speed_x;
    body.rotate_yaw(-yaw_deg.to_radians());
}
