//! Headbob: a phase accumulator driving the camera's vertical offset.

use crate::{
    body::CameraRig, config::ControllerConfig, settings::HEADBOB_DEADZONE, state::MotionState,
};

/// Advance the headbob phase and pose the camera.
///
/// Active only when grounded and either horizontal axis of `move_dir` exceeds
/// the deadzone. Parameter priority is crouch, then sprint, then walk. When
/// inactive the phase does not reset and the camera offset is left wherever
/// the last active frame put it, so movement resumes without a visible snap.
pub fn advance(
    state: &mut MotionState,
    config: &ControllerConfig,
    dt: f32,
    base_cam_y: f32,
    camera: &mut CameraRig,
) {
    if !state.is_grounded {
        return;
    }
    if state.move_dir.x.abs() > HEADBOB_DEADZONE || state.move_dir.z.abs() > HEADBOB_DEADZONE {
        let (bob_speed, bob_amount) = if state.is_crouching {
            (config.crouch_bob_speed, config.crouch_bob_amount)
        } else if state.is_sprinting {
            (config.sprint_bob_speed, config.sprint_bob_amount)
        } else {
            (config.walk_bob_speed, config.walk_bob_amount)
        };
        state.headbob_timer += dt * bob_speed;
        camera.local_position.y = base_cam_y + state.headbob_timer.sin() * bob_amount;
    }
}
