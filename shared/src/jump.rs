//! Grounded-gated jump impulse.

use crate::{body::PhysicsBody, config::ControllerConfig, state::MotionState};

/// Inject the jump impulse on a jump edge while grounded.
///
/// Grounded is queried fresh off the body rather than read from the cached
/// frame flag. The impulse overwrites any existing vertical component rather
/// than summing. Airborne presses are silently dropped.
pub fn handle_jump(
    state: &mut MotionState,
    config: &ControllerConfig,
    jump_pressed: bool,
    body: &dyn PhysicsBody,
) {
    let can_jump = body.is_grounded();
    if can_jump && jump_pressed {
        state.move_dir.y = config.jump_force;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{KinematicBody, StaticShape, Vec3};
    use crate::settings::DEFAULT_SKIN;

    fn grounded_body() -> KinematicBody {
        let ground = StaticShape::Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            dist: 0.0,
        };
        KinematicBody::new(vec![ground], Vec3::new(0.0, 1.0 + DEFAULT_SKIN, 0.0), 0.4, 2.0)
    }

    fn airborne_body() -> KinematicBody {
        KinematicBody::new(Vec::new(), Vec3::new(0.0, 10.0, 0.0), 0.4, 2.0)
    }

    #[test]
    fn grounded_press_overwrites_vertical_component() {
        let mut state = MotionState::new();
        let config = ControllerConfig::default();
        state.move_dir.y = -3.0;

        handle_jump(&mut state, &config, true, &grounded_body());
        // Overwritten, not summed with the downward carry-over.
        assert_eq!(state.move_dir.y, config.jump_force);
    }

    #[test]
    fn airborne_press_is_silently_dropped() {
        let mut state = MotionState::new();
        let config = ControllerConfig::default();
        state.move_dir.y = -3.0;

        handle_jump(&mut state, &config, true, &airborne_body());
        assert_eq!(state.move_dir.y, -3.0);
    }

    #[test]
    fn no_press_means_no_change() {
        let mut state = MotionState::new();
        let config = ControllerConfig::default();
        state.move_dir.y = 1.5;

        handle_jump(&mut state, &config, false, &grounded_body());
        assert_eq!(state.move_dir.y, 1.5);
    }
}
