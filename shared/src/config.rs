//! Construction-time tunables for the locomotion controller.
//!
//! One flat struct of scalars: no files, no wire format. The defaults are a
//! playable baseline; games override per-character values at construction.

use crate::collision::Vec3;
use crate::settings::{DEFAULT_WALK_SPEED, GRAVITY_MPS2};

/// Tunable parameters of a locomotion controller, supplied at construction.
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    /// Walking speed (m/s).
    pub walk_speed: f32,
    /// Sprinting speed (m/s).
    pub sprint_speed: f32,
    /// Crouched movement speed (m/s).
    pub crouch_speed: f32,
    /// Magnitude of the supplemental slide displacement on steep slopes.
    pub slope_speed: f32,

    /// Gravity magnitude (m/s², positive).
    pub gravity: f32,
    /// Vertical speed set on a successful jump (m/s).
    pub jump_force: f32,

    /// Total capsule height while standing (meters).
    pub standing_height: f32,
    /// Total capsule height while crouched (meters).
    pub crouching_height: f32,
    /// Capsule-center offset from the body origin while standing.
    pub standing_center: Vec3,
    /// Capsule-center offset from the body origin while crouched.
    pub crouching_center: Vec3,
    /// Duration of the crouch/stand transition (seconds).
    pub time_to_crouch: f32,

    /// Headbob phase speed while walking (radians/s).
    pub walk_bob_speed: f32,
    /// Headbob amplitude while walking (meters).
    pub walk_bob_amount: f32,
    /// Headbob phase speed while sprinting (radians/s).
    pub sprint_bob_speed: f32,
    /// Headbob amplitude while sprinting (meters).
    pub sprint_bob_amount: f32,
    /// Headbob phase speed while crouched (radians/s).
    pub crouch_bob_speed: f32,
    /// Headbob amplitude while crouched (meters).
    pub crouch_bob_amount: f32,

    /// Yaw sensitivity multiplier (applied after the fixed look divisor).
    pub look_speed_x: f32,
    /// Pitch sensitivity multiplier (applied after the fixed look divisor).
    pub look_speed_y: f32,
    /// Pitch clamp: the camera pitch stays within ±this many degrees.
    pub upper_look_limit: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_speed: DEFAULT_WALK_SPEED,
            sprint_speed: 8.0,
            crouch_speed: 2.5,
            slope_speed: 6.0,

            gravity: GRAVITY_MPS2,
            jump_force: 5.0,

            standing_height: 2.0,
            crouching_height: 1.0,
            standing_center: Vec3::new(0.0, 0.0, 0.0),
            crouching_center: Vec3::new(0.0, -0.5, 0.0),
            time_to_crouch: 0.25,

            walk_bob_speed: 14.0,
            walk_bob_amount: 0.05,
            sprint_bob_speed: 18.0,
            sprint_bob_amount: 0.11,
            crouch_bob_speed: 8.0,
            crouch_bob_amount: 0.025,

            look_speed_x: 2.0,
            look_speed_y: 2.0,
            upper_look_limit: 80.0,
        }
    }
}
