//! The locomotion controller: per-tick orchestration of every sub-behavior
//! against the shared motion state, ending in one collision-resolved move.

use crate::{
    body::{CameraRig, PhysicsBody},
    collision::Vec3,
    config::ControllerConfig,
    crouch::CrouchTransition,
    headbob,
    input::TickInput,
    jump, look, slide,
    speed::{self, SprintToggle},
    state::MotionState,
};

/// First-person locomotion controller.
///
/// Owns the motion state and the sub-behavior machines; the physics body and
/// camera rig collaborators are borrowed exclusively for the duration of each
/// [`tick`](Self::tick). One tick per rendered frame, single-threaded; there
/// is no other writer of the state.
pub struct LocomotionController {
    config: ControllerConfig,
    state: MotionState,
    sprint: SprintToggle,
    crouch: CrouchTransition,
    base_cam_y: f32,
}

impl LocomotionController {
    /// Build a controller. The camera rig's initial local height becomes the
    /// headbob baseline.
    pub fn new(config: ControllerConfig, camera: &CameraRig) -> Self {
        Self {
            config,
            state: MotionState::new(),
            sprint: SprintToggle::default(),
            crouch: CrouchTransition::new(),
            base_cam_y: camera.local_position.y,
        }
    }

    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Global movement gate. While disabled, ticks refresh the grounded flag
    /// and nothing else; the body receives no move commands.
    pub fn set_movement_enabled(&mut self, enabled: bool) {
        self.state.can_move = enabled;
    }

    /// Advance one frame.
    ///
    /// Order is fixed: horizontal compose, look, jump, crouch, slope
    /// classification, headbob, then gravity/slide and the final commit.
    /// Jump must precede gravity and slide because it overwrites the vertical
    /// component they then adjust.
    pub fn tick(
        &mut self,
        input: &TickInput,
        dt: f32,
        body: &mut dyn PhysicsBody,
        camera: &mut CameraRig,
    ) {
        self.state.is_grounded = body.is_grounded();
        if !self.state.can_move {
            return;
        }

        self.compose_horizontal(input, body);
        look::apply_look(&mut self.state, &self.config, input.look_delta, body, camera);
        jump::handle_jump(&mut self.state, &self.config, input.jump_pressed, body);
        self.handle_crouch(input, dt, body, camera);
        slide::detect(&mut self.state, body);
        headbob::advance(&mut self.state, &self.config, dt, self.base_cam_y, camera);
        self.apply_final(dt, body);
    }

    /// Sprint resolution, speed selection and the horizontal move vector in
    /// the body's local forward/right basis. The previous frame's vertical
    /// component is preserved untouched here.
    fn compose_horizontal(&mut self, input: &TickInput, body: &dyn PhysicsBody) {
        let forward_input = input.move_axis.y;
        self.state.is_moving_forward = forward_input > 0.0;
        self.state.is_sprinting = self.sprint.update(input.sprint_pressed, forward_input);
        self.state.current_speed = speed::select_speed(
            self.state.is_sprinting,
            self.state.is_crouching,
            &self.config,
        );

        let forward = body.rotation() * Vec3::new(0.0, 0.0, -1.0);
        let right = body.rotation() * Vec3::new(1.0, 0.0, 0.0);
        let vertical = self.state.move_dir.y;
        self.state.move_dir = forward * (forward_input * self.state.current_speed)
            + right * (input.move_axis.x * self.state.current_speed);
        self.state.move_dir.y = vertical;
    }

    /// Advance an in-flight transition, or check a start request. A tick
    /// never does both, so a freshly started transition first interpolates on
    /// the following tick.
    fn handle_crouch(
        &mut self,
        input: &TickInput,
        dt: f32,
        body: &mut dyn PhysicsBody,
        camera: &CameraRig,
    ) {
        if self.crouch.is_active() {
            self.crouch.advance(&mut self.state, &self.config, dt, body);
        } else if input.crouch_pressed && body.is_grounded() {
            self.crouch
                .try_begin(&mut self.state, &self.config, body, camera);
        }
    }

    /// Gravity, slide force, and the final collision-resolved move.
    fn apply_final(&mut self, dt: f32, body: &mut dyn PhysicsBody) {
        if !self.state.is_grounded {
            self.state.move_dir.y -= self.config.gravity * dt;
        }

        if self.state.is_sliding {
            // Outward-and-down push from the recorded surface normal. The
            // vertical sign flip is deliberate and load-bearing: this is not
            // a tangent projection.
            let n = self.state.hit_point_normal;
            self.state.move_dir += Vec3::new(n.x, -n.y, n.z) * self.config.slope_speed;
        }

        body.move_by(self.state.move_dir * dt);
    }
}
