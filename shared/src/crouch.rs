//! Crouch/stand transition state machine.
//!
//! A transition interpolates capsule height and center over multiple frames.
//! It is an explicit resumable record advanced once per tick: if ticks stop,
//! the transition holds its current fraction indefinitely. There is no
//! cancellation; a started transition always runs to completion, and re-entry
//! is prevented structurally by the active flag.

use crate::{
    body::{CameraRig, PhysicsBody},
    collision::Vec3,
    config::ControllerConfig,
    settings::CROUCH_CLEARANCE_PROBE,
    state::MotionState,
};

/// Live record of an in-flight crouch or stand transition.
#[derive(Clone, Copy, Debug)]
pub struct CrouchTransition {
    active: bool,
    elapsed: f32,
    start_height: f32,
    start_center: Vec3,
    target_height: f32,
    target_center: Vec3,
}

impl Default for CrouchTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl CrouchTransition {
    pub fn new() -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            start_height: 0.0,
            start_center: Vec3::zeros(),
            target_height: 0.0,
            target_center: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Try to start a transition toward the opposite of the current posture.
    ///
    /// The caller has already checked eligibility (not mid-transition, and
    /// grounded). The only rejection left is the clearance check: standing up
    /// with an obstruction within `CROUCH_CLEARANCE_PROBE` straight above the
    /// camera is silently refused — no state change, no retry, the player
    /// must press again on a later frame once unobstructed. Crouching down is
    /// never obstruction-checked.
    pub fn try_begin(
        &mut self,
        state: &mut MotionState,
        config: &ControllerConfig,
        body: &dyn PhysicsBody,
        camera: &CameraRig,
    ) {
        if state.is_crouching {
            let eye = body.position() + camera.local_position;
            let up = Vec3::new(0.0, 1.0, 0.0);
            if body.cast_ray(eye, up, CROUCH_CLEARANCE_PROBE).is_some() {
                return;
            }
        }

        self.elapsed = 0.0;
        self.start_height = body.height();
        self.start_center = body.center();
        (self.target_height, self.target_center) = if state.is_crouching {
            (config.standing_height, config.standing_center)
        } else {
            (config.crouching_height, config.crouching_center)
        };
        self.active = true;
        state.during_crouch_anim = true;
    }

    /// Advance an in-flight transition by `dt`.
    ///
    /// While `elapsed < time_to_crouch` the capsule lerps from the values
    /// captured at start toward the target. On completion the geometry snaps
    /// exactly to the target values (no residual interpolation error), the
    /// posture flag flips and the re-entry guard clears.
    pub fn advance(
        &mut self,
        state: &mut MotionState,
        config: &ControllerConfig,
        dt: f32,
        body: &mut dyn PhysicsBody,
    ) {
        if !self.active {
            return;
        }

        self.elapsed += dt;
        if self.elapsed >= config.time_to_crouch {
            body.set_height(self.target_height);
            body.set_center(self.target_center);
            state.is_crouching = !state.is_crouching;
            state.during_crouch_anim = false;
            self.active = false;
        } else {
            let t = self.elapsed / config.time_to_crouch;
            body.set_height(self.start_height + (self.target_height - self.start_height) * t);
            body.set_center(self.start_center.lerp(&self.target_center, t));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::{KinematicBody, StaticShape, Transform, Vec3};
    use crate::settings::DEFAULT_SKIN;

    fn ground() -> Vec<StaticShape> {
        vec![StaticShape::Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            dist: 0.0,
        }]
    }

    fn fixture(statics: Vec<StaticShape>) -> (MotionState, ControllerConfig, KinematicBody, CameraRig) {
        (
            MotionState::new(),
            ControllerConfig::default(),
            KinematicBody::new(statics, Vec3::new(0.0, 1.0 + DEFAULT_SKIN, 0.0), 0.4, 2.0),
            CameraRig::new(Vec3::new(0.0, 0.8, 0.0)),
        )
    }

    #[test]
    fn begin_captures_state_and_raises_guard() {
        let (mut state, config, mut body, camera) = fixture(ground());
        let mut transition = CrouchTransition::new();

        transition.try_begin(&mut state, &config, &body, &camera);
        assert!(transition.is_active());
        assert!(state.during_crouch_anim);
        // Geometry untouched until the first advance.
        assert_eq!(body.height(), 2.0);

        // Partway through, the capsule sits between start and target.
        transition.advance(&mut state, &config, 0.1, &mut body);
        let t = 0.1 / config.time_to_crouch;
        let expected = 2.0 + (config.crouching_height - 2.0) * t;
        assert!((body.height() - expected).abs() < 1.0e-5);
        assert!(state.during_crouch_anim);
        assert!(!state.is_crouching);
    }

    #[test]
    fn completion_snaps_exactly_and_flips_posture() {
        let (mut state, config, mut body, camera) = fixture(ground());
        let mut transition = CrouchTransition::new();

        transition.try_begin(&mut state, &config, &body, &camera);
        let steps = (config.time_to_crouch / 0.05).round() as u32;
        for _ in 0..steps {
            transition.advance(&mut state, &config, 0.05, &mut body);
        }

        // Exact equality: completion snaps rather than lerping to ~target.
        assert_eq!(body.height(), config.crouching_height);
        assert_eq!(body.center(), config.crouching_center);
        assert!(state.is_crouching);
        assert!(!state.during_crouch_anim);
        assert!(!transition.is_active());
    }

    #[test]
    fn paused_ticking_holds_the_current_fraction() {
        let (mut state, config, mut body, camera) = fixture(ground());
        let mut transition = CrouchTransition::new();

        transition.try_begin(&mut state, &config, &body, &camera);
        transition.advance(&mut state, &config, 0.1, &mut body);
        let frozen = body.height();

        // No ticks → no progress; the next tick resumes from where it was.
        assert!(transition.is_active());
        transition.advance(&mut state, &config, 0.05, &mut body);
        assert!(body.height() < frozen);
    }

    #[test]
    fn stand_up_is_refused_under_a_ceiling() {
        let mut statics = ground();
        // Slab 0.5 m above the camera (camera world y ≈ 1.8).
        statics.push(StaticShape::Cuboid {
            half_extents: Vec3::new(2.0, 0.1, 2.0),
            transform: Transform::new(
                Vec3::new(0.0, 2.4, 0.0),
                crate::collision::Quat::identity(),
            ),
        });
        let (mut state, config, mut body, camera) = fixture(statics);
        let mut transition = CrouchTransition::new();
        state.is_crouching = true;
        body.set_height(config.crouching_height);
        body.set_center(config.crouching_center);

        transition.try_begin(&mut state, &config, &body, &camera);
        // Silent rejection: nothing started, nothing changed.
        assert!(!transition.is_active());
        assert!(!state.during_crouch_anim);
        assert!(state.is_crouching);
        assert_eq!(body.height(), config.crouching_height);
    }

    #[test]
    fn crouch_down_ignores_the_ceiling() {
        let mut statics = ground();
        statics.push(StaticShape::Cuboid {
            half_extents: Vec3::new(2.0, 0.1, 2.0),
            transform: Transform::new(
                Vec3::new(0.0, 2.4, 0.0),
                crate::collision::Quat::identity(),
            ),
        });
        let (mut state, config, body, camera) = fixture(statics);
        let mut transition = CrouchTransition::new();

        // Standing under the slab, crouching down must start regardless.
        transition.try_begin(&mut state, &config, &body, &camera);
        assert!(transition.is_active());
    }
}
