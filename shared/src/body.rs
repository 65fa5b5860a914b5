//! Collaborator contracts: the physics body the controller moves and the
//! camera rig it poses.
//!
//! The controller never constructs these; the host injects them as exclusive
//! borrows on every tick, so a controller cannot run without both present.

use crate::collision::{Quat, RayHit, Vec3};

/// Capsule-shaped physics body consumed by the controller.
///
/// Implementations resolve `move_by` against their world (see
/// `collision::KinematicBody`); the controller only decides the delta.
pub trait PhysicsBody {
    /// Walkable-surface contact, queried fresh (not cached across frames).
    fn is_grounded(&self) -> bool;

    /// World-space position of the body origin.
    fn position(&self) -> Vec3;

    /// World-space orientation of the body.
    fn rotation(&self) -> Quat;

    /// Compound an incremental rotation about world up onto the current
    /// orientation. Positive angles are mathematically positive (counter-
    /// clockwise viewed from above).
    fn rotate_yaw(&mut self, angle: f32);

    /// Total capsule height (meters).
    fn height(&self) -> f32;
    fn set_height(&mut self, height: f32);

    /// Capsule-center offset from the body origin.
    fn center(&self) -> Vec3;
    fn set_center(&mut self, center: Vec3);

    /// Steepest walkable surface angle (degrees from horizontal).
    fn slope_limit_deg(&self) -> f32;

    /// Nearest intersection of a ray with the world, if any within
    /// `max_distance`. `dir` must be unit length.
    fn cast_ray(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit>;

    /// Collision-resolved displacement by `delta`.
    fn move_by(&mut self, delta: Vec3);
}

/// Camera collaborator state: a local pose relative to the body origin.
///
/// The controller writes the vertical position (headbob) and pitch; the host
/// applies the pose to its camera however it renders.
#[derive(Clone, Copy, Debug)]
pub struct CameraRig {
    /// Camera position relative to the body origin.
    pub local_position: Vec3,
    /// Local pitch in degrees; positive looks down. Pitch only, no roll or
    /// yaw on the camera itself.
    pub pitch_deg: f32,
}

impl CameraRig {
    pub fn new(local_position: Vec3) -> Self {
        Self {
            local_position,
            pitch_deg: 0.0,
        }
    }
}
