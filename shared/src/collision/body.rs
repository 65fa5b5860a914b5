//! Concrete physics-body collaborator: a kinematic capsule resolved against a
//! list of static world shapes.
//!
//! The body owns the static world and its own capsule geometry. Movement is
//! collision-resolved through [`move_capsule`]; grounded contact is a fresh
//! short downward capsule probe on every query, so callers always read the
//! current frame's truth rather than a cached flag.

use nalgebra as na;
use rapier3d::parry::shape::Capsule;

use super::{
    kinematic::{MoveRequest, move_capsule},
    narrow,
    types::{CapsuleSpec, Iso, MoveHit, Quat, RayHit, StaticShape, Vec3},
};
use crate::{
    body::PhysicsBody,
    settings::{DEFAULT_SLOPE_LIMIT_DEG, GROUND_PROBE_DISTANCE},
};

/// Kinematic capsule body for the locomotion controller.
///
/// Positions refer to the body origin (the point the controller moves and
/// rotates); the capsule itself sits at `position + center`, which lets a
/// crouch transition shrink the capsule downward while the origin stays put.
#[derive(Clone, Debug)]
pub struct KinematicBody {
    statics: Vec<StaticShape>,
    position: Vec3,
    rotation: Quat,
    radius: f32,
    height: f32,
    center: Vec3,
    slope_limit_deg: f32,
}

impl KinematicBody {
    pub fn new(statics: Vec<StaticShape>, position: Vec3, radius: f32, height: f32) -> Self {
        Self {
            statics,
            position,
            rotation: Quat::identity(),
            radius,
            height,
            center: Vec3::zeros(),
            slope_limit_deg: DEFAULT_SLOPE_LIMIT_DEG,
        }
    }

    pub fn with_slope_limit(mut self, degrees: f32) -> Self {
        self.slope_limit_deg = degrees;
        self
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// World-space position of the capsule's geometric center.
    #[inline]
    pub fn capsule_center(&self) -> Vec3 {
        self.position + self.center
    }

    #[inline]
    fn capsule_spec(&self) -> CapsuleSpec {
        CapsuleSpec::from_total_height(self.radius, self.height)
    }

    /// Short downward capsule cast classifying ground contact.
    fn probe_ground(&self) -> Option<MoveHit> {
        let spec = self.capsule_spec();
        let capsule = Capsule::new_y(spec.half_height, spec.radius);
        let center = self.capsule_center();
        let iso: Iso = Iso::translation(center.x, center.y, center.z);
        narrow::earliest_capsule_hit(
            iso,
            &capsule,
            Vec3::new(0.0, -GROUND_PROBE_DISTANCE, 0.0),
            1.0,
            &self.statics,
        )
    }
}

impl PhysicsBody for KinematicBody {
    fn is_grounded(&self) -> bool {
        self.probe_ground().is_some()
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn rotate_yaw(&mut self, angle: f32) {
        // World-axis rotation composed onto the current orientation, so
        // repeated small increments reproduce one large increment exactly.
        self.rotation =
            na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), angle) * self.rotation;
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    fn slope_limit_deg(&self) -> f32 {
        self.slope_limit_deg
    }

    fn cast_ray(&self, origin: Vec3, dir: Vec3, max_distance: f32) -> Option<RayHit> {
        narrow::earliest_ray_hit(origin, dir, max_distance, &self.statics)
    }

    fn move_by(&mut self, delta: Vec3) {
        let res = move_capsule(
            &self.statics,
            MoveRequest::with_defaults(self.capsule_center(), delta, self.capsule_spec()),
        );
        self.position = res.end_pos - self.center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::Transform;
    use crate::settings::DEFAULT_SKIN;
    use std::f32::consts::FRAC_PI_2;

    fn ground() -> Vec<StaticShape> {
        vec![StaticShape::Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            dist: 0.0,
        }]
    }

    fn standing_body(statics: Vec<StaticShape>) -> KinematicBody {
        // 2 m capsule centered on the origin: resting origin height is 1.0.
        KinematicBody::new(statics, Vec3::new(0.0, 1.0 + DEFAULT_SKIN, 0.0), 0.4, 2.0)
    }

    #[test]
    fn grounded_iff_within_probe_distance() {
        let mut body = standing_body(ground());
        assert!(body.is_grounded());

        body.position.y = 5.0;
        assert!(!body.is_grounded());
    }

    #[test]
    fn move_by_is_collision_resolved() {
        let mut body = standing_body(ground());
        body.move_by(Vec3::new(0.0, -3.0, 0.0));
        // Ground stops the fall regardless of the requested delta.
        assert!((body.position().y - (1.0 + DEFAULT_SKIN)).abs() < 1.0e-2);
        assert!(body.is_grounded());
    }

    #[test]
    fn shrinking_capsule_clears_a_low_ceiling() {
        let mut statics = ground();
        // Ceiling slab with its underside at y = 1.4.
        statics.push(StaticShape::Cuboid {
            half_extents: Vec3::new(3.0, 0.1, 3.0),
            transform: Transform::new(Vec3::new(0.0, 1.5, 0.0), Quat::identity()),
        });
        let mut body = standing_body(statics);

        // Standing (2 m) the capsule cannot advance under the slab from
        // outside, but crouched (1 m, lowered center) its top sits at 1.0.
        body.set_height(1.0);
        body.set_center(Vec3::new(0.0, -0.5, 0.0));

        let head = body.capsule_center().y + 0.5;
        assert!(head < 1.4);
        body.move_by(Vec3::new(1.0, 0.0, 0.0));
        assert!((body.position().x - 1.0).abs() < 1.0e-3);
    }

    #[test]
    fn cast_ray_up_reports_ceiling() {
        let mut statics = ground();
        statics.push(StaticShape::Cuboid {
            half_extents: Vec3::new(3.0, 0.1, 3.0),
            transform: Transform::new(Vec3::new(0.0, 2.0, 0.0), Quat::identity()),
        });
        let body = standing_body(statics);

        let hit = body
            .cast_ray(
                Vec3::new(0.0, 1.5, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                1.0,
            )
            .expect("ceiling within probe range");
        assert!((hit.distance - 0.4).abs() < 1.0e-3);
        assert!(hit.normal.y < -0.99);
    }

    #[test]
    fn yaw_increments_compose_exactly() {
        let mut body = standing_body(ground());
        for _ in 0..90 {
            body.rotate_yaw(FRAC_PI_2 / 90.0);
        }
        let single = na::UnitQuaternion::from_axis_angle(&na::Vector3::y_axis(), FRAC_PI_2);
        assert!(body.rotation().angle_to(&single) < 1.0e-4);
    }
}
