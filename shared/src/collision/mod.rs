/*!
Collision root module.

This module implements the concrete physics-body collaborator: a kinematic
capsule resolved against static world shapes using parry narrow-phase queries
(via the `rapier3d::parry` re-export). The code is split for clarity:

- types:     shared data types (Transform, StaticShape, CapsuleSpec, etc.)
- narrow:    thin wrappers over parry queries (TOI shape casts, ray casts)
- kinematic: sweep-and-slide movement step
- body:      `KinematicBody`, the `PhysicsBody` implementation
*/

pub mod body;
pub mod kinematic;
pub mod narrow;
pub mod types;

// Re-export commonly used types and functions.
pub use body::KinematicBody;
pub use kinematic::{MoveRequest, move_capsule};
pub use types::{
    CapsuleSpec, MoveHit, MoveResult, Quat, RayHit, StaticShape, Transform, Vec2, Vec3,
};

/// Convenience: build a `StaticShape::Plane` from a world-space plane pose:
/// - normal = rotation * +Y
/// - dist = dot(normal, translation)
#[inline]
pub fn plane_from_pose(rotation: Quat, translation: Vec3) -> StaticShape {
    let normal = rotation * Vec3::new(0.0, 1.0, 0.0);
    let dist = normal.dot(&translation);
    StaticShape::Plane { normal, dist }
}

/// Convenience: build a `StaticShape::Cuboid` with given half extents and pose.
#[inline]
pub fn cuboid_from_pose(half_extents: Vec3, translation: Vec3, rotation: Quat) -> StaticShape {
    StaticShape::Cuboid {
        half_extents,
        transform: Transform {
            translation,
            rotation,
        },
    }
}
