/*!
Collision data types and math aliases shared by the collision submodules.

This module contains no algorithms. It defines the data exchanged between:
- narrow (parry time-of-impact and ray queries)
- kinematic (capsule sweep-and-slide)
- body (the concrete physics-body collaborator)
*/

use nalgebra as na;

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Quat = na::UnitQuaternion<f32>;
pub type Iso = na::Isometry3<f32>;

/// A rigid transform (isometry) in world space.
#[derive(Clone, Copy, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Convert to nalgebra `Isometry3` for use with parry narrow-phase queries.
    #[inline]
    pub fn iso(&self) -> Iso {
        Iso::from_parts(
            na::Translation3::new(self.translation.x, self.translation.y, self.translation.z),
            self.rotation,
        )
    }
}

/// Static collision shapes supported by the world.
///
/// - Plane: infinite plane in world space, represented by its unit normal and
///   offset (dist) satisfying: normal ⋅ x = dist.
/// - Cuboid: oriented box with half-extents in local space, placed by `transform`.
#[derive(Clone, Copy, Debug)]
pub enum StaticShape {
    Plane {
        /// World-space unit normal of the plane.
        normal: Vec3,
        /// Plane offset along the normal, i.e., normal ⋅ x = dist.
        dist: f32,
    },
    Cuboid {
        /// Local-space half-extents (hx, hy, hz).
        half_extents: Vec3,
        /// World-space pose of the cuboid.
        transform: Transform,
    },
    Sphere {
        /// Radius of the sphere in meters.
        radius: f32,
        /// World-space pose (translation used; rotation ignored).
        transform: Transform,
    },
    Capsule {
        /// Radius of the spherical caps and cylinder.
        radius: f32,
        /// Half of the cylinder length along the local +Y axis.
        half_height: f32,
        /// World-space pose of the capsule.
        transform: Transform,
    },
}

/// Capsule specification for the kinematic body.
///
/// half_height is the half-length of the cylinder section (aligned with +Y),
/// so the total capsule height is 2*half_height + 2*radius.
#[derive(Clone, Copy, Debug)]
pub struct CapsuleSpec {
    pub radius: f32,
    pub half_height: f32,
}

impl CapsuleSpec {
    /// Build the spec from a total capsule height: the cylinder section is
    /// whatever remains after both spherical caps.
    #[inline]
    pub fn from_total_height(radius: f32, height: f32) -> Self {
        Self {
            radius,
            half_height: (height * 0.5 - radius).max(0.0),
        }
    }
}

/// A single contact returned by a time-of-impact query during
/// sweep-and-slide or grounded probing.
#[derive(Clone, Copy, Debug)]
pub struct MoveHit {
    /// World-space contact normal on the moving shape.
    pub normal: Vec3,
    /// Fraction (0..1) of the tested translation where the hit occurred.
    pub fraction: f32,
}

/// Result of a kinematic movement step (after sweep-and-slide).
#[derive(Clone, Copy, Debug)]
pub struct MoveResult {
    /// Final capsule center position after applying the step and sliding.
    pub end_pos: Vec3,
    /// Information about the last hit encountered during the step (if any).
    pub last_hit: Option<MoveHit>,
    /// Remaining translation that could not be consumed (usually zero on success).
    pub remaining: Vec3,
}

/// Result of a ray query against the static world.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// World-space point where the ray struck the surface.
    pub point: Vec3,
    /// World-space surface normal at the hit.
    pub normal: Vec3,
    /// Distance from the ray origin to the hit, in meters.
    pub distance: f32,
}
