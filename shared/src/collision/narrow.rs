//! Thin wrappers over parry narrow-phase queries.
//!
//! Two query families are exposed:
//! - capsule shape casts (time-of-impact), used by the sweep-and-slide step
//!   and the grounded probe
//! - ray casts, used by the slide detector and the crouch clearance check
//!
//! Both return world-space normals oriented to oppose the query direction.

use nalgebra as na;
use rapier3d::parry::{
    query::{self, Ray, RayCast, ShapeCastOptions},
    shape::{Capsule, Shape, SharedShape},
};

use super::types::{Iso, MoveHit, RayHit, StaticShape, Vec3};

/// Resolve a [`StaticShape`] into a parry shape handle plus its world pose.
fn shape_parts(shape: &StaticShape) -> (SharedShape, Iso) {
    match *shape {
        StaticShape::Plane { normal, dist } => {
            // Plane equation in world space: normal ⋅ x = dist. Parry's
            // HalfSpace sits at its pose origin, so place it at normal * dist.
            let unit_n = na::Unit::new_normalize(normal);
            let origin = normal * dist;
            let iso = Iso::from_parts(
                na::Translation3::new(origin.x, origin.y, origin.z),
                na::UnitQuaternion::identity(),
            );
            (SharedShape::halfspace(unit_n), iso)
        }
        StaticShape::Cuboid {
            half_extents,
            transform,
        } => (
            SharedShape::cuboid(half_extents.x, half_extents.y, half_extents.z),
            transform.iso(),
        ),
        StaticShape::Sphere { radius, transform } => {
            // Rotation is irrelevant for a ball.
            (SharedShape::ball(radius), transform.iso())
        }
        StaticShape::Capsule {
            radius,
            half_height,
            transform,
        } => (SharedShape::capsule_y(half_height, radius), transform.iso()),
    }
}

/// Cast a moving Y-aligned capsule against a single static shape and return
/// the earliest hit (if any).
///
/// - `capsule_iso`: the capsule's starting isometry in world space.
/// - `capsule`: the capsule shape (Y-aligned) being swept.
/// - `vel`: the world-space translation vector for this cast (meters).
/// - `max_toi`: the maximum fraction of `vel` to consider (typically 1.0).
/// - `shape`: the static shape to test against.
pub fn cast_capsule_against_static(
    capsule_iso: Iso,
    capsule: &Capsule,
    vel: Vec3,
    max_toi: f32,
    shape: &StaticShape,
) -> Option<MoveHit> {
    let (static_shape, static_iso) = shape_parts(shape);

    let mut opts = ShapeCastOptions::with_max_time_of_impact(max_toi);
    opts.stop_at_penetration = true;

    let hit = query::cast_shapes(
        &capsule_iso,
        &vel,
        capsule as &dyn Shape,
        &static_iso,
        &na::Vector3::zeros(),
        &*static_shape,
        opts,
    )
    .ok()??;

    // Use the normal on the moving shape; ensure it opposes the motion.
    let mut n = hit.normal1.into_inner();
    if n.dot(&vel) > 0.0 {
        n = -n;
    }
    Some(MoveHit {
        normal: n,
        fraction: hit.time_of_impact,
    })
}

/// Iterate over a list of static shapes and return the earliest capsule hit
/// (if any), selecting the minimum time-of-impact across all shapes.
pub fn earliest_capsule_hit(
    capsule_iso: Iso,
    capsule: &Capsule,
    vel: Vec3,
    max_toi: f32,
    statics: &[StaticShape],
) -> Option<MoveHit> {
    let mut best: Option<MoveHit> = None;
    for s in statics {
        if let Some(hit) = cast_capsule_against_static(capsule_iso, capsule, vel, max_toi, s) {
            if best.as_ref().map_or(true, |b| hit.fraction < b.fraction) {
                best = Some(hit);
            }
        }
    }
    best
}

/// Cast a ray against a single static shape.
///
/// `dir` must be unit length so the returned intersection time is a distance.
pub fn cast_ray_against_static(
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
    shape: &StaticShape,
) -> Option<RayHit> {
    let (static_shape, static_iso) = shape_parts(shape);
    let ray = Ray::new(na::Point3::new(origin.x, origin.y, origin.z), dir);

    let hit = static_shape.cast_ray_and_get_normal(&static_iso, &ray, max_distance, true)?;

    let mut n = hit.normal;
    if n.dot(&dir) > 0.0 {
        n = -n;
    }
    Some(RayHit {
        point: origin + dir * hit.time_of_impact,
        normal: n,
        distance: hit.time_of_impact,
    })
}

/// Iterate over a list of static shapes and return the nearest ray hit (if any).
pub fn earliest_ray_hit(
    origin: Vec3,
    dir: Vec3,
    max_distance: f32,
    statics: &[StaticShape],
) -> Option<RayHit> {
    let mut best: Option<RayHit> = None;
    for s in statics {
        if let Some(hit) = cast_ray_against_static(origin, dir, max_distance, s) {
            if best.as_ref().map_or(true, |b| hit.distance < b.distance) {
                best = Some(hit);
            }
        }
    }
    best
}
