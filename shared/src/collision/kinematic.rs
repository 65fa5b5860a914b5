use nalgebra as na;
use rapier3d::parry::shape::Capsule;

use super::{
    narrow,
    types::{CapsuleSpec, Iso, MoveResult, StaticShape, Vec3},
};
use crate::settings::{DEFAULT_MAX_SLIDE_ITERATIONS, DEFAULT_SKIN, MIN_MOVE_SQ};

/// Parameters for a single kinematic movement attempt.
///
/// - Movement is expressed as a desired translation for this tick (meters).
/// - Collision is handled by shape-casting a Y-aligned capsule using parry's
///   TOI query, stopping at contact minus `skin`, and sliding along the
///   contact normal.
/// - The slide step iterates up to `max_iterations` to handle corners.
#[derive(Clone, Copy, Debug)]
pub struct MoveRequest {
    /// Starting world position of the capsule's center.
    pub start_pos: Vec3,
    /// Desired world-space translation for this step.
    pub desired_translation: Vec3,
    /// Capsule shape for the body.
    pub capsule: CapsuleSpec,
    /// Separation to keep from surfaces to avoid jitter (meters).
    pub skin: f32,
    /// Max iterations of slide resolution (for corners).
    pub max_iterations: u32,
}

impl MoveRequest {
    #[inline]
    pub fn with_defaults(start_pos: Vec3, desired_translation: Vec3, capsule: CapsuleSpec) -> Self {
        Self {
            start_pos,
            desired_translation,
            capsule,
            skin: DEFAULT_SKIN,
            max_iterations: DEFAULT_MAX_SLIDE_ITERATIONS,
        }
    }
}

/// Kinematic sweep-and-slide for a capsule against a set of static shapes.
///
/// Algorithm:
/// - Shape-cast the capsule (TOI) along the desired translation.
/// - On hit, move to just before the contact (minus `skin`) and slide along
///   the contact normal.
/// - Iterate to handle corners until `max_iterations` or the remaining motion
///   is negligible.
pub fn move_capsule(statics: &[StaticShape], req: MoveRequest) -> MoveResult {
    let mut pos = req.start_pos;
    let mut remaining = req.desired_translation;
    let mut last_hit = None;

    // Y-aligned capsule (body axis is +Y).
    let capsule_shape = Capsule::new_y(req.capsule.half_height, req.capsule.radius);

    for _ in 0..req.max_iterations {
        // Early out if remaining motion is too small to matter.
        if remaining.norm_squared() <= MIN_MOVE_SQ {
            break;
        }

        let len = remaining.norm();
        let dir = remaining / len;

        let capsule_iso: Iso = Iso::translation(pos.x, pos.y, pos.z);
        let vel = dir * len;

        match narrow::earliest_capsule_hit(capsule_iso, &capsule_shape, vel, 1.0, statics) {
            None => {
                // No hit → move fully and finish.
                pos += remaining;
                remaining = na::Vector3::zeros();
                last_hit = None;
                break;
            }
            Some(hit) => {
                // Travel up to the contact point (minus skin).
                let travel = (len * hit.fraction).max(0.0);
                let advance = dir * (travel - req.skin).max(0.0);
                pos += advance;

                // Slide along the hit plane: remove the normal component from
                // the leftover translation.
                let n = {
                    let n_len_sq = hit.normal.norm_squared();
                    if n_len_sq > 1.0e-12 {
                        hit.normal / n_len_sq.sqrt()
                    } else {
                        na::Vector3::zeros()
                    }
                };

                let leftover = dir * (len - travel);
                let slide = leftover - n * leftover.dot(&n);

                remaining = slide;
                last_hit = Some(hit);

                if slide.norm_squared() <= MIN_MOVE_SQ {
                    break;
                }
            }
        }
    }

    MoveResult {
        end_pos: pos,
        last_hit,
        remaining,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::types::Transform;
    use nalgebra as na;

    const CAPSULE: CapsuleSpec = CapsuleSpec {
        radius: 0.3,
        half_height: 0.5,
    };

    fn ground_plane() -> StaticShape {
        StaticShape::Plane {
            normal: Vec3::new(0.0, 1.0, 0.0),
            dist: 0.0,
        }
    }

    fn wall_at_x(x: f32) -> StaticShape {
        StaticShape::Cuboid {
            half_extents: Vec3::new(0.5, 3.0, 10.0),
            transform: Transform::new(Vec3::new(x, 0.0, 0.0), na::UnitQuaternion::identity()),
        }
    }

    #[test]
    fn free_move_consumes_full_translation() {
        let res = move_capsule(
            &[ground_plane()],
            MoveRequest::with_defaults(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(2.0, 0.0, 0.0),
                CAPSULE,
            ),
        );
        assert!((res.end_pos - Vec3::new(2.0, 1.0, 0.0)).norm() < 1.0e-4);
        assert!(res.last_hit.is_none());
        assert!(res.remaining.norm() < 1.0e-6);
    }

    #[test]
    fn blocked_move_stops_at_skin_distance() {
        // Wall face at x = 4.5; capsule radius 0.3 → surface contact when the
        // center reaches x = 4.2, minus the skin separation.
        let res = move_capsule(
            &[wall_at_x(5.0)],
            MoveRequest::with_defaults(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(10.0, 0.0, 0.0),
                CAPSULE,
            ),
        );
        let expected_x = 4.2 - DEFAULT_SKIN;
        assert!((res.end_pos.x - expected_x).abs() < 1.0e-2);
        assert!(res.last_hit.is_some());
    }

    #[test]
    fn diagonal_move_slides_along_wall() {
        // Moving diagonally into a wall keeps the tangential (Z) component.
        let res = move_capsule(
            &[wall_at_x(1.0)],
            MoveRequest::with_defaults(
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(2.0, 0.0, 2.0),
                CAPSULE,
            ),
        );
        assert!(res.end_pos.x < 0.5 - 0.3 + 1.0e-2);
        assert!(res.end_pos.z > 1.0);
    }

    #[test]
    fn downward_move_rests_on_ground() {
        // Falling 5 m stops with the capsule bottom on the plane: center at
        // radius + half_height = 0.8, plus skin.
        let res = move_capsule(
            &[ground_plane()],
            MoveRequest::with_defaults(
                Vec3::new(0.0, 3.0, 0.0),
                Vec3::new(0.0, -5.0, 0.0),
                CAPSULE,
            ),
        );
        assert!((res.end_pos.y - (0.8 + DEFAULT_SKIN)).abs() < 1.0e-2);
        assert!(res.last_hit.is_some());
    }
}
