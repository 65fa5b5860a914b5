//! Slope classification for slide behavior.

use crate::{body::PhysicsBody, collision::Vec3, settings::SLIDE_PROBE_DISTANCE, state::MotionState};

/// Classify the surface under the body.
///
/// When grounded, a ray is cast straight down from the body origin up to
/// `SLIDE_PROBE_DISTANCE`. On a hit the surface normal is recorded and the
/// body slides iff the angle between that normal and world up exceeds the
/// body's own slope limit. When airborne or on a miss, `is_sliding` clears
/// but the stale normal is retained; the next hit overwrites it, and the
/// slide force only ever reads it while `is_sliding` is true.
pub fn detect(state: &mut MotionState, body: &dyn PhysicsBody) {
    let down = Vec3::new(0.0, -1.0, 0.0);
    if state.is_grounded {
        if let Some(hit) = body.cast_ray(body.position(), down, SLIDE_PROBE_DISTANCE) {
            state.hit_point_normal = hit.normal;
            let up = Vec3::new(0.0, 1.0, 0.0);
            let angle_deg = state.hit_point_normal.angle(&up).to_degrees();
            state.is_sliding = angle_deg > body.slope_limit_deg();
            return;
        }
    }
    state.is_sliding = false;
}
