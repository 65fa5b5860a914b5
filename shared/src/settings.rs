/*!
Locomotion and collision settings and tolerances.

These constants centralize the parameters used by the kinematic capsule,
collision sweep-and-slide, and the controller's fixed probe distances.
Keeping them together makes tuning easier and helps ensure deterministic
behavior across platforms.

Notes
- Distances are in meters, time in seconds, angles in degrees unless noted.
- Favor practical world-space tolerances over machine epsilon for robust
  behavior.
- Per-player tuning lives in `ControllerConfig`; these are the fixed values
  the controller does not expose as configuration.
*/

/// Separation from surfaces kept when a sweep stops at contact (meters).
/// Too large creates visible gaps; too small risks jitter on contact.
pub const DEFAULT_SKIN: f32 = 0.02;

/// Maximum number of slide iterations per kinematic step.
/// Higher values help with tight corners at the cost of more queries.
pub const DEFAULT_MAX_SLIDE_ITERATIONS: u32 = 4;

/// Minimum squared movement threshold to consider a step meaningful (m^2).
/// Movements below this are treated as zero to avoid tiny oscillations.
pub const MIN_MOVE_SQ: f32 = 1.0e-8;

/// Max downward capsule-cast distance classifying ground contact (meters).
/// Small values keep brief airborne frames from reading as grounded.
pub const GROUND_PROBE_DISTANCE: f32 = 0.08;

/// Default steepest walkable surface angle (degrees from horizontal).
/// Surfaces steeper than this make the body slide.
pub const DEFAULT_SLOPE_LIMIT_DEG: f32 = 45.0;

/// Fixed divisor applied to raw look deltas before the per-axis
/// sensitivities, keeping sensitivity values in a comfortable 1..10 range.
pub const LOOK_DELTA_DIVISOR: f32 = 50.0;

/// Max distance of the downward slope-classification ray (meters).
pub const SLIDE_PROBE_DISTANCE: f32 = 2.0;

/// Upward clearance probed above the camera before a stand-up transition
/// may start (meters).
pub const CROUCH_CLEARANCE_PROBE: f32 = 1.0;

/// Per-axis horizontal speed below which headbob does not advance (m/s).
pub const HEADBOB_DEADZONE: f32 = 0.1;

/// Default walking speed in meters per second.
pub const DEFAULT_WALK_SPEED: f32 = 5.0;

/// Gravity magnitude in meters per second squared (positive value).
/// Integrated as a downward acceleration while airborne.
pub const GRAVITY_MPS2: f32 = 9.81;
