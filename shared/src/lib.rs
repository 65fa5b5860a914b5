//! First-person locomotion core.
//!
//! Deterministic, engine-free controller logic: one [`LocomotionController`]
//! tick per rendered frame turns directional/look input plus grounded-physics
//! feedback into a collision-resolved move of a capsule body and a camera
//! pose. The Bevy client hosts this crate; tests drive ticks directly.

pub mod body;
pub mod collision;
pub mod config;
pub mod controller;
pub mod crouch;
pub mod headbob;
pub mod input;
pub mod jump;
pub mod look;
pub mod settings;
pub mod slide;
pub mod speed;
pub mod state;

pub use body::{CameraRig, PhysicsBody};
pub use collision::{KinematicBody, Quat, RayHit, StaticShape, Transform, Vec2, Vec3};
pub use config::ControllerConfig;
pub use controller::LocomotionController;
pub use input::TickInput;
pub use state::MotionState;
