//! Player spawn and the per-frame controller tick.

use bevy::prelude::*;
use leafwing_input_manager::prelude::ActionState;
use nalgebra as na;
use shared::{
    CameraRig, ControllerConfig, KinematicBody, LocomotionController, PhysicsBody, TickInput,
};

use crate::{cursor::CursorCaptured, input::InputAction, level::LevelColliders};

/// Body origin spawn height: half the standing capsule plus the contact skin.
const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 1.05, 6.0);
/// Camera height above the body origin (eye level for a 2 m capsule).
const EYE_HEIGHT: f32 = 0.8;
const BODY_RADIUS: f32 = 0.4;

#[derive(Component)]
pub struct Player;

/// The controller and both collaborators, owned together on the player.
#[derive(Component)]
pub struct PlayerRig {
    pub body: KinematicBody,
    pub camera: CameraRig,
    pub controller: LocomotionController,
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_player.after(crate::level::setup));
    app.add_systems(Update, drive_controller);
}

pub(super) fn spawn_player(mut commands: Commands, colliders: Res<LevelColliders>) {
    let config = ControllerConfig::default();
    let body = KinematicBody::new(
        colliders.0.clone(),
        na::Vector3::new(SPAWN_POSITION.x, SPAWN_POSITION.y, SPAWN_POSITION.z),
        BODY_RADIUS,
        config.standing_height,
    );
    let camera = CameraRig::new(na::Vector3::new(0.0, EYE_HEIGHT, 0.0));
    let controller = LocomotionController::new(config, &camera);

    commands.spawn((
        Player,
        PlayerRig {
            body,
            camera,
            controller,
        },
        Transform::from_translation(SPAWN_POSITION),
        Visibility::default(),
    ));
    log::info!("player spawned at {SPAWN_POSITION}");
}

/// One controller tick per rendered frame, then sync the Bevy transform from
/// the body's collision-resolved pose.
fn drive_controller(
    time: Res<Time>,
    actions: Res<ActionState<InputAction>>,
    captured: Res<CursorCaptured>,
    player: Single<(&mut PlayerRig, &mut Transform), With<Player>>,
) {
    let (mut rig, mut transform) = player.into_inner();

    let input = TickInput {
        move_axis: to_na2(actions.clamped_axis_pair(&InputAction::Move)),
        look_delta: to_na2(actions.axis_pair(&InputAction::Look)),
        sprint_pressed: actions.just_pressed(&InputAction::Sprint),
        jump_pressed: actions.just_pressed(&InputAction::Jump),
        crouch_pressed: actions.just_pressed(&InputAction::Crouch),
    };

    // Movement pauses while the cursor is released.
    rig.controller.set_movement_enabled(captured.0);

    let PlayerRig {
        body,
        camera,
        controller,
    } = &mut *rig;
    controller.tick(&input, time.delta_secs(), body, camera);

    let pos = body.position();
    transform.translation = Vec3::new(pos.x, pos.y, pos.z);
    let q = body.rotation().into_inner().coords;
    transform.rotation = Quat::from_xyzw(q.x, q.y, q.z, q.w);
}

#[inline]
fn to_na2(v: Vec2) -> na::Vector2<f32> {
    na::Vector2::new(v.x, v.y)
}
