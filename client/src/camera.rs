//! First-person camera: a child of the player entity, posed from the rig
//! after the controller tick has run.

use bevy::{camera::Exposure, core_pipeline::tonemapping::Tonemapping, prelude::*};

use crate::player::{Player, PlayerRig};

#[derive(Component)]
pub struct PlayerCamera;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera.after(crate::player::spawn_player));
    app.add_systems(PostUpdate, sync_camera);
}

fn add_camera(mut commands: Commands, player: Single<(Entity, &PlayerRig), With<Player>>) {
    let (player_entity, rig) = player.into_inner();
    let eye = rig.camera.local_position;

    let camera = commands
        .spawn((
            PlayerCamera,
            Camera3d::default(),
            Exposure { ev100: 16.0 },
            Tonemapping::AcesFitted,
            Transform::from_xyz(eye.x, eye.y, eye.z),
        ))
        .id();
    commands.entity(player_entity).add_child(camera);
}

fn sync_camera(
    player: Single<&PlayerRig, With<Player>>,
    camera: Single<&mut Transform, With<PlayerCamera>>,
) {
    let rig = &player.camera;
    let mut cam_tf = camera.into_inner();

    cam_tf.translation = Vec3::new(
        rig.local_position.x,
        rig.local_position.y,
        rig.local_position.z,
    );
    // Positive rig pitch looks down, which is a negative rotation about local
    // X with Bevy's -Z forward.
    cam_tf.rotation = Quat::from_rotation_x(-rig.pitch_deg.to_radians());
}
