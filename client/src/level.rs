//! Demo level: a static collider list plus matching render meshes.
//!
//! The geometry exercises every controller behavior: flat ground to walk on,
//! a ramp steeper than the slope limit to slide down, a low passage that
//! requires crouching (and refuses the stand-up inside), and a block to jump
//! onto.

use bevy::prelude::*;
use nalgebra as na;
use shared::StaticShape;

/// Static collision world consumed by the player's kinematic body.
#[derive(Resource, Default)]
pub struct LevelColliders(pub Vec<StaticShape>);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, setup);
}

pub(super) fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut statics = Vec::new();

    // Ground plane at y = 0.
    statics.push(shared::collision::plane_from_pose(
        na::UnitQuaternion::identity(),
        na::Vector3::zeros(),
    ));
    commands.spawn((
        Transform::from_xyz(0.0, 0.0, 0.0),
        Mesh3d(meshes.add(Plane3d::default().mesh().size(60.0, 60.0).build())),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::linear_rgb(0.2, 0.3, 0.25),
            perceptual_roughness: 1.0,
            metallic: 0.0,
            ..default()
        })),
    ));

    let stone = materials.add(Color::srgb_u8(124, 130, 144));
    let mut block = |half: Vec3, pos: Vec3, rot: Quat| {
        statics.push(cuboid_collider(half, pos, rot));
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(half.x * 2.0, half.y * 2.0, half.z * 2.0))),
            MeshMaterial3d(stone.clone()),
            Transform::from_translation(pos).with_rotation(rot),
        ));
    };

    // Slide ramp: 55° face, steeper than the body's 45° slope limit.
    block(
        Vec3::new(4.0, 0.2, 6.0),
        Vec3::new(-10.0, 2.0, 0.0),
        Quat::from_rotation_x(55.0_f32.to_radians()),
    );

    // Low beam to duck under: underside at 1.4 m, crouch height only. Thick
    // enough that the upward clearance probe still sees it from underneath.
    block(
        Vec3::new(3.0, 0.8, 0.6),
        Vec3::new(8.0, 2.2, 0.0),
        Quat::IDENTITY,
    );

    // Jump block.
    block(
        Vec3::new(1.5, 0.5, 1.5),
        Vec3::new(0.0, 0.5, -8.0),
        Quat::IDENTITY,
    );

    // Lights.
    commands.spawn((
        DirectionalLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(12.0, 20.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        PointLight {
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 8.0, 4.0),
    ));

    log::info!("level ready: {} static colliders", statics.len());
    commands.insert_resource(LevelColliders(statics));
}

/// Convert a Bevy pose into a collider cuboid.
fn cuboid_collider(half: Vec3, pos: Vec3, rot: Quat) -> StaticShape {
    shared::collision::cuboid_from_pose(
        na::Vector3::new(half.x, half.y, half.z),
        na::Vector3::new(pos.x, pos.y, pos.z),
        na::UnitQuaternion::from_quaternion(na::Quaternion::new(rot.w, rot.x, rot.y, rot.z)),
    )
}
