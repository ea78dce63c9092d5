//! Globe spawning and rotation.

use bevy::prelude::*;

use crate::types::{EARTH_RADIUS, GLOBE_SPIN};

/// Marker component for the rotating globe.
#[derive(Component)]
pub struct Globe;

/// Spawn the textured globe at the origin.
pub fn spawn_globe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mesh = meshes.add(Sphere::new(EARTH_RADIUS));

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.2, 0.5, 0.8),
        base_color_texture: Some(asset_server.load("textures/earth.png")),
        perceptual_roughness: 0.8,
        metallic: 0.0,
        ..default()
    });

    commands.spawn((
        Globe,
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(Vec3::ZERO),
    ));
}

/// Spawn the scene point light.
pub fn spawn_light(mut commands: Commands) {
    commands.spawn((
        PointLight {
            intensity: 1_500_000.0,
            range: 1000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
}

/// Rotate the globe one increment per simulation tick.
pub fn spin_globe(mut globes: Query<&mut Transform, With<Globe>>) {
    for mut transform in globes.iter_mut() {
        transform.rotate_y(GLOBE_SPIN);
    }
}
