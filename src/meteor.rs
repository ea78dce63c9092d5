//! Meteor entity definition and spawning.
//!
//! The meteor is the single dynamic object in the scene. Its visual size
//! is derived from the diameter parameter; its descent is driven by the
//! collision module. Changing parameters while idle respawns it so the
//! preview always matches the sliders.

use bevy::prelude::*;

use crate::collision::ImpactState;
use crate::types::{ImpactParameters, SimulationState, METEOR_START_HEIGHT};

/// Smallest rendered meteor radius, so tiny impactors stay visible.
pub const MIN_VISUAL_RADIUS: f32 = 0.05;

/// Meters of real diameter per render unit of meteor radius.
pub const VISUAL_DIAMETER_SCALE: f32 = 4000.0;

/// Message to begin a simulation run.
#[derive(Message)]
pub struct StartSimulationEvent;

/// Message to return the simulation to its idle state.
#[derive(Message)]
pub struct ResetSimulationEvent;

/// Marker component identifying the meteor entity.
#[derive(Component, Default)]
pub struct Meteor;

/// Rendered meteor radius for a given physical diameter.
pub fn visual_radius(diameter_m: f64) -> f32 {
    (diameter_m as f32 / VISUAL_DIAMETER_SCALE).max(MIN_VISUAL_RADIUS)
}

/// Spawn position above the globe.
pub fn start_position() -> Vec3 {
    Vec3::new(0.0, METEOR_START_HEIGHT, 0.0)
}

/// Spawn a meteor sized from the current parameters.
///
/// # Returns
/// The spawned meteor's Entity ID
pub fn spawn_meteor(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &AssetServer,
    params: &ImpactParameters,
) -> Entity {
    let radius = visual_radius(params.diameter_m);
    let mesh = meshes.add(Sphere::new(radius));

    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.38, 0.32),
        base_color_texture: Some(asset_server.load("textures/meteor.png")),
        perceptual_roughness: 0.9,
        metallic: 0.05,
        ..default()
    });

    commands
        .spawn((
            Meteor,
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(start_position()),
        ))
        .id()
}

/// Startup system placing the initial meteor preview.
pub fn spawn_initial_meteor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    params: Res<ImpactParameters>,
) {
    spawn_meteor(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &params,
    );
}

/// Despawn any existing meteor and spawn a fresh one at the start position.
fn respawn_meteor(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    asset_server: &AssetServer,
    params: &ImpactParameters,
    meteors: &Query<Entity, With<Meteor>>,
) {
    for entity in meteors.iter() {
        commands.entity(entity).despawn();
    }
    spawn_meteor(commands, meshes, materials, asset_server, params);
}

/// Handle start requests: respawn the meteor and enter the running state.
pub fn handle_start(
    mut commands: Commands,
    mut events: MessageReader<StartSimulationEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    params: Res<ImpactParameters>,
    mut state: ResMut<SimulationState>,
    meteors: Query<Entity, With<Meteor>>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();

    respawn_meteor(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &params,
        &meteors,
    );
    state.start();

    info!(
        "Simulation started: d={:.1} m, v={:.2} km/s, rho={:.1} kg/m3",
        params.diameter_m, params.velocity_km_s, params.density_kg_m3
    );
}

/// Handle reset requests: clear impact state and restore the idle preview.
pub fn handle_reset(
    mut commands: Commands,
    mut events: MessageReader<ResetSimulationEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    params: Res<ImpactParameters>,
    mut state: ResMut<SimulationState>,
    mut impact_state: ResMut<ImpactState>,
    meteors: Query<Entity, With<Meteor>>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();

    respawn_meteor(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &params,
        &meteors,
    );
    state.reset();
    impact_state.clear();

    info!("Simulation reset");
}

/// Respawn the idle preview when parameters change.
///
/// The rendered size depends on the diameter, so the preview meteor is
/// rebuilt on any slider movement. Running simulations are left alone.
pub fn sync_preview_meteor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    params: Res<ImpactParameters>,
    state: Res<SimulationState>,
    meteors: Query<Entity, With<Meteor>>,
) {
    if !params.is_changed() || params.is_added() {
        return;
    }
    if state.running {
        return;
    }

    respawn_meteor(
        &mut commands,
        &mut meshes,
        &mut materials,
        &asset_server,
        &params,
        &meteors,
    );
}

/// Plugin providing meteor lifecycle management.
pub struct MeteorPlugin;

impl Plugin for MeteorPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<StartSimulationEvent>()
            .add_message::<ResetSimulationEvent>()
            .add_systems(Startup, spawn_initial_meteor)
            .add_systems(Update, (handle_start, handle_reset, sync_preview_meteor));
    }
}
