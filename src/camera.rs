//! Camera system for the impact simulator.
//!
//! A perspective camera looking at the globe, with keyboard nudging,
//! scroll-wheel zoom, and a "view crater" focus that swings the camera
//! to the impact point.

use bevy::{input::mouse::AccumulatedMouseScroll, prelude::*};

use crate::meteor::StartSimulationEvent;
use crate::types::EARTH_RADIUS;

/// Default camera position facing the globe.
pub const CAMERA_HOME: Vec3 = Vec3::new(0.0, 0.0, 8.0);

/// Closest zoom distance (render units on the Z axis).
pub const MIN_ZOOM_Z: f32 = 4.0;

/// Furthest zoom distance.
pub const MAX_ZOOM_Z: f32 = 30.0;

/// Zoom change per scroll-wheel unit.
pub const ZOOM_SPEED: f32 = 0.25;

/// Camera translation per nudge key press.
pub const NUDGE_STEP: f32 = 0.5;

/// Distance multiple of the globe radius for the crater view.
pub const CRATER_VIEW_DISTANCE: f32 = 2.5;

/// Message requesting the camera swing to the last impact point.
#[derive(Message)]
pub struct FocusImpactEvent {
    /// Impact point in render coordinates.
    pub position: Vec3,
}

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FocusImpactEvent>().add_systems(Startup, setup_camera).add_systems(
            Update,
            (camera_nudge, camera_zoom, focus_impact, recenter_on_start),
        );
    }
}

/// Spawn the main perspective camera at the home position.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_HOME).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

/// Camera position for viewing an impact point.
///
/// Places the camera along the impact normal at a fixed multiple of the
/// globe radius, so the crater site fills the view.
pub fn crater_view_position(impact: Vec3) -> Vec3 {
    let distance = EARTH_RADIUS * CRATER_VIEW_DISTANCE;
    impact.normalize_or_zero() * distance
}

/// Arrow-key nudging and Home to recenter.
fn camera_nudge(
    keys: Res<ButtonInput<KeyCode>>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    if keys.just_pressed(KeyCode::ArrowUp) {
        transform.translation.y += NUDGE_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowDown) {
        transform.translation.y -= NUDGE_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        transform.translation.x -= NUDGE_STEP;
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        transform.translation.x += NUDGE_STEP;
    }
    if keys.just_pressed(KeyCode::Home) {
        *transform = Transform::from_translation(CAMERA_HOME).looking_at(Vec3::ZERO, Vec3::Y);
    }
}

/// Scroll-wheel dolly along Z, clamped to the zoom range.
fn camera_zoom(
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation.z =
        (transform.translation.z - mouse_scroll.delta.y * ZOOM_SPEED).clamp(MIN_ZOOM_Z, MAX_ZOOM_Z);
}

/// Swing the camera to look at the impact point from outside the globe.
fn focus_impact(
    mut events: MessageReader<FocusImpactEvent>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Some(event) = events.read().last() else {
        return;
    };

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let view_pos = crater_view_position(event.position);
    *transform = Transform::from_translation(view_pos).looking_at(Vec3::ZERO, Vec3::Y);

    info!("Camera focused on impact site at ({:.2}, {:.2}, {:.2})", view_pos.x, view_pos.y, view_pos.z);
}

/// Restore the home view when a new run starts.
fn recenter_on_start(
    mut events: MessageReader<StartSimulationEvent>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if events.read().next().is_none() {
        return;
    }
    events.clear();

    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = Transform::from_translation(CAMERA_HOME).looking_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_crater_view_distance() {
        let impact = Vec3::new(0.3, -2.0, 0.0);
        let view = crater_view_position(impact);
        assert_relative_eq!(view.length(), EARTH_RADIUS * CRATER_VIEW_DISTANCE, epsilon = 1e-5);
    }

    #[test]
    fn test_crater_view_along_impact_normal() {
        let impact = Vec3::new(0.0, -2.05, 0.0);
        let view = crater_view_position(impact);
        // Same direction as the impact point, scaled outward
        assert!(view.y < 0.0);
        assert_relative_eq!(view.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(view.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_crater_view_degenerate_impact() {
        // An impact recorded exactly at the origin must not produce NaN
        let view = crater_view_position(Vec3::ZERO);
        assert_eq!(view, Vec3::ZERO);
    }
}
