//! Meteor descent and impact detection.
//!
//! Runs in FixedUpdate: each tick moves the meteor down the descent
//! path (plus sideways drift while deflection is active) and checks it
//! against the globe surface. On impact:
//! - The simulation stops and records the impact
//! - The outcome calculator runs exactly once
//! - The meteor is destroyed and an explosion effect is spawned

use bevy::prelude::*;

use crate::impact::{compute_outcome, ImpactOutcome};
use crate::meteor::{visual_radius, Meteor};
use crate::render::SpawnExplosionEvent;
use crate::types::{
    ImpactParameters, SimulationState, DEFLECTION_DRIFT, EARTH_RADIUS, SIMULATION_SCALE,
};

/// Message fired when the meteor reaches the globe surface.
#[derive(Message, Clone, Debug)]
pub struct ImpactEvent {
    /// Impact point in render coordinates.
    pub position: Vec3,
    /// Computed outcome for the parameters at impact time.
    pub outcome: ImpactOutcome,
}

/// Record of the most recent impact, kept for UI display and handoff.
#[derive(Clone, Copy, Debug)]
pub struct ImpactSummary {
    /// Parameters the run was started with.
    pub params: ImpactParameters,
    /// Computed outcome.
    pub outcome: ImpactOutcome,
    /// Impact point in render coordinates.
    pub position: Vec3,
}

/// Resource storing the most recent impact so panels can display it
/// after the message has been consumed.
#[derive(Resource, Default)]
pub struct ImpactState {
    /// Most recent impact, if any.
    pub last_impact: Option<ImpactSummary>,
}

impl ImpactState {
    /// Clear the stored impact (when resetting or restarting).
    pub fn clear(&mut self) {
        self.last_impact = None;
    }

    /// Check whether an impact is on display.
    pub fn has_impact(&self) -> bool {
        self.last_impact.is_some()
    }
}

/// Descent step for one tick at the given velocity (render units).
pub fn descent_step(velocity_km_s: f64) -> f32 {
    velocity_km_s as f32 * SIMULATION_SCALE
}

/// Whether a meteor center at `position` with the given rendered radius
/// has reached the globe surface.
pub fn has_hit_globe(position: Vec3, meteor_radius: f32) -> bool {
    position.length() <= EARTH_RADIUS + meteor_radius
}

/// Advance the meteor along its descent path.
pub fn move_meteor(
    state: Res<SimulationState>,
    params: Res<ImpactParameters>,
    mut meteors: Query<&mut Transform, With<Meteor>>,
) {
    if !state.running {
        return;
    }

    for mut transform in meteors.iter_mut() {
        transform.translation.y -= descent_step(params.velocity_km_s);
        if state.deflection_active {
            transform.translation.x += DEFLECTION_DRIFT;
        }
    }
}

/// Detect the meteor reaching the globe and record the outcome.
pub fn check_impact(
    mut commands: Commands,
    mut state: ResMut<SimulationState>,
    params: Res<ImpactParameters>,
    mut impact_state: ResMut<ImpactState>,
    mut impact_events: MessageWriter<ImpactEvent>,
    mut explosion_events: MessageWriter<SpawnExplosionEvent>,
    meteors: Query<(Entity, &Transform), With<Meteor>>,
) {
    if !state.running {
        return;
    }

    let radius = visual_radius(params.diameter_m);

    for (entity, transform) in meteors.iter() {
        if !has_hit_globe(transform.translation, radius) {
            continue;
        }

        // Slider bounds keep parameters valid; a rejected set here means
        // the resource was corrupted, so skip rather than show garbage.
        let outcome = match compute_outcome(&params) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!("Impact outcome rejected: {err}");
                state.reset();
                commands.entity(entity).despawn();
                continue;
            }
        };

        let position = transform.translation;
        state.on_impact();

        info!(
            "IMPACT at ({:.2}, {:.2}, {:.2}): {:.3e} J, {:.1} tons TNT, crater {:.2} km",
            position.x,
            position.y,
            position.z,
            outcome.kinetic_energy_j,
            outcome.tnt_equivalent_tons,
            outcome.crater_diameter_km,
        );

        commands.entity(entity).despawn();

        impact_state.last_impact = Some(ImpactSummary {
            params: *params,
            outcome,
            position,
        });
        explosion_events.write(SpawnExplosionEvent { position });
        impact_events.write(ImpactEvent { position, outcome });
    }
}

/// Plugin providing descent motion and impact detection.
pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ImpactEvent>()
            .insert_resource(ImpactState::default())
            .add_systems(FixedUpdate, (move_meteor, check_impact).chain());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_descent_step_proportional_to_velocity() {
        assert_relative_eq!(descent_step(20.0), 0.01, max_relative = 1e-6);
        assert_relative_eq!(descent_step(40.0), 2.0 * descent_step(20.0), max_relative = 1e-6);
    }

    #[test]
    fn test_hit_detection_threshold() {
        let radius = 0.05;

        // Well above the globe
        assert!(!has_hit_globe(Vec3::new(0.0, 6.0, 0.0), radius));
        // Just inside the contact distance
        assert!(has_hit_globe(
            Vec3::new(0.0, EARTH_RADIUS + radius - 0.001, 0.0),
            radius
        ));
        // Just above the surface
        assert!(!has_hit_globe(
            Vec3::new(0.0, EARTH_RADIUS + radius + 0.001, 0.0),
            radius
        ));
    }

    #[test]
    fn test_hit_detection_off_axis() {
        // Deflected meteors hit away from the pole but the test is
        // still against distance from the globe center
        let radius = 0.1;
        let pos = Vec3::new(1.2, 1.2, 0.0);
        assert!(has_hit_globe(pos, radius), "|pos| = {} should hit", pos.length());
    }

    #[test]
    fn test_ticks_to_surface() {
        // From the spawn height, a 20 km/s meteor covers the
        // 6 - (2 + r) units in a predictable number of ticks
        let radius = 0.05f32;
        let gap = 6.0 - (EARTH_RADIUS + radius);
        let ticks = (gap / descent_step(20.0)).ceil();
        assert!((394.0..=396.0).contains(&ticks), "got {ticks} ticks");
    }

    #[test]
    fn test_impact_state_lifecycle() {
        let mut state = ImpactState::default();
        assert!(!state.has_impact());

        state.last_impact = Some(ImpactSummary {
            params: ImpactParameters::default(),
            outcome: compute_outcome(&ImpactParameters::default()).unwrap(),
            position: Vec3::new(0.0, -EARTH_RADIUS, 0.0),
        });
        assert!(state.has_impact());

        state.clear();
        assert!(!state.has_impact());
    }
}
