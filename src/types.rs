//! Core simulation types and constants for the meteor impact simulator.

use bevy::prelude::*;
use std::ops::RangeInclusive;

/// Physical and display constants

/// Earth radius in render units. The whole scene is laid out around
/// a globe of this size at the origin.
pub const EARTH_RADIUS: f32 = 2.0;

/// Render-units of descent per simulation tick per km/s of meteor velocity.
/// Chosen so real asteroid velocities produce visible motion on screen.
pub const SIMULATION_SCALE: f32 = 0.0005;

/// Sideways drift in render units per tick while deflection is active.
pub const DEFLECTION_DRIFT: f32 = 0.01;

/// Globe rotation in radians per simulation tick.
pub const GLOBE_SPIN: f32 = 0.002;

/// Meteor spawn height above the globe center (render units).
pub const METEOR_START_HEIGHT: f32 = 6.0;

/// Joules released per ton of TNT.
pub const JOULES_PER_TON_TNT: f64 = 4.184e9;

/// Slider bounds for the meteor diameter (meters).
pub const DIAMETER_RANGE_M: RangeInclusive<f64> = 1.0..=1000.0;

/// Slider bounds for the entry velocity (km/s). 72 km/s is the upper
/// limit for heliocentric impactors meeting Earth head-on.
pub const VELOCITY_RANGE_KM_S: RangeInclusive<f64> = 1.0..=72.0;

/// Slider bounds for the impactor density (kg/m³), porous rubble to iron.
pub const DENSITY_RANGE_KG_M3: RangeInclusive<f64> = 1000.0..=8000.0;

/// User-adjustable impact parameters.
///
/// Owned by the caller of the outcome calculator: the UI writes these,
/// the calculator reads them. All three values are kept strictly positive
/// by the slider bounds above.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ImpactParameters {
    /// Meteor diameter in meters.
    pub diameter_m: f64,
    /// Entry velocity in kilometers per second.
    pub velocity_km_s: f64,
    /// Bulk density in kilograms per cubic meter.
    pub density_kg_m3: f64,
}

impl Default for ImpactParameters {
    fn default() -> Self {
        Self {
            diameter_m: 100.0,
            velocity_km_s: 20.0,
            density_kg_m3: 3000.0,
        }
    }
}

impl ImpactParameters {
    /// Entry velocity in meters per second.
    pub fn velocity_m_s(&self) -> f64 {
        self.velocity_km_s * 1000.0
    }

    /// Meteor radius in meters.
    pub fn radius_m(&self) -> f64 {
        self.diameter_m / 2.0
    }
}

/// Simulation state resource tracking the run/impact/deflection flags.
///
/// Transitions: idle → running (start pressed) → impact detected
/// (collision) → idle (reset or new start). Deflection can only be
/// toggled while running.
#[derive(Resource, Clone, Debug, Default)]
pub struct SimulationState {
    /// Whether the meteor is currently descending.
    pub running: bool,
    /// Whether the current run ended in an impact.
    pub impact_detected: bool,
    /// Whether deflection drift is applied to the descent.
    pub deflection_active: bool,
}

impl SimulationState {
    /// True when no run is in progress and no impact is on display.
    pub fn is_idle(&self) -> bool {
        !self.running && !self.impact_detected
    }

    /// Enter the running state, clearing any previous impact.
    pub fn start(&mut self) {
        self.running = true;
        self.impact_detected = false;
        self.deflection_active = false;
    }

    /// Record an impact and stop the descent.
    pub fn on_impact(&mut self) {
        self.running = false;
        self.impact_detected = true;
    }

    /// Return to the idle state.
    pub fn reset(&mut self) {
        self.running = false;
        self.impact_detected = false;
        self.deflection_active = false;
    }
}
