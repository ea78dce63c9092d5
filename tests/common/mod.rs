//! Common test utilities for integration tests.

use impactor::impact::{compute_outcome, ImpactOutcome};
use impactor::types::ImpactParameters;

/// Build a parameter set.
pub fn params(diameter_m: f64, velocity_km_s: f64, density_kg_m3: f64) -> ImpactParameters {
    ImpactParameters {
        diameter_m,
        velocity_km_s,
        density_kg_m3,
    }
}

/// Compute an outcome, panicking on invalid parameters.
pub fn outcome(diameter_m: f64, velocity_km_s: f64, density_kg_m3: f64) -> ImpactOutcome {
    compute_outcome(&params(diameter_m, velocity_km_s, density_kg_m3))
        .expect("test parameters must be valid")
}

/// Mass of a spherical impactor (kg), for cross-checking energies.
pub fn sphere_mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let r = diameter_m / 2.0;
    density_kg_m3 * (4.0 / 3.0) * std::f64::consts::PI * r.powi(3)
}
