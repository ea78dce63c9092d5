//! Test utilities for the impact simulator tests.
//!
//! Provides parameter fixtures and assertions for verifying calculator
//! invariants.

use crate::impact::{compute_outcome, ImpactOutcome};
use crate::types::ImpactParameters;

/// Fixtures for creating test parameter sets.
pub mod fixtures {
    use super::*;

    /// The reference scenario from the display panel defaults:
    /// d=100 m, v=20 km/s, ρ=3000 kg/m³.
    pub fn reference_params() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 100.0,
            velocity_km_s: 20.0,
            density_kg_m3: 3000.0,
        }
    }

    /// A city-killer class impactor at the top of the slider ranges.
    pub fn worst_case_params() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 1000.0,
            velocity_km_s: 72.0,
            density_kg_m3: 8000.0,
        }
    }

    /// A pebble producing sub-ton energies and a negative raw
    /// seismic magnitude.
    pub fn pebble_params() -> ImpactParameters {
        ImpactParameters {
            diameter_m: 0.1,
            velocity_km_s: 11.0,
            density_kg_m3: 2000.0,
        }
    }

    /// Outcome for the reference scenario.
    pub fn reference_outcome() -> ImpactOutcome {
        compute_outcome(&reference_params()).expect("reference params are valid")
    }
}

/// Assertions for verifying calculator invariants.
pub mod assertions {
    use super::*;

    /// Assert two outcomes are bit-identical field by field.
    ///
    /// # Panics
    /// Panics if any field differs in bit pattern.
    pub fn assert_outcomes_identical(a: &ImpactOutcome, b: &ImpactOutcome) {
        assert_eq!(
            a.kinetic_energy_j.to_bits(),
            b.kinetic_energy_j.to_bits(),
            "kinetic energy differs: {} vs {}",
            a.kinetic_energy_j,
            b.kinetic_energy_j
        );
        assert_eq!(
            a.tnt_equivalent_tons.to_bits(),
            b.tnt_equivalent_tons.to_bits(),
            "TNT equivalent differs"
        );
        assert_eq!(
            a.crater_diameter_km.to_bits(),
            b.crater_diameter_km.to_bits(),
            "crater diameter differs"
        );
        assert_eq!(
            a.seismic_magnitude.to_bits(),
            b.seismic_magnitude.to_bits(),
            "seismic magnitude differs"
        );
    }

    /// Assert every outcome field is finite and physically sensible.
    ///
    /// # Panics
    /// Panics if a field is NaN, infinite, or negative where it must not be.
    pub fn assert_outcome_sane(outcome: &ImpactOutcome) {
        assert!(outcome.kinetic_energy_j.is_finite() && outcome.kinetic_energy_j > 0.0);
        assert!(outcome.tnt_equivalent_tons.is_finite() && outcome.tnt_equivalent_tons > 0.0);
        assert!(outcome.crater_diameter_km.is_finite() && outcome.crater_diameter_km > 0.0);
        assert!(outcome.seismic_magnitude.is_finite());
        assert!(outcome.seismic_display() >= 0.0);
    }
}

/// Utilities for creating headless Bevy apps for testing.
pub mod bevy_test {
    use bevy::prelude::*;

    /// Create a minimal Bevy app for testing without rendering.
    ///
    /// This app uses MinimalPlugins for a lightweight test environment.
    pub fn headless_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app
    }
}
