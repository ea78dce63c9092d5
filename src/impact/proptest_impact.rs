//! Property-based tests for the impact outcome calculator.
//!
//! These verify calculator invariants across the full slider ranges.

use proptest::prelude::*;

use super::*;
use crate::types::ImpactParameters;

fn any_params() -> impl Strategy<Value = ImpactParameters> {
    (1.0f64..=1000.0, 1.0f64..=72.0, 1000.0f64..=8000.0).prop_map(|(d, v, rho)| {
        ImpactParameters {
            diameter_m: d,
            velocity_km_s: v,
            density_kg_m3: rho,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every in-range parameter set produces a finite, non-negative outcome.
    #[test]
    fn prop_outcome_finite_and_nonnegative(params in any_params()) {
        let outcome = compute_outcome(&params).unwrap();

        prop_assert!(outcome.kinetic_energy_j.is_finite());
        prop_assert!(outcome.kinetic_energy_j > 0.0);
        prop_assert!(outcome.tnt_equivalent_tons.is_finite());
        prop_assert!(outcome.tnt_equivalent_tons > 0.0);
        prop_assert!(outcome.crater_diameter_km.is_finite());
        prop_assert!(outcome.crater_diameter_km > 0.0);
        prop_assert!(outcome.seismic_magnitude.is_finite());
    }

    /// Two calls with identical inputs yield bit-identical outputs.
    #[test]
    fn prop_deterministic(params in any_params()) {
        let a = compute_outcome(&params).unwrap();
        let b = compute_outcome(&params).unwrap();

        prop_assert_eq!(a.kinetic_energy_j.to_bits(), b.kinetic_energy_j.to_bits());
        prop_assert_eq!(a.tnt_equivalent_tons.to_bits(), b.tnt_equivalent_tons.to_bits());
        prop_assert_eq!(a.crater_diameter_km.to_bits(), b.crater_diameter_km.to_bits());
        prop_assert_eq!(a.seismic_magnitude.to_bits(), b.seismic_magnitude.to_bits());
    }

    /// Kinetic energy strictly increases with each parameter.
    #[test]
    fn prop_energy_strictly_monotonic(params in any_params(), scale in 1.01f64..=2.0) {
        let base = compute_outcome(&params).unwrap();

        let grown = ImpactParameters { diameter_m: params.diameter_m * scale, ..params };
        prop_assert!(compute_outcome(&grown).unwrap().kinetic_energy_j > base.kinetic_energy_j);

        let faster = ImpactParameters { velocity_km_s: params.velocity_km_s * scale, ..params };
        prop_assert!(compute_outcome(&faster).unwrap().kinetic_energy_j > base.kinetic_energy_j);

        let denser = ImpactParameters { density_kg_m3: params.density_kg_m3 * scale, ..params };
        prop_assert!(compute_outcome(&denser).unwrap().kinetic_energy_j > base.kinetic_energy_j);
    }

    /// Doubling velocity quadruples kinetic energy.
    #[test]
    fn prop_velocity_squared_scaling(params in any_params()) {
        let base = compute_outcome(&params).unwrap();
        let doubled = ImpactParameters {
            velocity_km_s: params.velocity_km_s * 2.0,
            ..params
        };
        let fast = compute_outcome(&doubled).unwrap();

        let ratio = fast.kinetic_energy_j / base.kinetic_energy_j;
        prop_assert!((ratio - 4.0).abs() < 1e-9, "ratio {ratio} should be 4");
    }

    /// The display bucket always agrees with the raw tonnage thresholds.
    #[test]
    fn prop_display_bucket_consistent(params in any_params()) {
        let outcome = compute_outcome(&params).unwrap();
        let tons = outcome.tnt_equivalent_tons;

        match outcome.tnt_display() {
            TntDisplay::Tons(t) => {
                prop_assert!(tons < MEGATON_TONS);
                prop_assert_eq!(t, tons);
            }
            TntDisplay::Megatons(mt) => {
                prop_assert!((MEGATON_TONS..GIGATON_TONS).contains(&tons));
                prop_assert!((mt * MEGATON_TONS - tons).abs() < 1e-3);
            }
            TntDisplay::Gigatons(gt) => {
                prop_assert!(tons >= GIGATON_TONS);
                prop_assert!((gt * GIGATON_TONS - tons).abs() < 1.0);
            }
        }
    }
}
