//! Integration tests for the impact report handoff.

mod common;

use bevy::math::Vec3;
use impactor::collision::ImpactSummary;
use impactor::handoff::{load_report, store_report, ImpactReport, HANDOFF_FILE};
use impactor::locale::Language;

fn summary(diameter_m: f64, velocity_km_s: f64, density_kg_m3: f64) -> ImpactSummary {
    ImpactSummary {
        params: common::params(diameter_m, velocity_km_s, density_kg_m3),
        outcome: common::outcome(diameter_m, velocity_km_s, density_kg_m3),
        position: Vec3::new(0.0, -2.05, 0.0),
    }
}

#[test]
fn test_report_round_trips_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HANDOFF_FILE);

    let report = ImpactReport::from_summary(&summary(100.0, 20.0, 3000.0), Language::Es);
    store_report(&path, &report).unwrap();
    let loaded = load_report(&path).unwrap();

    assert_eq!(loaded, report);
}

#[test]
fn test_report_carries_all_display_fields() {
    let report = ImpactReport::from_summary(&summary(100.0, 20.0, 3000.0), Language::Es);

    assert_eq!(report.diameter, "100.0 m");
    assert_eq!(report.velocity, "20.00 km/s");
    assert_eq!(report.density, "3000.0 kg/m³");
    assert!(report.energy.ends_with(" J"));
    assert!(report.tnt.ends_with("megatoneladas"));
    assert!(report.crater.ends_with(" km"));
    assert!(report.seismic.starts_with("M "));
    assert_eq!(report.advisory_actions.len(), 3);
}

#[test]
fn test_regional_scenario_report_advisory() {
    // The reference scenario is a Regional impact
    let report = ImpactReport::from_summary(&summary(100.0, 20.0, 3000.0), Language::Es);
    assert_eq!(report.advisory_title, "Acciones Sugeridas (Impacto Regional)");
    assert!(report
        .advisory_actions
        .iter()
        .any(|a| a.contains("refugios")));
}

#[test]
fn test_small_impact_report_in_english() {
    // A 5 m impactor stays far below a megaton: Localized tier, tons display
    let report = ImpactReport::from_summary(&summary(5.0, 12.0, 2000.0), Language::En);

    assert_eq!(report.advisory_title, "Suggested Actions (Local Impact)");
    assert!(report.tnt.ends_with(" tons"), "got {}", report.tnt);
    // Tons are grouped whole numbers with no decimal point
    let amount = report.tnt.trim_end_matches(" tons");
    assert!(!amount.contains('.'), "got {amount}");
}

#[test]
fn test_rewriting_store_replaces_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(HANDOFF_FILE);

    let first = ImpactReport::from_summary(&summary(100.0, 20.0, 3000.0), Language::Es);
    store_report(&path, &first).unwrap();

    let second = ImpactReport::from_summary(&summary(500.0, 40.0, 5000.0), Language::En);
    store_report(&path, &second).unwrap();

    let loaded = load_report(&path).unwrap();
    assert_eq!(loaded, second);
    assert_ne!(loaded, first);
}
