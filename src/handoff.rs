//! Impact report handoff.
//!
//! "Learn More" collects the formatted parameters, results, and advisory
//! block into a single named record and persists it as JSON through a
//! key-value file, where the details view (or a future companion page)
//! reads it back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::advisory::{advisory, AdvisoryTier};
use crate::collision::ImpactSummary;
use crate::locale::{format_tnt, Language};

/// Record key the report is stored under.
pub const HANDOFF_KEY: &str = "impactData";

/// Default store file name.
pub const HANDOFF_FILE: &str = "impact_data.json";

/// Errors from storing or loading a report.
#[derive(Error, Debug)]
pub enum HandoffError {
    /// Filesystem failure.
    #[error("store unavailable: {0}")]
    Io(#[from] std::io::Error),
    /// Record was not valid JSON or not the expected shape.
    #[error("corrupt record: {0}")]
    Json(#[from] serde_json::Error),
    /// The store exists but holds no report under the record key.
    #[error("no stored report")]
    Missing,
}

/// Formatted impact report, ready for display on another page.
///
/// All fields are display strings in the language the report was
/// generated in; nothing here is meant for further computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub diameter: String,
    pub velocity: String,
    pub density: String,
    pub energy: String,
    pub tnt: String,
    pub crater: String,
    pub seismic: String,
    pub advisory_title: String,
    pub advisory_actions: Vec<String>,
}

impl ImpactReport {
    /// Build a report from a recorded impact, formatted for `lang`.
    pub fn from_summary(summary: &ImpactSummary, lang: Language) -> Self {
        let params = &summary.params;
        let outcome = &summary.outcome;
        let tier = AdvisoryTier::from_tnt_tons(outcome.tnt_equivalent_tons);
        let block = advisory(tier, lang);

        Self {
            diameter: format!("{:.1} m", params.diameter_m),
            velocity: format!("{:.2} km/s", params.velocity_km_s),
            density: format!("{:.1} kg/m³", params.density_kg_m3),
            energy: format!("{:.3e} J", outcome.kinetic_energy_j),
            tnt: format_tnt(outcome.tnt_display(), lang),
            crater: format!("{:.2} km", outcome.crater_diameter_km),
            seismic: format!("M {:.1}", outcome.seismic_display()),
            advisory_title: block.title.to_string(),
            advisory_actions: block.actions.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Persist a report under [`HANDOFF_KEY`] in the store file.
pub fn store_report(path: &Path, report: &ImpactReport) -> Result<(), HandoffError> {
    let mut record = serde_json::Map::new();
    record.insert(HANDOFF_KEY.to_string(), serde_json::to_value(report)?);

    let body = serde_json::to_string_pretty(&serde_json::Value::Object(record))?;
    fs::write(path, body)?;
    Ok(())
}

/// Load the report stored under [`HANDOFF_KEY`], if any.
pub fn load_report(path: &Path) -> Result<ImpactReport, HandoffError> {
    let body = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&body)?;

    let record = value.get(HANDOFF_KEY).ok_or(HandoffError::Missing)?;
    Ok(serde_json::from_value(record.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::compute_outcome;
    use crate::types::ImpactParameters;
    use bevy::math::Vec3;

    fn sample_summary() -> ImpactSummary {
        let params = ImpactParameters::default();
        ImpactSummary {
            params,
            outcome: compute_outcome(&params).unwrap(),
            position: Vec3::new(0.0, -2.05, 0.0),
        }
    }

    #[test]
    fn test_report_formatting_spanish() {
        let report = ImpactReport::from_summary(&sample_summary(), Language::Es);

        assert_eq!(report.diameter, "100.0 m");
        assert_eq!(report.velocity, "20.00 km/s");
        assert_eq!(report.density, "3000.0 kg/m³");
        // ~7.51e7 tons lands in the megaton display tier
        assert!(report.tnt.ends_with("megatoneladas"), "got {}", report.tnt);
        assert!(report.energy.ends_with(" J"));
        assert!(report.seismic.starts_with("M "));
        assert_eq!(report.advisory_actions.len(), 3);
    }

    #[test]
    fn test_report_language_follows_request() {
        let es = ImpactReport::from_summary(&sample_summary(), Language::Es);
        let en = ImpactReport::from_summary(&sample_summary(), Language::En);
        assert_ne!(es.advisory_title, en.advisory_title);
        assert!(en.tnt.ends_with("megatons"));
    }

    #[test]
    fn test_store_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HANDOFF_FILE);
        let report = ImpactReport::from_summary(&sample_summary(), Language::Es);

        store_report(&path, &report).unwrap();
        let loaded = load_report(&path).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn test_store_writes_named_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HANDOFF_FILE);
        let report = ImpactReport::from_summary(&sample_summary(), Language::En);

        store_report(&path, &report).unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(raw.get(HANDOFF_KEY).is_some());
    }

    #[test]
    fn test_load_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HANDOFF_FILE);
        fs::write(&path, r#"{"somethingElse": 1}"#).unwrap();

        assert!(matches!(load_report(&path), Err(HandoffError::Missing)));
    }

    #[test]
    fn test_load_absent_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never_written.json");
        assert!(matches!(load_report(&path), Err(HandoffError::Io(_))));
    }
}
