//! Near-Earth-object catalog client.
//!
//! Fetches one page of the NASA NeoWs `neo/browse` endpoint so the user
//! can pre-populate the sliders from a real object. The request runs on
//! a worker thread and is polled into a resource each frame; the render
//! loop never blocks on the network, and a failed fetch only downgrades
//! the selector.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Mutex;
use std::thread;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// NeoWs browse endpoint.
pub const NEO_BROWSE_URL: &str = "https://api.nasa.gov/neo/rest/v1/neo/browse";

/// Fallback API key; override with the `NASA_API_KEY` environment variable.
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Assumed bulk density for catalog objects (kg/m³). NeoWs does not
/// report density, so a stony-asteroid value is used.
pub const CATALOG_DENSITY_KG_M3: f64 = 3500.0;

/// Errors from the catalog fetch.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Network-level failure or non-success status.
    #[error("request failed: {0}")]
    Request(String),
    /// Response body was not the expected shape.
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One usable catalog entry.
#[derive(Clone, Debug, PartialEq)]
pub struct NeoRecord {
    /// Object designation as reported by the catalog.
    pub name: String,
    /// Maximum estimated diameter (meters).
    pub diameter_m: f64,
    /// Relative velocity at closest approach (km/s).
    pub velocity_km_s: f64,
}

// Wire model for the subset of the browse response we consume.

#[derive(Deserialize)]
struct BrowseResponse {
    near_earth_objects: Vec<NeoEntry>,
}

#[derive(Deserialize)]
struct NeoEntry {
    name: String,
    estimated_diameter: EstimatedDiameter,
    #[serde(default)]
    close_approach_data: Vec<CloseApproach>,
}

#[derive(Deserialize)]
struct EstimatedDiameter {
    meters: DiameterRange,
}

#[derive(Deserialize)]
struct DiameterRange {
    estimated_diameter_max: f64,
}

#[derive(Deserialize)]
struct CloseApproach {
    relative_velocity: RelativeVelocity,
}

#[derive(Deserialize)]
struct RelativeVelocity {
    kilometers_per_second: String,
}

/// Parse a browse response body into usable records.
///
/// Entries without close-approach data have no velocity and are
/// filtered out, as are entries whose velocity field fails to parse.
pub fn parse_browse_response(body: &str) -> Result<Vec<NeoRecord>, CatalogError> {
    let response: BrowseResponse = serde_json::from_str(body)?;

    let records = response
        .near_earth_objects
        .into_iter()
        .filter_map(|entry| {
            let approach = entry.close_approach_data.first()?;
            let velocity_km_s: f64 = approach
                .relative_velocity
                .kilometers_per_second
                .parse()
                .ok()?;
            Some(NeoRecord {
                name: entry.name,
                diameter_m: entry.estimated_diameter.meters.estimated_diameter_max,
                velocity_km_s,
            })
        })
        .collect();

    Ok(records)
}

/// Browse URL with the configured API key.
pub fn browse_url() -> String {
    let api_key = std::env::var("NASA_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    format!("{NEO_BROWSE_URL}?api_key={api_key}")
}

/// Perform the blocking fetch. Runs on the worker thread only.
fn fetch_catalog(url: &str) -> Result<Vec<NeoRecord>, CatalogError> {
    let body = ureq::get(url)
        .call()
        .map_err(|err| CatalogError::Request(err.to_string()))?
        .into_string()
        .map_err(|err| CatalogError::Request(err.to_string()))?;
    parse_browse_response(&body)
}

/// Fetch progress exposed to the UI.
#[derive(Default)]
pub enum CatalogStatus {
    /// Request in flight.
    #[default]
    Loading,
    /// Records ready for the selector.
    Ready(Vec<NeoRecord>),
    /// Fetch failed; the selector shows the error entry.
    Failed(String),
}

/// Resource holding the catalog fetch state.
#[derive(Resource, Default)]
pub struct CatalogState {
    /// Current fetch status.
    pub status: CatalogStatus,
}

impl CatalogState {
    /// Records, if the fetch has completed successfully.
    pub fn records(&self) -> Option<&[NeoRecord]> {
        match &self.status {
            CatalogStatus::Ready(records) => Some(records),
            _ => None,
        }
    }
}

/// Channel from the worker thread back to the ECS.
#[derive(Resource)]
struct CatalogFetchTask {
    rx: Mutex<Receiver<Result<Vec<NeoRecord>, CatalogError>>>,
}

/// Kick off the background fetch.
fn start_catalog_fetch(mut commands: Commands) {
    let (tx, rx) = channel();
    let url = browse_url();

    thread::spawn(move || {
        let result = fetch_catalog(&url);
        // The receiver may be gone if the app shut down; nothing to do.
        let _ = tx.send(result);
    });

    commands.insert_resource(CatalogFetchTask { rx: Mutex::new(rx) });
}

/// Poll the worker channel and publish the result.
fn poll_catalog_fetch(
    mut commands: Commands,
    task: Option<Res<CatalogFetchTask>>,
    mut catalog: ResMut<CatalogState>,
) {
    let Some(task) = task else {
        return;
    };

    let received = {
        let Ok(rx) = task.rx.lock() else {
            return;
        };
        match rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                Some(Err(CatalogError::Request("worker disappeared".into())))
            }
        }
    };

    let Some(result) = received else {
        return;
    };

    match result {
        Ok(records) => {
            info!("Catalog loaded: {} usable objects", records.len());
            catalog.status = CatalogStatus::Ready(records);
        }
        Err(err) => {
            warn!("Catalog fetch failed: {err}");
            catalog.status = CatalogStatus::Failed(err.to_string());
        }
    }

    commands.remove_resource::<CatalogFetchTask>();
}

/// Plugin providing the asynchronous catalog fetch.
pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatalogState>()
            .add_systems(Startup, start_catalog_fetch)
            .add_systems(Update, poll_catalog_fetch);
    }
}
