//! UI module providing the egui-based interface.
//!
//! A left panel holds the parameter controls, a right panel the impact
//! results, and a centered banner appears once an impact is detected.

mod banner;
mod controls;
mod details;
pub mod icons;
mod results;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::locale::Language;

/// Global UI state.
#[derive(Resource, Default)]
pub struct UiState {
    /// Interface language.
    pub language: Language,
    /// Index into the catalog records for the selector.
    pub selected_neo: Option<usize>,
    /// Whether the impact-details overlay is open.
    pub details_open: bool,
}

/// Plugin that adds all UI systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .init_resource::<icons::FontsInitialized>()
            // Font initialization runs before any UI that renders icons
            .add_systems(EguiPrimaryContextPass, icons::setup_fonts)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    controls::controls_panel,
                    results::results_panel,
                    banner::impact_banner,
                    details::details_overlay,
                )
                    .after(icons::setup_fonts),
            );
    }
}
