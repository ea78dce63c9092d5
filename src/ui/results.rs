//! Impact results panel.
//!
//! Always echoes the current parameters. Numeric results and the
//! advisory block appear only once an impact has been recorded; until
//! then the panel shows placeholder dashes.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::advisory::{advisory, AdvisoryTier};
use crate::collision::ImpactState;
use crate::locale::{format_tnt, strings};
use crate::types::ImpactParameters;

use super::{icons, UiState};

/// System that renders the results panel.
pub fn results_panel(
    mut contexts: EguiContexts,
    params: Res<ImpactParameters>,
    impact_state: Res<ImpactState>,
    ui_state: Res<UiState>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let s = strings(ui_state.language);

    egui::SidePanel::right("results_panel")
        .resizable(false)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(format!("{} {}", icons::METEOR, s.results));
            ui.separator();

            // Parameter echo, always live
            ui.label(format!("{}: {:.1} m", s.diameter, params.diameter_m));
            ui.label(format!("{}: {:.2} km/s", s.velocity, params.velocity_km_s));
            ui.label(format!("{}: {:.1} kg/m³", s.density, params.density_kg_m3));

            ui.add_space(8.0);
            ui.separator();

            match &impact_state.last_impact {
                Some(summary) => {
                    let outcome = &summary.outcome;

                    ui.label(format!(
                        "{}: {:.3e} J",
                        s.energy, outcome.kinetic_energy_j
                    ));
                    ui.label(format!(
                        "{}: {}",
                        s.tnt,
                        format_tnt(outcome.tnt_display(), ui_state.language)
                    ));
                    ui.label(format!(
                        "{}: {:.2} km",
                        s.crater, outcome.crater_diameter_km
                    ));
                    ui.label(format!(
                        "{}: M {:.1}",
                        s.seismic,
                        outcome.seismic_display()
                    ));

                    ui.add_space(10.0);
                    render_advisory_block(ui, outcome.tnt_equivalent_tons, &ui_state);
                }
                None => {
                    // Placeholder dashes until an impact occurs
                    ui.label(format!("{}: --- J", s.energy));
                    ui.label(format!("{}: --- {}", s.tnt, s.tons));
                    ui.label(format!("{}: --- km", s.crater));
                    ui.label(format!("{}: M ---", s.seismic));
                }
            }
        });
}

/// Render the advisory heading and its three actions.
fn render_advisory_block(ui: &mut egui::Ui, tnt_tons: f64, ui_state: &UiState) {
    let tier = AdvisoryTier::from_tnt_tons(tnt_tons);
    let block = advisory(tier, ui_state.language);

    ui.label(egui::RichText::new(block.title).strong());
    ui.add_space(4.0);
    for action in block.actions {
        ui.label(format!("• {action}"));
    }
}
