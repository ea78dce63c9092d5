//! Impact banner overlay.
//!
//! Shown once an impact is detected: announces the end of the run and
//! offers the crater view and the report handoff. Dismissal lasts until
//! the next run.

use std::path::Path;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::FocusImpactEvent;
use crate::collision::ImpactState;
use crate::handoff::{store_report, ImpactReport, HANDOFF_FILE};
use crate::locale::strings;
use crate::types::SimulationState;

use super::{icons, UiState};

/// System that renders the end-of-simulation banner.
pub fn impact_banner(
    mut contexts: EguiContexts,
    state: Res<SimulationState>,
    impact_state: Res<ImpactState>,
    mut ui_state: ResMut<UiState>,
    mut focus_events: MessageWriter<FocusImpactEvent>,
    mut dismissed: Local<bool>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    // A new run re-arms the banner
    if state.running {
        *dismissed = false;
    }

    if *dismissed || !state.impact_detected {
        return;
    }

    let Some(summary) = impact_state.last_impact else {
        return;
    };

    let s = strings(ui_state.language);

    egui::Window::new("impact_banner")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, -60.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(icons::IMPACT).size(30.0));
                ui.add_space(6.0);
                ui.label(egui::RichText::new(s.finished).strong().size(18.0));
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    if ui
                        .button(format!("{} {}", icons::CRATER, s.view_crater))
                        .clicked()
                    {
                        focus_events.write(FocusImpactEvent {
                            position: summary.position,
                        });
                        *dismissed = true;
                    }

                    if ui
                        .button(format!("{} {}", icons::INFO, s.learn_more))
                        .clicked()
                    {
                        let report = ImpactReport::from_summary(&summary, ui_state.language);
                        match store_report(Path::new(HANDOFF_FILE), &report) {
                            Ok(()) => {
                                ui_state.details_open = true;
                                *dismissed = true;
                            }
                            Err(err) => error!("Failed to store impact report: {err}"),
                        }
                    }

                    if ui.button(icons::CLOSE).clicked() {
                        *dismissed = true;
                    }
                });
            });
        });
}
