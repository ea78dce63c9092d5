//! Impact details overlay.
//!
//! Renders the handed-off report loaded back from the key-value store,
//! proving the record a companion page would consume is complete.

use std::path::Path;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::handoff::{load_report, ImpactReport, HANDOFF_FILE};
use crate::locale::strings;

use super::{icons, UiState};

/// System that renders the details overlay when open.
pub fn details_overlay(
    mut contexts: EguiContexts,
    mut ui_state: ResMut<UiState>,
    mut cached: Local<Option<ImpactReport>>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    if !ui_state.details_open {
        *cached = None;
        return;
    }

    // Load through the store on first open so the overlay shows exactly
    // what was persisted
    if cached.is_none() {
        match load_report(Path::new(HANDOFF_FILE)) {
            Ok(report) => *cached = Some(report),
            Err(err) => {
                warn!("Could not load impact report: {err}");
                ui_state.details_open = false;
                return;
            }
        }
    }

    let Some(report) = cached.as_ref() else {
        return;
    };

    let s = strings(ui_state.language);
    let mut close = false;

    egui::Window::new(s.details_title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::Grid::new("report_grid")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    ui.label(s.diameter);
                    ui.label(&report.diameter);
                    ui.end_row();

                    ui.label(s.velocity);
                    ui.label(&report.velocity);
                    ui.end_row();

                    ui.label(s.density);
                    ui.label(&report.density);
                    ui.end_row();

                    ui.label(s.energy);
                    ui.label(&report.energy);
                    ui.end_row();

                    ui.label(s.tnt);
                    ui.label(&report.tnt);
                    ui.end_row();

                    ui.label(s.crater);
                    ui.label(&report.crater);
                    ui.end_row();

                    ui.label(s.seismic);
                    ui.label(&report.seismic);
                    ui.end_row();
                });

            ui.add_space(8.0);
            ui.label(egui::RichText::new(&report.advisory_title).strong());
            for action in &report.advisory_actions {
                ui.label(format!("• {action}"));
            }

            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(format!("{} {}", icons::CLOSE, s.close)).clicked() {
                    close = true;
                }
            });
        });

    if close {
        ui_state.details_open = false;
    }
}
