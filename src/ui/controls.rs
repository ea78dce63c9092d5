//! Parameter controls panel.
//!
//! Sliders for the three impact parameters, simulation buttons, the
//! real-asteroid selector, and the language switch. Slider bounds are
//! the validity guarantee for the outcome calculator: values outside
//! the ranges cannot be entered here.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::{CatalogState, CatalogStatus, NeoRecord, CATALOG_DENSITY_KG_M3};
use crate::locale::strings;
use crate::meteor::{ResetSimulationEvent, StartSimulationEvent};
use crate::types::{
    ImpactParameters, SimulationState, DENSITY_RANGE_KG_M3, DIAMETER_RANGE_M, VELOCITY_RANGE_KM_S,
};

use super::{icons, UiState};

/// System that renders the parameter controls panel.
pub fn controls_panel(
    mut contexts: EguiContexts,
    mut params: ResMut<ImpactParameters>,
    mut state: ResMut<SimulationState>,
    mut ui_state: ResMut<UiState>,
    catalog: Res<CatalogState>,
    mut start_events: MessageWriter<StartSimulationEvent>,
    mut reset_events: MessageWriter<ResetSimulationEvent>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let s = strings(ui_state.language);

    egui::SidePanel::left("controls_panel")
        .resizable(false)
        .default_width(270.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            ui.heading(s.adjust);
            ui.separator();

            render_parameter_sliders(ui, &mut params, s);

            ui.add_space(10.0);
            render_simulation_buttons(ui, &mut state, s, &mut start_events, &mut reset_events);

            ui.add_space(12.0);
            ui.separator();
            render_catalog_selector(ui, &catalog, &mut params, &mut ui_state);

            ui.add_space(12.0);
            ui.separator();
            render_language_selector(ui, &mut ui_state);
        });
}

/// Render the three parameter sliders.
///
/// Values are staged in locals so the resource is only marked changed
/// when a slider actually moves.
fn render_parameter_sliders(
    ui: &mut egui::Ui,
    params: &mut ResMut<ImpactParameters>,
    s: &crate::locale::Strings,
) {
    let mut diameter = params.diameter_m;
    let mut velocity = params.velocity_km_s;
    let mut density = params.density_kg_m3;

    ui.label(s.diameter);
    let d_changed = ui
        .add(egui::Slider::new(&mut diameter, DIAMETER_RANGE_M).suffix(" m"))
        .changed();

    ui.label(s.velocity);
    let v_changed = ui
        .add(egui::Slider::new(&mut velocity, VELOCITY_RANGE_KM_S).suffix(" km/s"))
        .changed();

    ui.label(s.density);
    let rho_changed = ui
        .add(egui::Slider::new(&mut density, DENSITY_RANGE_KG_M3).suffix(" kg/m³"))
        .changed();

    if d_changed || v_changed || rho_changed {
        params.diameter_m = diameter;
        params.velocity_km_s = velocity;
        params.density_kg_m3 = density;
    }
}

/// Render start, deflection, and reset buttons.
fn render_simulation_buttons(
    ui: &mut egui::Ui,
    state: &mut ResMut<SimulationState>,
    s: &crate::locale::Strings,
    start_events: &mut MessageWriter<StartSimulationEvent>,
    reset_events: &mut MessageWriter<ResetSimulationEvent>,
) {
    let start_label = format!("{} {}", icons::START, s.start);
    if ui
        .add_sized([ui.available_width(), 32.0], egui::Button::new(start_label))
        .clicked()
    {
        start_events.write(StartSimulationEvent);
    }

    let deflect_label = if state.deflection_active {
        format!("{} {}", icons::DEFLECT, s.deflect_active)
    } else {
        format!("{} {}", icons::DEFLECT, s.deflect)
    };
    // Deflection only has meaning while the meteor is descending
    if ui
        .add_enabled(
            state.running,
            egui::Button::new(deflect_label).min_size(egui::vec2(ui.available_width(), 28.0)),
        )
        .clicked()
    {
        state.deflection_active = !state.deflection_active;
    }

    if ui
        .add(egui::Button::new(icons::RESET).min_size(egui::vec2(32.0, 28.0)))
        .on_hover_text("Reset")
        .clicked()
    {
        reset_events.write(ResetSimulationEvent);
    }
}

/// Render the NASA catalog selector.
fn render_catalog_selector(
    ui: &mut egui::Ui,
    catalog: &CatalogState,
    params: &mut ResMut<ImpactParameters>,
    ui_state: &mut ResMut<UiState>,
) {
    let s = strings(ui_state.language);

    ui.label(format!("{} {}", icons::CATALOG, s.load_data));

    match &catalog.status {
        CatalogStatus::Loading => {
            ui.label(egui::RichText::new(s.loading).weak().italics());
        }
        CatalogStatus::Failed(err) => {
            ui.colored_label(egui::Color32::from_rgb(221, 120, 85), s.load_error)
                .on_hover_text(err);
        }
        CatalogStatus::Ready(records) => {
            let selected_text = ui_state
                .selected_neo
                .and_then(|i| records.get(i))
                .map(|r| r.name.as_str())
                .unwrap_or(s.select);

            let mut picked = None;
            egui::ComboBox::from_id_salt("neo_selector")
                .width(220.0)
                .selected_text(selected_text)
                .show_ui(ui, |ui| {
                    for (index, record) in records.iter().enumerate() {
                        let is_selected = ui_state.selected_neo == Some(index);
                        if ui.selectable_label(is_selected, &record.name).clicked() {
                            picked = Some(index);
                        }
                    }
                });

            if let Some(index) = picked {
                ui_state.selected_neo = Some(index);
                apply_catalog_record(params, &records[index]);
            }
        }
    }
}

/// Write a catalog record into the parameters, clamped to slider bounds.
fn apply_catalog_record(params: &mut ResMut<ImpactParameters>, record: &NeoRecord) {
    params.diameter_m = record
        .diameter_m
        .clamp(*DIAMETER_RANGE_M.start(), *DIAMETER_RANGE_M.end());
    params.velocity_km_s = record
        .velocity_km_s
        .clamp(*VELOCITY_RANGE_KM_S.start(), *VELOCITY_RANGE_KM_S.end());
    params.density_kg_m3 = CATALOG_DENSITY_KG_M3;

    info!(
        "Loaded catalog object '{}': d={:.1} m, v={:.2} km/s",
        record.name, params.diameter_m, params.velocity_km_s
    );
}

/// Render the language selector.
fn render_language_selector(ui: &mut egui::Ui, ui_state: &mut ResMut<UiState>) {
    use crate::locale::Language;

    let s = strings(ui_state.language);

    ui.horizontal(|ui| {
        ui.label(format!("{} {}", icons::LANGUAGE, s.language));
        ui.selectable_value(&mut ui_state.language, Language::Es, Language::Es.label());
        ui.selectable_value(&mut ui_state.language, Language::En, Language::En.label());
    });
}
