//! Phosphor icon definitions for the UI.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Re-export commonly used icons with semantic names for our app.
// Browse all icons at https://phosphoricons.com/

/// Start/play icon
pub const START: &str = egui_phosphor::regular::PLAY;
/// Reset/reload icon (circular arrow)
pub const RESET: &str = egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;
/// Deflection icon
pub const DEFLECT: &str = egui_phosphor::regular::ARROW_BEND_UP_RIGHT;
/// Meteor icon for the results header
pub const METEOR: &str = egui_phosphor::regular::SHOOTING_STAR;
/// Impact/explosion icon for the banner
pub const IMPACT: &str = egui_phosphor::regular::FIRE;
/// Crater/target icon
pub const CRATER: &str = egui_phosphor::regular::CROSSHAIR;
/// Info/learn-more icon
pub const INFO: &str = egui_phosphor::regular::INFO;
/// Close/X icon
pub const CLOSE: &str = egui_phosphor::regular::X;
/// Globe/language icon
pub const LANGUAGE: &str = egui_phosphor::regular::TRANSLATE;
/// Satellite/catalog icon
pub const CATALOG: &str = egui_phosphor::regular::PLANET;
