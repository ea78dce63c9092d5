//! Impactor - Meteor Impact Simulator
//!
//! A desktop application visualizing an asteroid impact on Earth and
//! deriving illustrative physical estimates from adjustable parameters.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use impactor::audio::AudioPlugin;
use impactor::camera::CameraPlugin;
use impactor::catalog::CatalogPlugin;
use impactor::collision::CollisionPlugin;
use impactor::meteor::MeteorPlugin;
use impactor::render::RenderPlugin;
use impactor::locale::{strings, Language};
use impactor::types::{ImpactParameters, SimulationState};
use impactor::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: strings(Language::default()).title.to_string(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(ImpactParameters::default())
        .insert_resource(SimulationState::default())
        // Add simulation plugins
        .add_plugins((
            CameraPlugin,
            RenderPlugin,
            MeteorPlugin,
            CollisionPlugin,
            CatalogPlugin,
            AudioPlugin,
            UiPlugin,
        ))
        .run();
}
