//! Rendering systems for the impact simulator.
//!
//! Provides the globe, scene lighting, and the explosion effect shown
//! at the impact point.

mod effects;
mod globe;

use bevy::prelude::*;

pub use self::effects::{Explosion, SpawnExplosionEvent};
pub use self::globe::Globe;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SpawnExplosionEvent>()
            .add_systems(Startup, (globe::spawn_globe, globe::spawn_light))
            .add_systems(Update, effects::spawn_explosions)
            .add_systems(
                FixedUpdate,
                (globe::spin_globe, effects::animate_explosions),
            );
    }
}
