//! Audio playback: looping background music and the impact cue.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::collision::ImpactEvent;

/// Background music volume (linear).
pub const MUSIC_VOLUME: f32 = 0.4;

/// Plugin wiring the audio cues.
pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, start_background_music)
            .add_systems(Update, play_impact_sound);
    }
}

/// Start the looping background track.
fn start_background_music(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        AudioPlayer::new(asset_server.load("sounds/background.ogg")),
        PlaybackSettings::LOOP.with_volume(Volume::Linear(MUSIC_VOLUME)),
    ));
}

/// Play the impact sound once per impact.
fn play_impact_sound(
    mut commands: Commands,
    mut events: MessageReader<ImpactEvent>,
    asset_server: Res<AssetServer>,
) {
    for _event in events.read() {
        commands.spawn((
            AudioPlayer::new(asset_server.load("sounds/impact.ogg")),
            PlaybackSettings::DESPAWN,
        ));
    }
}
