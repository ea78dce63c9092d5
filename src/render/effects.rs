//! Explosion effect at the impact point.
//!
//! An emissive sphere that grows and fades over its lifetime, then
//! despawns together with its dedicated material.

use bevy::prelude::*;

/// Initial explosion sphere radius (render units).
pub const EXPLOSION_START_RADIUS: f32 = 0.3;

/// Scale multiplier applied each tick.
pub const EXPLOSION_GROWTH: f32 = 1.05;

/// Lifetime advance per tick.
pub const EXPLOSION_LIFE_STEP: f32 = 0.02;

/// Opacity lost per unit of life.
pub const EXPLOSION_FADE_RATE: f32 = 0.3;

/// Life value past which the effect despawns.
pub const EXPLOSION_MAX_LIFE: f32 = 3.0;

/// Message to spawn an explosion effect.
#[derive(Message)]
pub struct SpawnExplosionEvent {
    /// World position of the effect.
    pub position: Vec3,
}

/// Component for an animated explosion sphere.
#[derive(Component)]
pub struct Explosion {
    /// Accumulated lifetime, advanced each tick.
    pub life: f32,
}

/// Current opacity for a given lifetime.
pub fn explosion_alpha(life: f32) -> f32 {
    (1.0 - life * EXPLOSION_FADE_RATE).max(0.0)
}

/// Spawn explosion entities from events.
pub fn spawn_explosions(
    mut commands: Commands,
    mut events: MessageReader<SpawnExplosionEvent>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for event in events.read() {
        let mesh = meshes.add(Sphere::new(EXPLOSION_START_RADIUS));

        // Each explosion gets its own material so the fade does not
        // affect other effects sharing the asset.
        let material = materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 0.4, 0.0, 0.9),
            emissive: LinearRgba::rgb(4.0, 1.2, 0.0),
            alpha_mode: AlphaMode::Blend,
            unlit: true,
            ..default()
        });

        commands.spawn((
            Explosion { life: 0.0 },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(event.position),
        ));
    }
}

/// Grow and fade explosions, despawning finished ones.
pub fn animate_explosions(
    mut commands: Commands,
    mut explosions: Query<(
        Entity,
        &mut Explosion,
        &mut Transform,
        &MeshMaterial3d<StandardMaterial>,
    )>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for (entity, mut explosion, mut transform, material_handle) in explosions.iter_mut() {
        explosion.life += EXPLOSION_LIFE_STEP;

        if explosion.life > EXPLOSION_MAX_LIFE {
            materials.remove(&material_handle.0);
            commands.entity(entity).despawn();
            continue;
        }

        transform.scale *= EXPLOSION_GROWTH;

        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color.set_alpha(explosion_alpha(explosion.life));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_alpha_fades_with_life() {
        assert_relative_eq!(explosion_alpha(0.0), 1.0);
        assert!(explosion_alpha(1.0) < explosion_alpha(0.5));
    }

    #[test]
    fn test_alpha_clamped_at_zero() {
        // Fully transparent well before the despawn threshold
        assert_eq!(explosion_alpha(4.0), 0.0);
        assert_eq!(explosion_alpha(EXPLOSION_MAX_LIFE + 1.0), 0.0);
    }

    #[test]
    fn test_nearly_transparent_at_despawn() {
        assert!(explosion_alpha(EXPLOSION_MAX_LIFE) <= 0.1);
    }
}
