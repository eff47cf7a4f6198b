use bevy::prelude::*;
use repel_core::Particle;
use repel_sim::field::ParticleField;
use std::collections::HashMap;

use super::camera::window_to_world;

/// Marker for particle circle entities
#[derive(Component)]
pub struct ParticleSprite {
    pub index: usize,
}

/// Particle-set generation the current sprites were spawned for
#[derive(Resource, Default)]
pub struct SpawnedGeneration(pub u32);

/// Keep circle entities in step with the particle set.
/// Respawns everything when the set was replaced, otherwise just moves sprites.
pub fn sync_particle_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut spawned: ResMut<SpawnedGeneration>,
    field: Res<ParticleField>,
    mut query: Query<(Entity, &mut Transform, &ParticleSprite)>,
) {
    let bounds = field.config.bounds();

    if spawned.0 != field.generation {
        for (entity, _, _) in &query {
            commands.entity(entity).despawn();
        }
        spawn_particle_visuals(
            &mut commands,
            &mut meshes,
            &mut materials,
            &field.particles,
            bounds,
        );
        spawned.0 = field.generation;
        return;
    }

    for (_, mut transform, sprite) in query.iter_mut() {
        let Some(p) = field.particles.get(sprite.index) else {
            continue;
        };
        let pos = window_to_world(p.position, bounds);
        transform.translation.x = pos.x;
        transform.translation.y = pos.y;
    }
}

fn spawn_particle_visuals(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    particles: &[Particle],
    bounds: [f32; 2],
) {
    // Unit circle, scaled per particle by its radius
    let mesh = meshes.add(Circle::new(1.0));

    let mut material_cache: HashMap<[u8; 4], Handle<ColorMaterial>> = HashMap::new();

    for (index, p) in particles.iter().enumerate() {
        let material = material_cache
            .entry(p.color)
            .or_insert_with(|| materials.add(ColorMaterial::from(particle_color(p))))
            .clone();

        let pos = window_to_world(p.position, bounds);
        commands.spawn((
            Mesh2d(mesh.clone()),
            MeshMaterial2d(material),
            Transform::from_xyz(pos.x, pos.y, 0.0).with_scale(Vec3::splat(p.radius)),
            ParticleSprite { index },
        ));
    }

    info!(
        "Spawned {} particle visuals ({} materials)",
        particles.len(),
        material_cache.len()
    );
}

fn particle_color(p: &Particle) -> Color {
    let [r, g, b, a] = p.color;
    Color::srgba_u8(r, g, b, a)
}
