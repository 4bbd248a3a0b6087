//! Procedural starfield backdrop: a seeded point set on a spherical shell
//! around the system, rendered as tiny unlit spheres sharing one mesh.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single star of the backdrop.
#[derive(Clone, Debug)]
pub struct StarPoint {
    pub position: Vec3,
    /// Brightness in [0.0, 1.0].
    pub brightness: f32,
    /// Render scale of the star sphere.
    pub size: f32,
}

/// Shell parameters for star placement.
#[derive(Clone, Copy, Debug)]
pub struct StarShell {
    pub inner_radius: f32,
    pub outer_radius: f32,
}

/// Generate `count` stars uniformly distributed over directions and spread
/// between the shell radii. Deterministic for a given seed.
pub fn generate_stars(seed: u64, count: u32, shell: StarShell) -> Vec<StarPoint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lo = shell.inner_radius.min(shell.outer_radius);
    let hi = shell.inner_radius.max(shell.outer_radius);

    (0..count)
        .map(|_| {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = (1.0 - 2.0 * rng.random::<f32>()).acos();
            let direction =
                Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());
            let radius = lo + (hi - lo) * rng.random::<f32>();

            // Many dim stars, few bright ones.
            let brightness = rng.random::<f32>().powf(3.0);
            let size = 0.12 + 0.35 * brightness;

            StarPoint {
                position: direction * radius,
                brightness,
                size,
            }
        })
        .collect()
}

/// Marker for the starfield root entity.
#[derive(Component)]
pub struct Starfield;

/// Marker for a single star.
#[derive(Component)]
pub struct Star;

/// Number of shared materials stars are bucketed into by brightness.
const BRIGHTNESS_BUCKETS: usize = 4;

/// Spawn the starfield under a new root entity and return it.
pub fn spawn_starfield(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    stars: &[StarPoint],
) -> Entity {
    let mesh = meshes.add(Sphere::new(1.0).mesh().uv(8, 6));
    let buckets: Vec<Handle<StandardMaterial>> = (0..BRIGHTNESS_BUCKETS)
        .map(|i| {
            let l = 0.45 + 0.55 * (i as f32 / (BRIGHTNESS_BUCKETS - 1) as f32);
            materials.add(StandardMaterial {
                base_color: Color::srgb(l, l, l * 1.05),
                unlit: true,
                ..default()
            })
        })
        .collect();

    let root = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Starfield,
            Name::new("Starfield"),
        ))
        .id();

    for star in stars {
        let bucket =
            ((star.brightness * BRIGHTNESS_BUCKETS as f32) as usize).min(BRIGHTNESS_BUCKETS - 1);
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(buckets[bucket].clone()),
            Transform::from_translation(star.position).with_scale(Vec3::splat(star.size)),
            Star,
            ChildOf(root),
        ));
    }

    root
}
