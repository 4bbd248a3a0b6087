//! Scene builder: turns the body table into a transform hierarchy.
//!
//! ```text
//! root
//! └── pivot (OrbitPivot, fixed at the sun's centre)
//!     └── body node (BodyState; translation = orbit position)
//!         ├── surface mesh (tilt + spin)
//!         │   └── ring mesh (PlanetRing, optional)
//!         ├── point light (luminous bodies only)
//!         └── moon pivot (OrbitPivot)
//!             └── moon body node (BodyState, Moon)
//!                 └── moon surface mesh
//! ```

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::catalog::{BodyDescriptor, MoonDescriptor, Surface};
use crate::bodies::components::{
    BodyState, BodySurface, Luminous, Moon, OrbitPivot, PlanetRing,
};
use crate::visualization::textures::surface_image;

/// Tunables for one build.
#[derive(Clone, Copy, Debug)]
pub struct BuildSettings {
    pub texture_size: u32,
    pub sun_light_intensity: f32,
}

/// Entities and generated assets of a built system.
#[derive(Debug)]
pub struct BuiltSystem {
    pub root: Entity,
    /// Body nodes (planets, moons and the sun).
    pub bodies: Vec<Entity>,
    pub rings: Vec<Entity>,
    pub lights: Vec<Entity>,
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
    pub images: Vec<Handle<Image>>,
}

struct SceneAssets<'a> {
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    images: &'a mut Assets<Image>,
}

const SPHERE_SECTORS: u32 = 48;
const SPHERE_STACKS: u32 = 24;
/// Scales the emissive colour so the sun saturates (and blooms when enabled).
const SUN_EMISSIVE_GAIN: f32 = 4.0;

/// Spawn the whole system described by `table`.
pub fn build_solar_system(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    images: &mut Assets<Image>,
    table: &[BodyDescriptor],
    settings: &BuildSettings,
) -> BuiltSystem {
    let mut assets = SceneAssets {
        meshes,
        materials,
        images,
    };
    let root = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            Name::new("Solar System"),
        ))
        .id();
    let mut built = BuiltSystem {
        root,
        bodies: Vec::new(),
        rings: Vec::new(),
        lights: Vec::new(),
        meshes: Vec::new(),
        materials: Vec::new(),
        images: Vec::new(),
    };

    for desc in table {
        spawn_body(commands, &mut assets, &mut built, desc, settings);
    }

    info!(
        "Built solar system: {} bodies, {} rings, {} lights",
        built.bodies.len(),
        built.rings.len(),
        built.lights.len()
    );
    built
}

fn spawn_body(
    commands: &mut Commands,
    assets: &mut SceneAssets,
    built: &mut BuiltSystem,
    desc: &BodyDescriptor,
    settings: &BuildSettings,
) {
    let pivot = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            OrbitPivot,
            Name::new(format!("{} pivot", desc.name)),
            ChildOf(built.root),
        ))
        .id();

    let state = BodyState::from(desc);
    let texture = add_texture(assets, built, desc.surface, settings.texture_size);
    let material = if desc.luminous {
        StandardMaterial {
            base_color: desc.color(),
            base_color_texture: Some(texture.clone()),
            emissive: desc.color().to_linear() * SUN_EMISSIVE_GAIN,
            emissive_texture: Some(texture),
            ..default()
        }
    } else {
        StandardMaterial {
            base_color: desc.color(),
            base_color_texture: Some(texture),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        }
    };
    let surface = spawn_surface(commands, assets, built, desc.name, desc.radius, material, &state);
    let node = spawn_node(commands, built, pivot, desc.name, state, surface);

    if desc.luminous {
        commands.entity(node).insert(Luminous);
        let light = commands
            .spawn((
                PointLight {
                    intensity: settings.sun_light_intensity,
                    range: 1_000.0,
                    radius: desc.radius,
                    shadows_enabled: false,
                    ..default()
                },
                Transform::default(),
                Name::new(format!("{} light", desc.name)),
                ChildOf(node),
            ))
            .id();
        built.lights.push(light);
    }

    if desc.has_rings {
        let (inner, outer) = desc.ring_radii();
        let [r, g, b] = desc.color;
        let mesh = assets.meshes.add(Annulus::new(inner, outer));
        let material = assets.materials.add(StandardMaterial {
            base_color: Color::srgba(r * 0.9, g * 0.85, b * 0.75, 0.7),
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            perceptual_roughness: 1.0,
            ..default()
        });
        built.meshes.push(mesh.clone());
        built.materials.push(material.clone());

        let ring = commands
            .spawn((
                Mesh3d(mesh),
                MeshMaterial3d(material),
                // Annulus is built in the XY plane; lay it into the equator.
                Transform::from_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
                PlanetRing,
                Name::new(format!("{} rings", desc.name)),
                ChildOf(surface),
            ))
            .id();
        built.rings.push(ring);
    }

    if let Some(moon) = &desc.moon {
        spawn_moon(commands, assets, built, node, moon, settings);
    }
}

fn spawn_moon(
    commands: &mut Commands,
    assets: &mut SceneAssets,
    built: &mut BuiltSystem,
    planet_node: Entity,
    moon: &MoonDescriptor,
    settings: &BuildSettings,
) {
    let pivot = commands
        .spawn((
            Transform::default(),
            Visibility::default(),
            OrbitPivot,
            Name::new(format!("{} pivot", moon.name)),
            ChildOf(planet_node),
        ))
        .id();

    let state = BodyState::from(moon);
    let texture = add_texture(assets, built, moon.surface, settings.texture_size / 2);
    let material = StandardMaterial {
        base_color: moon.color(),
        base_color_texture: Some(texture),
        perceptual_roughness: 1.0,
        ..default()
    };
    let surface = spawn_surface(commands, assets, built, moon.name, moon.radius, material, &state);
    let node = spawn_node(commands, built, pivot, moon.name, state, surface);
    commands.entity(node).insert(Moon);
}

fn add_texture(
    assets: &mut SceneAssets,
    built: &mut BuiltSystem,
    surface: Surface,
    size: u32,
) -> Handle<Image> {
    let handle = assets.images.add(surface_image(surface, size));
    built.images.push(handle.clone());
    handle
}

fn spawn_surface(
    commands: &mut Commands,
    assets: &mut SceneAssets,
    built: &mut BuiltSystem,
    name: &str,
    radius: f32,
    material: StandardMaterial,
    state: &BodyState,
) -> Entity {
    let mesh = assets
        .meshes
        .add(Sphere::new(radius).mesh().uv(SPHERE_SECTORS, SPHERE_STACKS));
    let material = assets.materials.add(material);
    built.meshes.push(mesh.clone());
    built.materials.push(material.clone());

    commands
        .spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_rotation(state.surface_rotation()),
            Name::new(format!("{name} surface")),
        ))
        .id()
}

fn spawn_node(
    commands: &mut Commands,
    built: &mut BuiltSystem,
    pivot: Entity,
    name: &str,
    state: BodyState,
    surface: Entity,
) -> Entity {
    let node = commands
        .spawn((
            Transform::from_translation(state.local_position()),
            Visibility::default(),
            state,
            BodySurface(surface),
            Name::new(name.to_string()),
            ChildOf(pivot),
        ))
        .id();
    commands.entity(surface).insert(ChildOf(node));
    built.bodies.push(node);
    node
}
