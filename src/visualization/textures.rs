//! Procedural surface textures.
//!
//! Every body gets an equirectangular RGBA texture generated from its
//! [`Surface`] seed. Apart from the oceanic style the output is a luminance
//! pattern that the material tints with the body colour.

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::{PI, TAU};

use crate::bodies::catalog::{Surface, SurfaceStyle};

/// Fractal noise sampled on the unit sphere, so texels meet seamlessly at
/// the date line and converge to a single value at each pole.
pub struct SphereNoise {
    fbm: Fbm<Perlin>,
}

impl SphereNoise {
    pub fn new(seed: u32, octaves: usize, frequency: f64) -> Self {
        let fbm = Fbm::<Perlin>::new(seed)
            .set_octaves(octaves)
            .set_frequency(frequency)
            .set_persistence(0.5);
        Self { fbm }
    }

    /// Sample at equirectangular `u` (longitude) and `v` (latitude, 0 = north).
    /// Result is remapped into [0, 1].
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let lon = f64::from(u) * TAU;
        let lat = (0.5 - f64::from(v.clamp(0.0, 1.0))) * PI;
        let point = [lat.cos() * lon.cos(), lat.sin(), lat.cos() * lon.sin()];
        ((self.fbm.get(point) + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }
}

#[derive(Clone, Copy)]
struct Crater {
    u: f32,
    v: f32,
    radius: f32,
    depth: f32,
}

/// Generate `width * height` RGBA8 pixels for a surface. Deterministic per seed.
pub fn generate_surface_pixels(surface: Surface, width: u32, height: u32) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(surface.seed);
    let (width, height) = (width.max(1), height.max(1));
    let mut data = Vec::with_capacity((width * height * 4) as usize);

    let noise_seed = surface.seed as u32;
    let noise = SphereNoise::new(noise_seed, 4, 1.5);
    let detail = SphereNoise::new(noise_seed.wrapping_add(0x9E37), 2, 6.0);
    let craters: Vec<Crater> = match surface.style {
        SurfaceStyle::Rocky => (0..48)
            .map(|_| Crater {
                u: rng.random::<f32>(),
                v: rng.random_range(0.1..0.9),
                radius: rng.random_range(0.008..0.05),
                depth: rng.random_range(0.15..0.45),
            })
            .collect(),
        _ => Vec::new(),
    };
    let band_phase = rng.random::<f32>() * std::f32::consts::TAU;
    let band_count = rng.random_range(6.0..12.0_f32);

    for y in 0..height {
        let v = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let u = (x as f32 + 0.5) / width as f32;
            let n = noise.sample(u, v);
            let d = detail.sample(u, v);

            let rgb = match surface.style {
                SurfaceStyle::Solar => {
                    let l = 0.75 + 0.25 * (0.6 * n + 0.4 * d);
                    [l, l, l]
                }
                SurfaceStyle::Rocky => {
                    let mut l = 0.45 + 0.4 * n + 0.15 * (d - 0.5);
                    for c in &craters {
                        let du = wrapped_delta(u, c.u) * 2.0;
                        let dist = (du * du + (v - c.v) * (v - c.v)).sqrt();
                        if dist < c.radius {
                            l -= c.depth * (1.0 - dist / c.radius);
                        }
                    }
                    let l = l.clamp(0.05, 1.0);
                    [l, l, l]
                }
                SurfaceStyle::Oceanic => oceanic(n, d, v),
                SurfaceStyle::Banded => {
                    let turbulence = (n - 0.5) * 1.2;
                    let band = (v * band_count * std::f32::consts::PI + band_phase + turbulence).sin();
                    let l = 0.7 + 0.2 * band + 0.1 * (d - 0.5);
                    [l, l * 0.97, l * 0.93]
                }
                SurfaceStyle::Icy => {
                    let streak = ((u * 40.0 + n * 6.0).sin() * 0.5 + 0.5) * 0.08;
                    let l = 0.85 + 0.1 * (d - 0.5) - streak;
                    [l, l, l.min(0.98) + 0.02]
                }
            };

            data.extend(rgb.map(to_u8));
            data.push(255);
        }
    }

    data
}

fn oceanic(n: f32, d: f32, v: f32) -> [f32; 3] {
    let polar = (v - 0.5).abs() > 0.42 + 0.03 * (d - 0.5);
    if polar {
        return [0.95, 0.97, 1.0];
    }
    let land = n > 0.53;
    if land {
        let green = 0.35 + 0.2 * d;
        [0.25 + 0.2 * n, green, 0.15]
    } else {
        let depth = 0.25 + 0.3 * n;
        [0.05, 0.15 + 0.2 * depth, 0.45 + 0.3 * depth]
    }
}

/// Shortest signed distance between two longitudes in [0, 1).
fn wrapped_delta(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(1.0);
    if d > 0.5 { d - 1.0 } else { d }
}

fn to_u8(channel: f32) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Build a texture asset for a surface at `size` x `size / 2` pixels.
pub fn surface_image(surface: Surface, size: u32) -> Image {
    let width = size.max(2);
    let height = (size / 2).max(1);
    Image::new(
        Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        generate_surface_pixels(surface, width, height),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
