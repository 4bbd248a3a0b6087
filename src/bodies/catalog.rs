//! Static body table for the orrery.
//!
//! Distances and sizes are in scene units and heavily compressed so every
//! planet fits on screen. Angular rates are radians per simulation tick.

use bevy::prelude::*;

/// Procedural texture family used for a body's surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceStyle {
    /// Bright granulated photosphere.
    Solar,
    /// Speckled regolith with dark craters.
    Rocky,
    /// Water world with noisy land masses and polar caps.
    Oceanic,
    /// Latitude bands, gas giants.
    Banded,
    /// Smooth pale surface with faint streaks.
    Icy,
}

/// Texture style plus the seed that makes it reproducible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surface {
    pub style: SurfaceStyle,
    pub seed: u64,
}

/// Moon attached to a planet. Moons never have moons of their own.
#[derive(Clone, Copy, Debug)]
pub struct MoonDescriptor {
    pub name: &'static str,
    pub radius: f32,
    /// sRGB tint multiplied into the procedural texture.
    pub color: [f32; 3],
    pub surface: Surface,
    /// Distance from the parent planet's centre.
    pub orbit_radius: f32,
    pub rotation_speed: f32,
    pub revolution_speed: f32,
}

/// Immutable input record for one body.
#[derive(Clone, Copy, Debug)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub radius: f32,
    /// sRGB tint multiplied into the procedural texture.
    pub color: [f32; 3],
    pub surface: Surface,
    /// Distance from the sun's centre. Zero for the sun itself.
    pub orbit_radius: f32,
    /// Self-spin, radians per tick.
    pub rotation_speed: f32,
    /// Orbital rate, radians per tick.
    pub revolution_speed: f32,
    /// Axial tilt in radians.
    pub tilt: f32,
    pub moon: Option<MoonDescriptor>,
    pub has_rings: bool,
    /// Emits light; gets a point light and an emissive material.
    pub luminous: bool,
}

impl BodyDescriptor {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }

    /// Inner and outer ring radii, relative to the body's own radius.
    pub fn ring_radii(&self) -> (f32, f32) {
        (self.radius * 1.35, self.radius * 2.3)
    }
}

impl MoonDescriptor {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }
}

const fn surface(style: SurfaceStyle, seed: u64) -> Surface {
    Surface { style, seed }
}

pub const SUN: BodyDescriptor = BodyDescriptor {
    name: "Sun",
    radius: 5.0,
    color: [1.0, 0.85, 0.35],
    surface: surface(SurfaceStyle::Solar, 5),
    orbit_radius: 0.0,
    rotation_speed: 0.004,
    revolution_speed: 0.0,
    tilt: 0.0,
    moon: None,
    has_rings: false,
    luminous: true,
};

pub const PLANETS: [BodyDescriptor; 8] = [
    BodyDescriptor {
        name: "Mercury",
        radius: 0.6,
        color: [0.72, 0.68, 0.64],
        surface: surface(SurfaceStyle::Rocky, 11),
        orbit_radius: 10.0,
        rotation_speed: 0.004,
        revolution_speed: 0.012,
        tilt: 0.0,
        moon: None,
        has_rings: false,
        luminous: false,
    },
    BodyDescriptor {
        name: "Venus",
        radius: 0.95,
        color: [0.93, 0.8, 0.55],
        surface: surface(SurfaceStyle::Banded, 23),
        orbit_radius: 14.0,
        // Retrograde.
        rotation_speed: -0.002,
        revolution_speed: 0.008,
        tilt: 0.05,
        moon: None,
        has_rings: false,
        luminous: false,
    },
    BodyDescriptor {
        name: "Earth",
        radius: 1.0,
        color: [1.0, 1.0, 1.0],
        surface: surface(SurfaceStyle::Oceanic, 31),
        orbit_radius: 19.0,
        rotation_speed: 0.02,
        revolution_speed: 0.005,
        tilt: 0.41,
        moon: Some(MoonDescriptor {
            name: "Moon",
            radius: 0.27,
            color: [0.8, 0.8, 0.8],
            surface: surface(SurfaceStyle::Rocky, 37),
            orbit_radius: 2.0,
            rotation_speed: 0.004,
            revolution_speed: 0.04,
        }),
        has_rings: false,
        luminous: false,
    },
    BodyDescriptor {
        name: "Mars",
        radius: 0.7,
        color: [0.85, 0.42, 0.25],
        surface: surface(SurfaceStyle::Rocky, 41),
        orbit_radius: 25.0,
        rotation_speed: 0.018,
        revolution_speed: 0.003,
        tilt: 0.44,
        moon: None,
        has_rings: false,
        luminous: false,
    },
    BodyDescriptor {
        name: "Jupiter",
        radius: 2.8,
        color: [0.86, 0.74, 0.58],
        surface: surface(SurfaceStyle::Banded, 53),
        orbit_radius: 36.0,
        rotation_speed: 0.04,
        revolution_speed: 0.0012,
        tilt: 0.05,
        moon: Some(MoonDescriptor {
            name: "Ganymede",
            radius: 0.4,
            color: [0.75, 0.72, 0.68],
            surface: surface(SurfaceStyle::Icy, 59),
            orbit_radius: 4.6,
            rotation_speed: 0.003,
            revolution_speed: 0.02,
        }),
        has_rings: false,
        luminous: false,
    },
    BodyDescriptor {
        name: "Saturn",
        radius: 2.4,
        color: [0.92, 0.84, 0.62],
        surface: surface(SurfaceStyle::Banded, 61),
        orbit_radius: 48.0,
        rotation_speed: 0.038,
        revolution_speed: 0.0008,
        tilt: 0.47,
        moon: None,
        has_rings: true,
        luminous: false,
    },
    BodyDescriptor {
        name: "Uranus",
        radius: 1.6,
        color: [0.6, 0.85, 0.9],
        surface: surface(SurfaceStyle::Icy, 71),
        orbit_radius: 60.0,
        rotation_speed: -0.03,
        revolution_speed: 0.0005,
        tilt: 1.71,
        moon: None,
        has_rings: false,
        luminous: false,
    },
    BodyDescriptor {
        name: "Neptune",
        radius: 1.5,
        color: [0.35, 0.5, 0.95],
        surface: surface(SurfaceStyle::Banded, 83),
        orbit_radius: 70.0,
        rotation_speed: 0.032,
        revolution_speed: 0.0003,
        tilt: 0.49,
        moon: None,
        has_rings: false,
        luminous: false,
    },
];

/// Sun first, then planets ordered by orbit radius.
pub fn solar_system() -> Vec<BodyDescriptor> {
    std::iter::once(SUN).chain(PLANETS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_is_stationary_and_luminous() {
        assert_eq!(SUN.revolution_speed, 0.0);
        assert_eq!(SUN.orbit_radius, 0.0);
        assert!(SUN.luminous);
        assert!(PLANETS.iter().all(|p| !p.luminous));
    }

    #[test]
    fn test_planets_clear_the_sun_and_each_other() {
        let mut last = SUN.radius;
        for planet in PLANETS {
            let extent = planet
                .moon
                .map(|m| m.orbit_radius + m.radius)
                .unwrap_or(0.0)
                .max(if planet.has_rings {
                    planet.ring_radii().1
                } else {
                    planet.radius
                });
            assert!(
                planet.orbit_radius - extent > last,
                "{} overlaps its inner neighbour",
                planet.name
            );
            last = planet.orbit_radius + extent;
        }
    }

    #[test]
    fn test_moons_orbit_outside_their_planet() {
        for planet in PLANETS {
            if let Some(moon) = planet.moon {
                assert!(moon.orbit_radius > planet.radius + moon.radius);
            }
        }
    }

    #[test]
    fn test_surface_seeds_are_unique() {
        let mut seeds: Vec<u64> = solar_system()
            .iter()
            .flat_map(|b| std::iter::once(b.surface.seed).chain(b.moon.map(|m| m.surface.seed)))
            .collect();
        let n = seeds.len();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), n);
    }
}
