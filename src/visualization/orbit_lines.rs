//! Orbit path gizmos
//!
//! Draws the circle each body travels on, centred on its pivot. Runs after
//! transform propagation so moon orbits follow their planet in the same
//! frame.

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::bodies::{BodyState, Moon, OrbitPivot};

/// Global configuration for orbit line rendering
#[derive(Resource, Debug)]
pub struct OrbitLineConfig {
    pub enabled: bool,
    pub planet_color: Color,
    pub moon_color: Color,
    pub resolution: u32,
}

impl Default for OrbitLineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            planet_color: Color::srgba(0.45, 0.55, 0.75, 0.35),
            moon_color: Color::srgba(0.7, 0.7, 0.7, 0.3),
            resolution: 128,
        }
    }
}

/// Toggle orbit lines with `O`.
pub fn toggle_orbit_lines(keys: Res<ButtonInput<KeyCode>>, mut config: ResMut<OrbitLineConfig>) {
    if keys.just_pressed(KeyCode::KeyO) {
        config.enabled = !config.enabled;
        info!("Orbit lines {}", if config.enabled { "on" } else { "off" });
    }
}

/// Rotation that lays a gizmo circle (XY plane) into the XZ orbital plane.
pub fn orbital_plane() -> Quat {
    Quat::from_rotation_x(FRAC_PI_2)
}

pub fn draw_orbit_lines(
    mut gizmos: Gizmos,
    config: Res<OrbitLineConfig>,
    bodies: Query<(&BodyState, &ChildOf, Has<Moon>)>,
    pivots: Query<&GlobalTransform, With<OrbitPivot>>,
) {
    if !config.enabled {
        return;
    }

    for (state, child_of, is_moon) in &bodies {
        if state.orbit_radius <= 0.0 {
            continue;
        }
        let Ok(pivot) = pivots.get(child_of.parent()) else {
            continue;
        };
        let color = if is_moon {
            config.moon_color
        } else {
            config.planet_color
        };
        gizmos
            .circle(
                Isometry3d::new(pivot.translation(), orbital_plane()),
                state.orbit_radius,
                color,
            )
            .resolution(config.resolution);
    }
}
