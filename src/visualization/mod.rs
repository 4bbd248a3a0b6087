//! Visualization module
//!
//! This module handles procedural textures, the starfield backdrop, lighting
//! and orbit line gizmos.

use bevy::prelude::*;
use bevy::transform::TransformSystems;

pub mod lighting;
pub mod orbit_lines;
pub mod starfield;
pub mod textures;

pub use lighting::{apply_ambient_light, reset_ambient_light};
pub use orbit_lines::{OrbitLineConfig, draw_orbit_lines, toggle_orbit_lines};
pub use starfield::{StarShell, generate_stars, spawn_starfield};

use crate::orbital::OrrerySet;
use crate::session::AppView;

/// Plugin for visualization systems
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitLineConfig>()
            .add_systems(OnEnter(AppView::Orrery), apply_ambient_light)
            .add_systems(OnExit(AppView::Orrery), reset_ambient_light)
            .add_systems(Update, toggle_orbit_lines.in_set(OrrerySet::Input))
            .add_systems(
                PostUpdate,
                draw_orbit_lines
                    .after(TransformSystems::Propagate)
                    .run_if(in_state(AppView::Orrery)),
            );
    }
}
