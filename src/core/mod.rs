//! Camera controller and viewport handling.

use bevy::prelude::*;

pub mod orbit_camera;
pub mod resize;

pub use orbit_camera::{CameraHome, MainCamera, reset_camera_view, spawn_main_camera};
pub use resize::{aspect_ratio, sync_camera_aspect};

use crate::orbital::OrrerySet;

/// Plugin for camera input and resize handling
pub struct CameraRigPlugin;

impl Plugin for CameraRigPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                reset_camera_view.in_set(OrrerySet::Input),
                sync_camera_aspect,
            ),
        );
    }
}
