//! Lighting configuration systems

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::config::OrreryConfig;

/// Keep night sides readable; the sun's point light does the rest.
pub fn apply_ambient_light(mut commands: Commands, config: Res<OrreryConfig>) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: config.ambient_brightness,
        ..default()
    });
}

/// Put ambient light back to Bevy's default when the orrery is left.
pub fn reset_ambient_light(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight::default());
}
