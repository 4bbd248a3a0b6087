//! Orbit camera setup on top of `bevy_panorbit_camera`.
//!
//! Left drag orbits, right drag pans, scroll zooms. Distance and pitch are
//! clamped from [`CameraConfig`]; the plugin applies smoothing (damping) in
//! its own once-per-frame update. `R` eases the view back to its start pose.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

#[cfg(feature = "bloom")]
use bevy::post_process::bloom::Bloom;
#[cfg(feature = "bloom")]
use bevy::render::view::Hdr;

use crate::config::CameraConfig;

/// Marker for the camera that renders the orrery.
#[derive(Component)]
pub struct MainCamera;

/// Start pose the camera returns to on reset.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct CameraHome {
    pub radius: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl From<&CameraConfig> for CameraHome {
    fn from(cfg: &CameraConfig) -> Self {
        Self {
            radius: cfg.initial_distance,
            yaw: cfg.initial_yaw,
            pitch: cfg.initial_pitch,
        }
    }
}

/// Build the PanOrbit controller for our scene scale.
pub fn pan_orbit_from_config(cfg: &CameraConfig) -> PanOrbitCamera {
    PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(cfg.initial_distance),
        yaw: Some(cfg.initial_yaw),
        pitch: Some(cfg.initial_pitch),
        zoom_lower_limit: cfg.min_distance,
        zoom_upper_limit: Some(cfg.max_distance),
        pitch_lower_limit: Some(cfg.min_pitch),
        pitch_upper_limit: Some(cfg.max_pitch),
        orbit_smoothness: cfg.smoothness,
        pan_smoothness: cfg.smoothness,
        zoom_smoothness: cfg.smoothness,
        // Position the camera on the first frame instead of easing in.
        force_update: true,
        ..default()
    }
}

/// Spawn the main camera and return it.
pub fn spawn_main_camera(commands: &mut Commands, cfg: &CameraConfig) -> Entity {
    let home = CameraHome::from(cfg);
    let start =
        Quat::from_euler(EulerRot::YXZ, home.yaw, -home.pitch, 0.0) * Vec3::Z * home.radius;

    let camera = commands
        .spawn((
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                near: 0.1,
                // Must reach past the starfield shell from any allowed zoom.
                far: 2_000.0,
                ..default()
            }),
            Camera {
                order: 0,
                clear_color: ClearColorConfig::Custom(Color::BLACK),
                ..default()
            },
            Tonemapping::TonyMcMapface,
            pan_orbit_from_config(cfg),
            home,
            MainCamera,
            Transform::from_translation(start).looking_at(Vec3::ZERO, Vec3::Y),
            Name::new("Main Camera"),
        ))
        .id();

    #[cfg(feature = "bloom")]
    commands.entity(camera).insert((Hdr, Bloom::NATURAL));

    camera
}

/// Ease back to the home pose with `R`.
pub fn reset_camera_view(
    keys: Res<ButtonInput<KeyCode>>,
    mut cameras: Query<(&mut PanOrbitCamera, &CameraHome), With<MainCamera>>,
) {
    if !keys.just_pressed(KeyCode::KeyR) {
        return;
    }
    for (mut pan_orbit, home) in &mut cameras {
        pan_orbit.target_focus = Vec3::ZERO;
        pan_orbit.target_radius = home.radius;
        pan_orbit.target_yaw = home.yaw;
        pan_orbit.target_pitch = home.pitch;
        debug!("Camera reset to home pose");
    }
}
