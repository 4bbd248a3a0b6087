use bevy::prelude::*;
use bevy::render::RenderPlugin;
use bevy::render::settings::{RenderCreation, WgpuSettings};
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::PanOrbitCameraPlugin;

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod bodies;
mod config;
mod core;
mod orbital;
mod session;
mod ui;
mod visualization;

// Import plugins
use config::OrreryConfig;
use crate::core::CameraRigPlugin;
use orbital::OrbitalPlugin;
use session::SessionPlugin;
use ui::UiPlugin;
use visualization::VisualizationPlugin;

fn main() {
    let config = OrreryConfig::load_or_default();

    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Bevy Orrery".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(RenderPlugin {
                render_creation: RenderCreation::Automatic(WgpuSettings { ..default() }),
                ..default()
            }),
    );

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    app.insert_resource(config);
    app.add_plugins(PanOrbitCameraPlugin);

    // Add our custom plugins
    app.add_plugins(SessionPlugin);
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(CameraRigPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(UiPlugin);

    app.run();
}
