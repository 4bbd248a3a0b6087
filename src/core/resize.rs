//! Viewport resize handling
//!
//! Keeps the main camera's aspect ratio equal to the window's. Bevy resizes
//! the swapchain and any post-processing targets with the window itself.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::core::orbit_camera::MainCamera;

/// Aspect ratio for a viewport, or `None` while minimised / degenerate.
pub fn aspect_ratio(width: f32, height: f32) -> Option<f32> {
    let aspect = width / height;
    (width > 0.0 && height > 0.0 && aspect.is_finite()).then_some(aspect)
}

/// Apply the latest window size to the main camera's projection.
pub fn sync_camera_aspect(
    mut resized: MessageReader<WindowResized>,
    mut projections: Query<&mut Projection, With<MainCamera>>,
) {
    let Some(latest) = resized.read().last() else {
        return;
    };
    let Some(aspect) = aspect_ratio(latest.width, latest.height) else {
        debug!(
            "Ignoring degenerate viewport {}x{}",
            latest.width, latest.height
        );
        return;
    };

    for mut projection in &mut projections {
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::message::Messages;

    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_message::<WindowResized>()
            .add_systems(Update, sync_camera_aspect);
        let camera = app
            .world_mut()
            .spawn((
                Projection::Perspective(PerspectiveProjection::default()),
                MainCamera,
            ))
            .id();
        (app, camera)
    }

    fn resize(app: &mut App, width: f32, height: f32) {
        app.world_mut()
            .resource_mut::<Messages<WindowResized>>()
            .write(WindowResized {
                window: Entity::PLACEHOLDER,
                width,
                height,
            });
        app.update();
    }

    fn current_aspect(app: &App, camera: Entity) -> f32 {
        match app.world().get::<Projection>(camera).expect("projection") {
            Projection::Perspective(p) => p.aspect_ratio,
            _ => panic!("expected a perspective projection"),
        }
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(aspect_ratio(1920.0, 1080.0), Some(1920.0 / 1080.0));
        assert_eq!(aspect_ratio(800.0, 0.0), None);
        assert_eq!(aspect_ratio(0.0, 600.0), None);
    }

    #[test]
    fn test_resize_sets_exact_aspect() {
        let (mut app, camera) = test_app();
        resize(&mut app, 1600.0, 900.0);
        assert_eq!(current_aspect(&app, camera), 1600.0 / 900.0);

        resize(&mut app, 700.0, 1000.0);
        assert_eq!(current_aspect(&app, camera), 700.0 / 1000.0);
    }

    #[test]
    fn test_latest_resize_wins() {
        let (mut app, camera) = test_app();
        {
            let mut messages = app.world_mut().resource_mut::<Messages<WindowResized>>();
            for (w, h) in [(640.0, 480.0), (1280.0, 720.0)] {
                messages.write(WindowResized {
                    window: Entity::PLACEHOLDER,
                    width: w,
                    height: h,
                });
            }
        }
        app.update();
        assert_eq!(current_aspect(&app, camera), 1280.0 / 720.0);
    }

    #[test]
    fn test_minimised_window_keeps_previous_aspect() {
        let (mut app, camera) = test_app();
        resize(&mut app, 1000.0, 500.0);
        resize(&mut app, 0.0, 0.0);
        assert_eq!(current_aspect(&app, camera), 2.0);
    }
}
