//! Per-frame orbital animation.
//!
//! Every tick each body advances its spin and orbital angles, its body node
//! is moved to the point on its orbit given by the new angle, and its
//! surface mesh is rotated by the new spin. Moons use the same rule, one
//! level down the hierarchy.

use bevy::prelude::*;

use crate::bodies::{BodyState, BodySurface};
use crate::orbital::SimulationClock;

/// Advance all bodies by one tick.
pub fn advance_bodies(
    mut clock: ResMut<SimulationClock>,
    mut bodies: Query<(&mut BodyState, &mut Transform, &BodySurface)>,
    mut surfaces: Query<&mut Transform, Without<BodyState>>,
) {
    let Some(scale) = clock.tick_scale() else {
        return;
    };
    clock.ticks += 1;

    for (mut state, mut transform, surface) in &mut bodies {
        state.advance(scale);
        transform.translation = state.local_position();

        if let Ok(mut surface_transform) = surfaces.get_mut(surface.0) {
            surface_transform.rotation = state.surface_rotation();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::transform::TransformPlugin;

    struct TestBody {
        node: Entity,
        surface: Entity,
    }

    fn spawn_body(world: &mut World, parent: Option<Entity>, state: BodyState) -> TestBody {
        let surface = world.spawn(Transform::default()).id();
        let mut node = world.spawn((
            Transform::from_translation(state.local_position()),
            state,
            BodySurface(surface),
        ));
        if let Some(parent) = parent {
            node.insert(ChildOf(parent));
        }
        let node = node.id();
        world.entity_mut(surface).insert(ChildOf(node));
        TestBody { node, surface }
    }

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(TransformPlugin)
            .init_resource::<SimulationClock>()
            .add_systems(Update, advance_bodies);
        app
    }

    fn run_ticks(app: &mut App, n: usize) {
        for _ in 0..n {
            app.update();
        }
    }

    #[test]
    fn test_angles_accumulate_per_tick() {
        let mut app = test_app();
        let body = spawn_body(app.world_mut(), None, BodyState::new(10.0, 0.01, 0.003, 0.0));

        run_ticks(&mut app, 250);

        let state = app.world().get::<BodyState>(body.node).expect("state");
        assert!((state.orbital_angle - 250.0 * 0.003).abs() < 1e-4);
        assert!((state.spin_angle - 250.0 * 0.01).abs() < 1e-4);
        assert_eq!(app.world().resource::<SimulationClock>().ticks, 250);
    }

    #[test]
    fn test_reference_orbit_after_4000_ticks() {
        let mut app = test_app();
        let body = spawn_body(app.world_mut(), None, BodyState::new(20.0, 0.0, 0.00025, 0.0));

        run_ticks(&mut app, 4000);

        let state = app.world().get::<BodyState>(body.node).expect("state");
        assert!((state.orbital_angle - 1.0).abs() < 1e-3);

        let translation = app.world().get::<Transform>(body.node).expect("transform").translation;
        assert!((translation.x - 10.806).abs() < 0.02, "x = {}", translation.x);
        assert_eq!(translation.y, 0.0);
        assert!((translation.z - 16.829).abs() < 0.02, "z = {}", translation.z);
    }

    #[test]
    fn test_body_never_leaves_its_orbit() {
        let mut app = test_app();
        let body = spawn_body(app.world_mut(), None, BodyState::new(12.5, 0.0, 0.071, 0.0));

        for _ in 0..300 {
            app.update();
            let p = app.world().get::<Transform>(body.node).expect("transform").translation;
            assert!((p.x * p.x + p.z * p.z - 12.5 * 12.5).abs() < 1e-2);
        }
    }

    #[test]
    fn test_spin_is_applied_to_surface_only() {
        let mut app = test_app();
        let body = spawn_body(app.world_mut(), None, BodyState::new(5.0, 0.1, 0.0, 0.0));

        run_ticks(&mut app, 5);

        let node = app.world().get::<Transform>(body.node).expect("node");
        let surface = app.world().get::<Transform>(body.surface).expect("surface");
        assert_eq!(node.rotation, Quat::IDENTITY);
        let expected = Quat::from_rotation_y(0.5);
        assert!(surface.rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn test_paused_clock_freezes_bodies() {
        let mut app = test_app();
        app.world_mut().resource_mut::<SimulationClock>().paused = true;
        let body = spawn_body(app.world_mut(), None, BodyState::new(5.0, 0.1, 0.2, 0.0));

        run_ticks(&mut app, 10);

        let state = app.world().get::<BodyState>(body.node).expect("state");
        assert_eq!(state.orbital_angle, 0.0);
        assert_eq!(state.spin_angle, 0.0);
        assert_eq!(app.world().resource::<SimulationClock>().ticks, 0);
    }

    #[test]
    fn test_moon_follows_its_planet() {
        let mut app = test_app();
        let world = app.world_mut();
        let planet = spawn_body(world, None, BodyState::new(10.0, 0.02, 0.01, 0.3));
        // The moon's pivot sits at the planet body node, not under the spinning surface.
        let pivot = world.spawn((Transform::default(), ChildOf(planet.node))).id();
        let moon = spawn_body(world, Some(pivot), BodyState::new(2.0, 0.0, 0.05, 0.0));

        run_ticks(&mut app, 37);

        let world = app.world();
        let planet_world = world.get::<GlobalTransform>(planet.node).expect("planet").translation();
        let moon_world = world.get::<GlobalTransform>(moon.node).expect("moon").translation();
        let moon_local = world.get::<BodyState>(moon.node).expect("moon state").local_position();

        assert!((moon_world - (planet_world + moon_local)).length() < 1e-4);
        assert!((moon_world.distance(planet_world) - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_time_scale_multiplies_rates() {
        let mut app = test_app();
        app.world_mut().resource_mut::<SimulationClock>().time_scale = 4.0;
        let body = spawn_body(app.world_mut(), None, BodyState::new(1.0, 0.0, 0.01, 0.0));

        run_ticks(&mut app, 25);

        let state = app.world().get::<BodyState>(body.node).expect("state");
        assert!((state.orbital_angle - 1.0).abs() < 1e-4);
    }
}
