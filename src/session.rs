//! Scene session lifecycle
//!
//! The orrery view owns exactly one [`SceneSession`] while it is shown. It is
//! built when the view is entered and torn down when the view is left, so
//! nothing (entities, generated assets, clock state) survives a remount.

use bevy::prelude::*;

use crate::bodies::{BuildSettings, BuiltSystem, build_solar_system, solar_system};
use crate::config::OrreryConfig;
use crate::core::spawn_main_camera;
use crate::orbital::{OrrerySet, SimulationClock};
use crate::visualization::{OrbitLineConfig, StarShell, generate_stars, spawn_starfield};

/// The two logical views of the app.
#[derive(States, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum AppView {
    #[default]
    Landing,
    Orrery,
}

/// Everything the orrery view spawned, owned for the lifetime of the view.
#[derive(Resource, Debug)]
pub struct SceneSession {
    pub system: BuiltSystem,
    pub starfield: Entity,
    pub camera: Entity,
}

impl SceneSession {
    /// Top-level entities; despawning these removes the whole session.
    pub fn roots(&self) -> [Entity; 3] {
        [self.system.root, self.starfield, self.camera]
    }
}

/// Plugin for view state and session lifetime
pub struct SessionPlugin;

impl Plugin for SessionPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppView>()
            .add_systems(OnEnter(AppView::Orrery), mount_session)
            .add_systems(OnExit(AppView::Orrery), teardown_session)
            .add_systems(Update, leave_on_escape.in_set(OrrerySet::Input));
    }
}

/// Build the scene, camera and clock for a fresh session.
pub fn mount_session(
    mut commands: Commands,
    config: Res<OrreryConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut orbit_lines: ResMut<OrbitLineConfig>,
) {
    let settings = BuildSettings {
        texture_size: config.texture_size,
        sun_light_intensity: config.sun_light_intensity,
    };
    let system = build_solar_system(
        &mut commands,
        &mut meshes,
        &mut materials,
        &mut images,
        &solar_system(),
        &settings,
    );

    let stars = generate_stars(
        config.starfield.seed,
        config.starfield.count,
        StarShell {
            inner_radius: config.starfield.inner_radius,
            outer_radius: config.starfield.outer_radius,
        },
    );
    let starfield = spawn_starfield(&mut commands, &mut meshes, &mut materials, &stars);
    let camera = spawn_main_camera(&mut commands, &config.camera);

    orbit_lines.enabled = config.show_orbits;
    commands.insert_resource(SimulationClock::from_config(&config));
    commands.insert_resource(SceneSession {
        system,
        starfield,
        camera,
    });
    info!("Orrery mounted ({} stars)", stars.len());
}

/// Release everything the session owns. A second call is a no-op.
pub fn teardown_session(mut commands: Commands, session: Option<Res<SceneSession>>) {
    let Some(session) = session else {
        return;
    };
    for entity in session.roots() {
        commands.entity(entity).despawn();
    }
    // Dropping the resource drops the last strong handles to generated assets.
    commands.remove_resource::<SceneSession>();
    commands.remove_resource::<SimulationClock>();
    info!("Orrery unmounted");
}

/// Return to the landing view with Escape.
pub fn leave_on_escape(keys: Res<ButtonInput<KeyCode>>, mut next: ResMut<NextState<AppView>>) {
    if keys.just_pressed(KeyCode::Escape) {
        next.set(AppView::Landing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyState;
    use crate::core::MainCamera;
    use crate::visualization::starfield::Star;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut config = OrreryConfig::default();
        config.texture_size = 16;
        config.starfield.count = 12;

        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<Assets<Image>>()
            .init_resource::<OrbitLineConfig>()
            .insert_resource(config)
            .init_state::<AppView>()
            .add_systems(OnEnter(AppView::Orrery), mount_session)
            .add_systems(OnExit(AppView::Orrery), teardown_session);
        app.update();
        app
    }

    fn switch(app: &mut App, view: AppView) {
        app.world_mut().resource_mut::<NextState<AppView>>().set(view);
        app.update();
    }

    fn live_entities(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<Entity>().iter(world).count()
    }

    fn count<C: Component>(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query_filtered::<Entity, With<C>>().iter(world).count()
    }

    #[test]
    fn test_mount_builds_session() {
        let mut app = test_app();
        assert!(app.world().get_resource::<SceneSession>().is_none());

        switch(&mut app, AppView::Orrery);

        let bodies = app
            .world()
            .resource::<SceneSession>()
            .system
            .bodies
            .len();
        assert!(bodies > 0);
        assert_eq!(count::<BodyState>(&mut app), bodies);
        assert_eq!(count::<Star>(&mut app), 12);
        assert_eq!(count::<MainCamera>(&mut app), 1);
        assert!(app.world().get_resource::<SimulationClock>().is_some());
    }

    #[test]
    fn test_unmount_releases_everything() {
        let mut app = test_app();
        let baseline = live_entities(&mut app);

        switch(&mut app, AppView::Orrery);
        switch(&mut app, AppView::Landing);

        assert!(app.world().get_resource::<SceneSession>().is_none());
        assert!(app.world().get_resource::<SimulationClock>().is_none());
        assert_eq!(count::<BodyState>(&mut app), 0);
        assert_eq!(count::<MainCamera>(&mut app), 0);
        assert_eq!(live_entities(&mut app), baseline);
    }

    #[test]
    fn test_repeated_mounts_do_not_accumulate() {
        let mut app = test_app();
        switch(&mut app, AppView::Orrery);
        let first = live_entities(&mut app);

        for _ in 0..3 {
            switch(&mut app, AppView::Landing);
            switch(&mut app, AppView::Orrery);
        }
        assert_eq!(live_entities(&mut app), first);
        assert_eq!(count::<MainCamera>(&mut app), 1);
    }

    #[test]
    fn test_clock_resets_on_remount() {
        let mut app = test_app();
        switch(&mut app, AppView::Orrery);
        app.world_mut().resource_mut::<SimulationClock>().time_scale = 16.0;

        switch(&mut app, AppView::Landing);
        switch(&mut app, AppView::Orrery);
        assert_eq!(app.world().resource::<SimulationClock>().time_scale, 1.0);
    }

    #[test]
    fn test_teardown_twice_is_harmless() {
        let mut app = test_app();
        switch(&mut app, AppView::Orrery);
        app.world_mut()
            .run_system_cached(teardown_session)
            .expect("first teardown");
        app.world_mut()
            .run_system_cached(teardown_session)
            .expect("second teardown");
        assert!(app.world().get_resource::<SceneSession>().is_none());
        assert_eq!(count::<BodyState>(&mut app), 0);
    }
}
