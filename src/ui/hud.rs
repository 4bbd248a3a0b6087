//! On-screen key help and clock readout for the orrery view.

use bevy::prelude::*;

use crate::orbital::SimulationClock;

pub const KEY_HELP: &str = "drag: orbit | right drag: pan | scroll: zoom\n\
space: pause | +/-: speed | 0: reset speed | O: orbits | R: reset view | esc: back";

#[derive(Component)]
pub struct HudRoot;

/// Text node showing the live clock state.
#[derive(Component)]
pub struct ClockReadout;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(12.0),
                bottom: Val::Px(12.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            HudRoot,
            Name::new("HUD"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgba(0.6, 1.0, 1.0, 1.0)),
                ClockReadout,
            ));
            parent.spawn((
                Text::new(KEY_HELP),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgba(0.7, 0.75, 0.8, 0.8)),
            ));
        });
}

pub fn despawn_hud(mut commands: Commands, roots: Query<Entity, With<HudRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}

pub fn clock_label(clock: &SimulationClock) -> String {
    if clock.paused {
        format!("paused (x{})", clock.time_scale)
    } else {
        format!("x{}", clock.time_scale)
    }
}

pub fn update_clock_readout(
    clock: Option<Res<SimulationClock>>,
    mut readouts: Query<&mut Text, With<ClockReadout>>,
) {
    let Some(clock) = clock else {
        return;
    };
    let label = clock_label(&clock);
    for mut text in &mut readouts {
        if text.0 != label {
            text.0.clone_from(&label);
        }
    }
}
