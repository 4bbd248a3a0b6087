//! Landing view: title, tagline and a Start button.

use bevy::prelude::*;

use crate::session::AppView;

pub const TITLE: &str = "Antarikshya";
pub const TAGLINE: &str = "Let me take you to our Antarikshya";

const BUTTON_IDLE: Color = Color::srgba(0.06, 0.12, 0.16, 0.9);
const BUTTON_HOVER: Color = Color::srgba(0.08, 0.2, 0.26, 0.95);
const BUTTON_PRESSED: Color = Color::srgba(0.1, 0.26, 0.32, 0.95);
const ACCENT: Color = Color::srgba(0.6, 1.0, 1.0, 1.0);

/// Root of everything the landing view spawns.
#[derive(Component)]
pub struct LandingRoot;

#[derive(Component)]
pub struct StartButton;

pub fn spawn_landing(mut commands: Commands) {
    commands.spawn((Camera2d, LandingRoot, Name::new("Landing Camera")));

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(18.0),
                ..default()
            },
            BackgroundColor(Color::BLACK),
            LandingRoot,
            Name::new("Landing"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(TITLE),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent.spawn((
                Text::new(TAGLINE),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.75, 0.8)),
            ));
            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(28.0), Val::Px(10.0)),
                        margin: UiRect::top(Val::Px(12.0)),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor::all(ACCENT),
                    BackgroundColor(BUTTON_IDLE),
                    StartButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Start"),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(ACCENT),
                    ));
                });
        });
}

pub fn despawn_landing(mut commands: Commands, roots: Query<Entity, With<LandingRoot>>) {
    for entity in &roots {
        commands.entity(entity).despawn();
    }
}

/// Start the orrery from the button, or with Enter.
pub fn start_orrery(
    keys: Res<ButtonInput<KeyCode>>,
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<StartButton>),
    >,
    mut next: ResMut<NextState<AppView>>,
) {
    let mut start = keys.just_pressed(KeyCode::Enter);
    for (interaction, mut background) in &mut buttons {
        background.0 = match interaction {
            Interaction::Pressed => {
                start = true;
                BUTTON_PRESSED
            }
            Interaction::Hovered => BUTTON_HOVER,
            Interaction::None => BUTTON_IDLE,
        };
    }
    if start {
        info!("Starting orrery");
        next.set(AppView::Orrery);
    }
}
