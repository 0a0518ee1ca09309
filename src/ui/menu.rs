//! Main menu: start, sound toggle, and exit.

use bevy::app::AppExit;
use bevy::prelude::*;

use crate::core::{AudioSettings, GameState};

/// Marker for the menu screen root.
#[derive(Component)]
pub struct MenuScreenUI;

#[derive(Component)]
pub struct StartButton;

#[derive(Component)]
pub struct SoundButton;

#[derive(Component)]
pub struct ExitButton;

/// Label inside the sound button, rewritten when the toggle flips.
#[derive(Component)]
pub struct SoundButtonLabel;

fn button_green() -> Color {
    Color::srgb_u8(50, 200, 50)
}

fn button_red() -> Color {
    Color::srgb_u8(200, 50, 50)
}

fn sound_label(on: bool) -> String {
    format!("SOUND: {}", if on { "ON" } else { "OFF" })
}

fn plate_node() -> Node {
    Node {
        width: Val::Px(250.0),
        height: Val::Px(50.0),
        justify_content: JustifyContent::Center,
        align_items: AlignItems::Center,
        ..default()
    }
}

pub(crate) fn spawn_menu(mut commands: Commands, settings: Res<AudioSettings>) {
    commands
        .spawn((
            MenuScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::srgb_u8(56, 24, 76)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PLATFORMER GAME"),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            parent
                .spawn((StartButton, Button, plate_node(), BackgroundColor(button_green())))
                .with_child((
                    Text::new("START GAME"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));

            let sound_color = if settings.music_on {
                button_green()
            } else {
                button_red()
            };
            parent
                .spawn((SoundButton, Button, plate_node(), BackgroundColor(sound_color)))
                .with_child((
                    SoundButtonLabel,
                    Text::new(sound_label(settings.music_on)),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));

            // Display-only hint; M leaves a run, Enter starts one.
            parent
                .spawn((plate_node(), BackgroundColor(button_green())))
                .with_child((
                    Text::new("Press M back to menu"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));

            parent
                .spawn((ExitButton, Button, plate_node(), BackgroundColor(button_red())))
                .with_child((
                    Text::new("Exit"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
        });
}

pub(crate) fn cleanup_menu(mut commands: Commands, query: Query<Entity, With<MenuScreenUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn handle_menu_buttons(
    start: Query<&Interaction, (With<StartButton>, Changed<Interaction>)>,
    exit: Query<&Interaction, (With<ExitButton>, Changed<Interaction>)>,
    sound: Query<&Interaction, (With<SoundButton>, Changed<Interaction>)>,
    mut sound_plates: Query<&mut BackgroundColor, With<SoundButton>>,
    mut sound_labels: Query<&mut Text, With<SoundButtonLabel>>,
    mut settings: ResMut<AudioSettings>,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if start.iter().any(|i| *i == Interaction::Pressed) {
        next_state.set(GameState::Playing);
    }
    if exit.iter().any(|i| *i == Interaction::Pressed) {
        app_exit.write(AppExit::Success);
    }
    if sound.iter().any(|i| *i == Interaction::Pressed) {
        settings.music_on = !settings.music_on;
        for mut color in &mut sound_plates {
            color.0 = if settings.music_on {
                button_green()
            } else {
                button_red()
            };
        }
        for mut text in &mut sound_labels {
            text.0 = sound_label(settings.music_on);
        }
    }
}

pub(crate) fn handle_menu_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut app_exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        next_state.set(GameState::Playing);
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit.write(AppExit::Success);
    }
}
