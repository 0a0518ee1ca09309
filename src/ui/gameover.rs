//! Game-over screen and the return-to-menu flow.

use bevy::prelude::*;

use crate::core::{GameOverDelay, GameState, Score};

/// Marker for the game-over screen root.
#[derive(Component)]
pub struct GameOverScreenUI;

pub(crate) fn spawn_gameover_screen(mut commands: Commands, score: Res<Score>) {
    commands
        .spawn((
            GameOverScreenUI,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            ZIndex(200),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("GAME OVER"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb_u8(255, 0, 0)),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new(format!("Score: {}", score.value)),
                TextFont {
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                Node {
                    margin: UiRect::bottom(Val::Px(20.0)),
                    ..default()
                },
            ));
            parent.spawn((
                Text::new("Press ENTER to return to menu"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

pub(crate) fn handle_gameover_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut delay: ResMut<GameOverDelay>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::NumpadEnter) {
        delay.reset();
        next_state.set(GameState::Menu);
    }
}

pub(crate) fn cleanup_gameover_screen(
    mut commands: Commands,
    query: Query<Entity, With<GameOverScreenUI>>,
) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
