//! In-run HUD: hero health, score progress, and remaining enemies.

use bevy::prelude::*;

use crate::combat::{Enemy, Health};
use crate::core::Score;
use crate::movement::Player;

#[derive(Component)]
pub struct HudUI;

#[derive(Component)]
pub struct LivesText;

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct EnemiesText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudUI,
        LivesText,
        Text::new("Lives: 100"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
    commands.spawn((
        HudUI,
        ScoreText,
        Text::new("Score: 0/0"),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb_u8(255, 215, 0)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(50.0),
            ..default()
        },
    ));
    commands.spawn((
        HudUI,
        EnemiesText,
        Text::new("Enemies: 0"),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb_u8(255, 100, 100)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
    ));
}

pub(crate) fn update_hud(
    score: Res<Score>,
    hero: Query<&Health, With<Player>>,
    enemies: Query<&Health, With<Enemy>>,
    mut lives: Query<&mut Text, (With<LivesText>, Without<ScoreText>, Without<EnemiesText>)>,
    mut scores: Query<&mut Text, (With<ScoreText>, Without<LivesText>, Without<EnemiesText>)>,
    mut counts: Query<&mut Text, (With<EnemiesText>, Without<LivesText>, Without<ScoreText>)>,
) {
    if let Ok(health) = hero.single() {
        for mut text in &mut lives {
            text.0 = format!("Lives: {}", health.current as i32);
        }
    }
    for mut text in &mut scores {
        text.0 = format!("Score: {}/{}", score.value, score.target);
    }
    let alive = enemies.iter().filter(|h| !h.is_dead()).count();
    for mut text in &mut counts {
        text.0 = format!("Enemies: {}", alive);
    }
}

pub(crate) fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudUI>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
