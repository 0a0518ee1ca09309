//! Dev overlay: F3 toggles a readout of hero kinematics and enemy AI states.
//! Display-only; never mutates gameplay state.

use bevy::prelude::*;

use crate::combat::{Enemy, EnemyAi, Health};
use crate::core::GameState;
use crate::movement::{Player, Position, VerticalMotion};

#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub overlay_visible: bool,
}

#[derive(Component)]
struct DebugOverlayText;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(
                Update,
                (
                    toggle_overlay,
                    update_overlay.run_if(in_state(GameState::Playing)),
                ),
            );
    }
}

fn spawn_overlay(mut commands: Commands) {
    commands.spawn((
        DebugOverlayText,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb_u8(180, 230, 180)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(10.0),
            ..default()
        },
        Visibility::Hidden,
        ZIndex(300),
    ));
}

fn toggle_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut query: Query<&mut Visibility, With<DebugOverlayText>>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.overlay_visible = !state.overlay_visible;
        for mut visibility in &mut query {
            *visibility = if state.overlay_visible {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
        }
    }
}

fn update_overlay(
    state: Res<DebugState>,
    hero: Query<(&Position, &VerticalMotion, &Health), With<Player>>,
    enemies: Query<(&EnemyAi, &Health), With<Enemy>>,
    mut query: Query<&mut Text, With<DebugOverlayText>>,
) {
    if !state.overlay_visible {
        return;
    }
    let mut lines = Vec::new();
    if let Ok((position, motion, health)) = hero.single() {
        lines.push(format!(
            "hero ({:.0},{:.0}) vel_y {:.1} on_ground {} hp {:.0}",
            position.x, position.y, motion.vel_y, motion.on_ground, health.current
        ));
    }
    for (index, (ai, health)) in enemies.iter().enumerate() {
        lines.push(format!(
            "enemy {} {:?} hp {:.0}",
            index, ai.state, health.current
        ));
    }
    for mut text in &mut query {
        text.0 = lines.join("\n");
    }
}
