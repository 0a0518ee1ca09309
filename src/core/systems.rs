//! Core domain: camera setup, run-flow transitions, and state-entry resets.

use bevy::prelude::*;

use crate::combat::{AttackState, EnemyAi, Health};
use crate::core::resources::GameOverDelay;
use crate::core::state::GameState;
use crate::level::LevelLayout;
use crate::movement::{Facing, Player, Position, VerticalMotion};
use crate::sprites::{AnimationController, AnimationState};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keys handled while playing: M returns to the menu.
pub(crate) fn handle_playing_keys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard.just_pressed(KeyCode::KeyM) {
        next_state.set(GameState::Menu);
    }
}

/// While the hero is dead, let the death animation play out before ending the
/// run. The delay accumulates only while dead, and only during play.
pub(crate) fn update_gameover_delay(
    time: Res<Time>,
    mut delay: ResMut<GameOverDelay>,
    hero: Query<&Health, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(health) = hero.single() else {
        return;
    };
    if !health.is_dead() {
        return;
    }
    if delay.tick(time.delta_secs()) {
        info!("Hero down, ending run");
        next_state.set(GameState::GameOver);
    }
}

type HeroResetQuery<'a> = (
    &'a mut Position,
    &'a mut VerticalMotion,
    &'a mut Facing,
    &'a mut Health,
    &'a mut AttackState,
    &'a mut AnimationController,
);

#[allow(clippy::too_many_arguments)]
fn revive_hero(
    layout: &LevelLayout,
    position: &mut Position,
    motion: &mut VerticalMotion,
    facing: &mut Facing,
    health: &mut Health,
    attack: &mut AttackState,
    controller: &mut AnimationController,
) {
    position.x = layout.hero_spawn.x;
    position.y = layout.hero_spawn.y;
    motion.vel_y = 0.0;
    motion.on_ground = false;
    *facing = Facing::Right;
    health.restore();
    attack.clear();
    controller.set_state(AnimationState::Idle);
}

/// Put the hero back at the spawn point, alive and at rest.
pub(crate) fn reset_hero_on_gameover(
    layout: Res<LevelLayout>,
    mut hero: Query<HeroResetQuery, With<Player>>,
) {
    for (mut position, mut motion, mut facing, mut health, mut attack, mut controller) in &mut hero
    {
        revive_hero(
            &layout,
            &mut position,
            &mut motion,
            &mut facing,
            &mut health,
            &mut attack,
            &mut controller,
        );
    }
}

/// Winning revives the fallen: every enemy is restored in place and the hero
/// returns to the spawn point, ready for the next run.
pub(crate) fn reset_entities_on_win(
    layout: Res<LevelLayout>,
    mut hero: Query<HeroResetQuery, (With<Player>, Without<EnemyAi>)>,
    mut enemies: Query<
        (
            &mut Health,
            &mut EnemyAi,
            &mut AnimationController,
            &mut Visibility,
        ),
        (With<EnemyAi>, Without<Player>),
    >,
) {
    for (mut position, mut motion, mut facing, mut health, mut attack, mut controller) in &mut hero
    {
        revive_hero(
            &layout,
            &mut position,
            &mut motion,
            &mut facing,
            &mut health,
            &mut attack,
            &mut controller,
        );
    }
    for (mut health, mut ai, mut controller, mut visibility) in &mut enemies {
        health.restore();
        ai.revive();
        controller.set_state(AnimationState::Idle);
        *visibility = Visibility::Inherited;
    }
}
