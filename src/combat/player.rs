//! Combat domain: the hero's attack cycle and projectile spawning.

use bevy::prelude::*;

use crate::audio::{SfxEvent, SfxKind};
use crate::combat::AttackTuning;
use crate::combat::components::{AttackState, Health, Projectile};
use crate::movement::{Bounds, Facing, MovementInput, Player, Position, VerticalMotion};
use crate::sprites::{AnimationController, AnimationFinished, AnimationState};

/// Projectile collision box.
pub(crate) const PROJECTILE_SIZE: Vec2 = Vec2::new(10.0, 4.0);

/// Start an attack on the attack key edge, grounded and not already
/// mid-swing. Attacking while dead is ignored entirely.
pub(crate) fn process_player_attacks(
    input: Res<MovementInput>,
    mut sfx: MessageWriter<SfxEvent>,
    mut query: Query<
        (
            &mut AttackState,
            &mut AnimationController,
            &VerticalMotion,
            &Health,
        ),
        With<Player>,
    >,
) {
    for (mut attack, mut controller, motion, health) in &mut query {
        if health.is_dead() || attack.active || !motion.on_ground || !input.attack_just_pressed {
            continue;
        }
        attack.begin();
        controller.set_state(AnimationState::Attack);
        sfx.write(SfxEvent {
            kind: SfxKind::Attack,
        });
    }
}

/// Drive the running attack: release one projectile at the shoot frame and
/// drop back to idle once the sequence completes.
pub(crate) fn update_player_attack(
    mut commands: Commands,
    tuning: Res<AttackTuning>,
    mut finished: MessageReader<AnimationFinished>,
    mut query: Query<
        (
            Entity,
            &Position,
            &Facing,
            &mut AttackState,
            &mut AnimationController,
        ),
        With<Player>,
    >,
) {
    let Ok((entity, position, facing, mut attack, mut controller)) = query.single_mut() else {
        return;
    };
    if !attack.active {
        return;
    }

    if controller.state == AnimationState::Attack
        && controller.current_frame == tuning.shoot_frame
        && !attack.has_shot
    {
        spawn_projectile(&mut commands, &tuning, *position, *facing);
        attack.has_shot = true;
    }

    for message in finished.read() {
        if message.entity == entity && message.state == AnimationState::Attack {
            attack.clear();
            controller.set_state(AnimationState::Idle);
        }
    }
}

fn spawn_projectile(
    commands: &mut Commands,
    tuning: &AttackTuning,
    position: Position,
    facing: Facing,
) {
    let dir = facing.sign();
    commands.spawn((
        Projectile {
            direction: dir,
            speed: tuning.projectile_speed,
        },
        Position::new(position.x + tuning.spawn_offset_x * dir, position.y - 2.0),
        Bounds::new(PROJECTILE_SIZE.x, PROJECTILE_SIZE.y),
        Sprite {
            color: Color::srgb_u8(255, 255, 0),
            custom_size: Some(PROJECTILE_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 2.0),
    ));
}
