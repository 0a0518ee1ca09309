//! Combat domain: enemy patrol/chase/attack behavior.

use bevy::prelude::*;

use crate::combat::EnemyTuning;
use crate::combat::components::{AiState, Enemy, EnemyAi, Health};
use crate::combat::events::DamageEvent;
use crate::movement::{Facing, Player, Position, VerticalMotion};
use crate::sprites::{AnimationController, AnimationFinished, AnimationState};

/// Swing-sequence frame on which melee damage can land.
const MELEE_FRAME: usize = 3;

/// Per-tick enemy behavior. A dead enemy only plays out its death animation;
/// a swinging enemy only animates (damage lands in `process_enemy_attacks`);
/// otherwise the enemy falls to its baseline and patrols, chases, or starts a
/// cooldown-gated swing depending on the distance to the hero.
pub(crate) fn update_enemy_ai(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    hero_query: Query<(&Position, &Health), (With<Player>, Without<Enemy>)>,
    mut finished: MessageReader<AnimationFinished>,
    mut enemy_query: Query<
        (
            Entity,
            &mut Position,
            &mut VerticalMotion,
            &mut Facing,
            &mut EnemyAi,
            &mut AnimationController,
            &Health,
        ),
        With<Enemy>,
    >,
) {
    let dt = time.delta_secs();
    let Ok((hero_position, hero_health)) = hero_query.single() else {
        return;
    };
    let hero_pos = *hero_position;
    let hero_dead = hero_health.is_dead();

    let finished_swings: Vec<Entity> = finished
        .read()
        .filter(|m| m.state == AnimationState::Attack)
        .map(|m| m.entity)
        .collect();

    for (entity, mut position, mut motion, mut facing, mut ai, mut controller, health) in
        &mut enemy_query
    {
        if health.is_dead() {
            continue;
        }

        ai.time_since_last_attack += dt;

        if ai.is_attacking {
            if finished_swings.contains(&entity) {
                ai.end_attack();
                controller.set_state(AnimationState::Idle);
            }
            continue;
        }

        motion.apply_gravity(&mut position.y, tuning.gravity);

        let dist_x = (position.x - hero_pos.x).abs();
        let dist_y = (position.y - hero_pos.y).abs();

        match tuning.classify(dist_x, dist_y, hero_dead) {
            AiState::Attack => {
                ai.state = AiState::Attack;
                if ai.cooldown_ready(tuning.attack_cooldown) {
                    ai.begin_attack();
                    controller.set_state(AnimationState::Attack);
                }
            }
            AiState::Chase => {
                ai.state = AiState::Chase;
                ai.chase_step(
                    &mut position.x,
                    &mut facing,
                    hero_pos.x,
                    tuning.chase_multiplier,
                );
                controller.set_state(AnimationState::Run);
            }
            _ => {
                ai.state = AiState::Patrol;
                ai.patrol_step(&mut position.x, &mut facing);
                controller.set_state(AnimationState::Idle);
            }
        }
    }
}

/// Land the swing: one damage application per attack cycle, at the middle of
/// the swing animation, if the hero is still inside the hit window.
pub(crate) fn process_enemy_attacks(
    tuning: Res<EnemyTuning>,
    hero_query: Query<(Entity, &Position), (With<Player>, Without<Enemy>)>,
    mut damage: MessageWriter<DamageEvent>,
    mut enemy_query: Query<(&Position, &mut EnemyAi, &AnimationController), With<Enemy>>,
) {
    let Ok((hero_entity, hero_position)) = hero_query.single() else {
        return;
    };

    for (position, mut ai, controller) in &mut enemy_query {
        if !ai.is_attacking || ai.has_damaged {
            continue;
        }
        if controller.state != AnimationState::Attack || controller.current_frame != MELEE_FRAME {
            continue;
        }
        let dist_x = (position.x - hero_position.x).abs();
        let dist_y = (position.y - hero_position.y).abs();
        if dist_x <= tuning.attack_range && dist_y < tuning.melee_window_y {
            damage.write(DamageEvent {
                target: hero_entity,
                amount: tuning.attack_damage,
            });
            ai.has_damaged = true;
        }
    }
}
