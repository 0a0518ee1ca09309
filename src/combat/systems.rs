//! Combat domain: damage application, deaths, and the kill score.

use bevy::prelude::*;

use crate::combat::components::{AiState, AttackState, EnemyAi, Health};
use crate::combat::events::{DamageEvent, DeathEvent};
use crate::core::{GameState, Score};
use crate::sprites::{AnimationController, AnimationState};

/// Apply a hit and report whether it caused the transition into death.
/// Hits on a corpse and non-lethal hits both report false.
pub(crate) fn lethal_hit(health: &mut Health, amount: f32) -> bool {
    let was_dead = health.is_dead();
    health.take_damage(amount);
    !was_dead && health.is_dead()
}

/// Apply queued damage. A death is emitted exactly once, on the transition
/// into it, so repeated or excess hits never double-report.
pub(crate) fn apply_damage(
    mut damage: MessageReader<DamageEvent>,
    mut deaths: MessageWriter<DeathEvent>,
    mut query: Query<&mut Health>,
) {
    for message in damage.read() {
        let Ok(mut health) = query.get_mut(message.target) else {
            continue;
        };
        if lethal_hit(&mut health, message.amount) {
            deaths.write(DeathEvent {
                target: message.target,
            });
        }
    }
}

/// React to deaths: start the death animation, retire and score fallen
/// enemies, and end the run in victory once the kill target is reached.
pub(crate) fn handle_deaths(
    mut deaths: MessageReader<DeathEvent>,
    mut score: ResMut<Score>,
    mut next_state: ResMut<NextState<GameState>>,
    mut query: Query<(
        &mut AnimationController,
        Option<&mut AttackState>,
        Option<&mut EnemyAi>,
        Option<&mut Visibility>,
    )>,
) {
    for message in deaths.read() {
        let Ok((mut controller, attack, ai, visibility)) = query.get_mut(message.target) else {
            continue;
        };
        controller.set_state(AnimationState::Death);
        if let Some(mut attack) = attack {
            attack.clear();
        }
        if let Some(mut ai) = ai {
            ai.state = AiState::Dead;
            ai.is_attacking = false;
            // Dead enemies stay in the world as inert, no-longer-drawn husks.
            if let Some(mut visibility) = visibility {
                *visibility = Visibility::Hidden;
            }
            if score.record_kill() {
                info!("All {} enemies defeated", score.target);
                next_state.set(GameState::Win);
            }
        }
    }
}
