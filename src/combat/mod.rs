//! Combat domain: hero attacks and projectiles, enemy AI, damage resolution,
//! and the kill score.

mod components;
mod enemy;
mod events;
mod player;
mod projectile;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{AiState, AttackState, Enemy, EnemyAi, Health, Projectile};
pub use events::{DamageEvent, DeathEvent};

use bevy::prelude::*;

use crate::core::PlaySet;

/// Enemy behavior constants shared by every spawned enemy.
#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    /// Per-tick gravity increment.
    pub gravity: f32,
    /// Horizontal distance at which an enemy notices the hero.
    pub detection_radius: f32,
    /// Horizontal distance at which an enemy swings.
    pub attack_range: f32,
    /// Vertical band treated as "same height" for detection.
    pub same_height_band: f32,
    /// Vertical window inside which a swing connects.
    pub melee_window_y: f32,
    /// Seconds between swings.
    pub attack_cooldown: f32,
    /// Damage per connected swing.
    pub attack_damage: f32,
    /// Chase speed multiplier over patrol speed.
    pub chase_multiplier: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            detection_radius: 120.0,
            attack_range: 40.0,
            same_height_band: 20.0,
            melee_window_y: 50.0,
            attack_cooldown: 1.5,
            attack_damage: 10.0,
            chase_multiplier: 1.2,
        }
    }
}

impl EnemyTuning {
    /// Classify the distance to the hero into a behavior state. Attack wins
    /// over chase; both require a living hero inside the same-height band.
    pub fn classify(&self, dist_x: f32, dist_y: f32, hero_dead: bool) -> AiState {
        if hero_dead || dist_y > self.same_height_band {
            return AiState::Patrol;
        }
        if dist_x <= self.attack_range {
            AiState::Attack
        } else if dist_x <= self.detection_radius {
            AiState::Chase
        } else {
            AiState::Patrol
        }
    }
}

/// Hero attack constants.
#[derive(Resource, Debug, Clone)]
pub struct AttackTuning {
    /// Attack-sequence frame on which the projectile leaves the hand.
    pub shoot_frame: usize,
    /// Projectile speed, px per tick.
    pub projectile_speed: f32,
    /// Damage per projectile hit.
    pub projectile_damage: f32,
    /// Lateral projectile spawn offset from the hero's center.
    pub spawn_offset_x: f32,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            shoot_frame: 3,
            projectile_speed: 10.0,
            projectile_damage: 10.0,
            spawn_offset_x: 15.0,
        }
    }
}

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .init_resource::<AttackTuning>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_systems(
                Update,
                (player::process_player_attacks, player::update_player_attack)
                    .chain()
                    .in_set(PlaySet::HeroCombat),
            )
            .add_systems(
                Update,
                (enemy::update_enemy_ai, enemy::process_enemy_attacks)
                    .chain()
                    .in_set(PlaySet::Enemies),
            )
            .add_systems(
                Update,
                (
                    projectile::move_projectiles,
                    projectile::resolve_projectile_hits,
                )
                    .chain()
                    .in_set(PlaySet::Projectiles),
            )
            .add_systems(
                Update,
                (systems::apply_damage, systems::handle_deaths)
                    .chain()
                    .in_set(PlaySet::Damage),
            );
    }
}
