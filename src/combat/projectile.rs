//! Combat domain: projectile kinematics and hit resolution.

use bevy::prelude::*;

use crate::combat::AttackTuning;
use crate::combat::components::{Enemy, Health, Projectile};
use crate::combat::events::DamageEvent;
use crate::core::CANVAS_WIDTH;
use crate::movement::{Bounds, Position, body_rect, rects_overlap};

/// A projectile dies only once its rectangle has fully left the canvas.
pub(crate) fn off_canvas(rect: Rect, canvas_width: f32) -> bool {
    rect.max.x < 0.0 || rect.min.x > canvas_width
}

/// Advance projectiles by their per-tick speed and despawn any that have
/// left the canvas on either side.
pub(crate) fn move_projectiles(
    mut commands: Commands,
    mut query: Query<(Entity, &Projectile, &mut Position, &Bounds)>,
) {
    for (entity, projectile, mut position, bounds) in &mut query {
        position.x += projectile.speed * projectile.direction;
        if off_canvas(body_rect(*position, *bounds), CANVAS_WIDTH) {
            commands.entity(entity).despawn();
        }
    }
}

/// A projectile overlapping a living enemy lands its damage and is consumed
/// by the hit.
pub(crate) fn resolve_projectile_hits(
    mut commands: Commands,
    tuning: Res<AttackTuning>,
    mut damage: MessageWriter<DamageEvent>,
    projectiles: Query<(Entity, &Position, &Bounds), With<Projectile>>,
    enemies: Query<(Entity, &Position, &Bounds, &Health), With<Enemy>>,
) {
    for (projectile_entity, projectile_position, projectile_bounds) in &projectiles {
        let projectile_rect = body_rect(*projectile_position, *projectile_bounds);
        for (enemy_entity, enemy_position, enemy_bounds, enemy_health) in &enemies {
            if enemy_health.is_dead() {
                continue;
            }
            if rects_overlap(projectile_rect, body_rect(*enemy_position, *enemy_bounds)) {
                damage.write(DamageEvent {
                    target: enemy_entity,
                    amount: tuning.projectile_damage,
                });
                commands.entity(projectile_entity).despawn();
                break;
            }
        }
    }
}
