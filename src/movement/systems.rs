//! Movement domain: the hero's per-tick platforming update and the
//! canvas-to-world transform sync.

use bevy::prelude::*;

use crate::audio::{SfxEvent, SfxKind};
use crate::combat::{AttackState, Health};
use crate::core::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::level::Platform;
use crate::movement::components::{
    Bounds, Facing, Player, Position, VerticalMotion, body_rect, rects_overlap,
};
use crate::movement::{MovementInput, MovementTuning};

/// A falling entity lands only if its feet were at most this far below the
/// surface on the previous tick.
const LAND_TOLERANCE: f32 = 5.0;
/// A rising entity bumps its head only inside this band under the platform.
const BUMP_TOLERANCE: f32 = 10.0;

/// The hero's normal-control tick: gravity with ground clamp, platform
/// resolution, lateral movement, and jumping. Death and the attack sequence
/// fully preempt all of it.
pub(crate) fn update_player_motion(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    platforms: Query<&Platform>,
    mut sfx: MessageWriter<SfxEvent>,
    mut query: Query<
        (
            &mut Position,
            &mut VerticalMotion,
            &mut Facing,
            &Bounds,
            &Health,
            &AttackState,
        ),
        With<Player>,
    >,
) {
    for (mut position, mut motion, mut facing, bounds, health, attack) in &mut query {
        if health.is_dead() || attack.active {
            continue;
        }

        motion.apply_gravity(&mut position.y, tuning.gravity);
        resolve_platform_collisions(
            &mut position,
            &mut motion,
            *bounds,
            platforms.iter().map(|p| p.rect),
        );

        if input.axis_x < 0.0 {
            position.x -= tuning.speed;
            *facing = Facing::Left;
        } else if input.axis_x > 0.0 {
            position.x += tuning.speed;
            *facing = Facing::Right;
        }

        if input.jump_held && motion.on_ground {
            motion.vel_y = tuning.jump_strength;
            motion.on_ground = false;
            sfx.write(SfxEvent { kind: SfxKind::Jump });
        }
    }
}

/// Correct vertical motion against platform rectangles. A falling entity
/// lands on a top edge it was above last tick; a rising entity bumps its head
/// on a bottom edge. The tolerance bands avoid tunnelling at discrete steps.
pub(crate) fn resolve_platform_collisions(
    position: &mut Position,
    motion: &mut VerticalMotion,
    bounds: Bounds,
    platforms: impl Iterator<Item = Rect>,
) {
    for rect in platforms {
        let body = body_rect(*position, bounds);
        if !rects_overlap(body, rect) {
            continue;
        }
        if motion.vel_y > 0.0 {
            if body.max.y - motion.vel_y <= rect.min.y + LAND_TOLERANCE {
                position.y = rect.min.y - bounds.half_height();
                motion.vel_y = 0.0;
                motion.on_ground = true;
            }
        } else if motion.vel_y < 0.0 && body.min.y >= rect.max.y - BUMP_TOLERANCE {
            position.y = rect.max.y + bounds.half_height();
            motion.vel_y = 0.0;
        }
    }
}

/// Map canvas coordinates (origin top-left, y down) to world space, keeping
/// each entity's depth untouched.
pub(crate) fn sync_canvas_transforms(mut query: Query<(&Position, &mut Transform)>) {
    for (position, mut transform) in &mut query {
        transform.translation.x = position.x - CANVAS_WIDTH / 2.0;
        transform.translation.y = CANVAS_HEIGHT / 2.0 - position.y;
    }
}
