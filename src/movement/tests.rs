//! Movement domain: unit tests for gravity, ground clamp, and platform bands.

use bevy::math::Rect;

use super::components::{Bounds, Facing, Position, VerticalMotion, body_rect, rects_overlap};
use super::systems::resolve_platform_collisions;

const HERO: Bounds = Bounds::new(48.0, 56.0);

#[test]
fn gravity_accumulates_per_tick_and_clamps_at_ground() {
    let mut motion = VerticalMotion::new(522.0);
    let mut y = 400.0;

    motion.apply_gravity(&mut y, 0.8);
    assert_eq!(motion.vel_y, 0.8);
    assert_eq!(y, 400.8);
    assert!(!motion.on_ground);

    motion.apply_gravity(&mut y, 0.8);
    assert_eq!(motion.vel_y, 1.6);

    // Fall the rest of the way; the baseline clamps exactly.
    for _ in 0..100 {
        motion.apply_gravity(&mut y, 0.8);
    }
    assert_eq!(y, 522.0);
    assert_eq!(motion.vel_y, 0.0);
    assert!(motion.on_ground);
}

#[test]
fn jump_arc_leaves_and_returns_to_ground() {
    let mut motion = VerticalMotion::new(522.0);
    let mut y = 522.0;
    motion.vel_y = -15.0;
    motion.apply_gravity(&mut y, 0.8);
    assert!(y < 522.0);
    assert!(!motion.on_ground);

    for _ in 0..60 {
        motion.apply_gravity(&mut y, 0.8);
    }
    assert_eq!(y, 522.0);
    assert!(motion.on_ground);
}

#[test]
fn falling_hero_lands_on_platform_top() {
    let platform = Rect::new(100.0, 450.0, 250.0, 470.0);
    // Feet at 453, just through the surface; they were at 447 last tick.
    let mut position = Position::new(150.0, 425.0);
    let mut motion = VerticalMotion::new(522.0);
    motion.vel_y = 6.0;

    resolve_platform_collisions(&mut position, &mut motion, HERO, [platform].into_iter());

    assert_eq!(position.y, 450.0 - HERO.half_height());
    assert_eq!(motion.vel_y, 0.0);
    assert!(motion.on_ground);
}

#[test]
fn deep_overlap_outside_tolerance_is_not_a_landing() {
    let platform = Rect::new(100.0, 450.0, 250.0, 470.0);
    // Feet at 460, and they were already below the band last tick.
    let mut position = Position::new(150.0, 432.0);
    let mut motion = VerticalMotion::new(522.0);
    motion.vel_y = 2.0;

    resolve_platform_collisions(&mut position, &mut motion, HERO, [platform].into_iter());

    assert_eq!(position.y, 432.0);
    assert_eq!(motion.vel_y, 2.0);
    assert!(!motion.on_ground);
}

#[test]
fn rising_hero_bumps_head_on_platform_bottom() {
    let platform = Rect::new(100.0, 450.0, 250.0, 470.0);
    // Head at 466, poking into the underside while moving up.
    let mut position = Position::new(150.0, 494.0);
    let mut motion = VerticalMotion::new(522.0);
    motion.vel_y = -10.0;

    resolve_platform_collisions(&mut position, &mut motion, HERO, [platform].into_iter());

    assert_eq!(position.y, 470.0 + HERO.half_height());
    assert_eq!(motion.vel_y, 0.0);
    assert!(!motion.on_ground);
}

#[test]
fn non_overlapping_platforms_are_ignored() {
    let platform = Rect::new(600.0, 300.0, 750.0, 320.0);
    let mut position = Position::new(150.0, 425.0);
    let mut motion = VerticalMotion::new(522.0);
    motion.vel_y = 6.0;

    resolve_platform_collisions(&mut position, &mut motion, HERO, [platform].into_iter());

    assert_eq!(position.y, 425.0);
    assert_eq!(motion.vel_y, 6.0);
}

#[test]
fn shared_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(10.0, 0.0, 20.0, 10.0);
    assert!(!rects_overlap(a, b));
    assert!(rects_overlap(a, Rect::new(9.0, 9.0, 20.0, 20.0)));
}

#[test]
fn body_rect_is_centered() {
    let rect = body_rect(Position::new(100.0, 200.0), HERO);
    assert_eq!(rect.min.x, 76.0);
    assert_eq!(rect.max.x, 124.0);
    assert_eq!(rect.min.y, 172.0);
    assert_eq!(rect.max.y, 228.0);
}

#[test]
fn facing_sign_and_toward() {
    assert_eq!(Facing::Right.sign(), 1.0);
    assert_eq!(Facing::Left.sign(), -1.0);
    assert_eq!(Facing::toward(-3.0), Facing::Left);
    assert_eq!(Facing::toward(3.0), Facing::Right);
    assert_eq!(Facing::toward(0.0), Facing::Right);
}
