//! Combat domain: unit tests for health, AI classification, and patrols.

use bevy::math::Rect;

use super::EnemyTuning;
use super::components::{AiState, AttackState, EnemyAi, Health};
use super::projectile::off_canvas;
use super::systems::lethal_hit;
use crate::movement::Facing;

#[test]
fn damage_clamps_at_zero_and_death_is_sticky() {
    let mut health = Health::new(30.0);
    health.take_damage(50.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());

    // Damaging a corpse is a silent no-op.
    health.take_damage(50.0);
    assert_eq!(health.current, 0.0);
    assert!(health.is_dead());
}

#[test]
fn partial_damage_does_not_kill() {
    let mut health = Health::new(50.0);
    health.take_damage(10.0);
    assert_eq!(health.current, 40.0);
    assert!(!health.is_dead());
    health.restore();
    assert_eq!(health.current, 50.0);
}

#[test]
fn only_the_killing_hit_reports_a_death() {
    let mut health = Health::new(50.0);
    for _ in 0..4 {
        assert!(!lethal_hit(&mut health, 10.0));
    }
    assert!(lethal_hit(&mut health, 10.0));
    // A corpse absorbs further hits without re-reporting.
    assert!(!lethal_hit(&mut health, 10.0));
}

#[test]
fn overkill_hit_reports_a_single_death() {
    let mut health = Health::new(30.0);
    assert!(lethal_hit(&mut health, 50.0));
    assert!(!lethal_hit(&mut health, 50.0));
    assert_eq!(health.current, 0.0);
}

#[test]
fn classification_prefers_attack_over_chase() {
    let tuning = EnemyTuning::default();
    assert_eq!(tuning.classify(30.0, 0.0, false), AiState::Attack);
    assert_eq!(tuning.classify(80.0, 0.0, false), AiState::Chase);
    assert_eq!(tuning.classify(300.0, 0.0, false), AiState::Patrol);
}

#[test]
fn classification_requires_same_height_band() {
    let tuning = EnemyTuning::default();
    assert_eq!(tuning.classify(30.0, 25.0, false), AiState::Patrol);
    assert_eq!(tuning.classify(30.0, 20.0, false), AiState::Attack);
    assert_eq!(tuning.classify(80.0, 20.0, false), AiState::Chase);
}

#[test]
fn dead_hero_is_not_pursued() {
    let tuning = EnemyTuning::default();
    assert_eq!(tuning.classify(30.0, 0.0, true), AiState::Patrol);
}

#[test]
fn patrol_clamps_exactly_at_bounds_and_reflects() {
    let ai = EnemyAi::new(100.0, 200.0, 3.0);

    let mut facing = Facing::Right;
    let mut x = 199.0;
    ai.patrol_step(&mut x, &mut facing);
    assert_eq!(x, 200.0);
    assert_eq!(facing, Facing::Left);

    ai.patrol_step(&mut x, &mut facing);
    assert_eq!(x, 197.0);
    assert_eq!(facing, Facing::Left);

    let mut x = 101.0;
    ai.patrol_step(&mut x, &mut facing);
    assert_eq!(x, 100.0);
    assert_eq!(facing, Facing::Right);
}

#[test]
fn chase_steps_toward_hero_at_accelerated_pace() {
    let ai = EnemyAi::new(0.0, 400.0, 2.0);
    let mut facing = Facing::Right;

    let mut x = 300.0;
    ai.chase_step(&mut x, &mut facing, 100.0, 1.2);
    assert_eq!(x, 300.0 - 2.4);
    assert_eq!(facing, Facing::Left);

    ai.chase_step(&mut x, &mut facing, 400.0, 1.2);
    assert_eq!(facing, Facing::Right);
    assert!(x > 300.0 - 2.4);
}

#[test]
fn attack_cycle_rearms_on_cooldown() {
    let tuning = EnemyTuning::default();
    let mut ai = EnemyAi::new(0.0, 100.0, 2.0);

    assert!(!ai.cooldown_ready(tuning.attack_cooldown));
    ai.time_since_last_attack = 2.0;
    assert!(ai.cooldown_ready(tuning.attack_cooldown));

    ai.begin_attack();
    assert!(ai.is_attacking);
    assert!(!ai.has_damaged);
    assert_eq!(ai.state, AiState::Attack);
    assert!(!ai.cooldown_ready(tuning.attack_cooldown));

    ai.end_attack();
    assert!(!ai.is_attacking);
    assert_eq!(ai.state, AiState::Patrol);
}

#[test]
fn projectile_dies_only_fully_off_canvas() {
    // Straddling either edge keeps it alive.
    assert!(!off_canvas(Rect::new(795.0, 0.0, 805.0, 4.0), 800.0));
    assert!(!off_canvas(Rect::new(-5.0, 0.0, 5.0, 4.0), 800.0));

    assert!(off_canvas(Rect::new(800.5, 0.0, 810.5, 4.0), 800.0));
    assert!(off_canvas(Rect::new(-10.5, 0.0, -0.5, 4.0), 800.0));
}

#[test]
fn attack_state_guards_single_shot() {
    let mut attack = AttackState::default();
    attack.begin();
    assert!(attack.active);
    assert!(!attack.has_shot);

    attack.has_shot = true;
    attack.clear();
    assert!(!attack.active);
    assert!(!attack.has_shot);
}
