//! Sprites domain: unit tests for animation playback and pixel mirroring.

use super::animation::{AnimationController, AnimationState};
use super::flip::mirror_rgba_rows;
use super::frames::{all_frame_ids, enemy_frames, hero_frames};

#[test]
fn looping_animation_wraps_and_stays_in_range() {
    let mut controller = AnimationController::new(0.15);
    let len = 3;
    // 0.1s ticks advance one frame every second tick: 20 ticks = 10 advances.
    for _ in 0..20 {
        controller.advance(0.1, len);
        assert!(controller.current_frame < len);
    }
    assert_eq!(controller.current_frame, 10 % len);
    assert!(!controller.finished);
}

#[test]
fn one_shot_animation_clamps_and_finishes_once() {
    let mut controller = AnimationController::new(0.15);
    controller.set_state(AnimationState::Attack);
    let len = 7;
    let mut completions = 0;
    for _ in 0..200 {
        if controller.advance(0.1, len) {
            completions += 1;
        }
    }
    assert_eq!(controller.current_frame, len - 1);
    assert!(controller.finished);
    assert_eq!(completions, 1);
}

#[test]
fn set_state_restarts_playback_only_on_change() {
    let mut controller = AnimationController::new(0.15);
    controller.advance(0.2, 3);
    assert_eq!(controller.current_frame, 1);

    // Same state: progress is kept.
    controller.set_state(AnimationState::Idle);
    assert_eq!(controller.current_frame, 1);

    controller.set_state(AnimationState::Death);
    assert_eq!(controller.current_frame, 0);
    assert_eq!(controller.frame_timer, 0.0);
    assert!(!controller.looping);
}

#[test]
fn death_holds_final_frame() {
    let mut controller = AnimationController::new(0.16);
    controller.set_state(AnimationState::Death);
    for _ in 0..100 {
        controller.advance(0.2, 6);
    }
    assert_eq!(controller.current_frame, 5);
    assert!(controller.finished);
}

#[test]
fn frame_tables_expose_expected_sequences() {
    let hero = hero_frames();
    assert_eq!(hero.sequence(AnimationState::Idle).len(), 3);
    assert_eq!(hero.sequence(AnimationState::Attack).len(), 7);
    assert_eq!(hero.sequence(AnimationState::Death).len(), 6);
    // No dedicated run cycle: falls back to idle.
    assert_eq!(hero.sequence(AnimationState::Run).len(), 3);

    let enemy = enemy_frames();
    assert_eq!(enemy.sequence(AnimationState::Run).len(), 5);
    assert_eq!(enemy.sequence(AnimationState::Attack)[0], "enemy_attack1");
    assert_eq!(enemy.sequence(AnimationState::Death)[5], "enemy_dead6");
}

#[test]
fn frame_ids_are_unique() {
    let mut ids = all_frame_ids();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn mirror_reverses_each_pixel_row() {
    // 2x2 RGBA image with distinct pixels per corner.
    let data = vec![
        1, 0, 0, 255, 2, 0, 0, 255, // top row
        3, 0, 0, 255, 4, 0, 0, 255, // bottom row
    ];
    let mirrored = mirror_rgba_rows(&data, 2, 2);
    assert_eq!(
        mirrored,
        vec![
            2, 0, 0, 255, 1, 0, 0, 255, //
            4, 0, 0, 255, 3, 0, 0, 255,
        ]
    );
}

#[test]
fn mirror_twice_is_identity() {
    let data: Vec<u8> = (0..3 * 2 * 4).map(|i| i as u8).collect();
    let once = mirror_rgba_rows(&data, 3, 2);
    assert_ne!(once, data);
    assert_eq!(mirror_rgba_rows(&once, 3, 2), data);
}
