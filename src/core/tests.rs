//! Core domain: unit tests for score tracking and the game-over delay.

use super::resources::{GameOverDelay, Score};

#[test]
fn gameover_delay_waits_for_threshold() {
    let mut delay = GameOverDelay::default();
    assert!(!delay.tick(0.5));
    assert!(!delay.tick(0.4));
    assert!(delay.tick(0.2));
}

#[test]
fn gameover_delay_reset_starts_over() {
    let mut delay = GameOverDelay::default();
    delay.tick(0.9);
    delay.reset();
    assert!(!delay.tick(0.9));
    assert!(delay.tick(0.2));
}

#[test]
fn score_reports_win_exactly_at_target() {
    let mut score = Score {
        value: 0,
        target: 5,
    };
    for _ in 0..4 {
        assert!(!score.record_kill());
    }
    assert!(score.record_kill());
    assert_eq!(score.value, 5);
}

#[test]
fn score_reset_keeps_target() {
    let mut score = Score {
        value: 3,
        target: 5,
    };
    score.reset();
    assert_eq!(score.value, 0);
    assert_eq!(score.target, 5);
}
