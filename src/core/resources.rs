//! Core domain: score tracking and run-flow timers.

use bevy::prelude::*;

/// Kills scored so far and the kill count required to win.
/// `target` is fixed at level setup to the number of enemies spawned.
#[derive(Resource, Debug, Default)]
pub struct Score {
    pub value: u32,
    pub target: u32,
}

impl Score {
    /// Count one kill. Returns true when the kill target is reached.
    pub fn record_kill(&mut self) -> bool {
        self.value += 1;
        self.value >= self.target
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Accumulates time while the hero is dead, so the death animation gets its
/// moment on screen before the run ends.
#[derive(Resource, Debug)]
pub struct GameOverDelay {
    pub elapsed: f32,
    pub threshold: f32,
}

impl Default for GameOverDelay {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            threshold: 1.0,
        }
    }
}

impl GameOverDelay {
    /// Advance the timer. Returns true once the delay has fully elapsed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.elapsed >= self.threshold
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[derive(Resource, Debug)]
pub struct AudioSettings {
    pub music_on: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self { music_on: true }
    }
}
