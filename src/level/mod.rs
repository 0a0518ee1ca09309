//! Level domain: static layout loaded from RON and spawned once at startup.

mod data;
mod spawn;
#[cfg(test)]
mod tests;

pub use data::{LevelDef, PlatformDef};
pub use spawn::{LevelLayout, Platform};

use bevy::prelude::*;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn::spawn_level);
    }
}
