//! Core domain: game phase state machine, score tracking, and run flow.

mod resources;
mod state;
mod systems;
#[cfg(test)]
mod tests;

pub use resources::{AudioSettings, GameOverDelay, Score};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    handle_playing_keys, reset_entities_on_win, reset_hero_on_gameover, setup_camera,
    update_gameover_delay,
};

/// Logical canvas size. All game logic runs in this space, origin top-left.
pub const CANVAS_WIDTH: f32 = 800.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Per-tick ordering of the gameplay systems while in `GameState::Playing`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaySet {
    Input,
    HeroMotion,
    HeroCombat,
    Enemies,
    Projectiles,
    Damage,
    Flow,
    Animate,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<Score>()
            .init_resource::<GameOverDelay>()
            .init_resource::<AudioSettings>()
            .configure_sets(
                Update,
                (
                    PlaySet::Input,
                    PlaySet::HeroMotion,
                    PlaySet::HeroCombat,
                    PlaySet::Enemies,
                    PlaySet::Projectiles,
                    PlaySet::Damage,
                    PlaySet::Flow,
                    PlaySet::Animate,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (update_gameover_delay, handle_playing_keys).in_set(PlaySet::Flow),
            )
            .add_systems(OnEnter(GameState::GameOver), reset_hero_on_gameover)
            .add_systems(OnEnter(GameState::Win), reset_entities_on_win);
    }
}
