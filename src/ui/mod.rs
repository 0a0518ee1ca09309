//! UI domain: menu, HUD, and end-screen presentation. Pure display over the
//! core game state.

mod gameover;
mod hud;
mod menu;
mod victory;

use bevy::prelude::*;

use crate::core::GameState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Menu), menu::spawn_menu)
            .add_systems(OnExit(GameState::Menu), menu::cleanup_menu)
            .add_systems(
                Update,
                (menu::handle_menu_buttons, menu::handle_menu_keys)
                    .run_if(in_state(GameState::Menu)),
            )
            .add_systems(OnEnter(GameState::Playing), hud::spawn_hud)
            .add_systems(OnExit(GameState::Playing), hud::cleanup_hud)
            .add_systems(
                Update,
                hud::update_hud.run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::GameOver), gameover::spawn_gameover_screen)
            .add_systems(OnExit(GameState::GameOver), gameover::cleanup_gameover_screen)
            .add_systems(
                Update,
                gameover::handle_gameover_input.run_if(in_state(GameState::GameOver)),
            )
            .add_systems(OnEnter(GameState::Win), victory::spawn_victory_screen)
            .add_systems(OnExit(GameState::Win), victory::cleanup_victory_screen)
            .add_systems(
                Update,
                victory::handle_victory_input.run_if(in_state(GameState::Win)),
            );
    }
}
