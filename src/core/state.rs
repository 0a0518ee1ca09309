//! Core domain: game phase definitions for the menu/playing flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    GameOver,
    Win,
}
