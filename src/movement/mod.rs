//! Movement domain: input sampling, canvas-space kinematics, and the hero's
//! platforming update.

mod components;
mod input;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Bounds, Facing, Player, Position, VerticalMotion, body_rect, rects_overlap};
pub use input::MovementInput;

use bevy::prelude::*;

use crate::core::PlaySet;

/// Hero locomotion constants.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Lateral speed, px per tick.
    pub speed: f32,
    /// Vertical velocity applied on jump (canvas y grows downward).
    pub jump_strength: f32,
    /// Per-tick gravity increment.
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: 4.0,
            jump_strength: -15.0,
            gravity: 0.8,
        }
    }
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Update, input::read_input.in_set(PlaySet::Input))
            .add_systems(
                Update,
                systems::update_player_motion.in_set(PlaySet::HeroMotion),
            )
            .add_systems(PostUpdate, systems::sync_canvas_transforms);
    }
}
