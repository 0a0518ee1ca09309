//! Movement domain: input sampling for locomotion and attacks.

use bevy::prelude::*;

/// Raw pressed-key state, polled once per tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// -1.0, 0.0, or +1.0 lateral axis.
    pub axis_x: f32,
    /// Jump key currently held.
    pub jump_held: bool,
    /// Attack key pressed this tick.
    pub attack_just_pressed: bool,
}

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    input.axis_x = x;
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.attack_just_pressed = keyboard.just_pressed(KeyCode::KeyZ);
}
