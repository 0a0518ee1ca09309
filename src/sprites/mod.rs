//! Sprites module: frame registry, mirrored-frame cache, and animation
//! playback shared by the hero and enemies.

pub mod animation;
pub mod flip;
pub mod frames;
pub mod library;
#[cfg(test)]
mod tests;

pub use animation::{AnimationController, AnimationFinished, AnimationState, FrameSet};
pub use flip::FlipCache;
pub use library::SpriteLibrary;

use bevy::prelude::*;

use crate::core::PlaySet;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteLibrary>()
            .init_resource::<FlipCache>()
            .add_message::<AnimationFinished>()
            .add_systems(Startup, library::load_frame_textures)
            .add_systems(Update, flip::warm_flip_cache)
            .add_systems(
                Update,
                (
                    animation::update_animation_frames,
                    animation::sync_display_frames,
                )
                    .chain()
                    .in_set(PlaySet::Animate),
            );
    }
}
