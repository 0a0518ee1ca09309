//! Frame texture registry: frame id to image handle, loaded once at startup.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::sprites::frames::all_frame_ids;

/// Resource mapping frame ids to their textures.
#[derive(Resource, Default)]
pub struct SpriteLibrary {
    textures: HashMap<String, Handle<Image>>,
}

impl SpriteLibrary {
    pub fn insert(&mut self, id: String, handle: Handle<Image>) {
        self.textures.insert(id, handle);
    }

    pub fn get(&self, id: &str) -> Option<Handle<Image>> {
        self.textures.get(id).cloned()
    }

    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.textures.keys()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}

/// Eagerly load every frame referenced by the frame tables.
pub(crate) fn load_frame_textures(
    mut library: ResMut<SpriteLibrary>,
    asset_server: Res<AssetServer>,
) {
    for id in all_frame_ids() {
        let handle = asset_server.load(format!("sprites/{}.png", id));
        library.insert(id, handle);
    }
    info!("Loading {} sprite frames", library.len());
}
