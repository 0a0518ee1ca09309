//! Cache of horizontally mirrored sprite frames.
//!
//! Facing left never re-flips pixels per frame: the first request for a frame
//! mirrors the source image once and every later lookup is a map hit. The
//! cache is process-wide and never evicted; it is bounded by the fixed frame
//! tables.

use bevy::prelude::*;
use bevy::render::render_resource::TextureFormat;
use std::collections::HashMap;

use crate::sprites::library::SpriteLibrary;

#[derive(Resource, Default)]
pub struct FlipCache {
    flipped: HashMap<String, Handle<Image>>,
}

impl FlipCache {
    /// Mirrored handle for `frame_id`, computing and caching it on first use.
    /// Returns None until the source image's pixel data has finished loading;
    /// callers retry on a later tick.
    pub fn get_or_create_flipped(
        &mut self,
        frame_id: &str,
        library: &SpriteLibrary,
        images: &mut Assets<Image>,
    ) -> Option<Handle<Image>> {
        if let Some(handle) = self.flipped.get(frame_id) {
            return Some(handle.clone());
        }
        let source_handle = library.get(frame_id)?;
        let mirrored = {
            let source = images.get(&source_handle)?;
            source.data.as_ref()?;
            mirror_horizontal(frame_id, source)
        };
        let handle = match mirrored {
            Some(image) => images.add(image),
            // Unsupported pixel format: remember the source handle so the
            // sprite renders unmirrored instead of retrying forever.
            None => source_handle,
        };
        self.flipped.insert(frame_id.to_string(), handle.clone());
        Some(handle)
    }

    /// Eagerly populate entries for a list of frames. Returns true once every
    /// entry is cached.
    pub fn preload<'a>(
        &mut self,
        frame_ids: impl Iterator<Item = &'a String>,
        library: &SpriteLibrary,
        images: &mut Assets<Image>,
    ) -> bool {
        let mut done = true;
        for id in frame_ids {
            if self.get_or_create_flipped(id, library, images).is_none() {
                done = false;
            }
        }
        done
    }
}

/// Build a copy of `image` with every pixel row reversed. Only 4-byte-per-
/// pixel formats are mirrored; anything else logs a warning and returns None.
fn mirror_horizontal(frame_id: &str, image: &Image) -> Option<Image> {
    let format = image.texture_descriptor.format;
    let four_bytes_per_pixel = matches!(
        format,
        TextureFormat::Rgba8Unorm
            | TextureFormat::Rgba8UnormSrgb
            | TextureFormat::Bgra8Unorm
            | TextureFormat::Bgra8UnormSrgb
    );
    if !four_bytes_per_pixel {
        warn!("Cannot mirror '{}': unsupported format {:?}", frame_id, format);
        return None;
    }
    let data = image.data.as_ref()?;
    let mut mirrored = image.clone();
    mirrored.data = Some(mirror_rgba_rows(
        data,
        image.width() as usize,
        image.height() as usize,
    ));
    Some(mirrored)
}

/// Reverse the pixel order of each row in tightly packed 4-byte-per-pixel
/// data.
pub(crate) fn mirror_rgba_rows(data: &[u8], width: usize, height: usize) -> Vec<u8> {
    assert_eq!(
        data.len(),
        width * height * 4,
        "pixel data does not match image dimensions"
    );
    let mut out = vec![0u8; data.len()];
    for y in 0..height {
        let row = y * width * 4;
        for x in 0..width {
            let src = row + x * 4;
            let dst = row + (width - 1 - x) * 4;
            out[dst..dst + 4].copy_from_slice(&data[src..src + 4]);
        }
    }
    out
}

/// Populate the flip cache for every known frame as textures finish loading.
/// Keeps retrying until the cache is fully warm, then goes quiet.
pub(crate) fn warm_flip_cache(
    mut warmed: Local<bool>,
    mut cache: ResMut<FlipCache>,
    library: Res<SpriteLibrary>,
    mut images: ResMut<Assets<Image>>,
) {
    if *warmed {
        return;
    }
    if cache.preload(library.ids(), &library, &mut images) {
        *warmed = true;
        info!("Mirrored {} sprite frames", library.len());
    }
}
