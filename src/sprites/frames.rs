//! Frame tables for the hero and enemy sprites.
//!
//! Frame ids double as asset names: `assets/sprites/<id>.png`.

use crate::sprites::animation::FrameSet;

/// The hero has no dedicated run cycle; movement shows the idle loop.
pub fn hero_frames() -> FrameSet {
    FrameSet::new(
        numbered("hero_idle", 3),
        None,
        numbered("hero_attack", 7),
        numbered("hero_death", 6),
    )
}

pub fn enemy_frames() -> FrameSet {
    FrameSet::new(
        numbered("enemy_idle", 4),
        Some(numbered("enemy_run", 5)),
        numbered("enemy_attack", 6),
        numbered("enemy_dead", 6),
    )
}

/// Every frame id referenced by the game.
pub fn all_frame_ids() -> Vec<String> {
    let mut ids = Vec::new();
    for set in [hero_frames(), enemy_frames()] {
        ids.extend(set.into_ids());
    }
    ids
}

fn numbered(base: &str, count: u32) -> Vec<String> {
    (1..=count).map(|i| format!("{}{}", base, i)).collect()
}
