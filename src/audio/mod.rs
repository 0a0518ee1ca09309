//! Audio domain: best-effort sound effects and the background music loop.
//!
//! Playback never gates gameplay: missing or broken audio files are reported
//! by the asset server and the game plays on in silence.

use bevy::audio::Volume;
use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::core::AudioSettings;

const MUSIC_VOLUME: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SfxKind {
    Jump,
    Attack,
}

/// Request to play a one-shot sound effect.
#[derive(Debug)]
pub struct SfxEvent {
    pub kind: SfxKind,
}

impl Message for SfxEvent {}

/// Loaded audio handles.
#[derive(Resource)]
pub struct SoundBank {
    pub jump: Handle<AudioSource>,
    pub attack: Handle<AudioSource>,
    pub music: Handle<AudioSource>,
}

/// Marker for the looping background music entity.
#[derive(Component)]
struct MusicLoop;

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<SfxEvent>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, (play_sfx, sync_music));
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundBank {
        jump: asset_server.load("sounds/jump.ogg"),
        attack: asset_server.load("sounds/attack.ogg"),
        music: asset_server.load("music/background.ogg"),
    });
}

/// Spawn a one-shot player per requested effect.
fn play_sfx(mut requests: MessageReader<SfxEvent>, bank: Res<SoundBank>, mut commands: Commands) {
    for request in requests.read() {
        let source = match request.kind {
            SfxKind::Jump => bank.jump.clone(),
            SfxKind::Attack => bank.attack.clone(),
        };
        commands.spawn((AudioPlayer::new(source), PlaybackSettings::DESPAWN));
    }
}

/// Keep the music loop in step with the menu's sound toggle.
fn sync_music(
    settings: Res<AudioSettings>,
    bank: Res<SoundBank>,
    playing: Query<Entity, With<MusicLoop>>,
    mut commands: Commands,
) {
    let is_playing = !playing.is_empty();
    if settings.music_on && !is_playing {
        commands.spawn((
            MusicLoop,
            AudioPlayer::new(bank.music.clone()),
            PlaybackSettings::LOOP.with_volume(Volume::Linear(MUSIC_VOLUME)),
        ));
    } else if !settings.music_on && is_playing {
        for entity in &playing {
            commands.entity(entity).despawn();
        }
    }
}
