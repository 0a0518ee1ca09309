//! Animation playback: timer-driven frame advancement and facing-aware
//! frame resolution.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::Facing;
use crate::sprites::flip::FlipCache;
use crate::sprites::library::SpriteLibrary;

/// Animation states shared by the hero and enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Attack,
    Death,
}

impl AnimationState {
    /// Idle and run cycle; attack and death play once and hold the last frame.
    pub fn loops(self) -> bool {
        matches!(self, AnimationState::Idle | AnimationState::Run)
    }
}

/// Named frame sequences owned by an entity, fixed at construction.
/// Sequences are never empty.
#[derive(Component, Debug, Clone)]
pub struct FrameSet {
    idle: Vec<String>,
    run: Option<Vec<String>>,
    attack: Vec<String>,
    death: Vec<String>,
}

impl FrameSet {
    pub fn new(
        idle: Vec<String>,
        run: Option<Vec<String>>,
        attack: Vec<String>,
        death: Vec<String>,
    ) -> Self {
        assert!(
            !idle.is_empty() && !attack.is_empty() && !death.is_empty(),
            "frame sequences must be non-empty"
        );
        if let Some(run) = &run {
            assert!(!run.is_empty(), "run frame sequence must be non-empty");
        }
        Self {
            idle,
            run,
            attack,
            death,
        }
    }

    /// Sequence for a state. Entities without a run cycle fall back to idle.
    pub fn sequence(&self, state: AnimationState) -> &[String] {
        match state {
            AnimationState::Idle => &self.idle,
            AnimationState::Run => self.run.as_deref().unwrap_or(&self.idle),
            AnimationState::Attack => &self.attack,
            AnimationState::Death => &self.death,
        }
    }

    /// Every frame id in this set, for eager loading and cache warmup.
    pub fn into_ids(self) -> Vec<String> {
        let mut ids = self.idle;
        if let Some(run) = self.run {
            ids.extend(run);
        }
        ids.extend(self.attack);
        ids.extend(self.death);
        ids
    }
}

/// Component for animation playback on an entity.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Current frame index into the active sequence (0-based).
    pub current_frame: usize,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame, fixed at construction.
    pub frame_delay: f32,
    /// Whether the active animation loops.
    pub looping: bool,
    /// Whether a one-shot animation has reached its final frame.
    pub finished: bool,
}

impl AnimationController {
    pub fn new(frame_delay: f32) -> Self {
        Self {
            state: AnimationState::Idle,
            current_frame: 0,
            frame_timer: 0.0,
            frame_delay,
            looping: true,
            finished: false,
        }
    }

    /// Switch animation state, restarting playback if the state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.looping = state.loops();
            self.finished = false;
        }
    }

    /// Accumulate `dt` and advance the frame index once the delay elapses.
    /// Looping sequences wrap; one-shot sequences clamp at the last index.
    /// Returns true on the tick the sequence completes.
    pub fn advance(&mut self, dt: f32, sequence_len: usize) -> bool {
        assert!(sequence_len > 0, "animation sequence must be non-empty");
        if self.finished {
            return false;
        }
        self.frame_timer += dt;
        if self.frame_timer < self.frame_delay {
            return false;
        }
        self.frame_timer = 0.0;
        self.current_frame += 1;
        if self.current_frame >= sequence_len {
            if self.looping {
                self.current_frame = 0;
            } else {
                self.current_frame = sequence_len - 1;
                self.finished = true;
                return true;
            }
        }
        false
    }
}

/// Message fired when a one-shot animation reaches its final frame.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

/// Advances animation frames based on elapsed time.
pub(crate) fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController, &FrameSet)>,
    mut finished: MessageWriter<AnimationFinished>,
) {
    let dt = time.delta_secs();
    for (entity, mut controller, frames) in &mut query {
        let len = frames.sequence(controller.state).len();
        if controller.advance(dt, len) {
            finished.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

/// Resolve the frame each entity should display: the mirrored image when
/// facing left, the source image otherwise. Re-applied every tick so frame
/// and facing changes always agree.
pub(crate) fn sync_display_frames(
    mut images: ResMut<Assets<Image>>,
    library: Res<SpriteLibrary>,
    mut cache: ResMut<FlipCache>,
    mut query: Query<(&AnimationController, &FrameSet, &Facing, &mut Sprite)>,
) {
    for (controller, frames, facing, mut sprite) in &mut query {
        let sequence = frames.sequence(controller.state);
        let frame_id = &sequence[controller.current_frame];
        let resolved = match facing {
            Facing::Left => cache
                .get_or_create_flipped(frame_id, &library, &mut images)
                .or_else(|| library.get(frame_id)),
            Facing::Right => library.get(frame_id),
        };
        if let Some(handle) = resolved {
            sprite.image = handle;
        }
    }
}
