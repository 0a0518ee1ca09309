//! Level domain: spawning the backdrop, terrain, hero, and platform enemies.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

use crate::combat::{AttackState, Enemy, EnemyAi, Health};
use crate::core::{CANVAS_HEIGHT, CANVAS_WIDTH, Score};
use crate::level::data::{LevelDef, PlatformDef, load_level};
use crate::movement::{Bounds, Facing, Player, Position, VerticalMotion};
use crate::sprites::AnimationController;
use crate::sprites::frames::{enemy_frames, hero_frames};

/// Hero collision box.
pub const HERO_BOUNDS: Bounds = Bounds::new(48.0, 56.0);
/// Enemy collision box.
pub const ENEMY_BOUNDS: Bounds = Bounds::new(48.0, 64.0);
/// Canvas y at which the hero rests on the ground strip.
pub const HERO_GROUND_Y: f32 = 522.0;

const HERO_MAX_HEALTH: f32 = 100.0;
const ENEMY_MAX_HEALTH: f32 = 50.0;
const HERO_FRAME_DELAY: f32 = 0.15;
const ENEMY_FRAME_DELAY: f32 = 0.16;

/// Ground strip along the bottom of the canvas.
const GROUND_STRIP_Y: f32 = 550.0;
const GROUND_STRIP_HEIGHT: f32 = 50.0;

const LEVEL_FILE: &str = "assets/data/level.ron";

/// Static collision rectangle; platforms never move.
#[derive(Component, Debug)]
pub struct Platform {
    pub rect: Rect,
}

/// Retained level info for state-entry resets.
#[derive(Resource, Debug)]
pub struct LevelLayout {
    pub hero_spawn: Vec2,
}

fn terrain_color() -> Color {
    Color::srgb_u8(109, 83, 166)
}

/// Center of the platform's top surface, raised by the enemy's half height:
/// the spawned enemy's position and its ground baseline.
pub fn enemy_spawn_point(def: &PlatformDef) -> Vec2 {
    Vec2::new(
        def.x + def.width / 2.0,
        def.y - ENEMY_BOUNDS.half_height(),
    )
}

/// Patrol span across the platform surface, keeping the small right-edge
/// margin the shipped layouts always had.
pub fn patrol_bounds(def: &PlatformDef) -> (f32, f32) {
    (def.x, def.x + def.width - 10.0)
}

pub(crate) fn spawn_level(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut score: ResMut<Score>,
) {
    let level = match load_level(Path::new(LEVEL_FILE)) {
        Ok(level) => level,
        Err(e) => {
            warn!("{}, using the built-in layout", e);
            LevelDef::default()
        }
    };

    let seed = level.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    spawn_backdrop(&mut commands, &asset_server);

    let mut enemy_count = 0;
    for def in &level.platforms {
        spawn_platform(&mut commands, def);
        if def.has_enemy {
            spawn_enemy(&mut commands, def, &mut rng);
            enemy_count += 1;
        }
    }
    score.target = enemy_count;

    let hero_spawn = Vec2::from(level.hero_spawn);
    spawn_hero(&mut commands, hero_spawn);
    commands.insert_resource(LevelLayout { hero_spawn });

    info!(
        "Level ready: {} platforms, {} enemies to defeat (seed {})",
        level.platforms.len(),
        enemy_count,
        seed
    );
}

fn spawn_backdrop(commands: &mut Commands, asset_server: &AssetServer) {
    commands.spawn((
        Sprite {
            image: asset_server.load("sprites/background.png"),
            custom_size: Some(Vec2::new(CANVAS_WIDTH, CANVAS_HEIGHT)),
            ..default()
        },
        Position::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0),
        Transform::from_xyz(0.0, 0.0, -2.0),
    ));

    commands.spawn((
        Sprite {
            color: terrain_color(),
            custom_size: Some(Vec2::new(CANVAS_WIDTH, GROUND_STRIP_HEIGHT)),
            ..default()
        },
        Position::new(
            CANVAS_WIDTH / 2.0,
            GROUND_STRIP_Y + GROUND_STRIP_HEIGHT / 2.0,
        ),
        Transform::from_xyz(0.0, 0.0, -1.0),
    ));
}

fn spawn_platform(commands: &mut Commands, def: &PlatformDef) {
    let rect = def.rect();
    commands.spawn((
        Platform { rect },
        Sprite {
            color: terrain_color(),
            custom_size: Some(Vec2::new(def.width, def.height)),
            ..default()
        },
        Position::new(def.x + def.width / 2.0, def.y + def.height / 2.0),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));
}

fn spawn_hero(commands: &mut Commands, spawn: Vec2) {
    commands.spawn((
        Player,
        Health::new(HERO_MAX_HEALTH),
        AttackState::default(),
        Position::new(spawn.x, spawn.y),
        VerticalMotion::new(HERO_GROUND_Y),
        Facing::Right,
        HERO_BOUNDS,
        hero_frames(),
        AnimationController::new(HERO_FRAME_DELAY),
        Sprite {
            custom_size: Some(Vec2::new(HERO_BOUNDS.width, HERO_BOUNDS.height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));
}

fn spawn_enemy(commands: &mut Commands, def: &PlatformDef, rng: &mut ChaCha8Rng) {
    let spawn = enemy_spawn_point(def);
    let (patrol_min_x, patrol_max_x) = patrol_bounds(def);
    // Pace varies per spawn so enemies don't march in lockstep.
    let speed = 2.0 + rng.random::<f32>() * 1.5;
    let facing = if rng.random_bool(0.5) {
        Facing::Left
    } else {
        Facing::Right
    };

    commands.spawn((
        Enemy,
        EnemyAi::new(patrol_min_x, patrol_max_x, speed),
        Health::new(ENEMY_MAX_HEALTH),
        Position::new(spawn.x, spawn.y),
        VerticalMotion::new(spawn.y),
        facing,
        ENEMY_BOUNDS,
        enemy_frames(),
        AnimationController::new(ENEMY_FRAME_DELAY),
        Sprite {
            custom_size: Some(Vec2::new(ENEMY_BOUNDS.width, ENEMY_BOUNDS.height)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, 1.0),
    ));
}
