//! Level domain: unit tests for the RON schema and spawn-point math.

use super::data::{LevelDef, PlatformDef};
use super::spawn::{ENEMY_BOUNDS, enemy_spawn_point, patrol_bounds};

fn parse(source: &str) -> LevelDef {
    ron::Options::default()
        .with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
        .from_str(source)
        .expect("level should parse")
}

#[test]
fn default_layout_matches_shipping_level() {
    let level = LevelDef::default();
    assert_eq!(level.platforms.len(), 4);
    assert_eq!(level.platforms.iter().filter(|p| p.has_enemy).count(), 3);
    assert_eq!(level.hero_spawn.x, 40.0);
    assert_eq!(level.hero_spawn.y, 400.0);
}

#[test]
fn level_ron_parses_with_defaults() {
    let level = parse(
        r#"(
            hero_spawn: (x: 40.0, y: 400.0),
            seed: 7,
            platforms: [
                (x: 100.0, y: 450.0, width: 150.0, height: 20.0, has_enemy: true),
                (x: 200.0, y: 250.0, width: 120.0, height: 20.0),
            ],
        )"#,
    );
    assert_eq!(level.seed, Some(7));
    assert_eq!(level.platforms.len(), 2);
    assert!(level.platforms[0].has_enemy);
    // has_enemy defaults off when omitted.
    assert!(!level.platforms[1].has_enemy);
}

#[test]
fn platform_rect_spans_the_definition() {
    let def = PlatformDef {
        x: 350.0,
        y: 380.0,
        width: 200.0,
        height: 20.0,
        has_enemy: false,
    };
    let rect = def.rect();
    assert_eq!(rect.min.x, 350.0);
    assert_eq!(rect.max.x, 550.0);
    assert_eq!(rect.min.y, 380.0);
    assert_eq!(rect.max.y, 400.0);
}

#[test]
fn enemy_spawns_centered_above_its_platform() {
    let def = PlatformDef {
        x: 100.0,
        y: 450.0,
        width: 150.0,
        height: 20.0,
        has_enemy: true,
    };
    let spawn = enemy_spawn_point(&def);
    assert_eq!(spawn.x, 175.0);
    assert_eq!(spawn.y, 450.0 - ENEMY_BOUNDS.half_height());

    let (min_x, max_x) = patrol_bounds(&def);
    assert_eq!(min_x, 100.0);
    assert_eq!(max_x, 240.0);
}
