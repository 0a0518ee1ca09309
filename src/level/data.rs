//! Level schema and RON loading.

use bevy::prelude::*;
use ron::Options;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Serializable 2D point for RON.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl From<Vec2Def> for Vec2 {
    fn from(v: Vec2Def) -> Self {
        Vec2::new(v.x, v.y)
    }
}

/// Platform rectangle in canvas coordinates, with an optional enemy spawn.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlatformDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub has_enemy: bool,
}

impl PlatformDef {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelDef {
    /// Where the hero starts.
    pub hero_spawn: Vec2Def,
    /// Seed for per-enemy patrol jitter; a random seed is drawn when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    pub platforms: Vec<PlatformDef>,
}

impl Default for LevelDef {
    /// The built-in layout, used when the level file is missing or invalid.
    fn default() -> Self {
        Self {
            hero_spawn: Vec2Def { x: 40.0, y: 400.0 },
            seed: None,
            platforms: vec![
                PlatformDef {
                    x: 100.0,
                    y: 450.0,
                    width: 150.0,
                    height: 20.0,
                    has_enemy: true,
                },
                PlatformDef {
                    x: 350.0,
                    y: 380.0,
                    width: 200.0,
                    height: 20.0,
                    has_enemy: true,
                },
                PlatformDef {
                    x: 600.0,
                    y: 300.0,
                    width: 150.0,
                    height: 20.0,
                    has_enemy: true,
                },
                PlatformDef {
                    x: 200.0,
                    y: 250.0,
                    width: 120.0,
                    height: 20.0,
                    has_enemy: false,
                },
            ],
        }
    }
}

/// Error raised when the level file cannot be read or parsed.
#[derive(Debug)]
pub struct LevelLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for LevelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Load a level definition from a RON file.
pub fn load_level(path: &Path) -> Result<LevelDef, LevelLoadError> {
    let file = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| LevelLoadError {
        file: file.clone(),
        message: format!("IO error: {}", e),
    })?;
    ron_options().from_str(&contents).map_err(|e| LevelLoadError {
        file,
        message: format!("Parse error: {}", e),
    })
}
